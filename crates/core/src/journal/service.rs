//! Journals, entries, tags, permissions and search against Spire

use std::time::Duration;

use bugout_domain::{
    BugoutError, HolderType, Journal, JournalEntries, JournalEntry, JournalEntryContent,
    JournalEntryTags, JournalScopeSpecs, Journals, Method, Result, Scopes, SearchResults,
};
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use super::requests::{NewEntry, SearchQuery};
use crate::api::{ApiCaller, RequestParts};

#[derive(Debug, Clone)]
pub struct JournalService {
    caller: ApiCaller,
}

fn journal_path(journal_id: Uuid) -> String {
    format!("journals/{journal_id}")
}

fn entry_path(journal_id: Uuid, entry_id: Uuid) -> String {
    format!("journals/{journal_id}/entries/{entry_id}")
}

impl JournalService {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }

    // ------------------------------------------------------------------
    // Journals
    // ------------------------------------------------------------------

    #[instrument(skip(self, token))]
    pub async fn create_journal(
        &self,
        token: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<Journal> {
        BugoutError::require_non_empty("name", name)?;
        let parts = RequestParts::new().bearer(token)?.json(json!({ "name": name }));
        let journal: Journal = self.caller.call_as(Method::Post, "journals", parts, timeout).await?;

        info!(journal_id = %journal.id, "journal created");
        Ok(journal)
    }

    /// Journals the token holder can access.
    pub async fn list_journals(&self, token: &str, timeout: Duration) -> Result<Journals> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, "journals", parts, timeout).await
    }

    #[instrument(skip(self, token))]
    pub async fn get_journal(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Duration,
    ) -> Result<Journal> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, &journal_path(journal_id), parts, timeout).await
    }

    /// Rename a journal.
    #[instrument(skip(self, token))]
    pub async fn update_journal(
        &self,
        token: &str,
        journal_id: Uuid,
        name: &str,
        timeout: Duration,
    ) -> Result<Journal> {
        BugoutError::require_non_empty("name", name)?;
        let parts = RequestParts::new().bearer(token)?.json(json!({ "name": name }));
        self.caller.call_as(Method::Put, &journal_path(journal_id), parts, timeout).await
    }

    #[instrument(skip(self, token))]
    pub async fn delete_journal(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Duration,
    ) -> Result<Journal> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Delete, &journal_path(journal_id), parts, timeout).await
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    #[instrument(skip(self, token, entry), fields(title = %entry.title))]
    pub async fn create_entry(
        &self,
        token: &str,
        journal_id: Uuid,
        entry: &NewEntry,
        timeout: Duration,
    ) -> Result<JournalEntry> {
        let parts = RequestParts::new().bearer(token)?.json(entry.to_body());
        self.caller
            .call_as(Method::Post, &format!("journals/{journal_id}/entries"), parts, timeout)
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_entry(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Duration,
    ) -> Result<JournalEntry> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, &entry_path(journal_id, entry_id), parts, timeout).await
    }

    pub async fn get_entries(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Duration,
    ) -> Result<JournalEntries> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller
            .call_as(Method::Get, &format!("journals/{journal_id}/entries"), parts, timeout)
            .await
    }

    pub async fn get_entry_content(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Duration,
    ) -> Result<JournalEntryContent> {
        let parts = RequestParts::new().bearer(token)?;
        let path = format!("{}/content", entry_path(journal_id, entry_id));
        self.caller.call_as(Method::Get, &path, parts, timeout).await
    }

    /// Replace the title and content of an entry.
    #[instrument(skip(self, token, content))]
    pub async fn update_entry_content(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        title: &str,
        content: &str,
        timeout: Duration,
    ) -> Result<JournalEntryContent> {
        let parts = RequestParts::new()
            .bearer(token)?
            .json(json!({ "title": title, "content": content }));
        let path = format!("{}/content", entry_path(journal_id, entry_id));
        self.caller.call_as(Method::Put, &path, parts, timeout).await
    }

    #[instrument(skip(self, token))]
    pub async fn delete_entry(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Duration,
    ) -> Result<JournalEntry> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Delete, &entry_path(journal_id, entry_id), parts, timeout).await
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// Tag usage statistics for a journal, returned as the raw JSON items.
    pub async fn get_most_used_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Duration,
    ) -> Result<Vec<Value>> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller
            .call_as(Method::Get, &format!("journals/{journal_id}/tags"), parts, timeout)
            .await
    }

    /// Append tags to an entry; returns the tags that were added.
    #[instrument(skip(self, token))]
    pub async fn create_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        tags: &[String],
        timeout: Duration,
    ) -> Result<Vec<String>> {
        let parts = RequestParts::new().bearer(token)?.json(json!({ "tags": tags }));
        let path = format!("{}/tags", entry_path(journal_id, entry_id));
        self.caller.call_as(Method::Post, &path, parts, timeout).await
    }

    pub async fn get_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Duration,
    ) -> Result<JournalEntryTags> {
        let parts = RequestParts::new().bearer(token)?;
        let path = format!("{}/tags", entry_path(journal_id, entry_id));
        self.caller.call_as(Method::Get, &path, parts, timeout).await
    }

    /// Replace the full tag set of an entry.
    #[instrument(skip(self, token))]
    pub async fn update_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        tags: &[String],
        timeout: Duration,
    ) -> Result<Vec<String>> {
        let parts = RequestParts::new().bearer(token)?.json(json!({ "tags": tags }));
        let path = format!("{}/tags", entry_path(journal_id, entry_id));
        self.caller.call_as(Method::Put, &path, parts, timeout).await
    }

    /// Remove a single tag. A tag the entry does not carry is reported by
    /// the server as a 404.
    #[instrument(skip(self, token))]
    pub async fn delete_tag(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        tag: &str,
        timeout: Duration,
    ) -> Result<JournalEntryTags> {
        BugoutError::require_non_empty("tag", tag)?;
        let parts = RequestParts::new().bearer(token)?.json(json!({ "tag": tag }));
        let path = format!("{}/tags", entry_path(journal_id, entry_id));
        self.caller.call_as(Method::Delete, &path, parts, timeout).await
    }

    // ------------------------------------------------------------------
    // Permissions
    // ------------------------------------------------------------------

    /// Scopes defined for an API (e.g. `"journals"`).
    pub async fn list_scopes(&self, token: &str, api: &str, timeout: Duration) -> Result<Scopes> {
        BugoutError::require_non_empty("api", api)?;
        let parts = RequestParts::new().bearer(token)?.param("api", api);
        self.caller.call_as(Method::Get, "journals/scopes", parts, timeout).await
    }

    pub async fn get_journal_scopes(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Duration,
    ) -> Result<JournalScopeSpecs> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller
            .call_as(Method::Get, &format!("journals/{journal_id}/scopes"), parts, timeout)
            .await
    }

    /// Grant permissions on a journal to a user or group.
    #[instrument(skip(self, token))]
    pub async fn update_journal_scopes(
        &self,
        token: &str,
        journal_id: Uuid,
        holder_type: HolderType,
        holder_id: &str,
        permissions: &[String],
        timeout: Duration,
    ) -> Result<JournalScopeSpecs> {
        let parts = RequestParts::new()
            .bearer(token)?
            .json(scopes_body(holder_type, holder_id, permissions)?);
        let specs: JournalScopeSpecs = self
            .caller
            .call_as(Method::Post, &format!("journals/{journal_id}/scopes"), parts, timeout)
            .await?;

        info!(
            %journal_id,
            %holder_type,
            granted = specs.scopes.len(),
            "journal permissions granted"
        );
        Ok(specs)
    }

    /// Revoke permissions on a journal from a user or group.
    #[instrument(skip(self, token))]
    pub async fn delete_journal_scopes(
        &self,
        token: &str,
        journal_id: Uuid,
        holder_type: HolderType,
        holder_id: &str,
        permissions: &[String],
        timeout: Duration,
    ) -> Result<JournalScopeSpecs> {
        let parts = RequestParts::new()
            .bearer(token)?
            .json(scopes_body(holder_type, holder_id, permissions)?);
        self.caller
            .call_as(Method::Delete, &format!("journals/{journal_id}/scopes"), parts, timeout)
            .await
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Full-text search within one journal.
    ///
    /// # Errors
    /// Returns `BugoutError::Validation` without contacting the server if the
    /// query's limit or offset is negative.
    #[instrument(skip(self, token))]
    pub async fn search(
        &self,
        token: &str,
        journal_id: Uuid,
        query: &SearchQuery,
        timeout: Duration,
    ) -> Result<SearchResults> {
        query.validate()?;
        let parts = RequestParts::new()
            .bearer(token)?
            .param("q", &query.query)
            .param("limit", query.limit)
            .param("offset", query.offset)
            .param("content", query.content);
        self.caller
            .call_as(Method::Get, &format!("journals/{journal_id}/search"), parts, timeout)
            .await
    }
}

fn scopes_body(holder_type: HolderType, holder_id: &str, permissions: &[String]) -> Result<Value> {
    BugoutError::require_non_empty("holder_id", holder_id)?;
    if permissions.is_empty() {
        return Err(BugoutError::Validation("permission list must not be empty".to_string()));
    }
    Ok(json!({
        "holder_type": holder_type.as_str(),
        "holder_id": holder_id,
        "permission_list": permissions,
    }))
}
