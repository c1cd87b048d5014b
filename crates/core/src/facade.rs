//! Single entry point over both services
//!
//! [`Bugout`] owns one [`ApiCaller`] per service (both sharing a transport
//! handle) and a default timeout. Every method takes a trailing
//! `timeout: Option<Duration>`; `None` falls back to the default. No state
//! changes after construction, so one instance can serve concurrent tasks.

use std::sync::Arc;
use std::time::Duration;

use bugout_domain::constants::DEFAULT_TIMEOUT_SECONDS;
use bugout_domain::{
    Group, GroupMembers, GroupUser, HolderType, Journal, JournalEntries, JournalEntry,
    JournalEntryContent, JournalEntryTags, JournalScopeSpecs, Journals, Result, Role, Scopes,
    SearchResults, Token, TokenType, User, UserGroups, UserTokens,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::api::ApiCaller;
use crate::group::GroupService;
use crate::journal::{JournalService, NewEntry, SearchQuery};
use crate::ports::HttpTransport;
use crate::selectors::{GroupSelector, UserSelector};
use crate::user::{TokenUpdate, UserService};

#[derive(Debug, Clone)]
pub struct Bugout {
    brood: ApiCaller,
    spire: ApiCaller,
    users: UserService,
    groups: GroupService,
    journals: JournalService,
    default_timeout: Duration,
}

impl Bugout {
    pub fn new(
        brood_url: impl Into<String>,
        spire_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let brood = ApiCaller::new(brood_url, Arc::clone(&transport));
        let spire = ApiCaller::new(spire_url, transport);
        Self {
            users: UserService::new(brood.clone()),
            groups: GroupService::new(brood.clone()),
            journals: JournalService::new(spire.clone()),
            brood,
            spire,
            default_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Replace the timeout used when a call passes `None`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn brood_url(&self) -> &str {
        self.brood.base_url()
    }

    pub fn spire_url(&self) -> &str {
        self.spire.base_url()
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    fn timeout(&self, timeout: Option<Duration>) -> Duration {
        timeout.unwrap_or(self.default_timeout)
    }

    pub async fn brood_ping(&self, timeout: Option<Duration>) -> Result<Value> {
        self.brood.ping(self.timeout(timeout)).await
    }

    pub async fn spire_ping(&self, timeout: Option<Duration>) -> Result<Value> {
        self.spire.ping(self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        extra: Option<Map<String, Value>>,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users.create_user(username, email, password, extra, self.timeout(timeout)).await
    }

    pub async fn get_user(&self, token: &str, timeout: Option<Duration>) -> Result<User> {
        self.users.get_user(token, self.timeout(timeout)).await
    }

    pub async fn get_user_by_id(
        &self,
        token: &str,
        user_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users.get_user_by_id(token, user_id, self.timeout(timeout)).await
    }

    pub async fn find_user(
        &self,
        username: &str,
        token: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users.find_user(username, token, self.timeout(timeout)).await
    }

    pub async fn confirm_email(
        &self,
        token: &str,
        verification_code: &str,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users.confirm_email(token, verification_code, self.timeout(timeout)).await
    }

    pub async fn restore_password(
        &self,
        email: &str,
        timeout: Option<Duration>,
    ) -> Result<Map<String, Value>> {
        self.users.restore_password(email, self.timeout(timeout)).await
    }

    pub async fn reset_password(
        &self,
        reset_id: Uuid,
        new_password: &str,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users.reset_password(reset_id, new_password, self.timeout(timeout)).await
    }

    pub async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users
            .change_password(token, current_password, new_password, self.timeout(timeout))
            .await
    }

    pub async fn delete_user(
        &self,
        token: &str,
        user_id: Uuid,
        password: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<User> {
        self.users.delete_user(token, user_id, password, self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Tokens
    // ------------------------------------------------------------------

    pub async fn create_token(
        &self,
        username: &str,
        password: &str,
        timeout: Option<Duration>,
    ) -> Result<Token> {
        self.users.create_token(username, password, self.timeout(timeout)).await
    }

    pub async fn create_token_restricted(
        &self,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Token> {
        self.users.create_token_restricted(token, self.timeout(timeout)).await
    }

    pub async fn revoke_token(&self, token: &str, timeout: Option<Duration>) -> Result<Uuid> {
        self.users.revoke_token(token, self.timeout(timeout)).await
    }

    pub async fn revoke_token_by_id(
        &self,
        token: &str,
        token_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<Uuid> {
        self.users.revoke_token_by_id(token, token_id, self.timeout(timeout)).await
    }

    pub async fn update_token(
        &self,
        token: &str,
        update: &TokenUpdate,
        timeout: Option<Duration>,
    ) -> Result<Token> {
        self.users.update_token(token, update, self.timeout(timeout)).await
    }

    pub async fn get_token_types(
        &self,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<String>> {
        self.users.get_token_types(token, self.timeout(timeout)).await
    }

    pub async fn get_user_tokens(
        &self,
        token: &str,
        active: Option<bool>,
        token_type: Option<TokenType>,
        timeout: Option<Duration>,
    ) -> Result<UserTokens> {
        self.users.get_user_tokens(token, active, token_type, self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    pub async fn get_group(
        &self,
        token: &str,
        group_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<Group> {
        self.groups.get_group(token, group_id, self.timeout(timeout)).await
    }

    pub async fn find_group(
        &self,
        token: &str,
        selector: &GroupSelector,
        timeout: Option<Duration>,
    ) -> Result<Group> {
        self.groups.find_group(token, selector, self.timeout(timeout)).await
    }

    pub async fn get_user_groups(
        &self,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<UserGroups> {
        self.groups.get_user_groups(token, self.timeout(timeout)).await
    }

    pub async fn create_group(
        &self,
        token: &str,
        group_name: &str,
        timeout: Option<Duration>,
    ) -> Result<Group> {
        self.groups.create_group(token, group_name, self.timeout(timeout)).await
    }

    pub async fn update_group(
        &self,
        token: &str,
        group_id: Uuid,
        group_name: &str,
        timeout: Option<Duration>,
    ) -> Result<Group> {
        self.groups.update_group(token, group_id, group_name, self.timeout(timeout)).await
    }

    pub async fn delete_group(
        &self,
        token: &str,
        group_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<Group> {
        self.groups.delete_group(token, group_id, self.timeout(timeout)).await
    }

    pub async fn set_user_group(
        &self,
        token: &str,
        group_id: Uuid,
        role: Role,
        user: &UserSelector,
        timeout: Option<Duration>,
    ) -> Result<GroupUser> {
        self.groups.set_user_group(token, group_id, role, user, self.timeout(timeout)).await
    }

    pub async fn delete_user_group(
        &self,
        token: &str,
        group_id: Uuid,
        user: &UserSelector,
        timeout: Option<Duration>,
    ) -> Result<GroupUser> {
        self.groups.delete_user_group(token, group_id, user, self.timeout(timeout)).await
    }

    pub async fn get_group_members(
        &self,
        token: &str,
        group_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<GroupMembers> {
        self.groups.get_group_members(token, group_id, self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Journals
    // ------------------------------------------------------------------

    pub async fn create_journal(
        &self,
        token: &str,
        name: &str,
        timeout: Option<Duration>,
    ) -> Result<Journal> {
        self.journals.create_journal(token, name, self.timeout(timeout)).await
    }

    pub async fn list_journals(&self, token: &str, timeout: Option<Duration>) -> Result<Journals> {
        self.journals.list_journals(token, self.timeout(timeout)).await
    }

    pub async fn get_journal(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<Journal> {
        self.journals.get_journal(token, journal_id, self.timeout(timeout)).await
    }

    pub async fn update_journal(
        &self,
        token: &str,
        journal_id: Uuid,
        name: &str,
        timeout: Option<Duration>,
    ) -> Result<Journal> {
        self.journals.update_journal(token, journal_id, name, self.timeout(timeout)).await
    }

    pub async fn delete_journal(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<Journal> {
        self.journals.delete_journal(token, journal_id, self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    pub async fn create_entry(
        &self,
        token: &str,
        journal_id: Uuid,
        entry: &NewEntry,
        timeout: Option<Duration>,
    ) -> Result<JournalEntry> {
        self.journals.create_entry(token, journal_id, entry, self.timeout(timeout)).await
    }

    pub async fn get_entry(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<JournalEntry> {
        self.journals.get_entry(token, journal_id, entry_id, self.timeout(timeout)).await
    }

    pub async fn get_entries(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<JournalEntries> {
        self.journals.get_entries(token, journal_id, self.timeout(timeout)).await
    }

    pub async fn get_entry_content(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<JournalEntryContent> {
        self.journals.get_entry_content(token, journal_id, entry_id, self.timeout(timeout)).await
    }

    pub async fn update_entry_content(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        title: &str,
        content: &str,
        timeout: Option<Duration>,
    ) -> Result<JournalEntryContent> {
        let timeout = self.timeout(timeout);
        self.journals
            .update_entry_content(token, journal_id, entry_id, title, content, timeout)
            .await
    }

    pub async fn delete_entry(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<JournalEntry> {
        self.journals.delete_entry(token, journal_id, entry_id, self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    pub async fn get_most_used_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<Vec<Value>> {
        self.journals.get_most_used_tags(token, journal_id, self.timeout(timeout)).await
    }

    pub async fn create_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        tags: &[String],
        timeout: Option<Duration>,
    ) -> Result<Vec<String>> {
        self.journals.create_tags(token, journal_id, entry_id, tags, self.timeout(timeout)).await
    }

    pub async fn get_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<JournalEntryTags> {
        self.journals.get_tags(token, journal_id, entry_id, self.timeout(timeout)).await
    }

    pub async fn update_tags(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        tags: &[String],
        timeout: Option<Duration>,
    ) -> Result<Vec<String>> {
        self.journals.update_tags(token, journal_id, entry_id, tags, self.timeout(timeout)).await
    }

    pub async fn delete_tag(
        &self,
        token: &str,
        journal_id: Uuid,
        entry_id: Uuid,
        tag: &str,
        timeout: Option<Duration>,
    ) -> Result<JournalEntryTags> {
        self.journals.delete_tag(token, journal_id, entry_id, tag, self.timeout(timeout)).await
    }

    // ------------------------------------------------------------------
    // Permissions
    // ------------------------------------------------------------------

    pub async fn list_scopes(
        &self,
        token: &str,
        api: &str,
        timeout: Option<Duration>,
    ) -> Result<Scopes> {
        self.journals.list_scopes(token, api, self.timeout(timeout)).await
    }

    pub async fn get_journal_scopes(
        &self,
        token: &str,
        journal_id: Uuid,
        timeout: Option<Duration>,
    ) -> Result<JournalScopeSpecs> {
        self.journals.get_journal_scopes(token, journal_id, self.timeout(timeout)).await
    }

    pub async fn update_journal_scopes(
        &self,
        token: &str,
        journal_id: Uuid,
        holder_type: HolderType,
        holder_id: &str,
        permissions: &[String],
        timeout: Option<Duration>,
    ) -> Result<JournalScopeSpecs> {
        self.journals
            .update_journal_scopes(
                token,
                journal_id,
                holder_type,
                holder_id,
                permissions,
                self.timeout(timeout),
            )
            .await
    }

    pub async fn delete_journal_scopes(
        &self,
        token: &str,
        journal_id: Uuid,
        holder_type: HolderType,
        holder_id: &str,
        permissions: &[String],
        timeout: Option<Duration>,
    ) -> Result<JournalScopeSpecs> {
        self.journals
            .delete_journal_scopes(
                token,
                journal_id,
                holder_type,
                holder_id,
                permissions,
                self.timeout(timeout),
            )
            .await
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub async fn search(
        &self,
        token: &str,
        journal_id: Uuid,
        query: &SearchQuery,
        timeout: Option<Duration>,
    ) -> Result<SearchResults> {
        self.journals.search(token, journal_id, query, self.timeout(timeout)).await
    }
}
