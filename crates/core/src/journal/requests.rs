//! Request payloads for journal operations

use bugout_domain::constants::{DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_OFFSET};
use bugout_domain::{BugoutError, Result};
use serde_json::{json, Map, Value};

/// Optional link from an entry to an external object.
///
/// The server accepts partial context; completeness is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryContext {
    pub url: Option<String>,
    pub id: Option<String>,
    pub kind: Option<String>,
}

/// New journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    /// Ordered tags; duplicates are left for the server to resolve
    pub tags: Vec<String>,
    pub context: EntryContext,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into(), ..Self::default() }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_context(mut self, context: EntryContext) -> Self {
        self.context = context;
        self
    }

    pub(crate) fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("title".into(), json!(self.title));
        body.insert("content".into(), json!(self.content));
        body.insert("tags".into(), json!(self.tags));

        let context = [
            ("context_url", &self.context.url),
            ("context_id", &self.context.id),
            ("context_type", &self.context.kind),
        ];
        for (key, value) in context {
            if let Some(value) = value {
                body.insert(key.into(), json!(value));
            }
        }
        Value::Object(body)
    }
}

/// Full-text search over one journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub limit: i64,
    pub offset: i64,
    /// Include entry content in results; only affects payload size
    pub content: bool,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
            offset: DEFAULT_SEARCH_OFFSET,
            content: true,
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn content(mut self, content: bool) -> Self {
        self.content = content;
        self
    }

    /// # Errors
    /// Returns `BugoutError::Validation` if `limit` or `offset` is negative.
    pub fn validate(&self) -> Result<()> {
        if self.limit < 0 {
            return Err(BugoutError::Validation(format!(
                "limit must be non-negative, got {}",
                self.limit
            )));
        }
        if self.offset < 0 {
            return Err(BugoutError::Validation(format!(
                "offset must be non-negative, got {}",
                self.offset
            )));
        }
        Ok(())
    }
}
