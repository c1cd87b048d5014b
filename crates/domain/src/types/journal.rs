//! Journal, entry, tag and search records returned by Spire

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

/// Journal metadata.
///
/// `holder_ids` is a set: duplicates in the payload collapse and ordering
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: Uuid,
    pub bugout_user_id: Uuid,
    pub holder_ids: BTreeSet<Uuid>,
    pub name: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journals {
    pub journals: Vec<Journal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub journal_url: Option<String>,
    #[serde(default)]
    pub content_url: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub context_url: Option<String>,
    #[serde(default)]
    pub context_type: Option<String>,
    #[serde(default)]
    pub context_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntries {
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryContent {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryTags {
    pub journal_id: Uuid,
    pub entry_id: Uuid,
    pub tags: Vec<String>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub entry_url: String,
    pub content_url: String,
    pub title: String,
    /// Absent when the search was issued with `content = false`.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    pub score: f64,
    #[serde(default)]
    pub context_type: Option<String>,
    #[serde(default)]
    pub context_url: Option<String>,
    #[serde(default)]
    pub context_id: Option<String>,
}

/// One page of search hits plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub total_results: i64,
    pub offset: i64,
    #[serde(default)]
    pub next_offset: Option<i64>,
    pub max_score: f64,
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const U1: &str = "11111111-1111-4111-8111-111111111111";
    const U2: &str = "22222222-2222-4222-8222-222222222222";

    fn journal_json(holders: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "9a8b7c6d-5e4f-4a3b-9c2d-1e0f9a8b7c6d",
            "bugout_user_id": "6c8e2b2e-1f7a-4c55-9a3e-0d7f6b1c2a11",
            "holder_ids": holders,
            "name": "Notes",
            "created_at": "2021-03-01T10:00:00",
            "updated_at": "2021-03-01T10:00:00"
        })
    }

    #[test]
    fn journal_holder_ids_are_deduplicated() {
        let journal: Journal =
            serde_json::from_value(journal_json(json!([U2, U1, U2]))).expect("should deserialize");

        let serialized = serde_json::to_value(&journal).unwrap();
        let reparsed: Journal = serde_json::from_value(serialized).unwrap();

        let expected: BTreeSet<Uuid> =
            [U1, U2].iter().map(|s| Uuid::parse_str(s).unwrap()).collect();
        assert_eq!(reparsed.holder_ids.len(), 2);
        assert_eq!(reparsed.holder_ids, expected);
    }

    #[test]
    fn entry_defaults_optional_fields() {
        let entry: JournalEntry =
            serde_json::from_value(json!({"title": "t", "content": "c"})).unwrap();
        assert!(entry.id.is_none());
        assert!(entry.tags.is_empty());
        assert!(entry.created_at.is_none());
        assert!(entry.context_url.is_none());
    }

    #[test]
    fn entry_requires_title() {
        let err = serde_json::from_value::<JournalEntry>(json!({"content": "c"})).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn search_results_without_content() {
        let value = json!({
            "total_results": 1,
            "offset": 0,
            "next_offset": null,
            "max_score": 1.0,
            "results": [{
                "entry_url": "https://spire.bugout.dev/journals/j/entries/e",
                "content_url": "https://spire.bugout.dev/journals/j/entries/e/content",
                "title": "hello",
                "tags": ["a"],
                "created_at": "2021-03-01T10:00:00",
                "updated_at": "2021-03-01T10:00:00",
                "score": 1.0
            }]
        });
        let results: SearchResults = serde_json::from_value(value).expect("should deserialize");
        assert_eq!(results.results.len(), 1);
        assert!(results.results[0].content.is_none());
        assert!(results.next_offset.is_none());
        assert_eq!(results.results[0].created_at.to_rfc3339(), "2021-03-01T10:00:00+00:00");
    }

    #[test]
    fn search_result_rejects_malformed_timestamp() {
        let err = serde_json::from_value::<SearchResult>(json!({
            "entry_url": "e",
            "content_url": "c",
            "title": "hello",
            "created_at": "yesterday",
            "updated_at": "2021-03-01T10:00:00",
            "score": 1.0
        }))
        .unwrap_err();
        assert!(err.to_string().contains("yesterday"), "{err}");
    }
}
