//! Integration tests for record parsing against realistic service payloads

use std::str::FromStr;

use bugout_domain::{
    BugoutError, ErrorBody, Group, HolderType, Journal, JournalEntry, Role, SearchResults,
    TokenType, UserTokens,
};
use serde_json::json;

#[test]
fn journal_with_duplicate_holders_collapses_to_set() {
    let holder_a = "11111111-1111-4111-8111-111111111111";
    let holder_b = "22222222-2222-4222-8222-222222222222";
    let payload = json!({
        "id": "0b9f3c52-8e64-4a7b-9d21-5c3e7f1a2b90",
        "bugout_user_id": holder_a,
        "holder_ids": [holder_b, holder_a, holder_b],
        "name": "Notes",
        "created_at": "2021-04-01T12:00:00.123456",
        "updated_at": "2021-04-01T12:00:00.123456+00:00"
    });

    let journal: Journal = serde_json::from_value(payload).unwrap();
    let reparsed: Journal =
        serde_json::from_value(serde_json::to_value(&journal).unwrap()).unwrap();

    assert_eq!(journal.holder_ids.len(), 2);
    assert_eq!(reparsed, journal);
    assert_eq!(journal.holder_ids.iter().next().unwrap().to_string(), holder_a);
}

#[test]
fn journal_without_holder_ids_is_rejected() {
    let payload = json!({
        "id": "0b9f3c52-8e64-4a7b-9d21-5c3e7f1a2b90",
        "bugout_user_id": "11111111-1111-4111-8111-111111111111",
        "name": "Notes",
        "created_at": "2021-04-01T12:00:00",
        "updated_at": "2021-04-01T12:00:00"
    });

    let err = serde_json::from_value::<Journal>(payload).unwrap_err();

    assert!(err.to_string().contains("holder_ids"), "{err}");
}

#[test]
fn entry_without_optional_fields_parses() {
    let entry: JournalEntry =
        serde_json::from_value(json!({"title": "Crash", "content": "trace"})).unwrap();

    assert_eq!(entry.id, None);
    assert!(entry.tags.is_empty());
    assert_eq!(entry.context_url, None);
}

#[test]
fn user_tokens_read_singular_wire_key() {
    let payload = json!({
        "user_id": "6c8e2b2e-1f7a-4c55-9a3e-0d7f6b1c2a11",
        "username": "alice",
        "token": [{
            "id": "f0e1d2c3-b4a5-4697-8877-665544332211",
            "user_id": "6c8e2b2e-1f7a-4c55-9a3e-0d7f6b1c2a11",
            "active": false,
            "created_at": "2021-03-01 10:00:00",
            "updated_at": "2021-03-01 10:00:00"
        }]
    });

    let tokens: UserTokens = serde_json::from_value(payload).unwrap();

    assert_eq!(tokens.tokens.len(), 1);
    assert!(!tokens.tokens[0].active);
    assert_eq!(tokens.tokens[0].token_type, None);
}

#[test]
fn group_without_name_is_accepted() {
    let group: Group = serde_json::from_value(json!({
        "id": "2f1d0c4b-3a5e-4f6d-8b7c-9e0a1b2c3d4e",
        "autogenerated": true
    }))
    .unwrap();

    assert_eq!(group.group_name, None);
    assert!(group.autogenerated);
}

#[test]
fn search_results_allow_missing_next_offset() {
    let results: SearchResults = serde_json::from_value(json!({
        "total_results": 25,
        "offset": 20,
        "max_score": 2.0,
        "results": []
    }))
    .unwrap();

    assert_eq!(results.next_offset, None);
}

#[test]
fn enum_strings_are_validated_once() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), *role);
    }
    assert_eq!(TokenType::from_str("github").unwrap(), TokenType::Github);
    assert_eq!(HolderType::from_str("group").unwrap(), HolderType::Group);
    assert!(matches!(HolderType::from_str("team"), Err(BugoutError::Validation(_))));
}

#[test]
fn request_error_serializes_with_type_tag() {
    let err =
        BugoutError::Request { status: 403, body: ErrorBody::Json(json!({"detail": "nope"})) };

    let value = serde_json::to_value(&err).unwrap();

    assert_eq!(value["type"], "Request");
    assert_eq!(value["message"]["status"], 403);
    assert_eq!(err.to_string(), r#"Request failed with status 403: {"detail":"nope"}"#);
}
