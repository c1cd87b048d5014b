//! Shared test helpers for `bugout-core` integration tests.
//!
//! [`MockTransport`] records every request it is handed and answers from a
//! queue of canned responses, so tests can assert on the exact wire request
//! without a server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bugout_core::{Bugout, HttpRequest, HttpResponse, HttpTransport};
use bugout_domain::{BugoutError, Result};
use serde_json::{json, Value};

pub const BROOD: &str = "http://brood.test";
pub const SPIRE: &str = "http://spire.test";

/// In-memory transport that replays queued responses in order.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a JSON response with the given status.
    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.push(Ok(HttpResponse { status, body: body.to_string() }))
    }

    /// Queue a raw text response with the given status.
    pub fn reply_text(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(HttpResponse { status, body: body.to_string() }))
    }

    /// Queue a transport failure.
    pub fn fail(&self, message: &str) -> &Self {
        self.push(Err(BugoutError::Transport(message.to_string())))
    }

    fn push(&self, response: Result<HttpResponse>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The single request sent so far; panics if there were none or several.
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BugoutError::Transport("no response queued".to_string())))
    }
}

/// Facade wired to a fresh mock transport.
pub fn client() -> (Bugout, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let bugout = Bugout::new(BROOD, SPIRE, transport.clone()).with_timeout(Duration::from_secs(3));
    (bugout, transport)
}

// ----------------------------------------------------------------------------
// Payload fixtures
// ----------------------------------------------------------------------------

pub const USER_ID: &str = "6c8e2b2e-1f7a-4c55-9a3e-0d7f6b1c2a11";
pub const GROUP_ID: &str = "2f1d0c4b-3a5e-4f6d-8b7c-9e0a1b2c3d4e";
pub const JOURNAL_ID: &str = "0b9f3c52-8e64-4a7b-9d21-5c3e7f1a2b90";
pub const ENTRY_ID: &str = "a1b2c3d4-e5f6-4789-8abc-def012345678";
pub const TOKEN_ID: &str = "f0e1d2c3-b4a5-4697-8877-665544332211";

pub fn user_payload() -> Value {
    json!({
        "user_id": USER_ID,
        "username": "alice",
        "email": "alice@example.com",
        "normalized_email": "alice@example.com",
        "verified": false,
        "autogenerated": false,
        "created_at": "2021-03-01T10:00:00.000000",
        "updated_at": "2021-03-01T10:00:00.000000"
    })
}

pub fn token_payload(token_type: Value, note: Value) -> Value {
    json!({
        "id": TOKEN_ID,
        "user_id": USER_ID,
        "active": true,
        "token_type": token_type,
        "note": note,
        "created_at": "2021-03-01T10:00:00",
        "updated_at": "2021-03-01T10:05:00"
    })
}

pub fn group_payload(name: &str) -> Value {
    json!({ "id": GROUP_ID, "name": name, "autogenerated": false })
}

pub fn journal_payload(name: &str, holder_ids: Value) -> Value {
    json!({
        "id": JOURNAL_ID,
        "bugout_user_id": USER_ID,
        "holder_ids": holder_ids,
        "name": name,
        "created_at": "2021-04-01T12:00:00.5",
        "updated_at": "2021-04-01T12:00:00.5"
    })
}

pub fn entry_payload(title: &str, tags: &[&str]) -> Value {
    json!({
        "id": ENTRY_ID,
        "journal_url": format!("{SPIRE}/journals/{JOURNAL_ID}"),
        "content_url": format!("{SPIRE}/journals/{JOURNAL_ID}/entries/{ENTRY_ID}/content"),
        "title": title,
        "content": "body",
        "tags": tags,
        "created_at": "2021-04-01T12:30:00",
        "updated_at": "2021-04-01T12:30:00"
    })
}

pub fn not_found() -> Value {
    json!({ "error": "not found" })
}
