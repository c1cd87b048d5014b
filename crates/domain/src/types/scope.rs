//! Permission scopes on journals

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kinds::HolderType;

/// A permission known to one of the Bugout APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub api: String,
    pub scope: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scopes {
    pub scopes: Vec<Scope>,
}

/// One (holder, permission) binding on a journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalScopeSpec {
    pub journal_id: Uuid,
    pub holder_type: HolderType,
    pub holder_id: String,
    pub permission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalScopeSpecs {
    pub scopes: Vec<JournalScopeSpec>,
}
