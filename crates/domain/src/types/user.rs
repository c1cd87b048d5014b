//! User and token records returned by Brood

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kinds::Role;
use super::timestamp;

/// Full user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Brood names this field `user_id` on the wire.
    #[serde(rename = "user_id", alias = "id")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub normalized_email: String,
    pub verified: bool,
    pub autogenerated: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Condensed user as listed in group membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserShort {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub user_type: Role,
}

/// Access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: Uuid,
    pub user_id: Uuid,
    pub active: bool,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Tokens owned by one user, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTokens {
    pub user_id: Uuid,
    pub username: String,
    #[serde(rename = "token", alias = "tokens")]
    pub tokens: Vec<Token>,
}
