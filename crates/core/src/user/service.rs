//! User and token operations against Brood

use std::time::Duration;

use bugout_domain::{BugoutError, Method, Result, Token, TokenType, User, UserTokens};
use serde_json::{json, Map, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::{ApiCaller, RequestParts};

/// Change to one optional token field.
///
/// `Keep` leaves the key out of the request so the server keeps the current
/// value; `Clear` sends an explicit `null`; `Set` sends the new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Set)
    }
}

impl<T> FieldUpdate<T> {
    fn write_into(&self, key: &str, body: &mut Map<String, Value>, encode: impl Fn(&T) -> Value) {
        match self {
            Self::Keep => {}
            Self::Clear => {
                body.insert(key.to_string(), Value::Null);
            }
            Self::Set(value) => {
                body.insert(key.to_string(), encode(value));
            }
        }
    }
}

/// Fields of a token that can be changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenUpdate {
    pub token_type: FieldUpdate<TokenType>,
    pub note: FieldUpdate<String>,
}

impl TokenUpdate {
    fn to_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        self.token_type
            .write_into("token_type", &mut body, |t| Value::String(t.as_str().to_string()));
        self.note.write_into("token_note", &mut body, |n| Value::String(n.clone()));
        body
    }
}

/// Account lifecycle and bearer-token lifecycle.
#[derive(Debug, Clone)]
pub struct UserService {
    caller: ApiCaller,
}

impl UserService {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }

    /// Register a new account.
    ///
    /// `extra` is merged into the request body without overriding the
    /// required fields (e.g. an application id).
    ///
    /// # Errors
    /// Returns `BugoutError::Validation` without contacting the server if
    /// username, email or password is empty. Duplicate accounts surface as
    /// `BugoutError::Request` with the server's status.
    #[instrument(skip(self, password, extra))]
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        extra: Option<Map<String, Value>>,
        timeout: Duration,
    ) -> Result<User> {
        BugoutError::require_non_empty("username", username)?;
        BugoutError::require_non_empty("email", email)?;
        BugoutError::require_non_empty("password", password)?;

        let mut body = extra.unwrap_or_default();
        body.insert("username".into(), json!(username));
        body.insert("email".into(), json!(email));
        body.insert("password".into(), json!(password));

        let user: User = self
            .caller
            .call_as(Method::Post, "user", RequestParts::new().object(body), timeout)
            .await?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Owner of the given token.
    pub async fn get_user(&self, token: &str, timeout: Duration) -> Result<User> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, "user", parts, timeout).await
    }

    #[instrument(skip(self, token))]
    pub async fn get_user_by_id(
        &self,
        token: &str,
        user_id: Uuid,
        timeout: Duration,
    ) -> Result<User> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, &format!("user/{user_id}"), parts, timeout).await
    }

    /// Look a user up by username. The token is optional because some
    /// deployments allow anonymous lookup.
    #[instrument(skip(self, token))]
    pub async fn find_user(
        &self,
        username: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<User> {
        BugoutError::require_non_empty("username", username)?;
        let mut parts = RequestParts::new().param("username", username);
        if let Some(token) = token {
            parts = parts.bearer(token)?;
        }
        self.caller.call_as(Method::Get, "user/find", parts, timeout).await
    }

    pub async fn confirm_email(
        &self,
        token: &str,
        verification_code: &str,
        timeout: Duration,
    ) -> Result<User> {
        BugoutError::require_non_empty("verification_code", verification_code)?;
        let parts = RequestParts::new()
            .bearer(token)?
            .json(json!({ "verification_code": verification_code }));
        self.caller.call_as(Method::Post, "confirm", parts, timeout).await
    }

    /// Ask Brood to email a password reset link.
    ///
    /// Returns the raw status document; the endpoint does not return a user.
    pub async fn restore_password(
        &self,
        email: &str,
        timeout: Duration,
    ) -> Result<Map<String, Value>> {
        BugoutError::require_non_empty("email", email)?;
        let parts = RequestParts::new().json(json!({ "email": email }));
        self.caller.call_as(Method::Post, "password/restore", parts, timeout).await
    }

    pub async fn reset_password(
        &self,
        reset_id: Uuid,
        new_password: &str,
        timeout: Duration,
    ) -> Result<User> {
        BugoutError::require_non_empty("new_password", new_password)?;
        let parts = RequestParts::new()
            .json(json!({ "reset_id": reset_id, "new_password": new_password }));
        self.caller.call_as(Method::Post, "password/reset", parts, timeout).await
    }

    #[instrument(skip(self, token, current_password, new_password))]
    pub async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
        timeout: Duration,
    ) -> Result<User> {
        BugoutError::require_non_empty("current_password", current_password)?;
        BugoutError::require_non_empty("new_password", new_password)?;
        let parts = RequestParts::new().bearer(token)?.json(json!({
            "current_password": current_password,
            "new_password": new_password,
        }));
        self.caller.call_as(Method::Post, "profile/password", parts, timeout).await
    }

    /// Delete an account.
    ///
    /// The password is only sent when given; whether it may be omitted
    /// (administrative deletion) is decided by the server.
    #[instrument(skip(self, token, password))]
    pub async fn delete_user(
        &self,
        token: &str,
        user_id: Uuid,
        password: Option<&str>,
        timeout: Duration,
    ) -> Result<User> {
        let mut parts = RequestParts::new().bearer(token)?;
        if let Some(password) = password {
            parts = parts.json(json!({ "password": password }));
        }
        self.caller.call_as(Method::Delete, &format!("user/{user_id}"), parts, timeout).await
    }

    /// Log in: exchange credentials for a new token.
    #[instrument(skip(self, password))]
    pub async fn create_token(
        &self,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Token> {
        BugoutError::require_non_empty("username", username)?;
        BugoutError::require_non_empty("password", password)?;
        let parts =
            RequestParts::new().json(json!({ "username": username, "password": password }));
        self.caller.call_as(Method::Post, "token", parts, timeout).await
    }

    /// Mint a restricted token derived from the given one.
    pub async fn create_token_restricted(&self, token: &str, timeout: Duration) -> Result<Token> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Post, "token/restricted", parts, timeout).await
    }

    /// Revoke the token used to authenticate; returns its id.
    pub async fn revoke_token(&self, token: &str, timeout: Duration) -> Result<Uuid> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Delete, "token", parts, timeout).await
    }

    /// Revoke another token owned by the caller; returns its id.
    pub async fn revoke_token_by_id(
        &self,
        token: &str,
        token_id: Uuid,
        timeout: Duration,
    ) -> Result<Uuid> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Delete, &format!("token/{token_id}"), parts, timeout).await
    }

    /// Change the type and/or note of the authenticating token.
    ///
    /// Only fields that are not [`FieldUpdate::Keep`] appear in the body.
    #[instrument(skip(self, token))]
    pub async fn update_token(
        &self,
        token: &str,
        update: &TokenUpdate,
        timeout: Duration,
    ) -> Result<Token> {
        let parts = RequestParts::new().bearer(token)?.object(update.to_body());
        self.caller.call_as(Method::Put, "token", parts, timeout).await
    }

    pub async fn get_token_types(&self, token: &str, timeout: Duration) -> Result<Vec<String>> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, "token/types", parts, timeout).await
    }

    /// Tokens of the authenticated user, optionally filtered.
    #[instrument(skip(self, token))]
    pub async fn get_user_tokens(
        &self,
        token: &str,
        active: Option<bool>,
        token_type: Option<TokenType>,
        timeout: Duration,
    ) -> Result<UserTokens> {
        let mut parts = RequestParts::new().bearer(token)?;
        if let Some(active) = active {
            parts = parts.param("active", active);
        }
        if let Some(token_type) = token_type {
            parts = parts.param("token_type", token_type);
        }
        self.caller.call_as(Method::Get, "tokens", parts, timeout).await
    }
}
