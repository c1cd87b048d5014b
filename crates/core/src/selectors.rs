//! "Exactly one of" argument types
//!
//! Group lookups take a group id *or* a name; membership changes take a
//! username *or* an email. Both are tagged enums so that the "both" and
//! "neither" states cannot be expressed. `from_parts` converts a pair of
//! optional inputs (e.g. from a CLI or an untyped caller) into a selector.

use bugout_domain::{BugoutError, Result};
use uuid::Uuid;

/// Identifies a group for `find_group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    Id(Uuid),
    Name(String),
}

impl GroupSelector {
    /// Build a selector from optional inputs.
    ///
    /// # Errors
    /// Returns `BugoutError::Validation` unless exactly one input is given,
    /// or if the given name is empty.
    pub fn from_parts(group_id: Option<Uuid>, name: Option<&str>) -> Result<Self> {
        match (group_id, name) {
            (Some(id), None) => Ok(Self::Id(id)),
            (None, Some(name)) => {
                BugoutError::require_non_empty("name", name)?;
                Ok(Self::Name(name.to_string()))
            }
            (Some(_), Some(_)) => Err(BugoutError::Validation(
                "provide either group_id or name, not both".to_string(),
            )),
            (None, None) => {
                Err(BugoutError::Validation("one of group_id or name is required".to_string()))
            }
        }
    }

    /// Query parameter sent to the group lookup endpoint.
    pub(crate) fn query_param(&self) -> Result<(&'static str, String)> {
        match self {
            Self::Id(id) => Ok(("group_id", id.to_string())),
            Self::Name(name) => {
                BugoutError::require_non_empty("name", name)?;
                Ok(("name", name.clone()))
            }
        }
    }
}

/// Identifies a user for group membership changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSelector {
    Username(String),
    Email(String),
}

impl UserSelector {
    /// Build a selector from optional inputs.
    ///
    /// # Errors
    /// Returns `BugoutError::Validation` unless exactly one input is given,
    /// or if the given value is empty.
    pub fn from_parts(username: Option<&str>, email: Option<&str>) -> Result<Self> {
        let selector = match (username, email) {
            (Some(username), None) => Self::Username(username.to_string()),
            (None, Some(email)) => Self::Email(email.to_string()),
            (Some(_), Some(_)) => {
                return Err(BugoutError::Validation(
                    "provide either username or email, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(BugoutError::Validation(
                    "one of username or email is required".to_string(),
                ))
            }
        };
        selector.body_field()?;
        Ok(selector)
    }

    /// JSON body field identifying the user.
    pub(crate) fn body_field(&self) -> Result<(&'static str, &str)> {
        let (key, value) = match self {
            Self::Username(username) => ("username", username.as_str()),
            Self::Email(email) => ("email", email.as_str()),
        };
        BugoutError::require_non_empty(key, value)?;
        Ok((key, value))
    }
}
