//! Closed enumerations shared by the Brood and Spire APIs

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// HTTP method used for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Delete,
    Get,
    Post,
    Put,
}

impl_wire_enum_conversions!(Method {
    Delete => "delete",
    Get => "get",
    Post => "post",
    Put => "put",
});

/// Membership role of a user inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Member,
}

impl_wire_enum_conversions!(Role {
    Owner => "owner",
    Member => "member",
});

/// Origin of an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Bugout,
    Slack,
    Github,
}

impl_wire_enum_conversions!(TokenType {
    Bugout => "bugout",
    Slack => "slack",
    Github => "github",
});

/// Kind of principal a journal scope is granted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolderType {
    User,
    Group,
}

impl_wire_enum_conversions!(HolderType {
    User => "user",
    Group => "group",
});
