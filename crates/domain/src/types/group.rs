//! Group records returned by Brood

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserShort;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    #[serde(default, alias = "name")]
    pub group_name: Option<String>,
    pub autogenerated: bool,
}

/// A user's membership in one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUser {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub user_type: String,
    #[serde(default)]
    pub autogenerated: Option<bool>,
    #[serde(default)]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroups {
    pub groups: Vec<GroupUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembers {
    pub id: Uuid,
    pub name: String,
    pub users: Vec<UserShort>,
}
