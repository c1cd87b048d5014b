//! Group CRUD and membership/role assignment against Brood

use std::time::Duration;

use bugout_domain::{BugoutError, Group, GroupMembers, GroupUser, Method, Result, Role, UserGroups};
use serde_json::{json, Map, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::{ApiCaller, RequestParts};
use crate::selectors::{GroupSelector, UserSelector};

#[derive(Debug, Clone)]
pub struct GroupService {
    caller: ApiCaller,
}

impl GroupService {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }

    #[instrument(skip(self, token))]
    pub async fn get_group(&self, token: &str, group_id: Uuid, timeout: Duration) -> Result<Group> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, &format!("groups/{group_id}"), parts, timeout).await
    }

    /// Look a group up by id or by name.
    #[instrument(skip(self, token))]
    pub async fn find_group(
        &self,
        token: &str,
        selector: &GroupSelector,
        timeout: Duration,
    ) -> Result<Group> {
        let (key, value) = selector.query_param()?;
        let parts = RequestParts::new().bearer(token)?.param(key, value);
        self.caller.call_as(Method::Get, "groups/find", parts, timeout).await
    }

    /// Every group the authenticated user belongs to.
    pub async fn get_user_groups(&self, token: &str, timeout: Duration) -> Result<UserGroups> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, "groups", parts, timeout).await
    }

    #[instrument(skip(self, token))]
    pub async fn create_group(
        &self,
        token: &str,
        group_name: &str,
        timeout: Duration,
    ) -> Result<Group> {
        BugoutError::require_non_empty("group_name", group_name)?;
        let parts = RequestParts::new().bearer(token)?.json(json!({ "group_name": group_name }));
        let group: Group = self.caller.call_as(Method::Post, "groups", parts, timeout).await?;

        info!(group_id = %group.id, "group created");
        Ok(group)
    }

    /// Rename a group.
    #[instrument(skip(self, token))]
    pub async fn update_group(
        &self,
        token: &str,
        group_id: Uuid,
        group_name: &str,
        timeout: Duration,
    ) -> Result<Group> {
        BugoutError::require_non_empty("group_name", group_name)?;
        let parts = RequestParts::new().bearer(token)?.json(json!({ "group_name": group_name }));
        self.caller.call_as(Method::Post, &format!("groups/{group_id}/name"), parts, timeout).await
    }

    #[instrument(skip(self, token))]
    pub async fn delete_group(
        &self,
        token: &str,
        group_id: Uuid,
        timeout: Duration,
    ) -> Result<Group> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Delete, &format!("groups/{group_id}"), parts, timeout).await
    }

    /// Grant `role` in the group to the selected user, adding them if needed.
    #[instrument(skip(self, token))]
    pub async fn set_user_group(
        &self,
        token: &str,
        group_id: Uuid,
        role: Role,
        user: &UserSelector,
        timeout: Duration,
    ) -> Result<GroupUser> {
        let mut body = membership_body(user)?;
        body.insert("user_type".into(), Value::String(role.as_str().to_string()));
        let parts = RequestParts::new().bearer(token)?.object(body);
        self.caller.call_as(Method::Post, &format!("groups/{group_id}/role"), parts, timeout).await
    }

    /// Remove the selected user from the group.
    #[instrument(skip(self, token))]
    pub async fn delete_user_group(
        &self,
        token: &str,
        group_id: Uuid,
        user: &UserSelector,
        timeout: Duration,
    ) -> Result<GroupUser> {
        let parts = RequestParts::new().bearer(token)?.object(membership_body(user)?);
        let path = format!("groups/{group_id}/role");
        self.caller.call_as(Method::Delete, &path, parts, timeout).await
    }

    pub async fn get_group_members(
        &self,
        token: &str,
        group_id: Uuid,
        timeout: Duration,
    ) -> Result<GroupMembers> {
        let parts = RequestParts::new().bearer(token)?;
        self.caller.call_as(Method::Get, &format!("groups/{group_id}/users"), parts, timeout).await
    }
}

fn membership_body(user: &UserSelector) -> Result<Map<String, Value>> {
    let (key, value) = user.body_field()?;
    let mut body = Map::new();
    body.insert(key.to_string(), Value::String(value.to_string()));
    Ok(body)
}
