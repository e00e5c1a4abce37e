//! Role events.

use crate::domain::role::Role;
use serde::{Deserialize, Serialize};
use shared_types::Address;

pub const ROLE_ADMIN_CHANGED: &str = "RoleAdminChanged";
pub const ROLE_GRANTED: &str = "RoleGranted";
pub const ROLE_REVOKED: &str = "RoleRevoked";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAdminChanged {
    pub role: Role,
    /// Empty if the role had no admin.
    pub previous_admin_role: Role,
    pub new_admin_role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGranted {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRevoked {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}
