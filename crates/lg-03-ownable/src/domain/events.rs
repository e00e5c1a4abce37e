//! Ownership events.

use serde::{Deserialize, Serialize};
use shared_types::Address;

pub const OWNERSHIP_TRANSFERRED: &str = "OwnershipTransferred";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
