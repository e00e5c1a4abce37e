//! # Role-Based Access Control (LG-04)
//!
//! Role membership plus admin-role indirection, bootstrapped by Ownable.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `Role`, `AccessControl`, events, errors
//! - **Ports Layer** (`ports/`): `AccessControlApi`
//! - **Contract** (`contract.rs`): string call surface
//!
//! ## Who May Do What
//!
//! | Operation | Caller |
//! |-----------|--------|
//! | `setRoleAdmin` | owner |
//! | `grantRole`, `revokeRole` | holder of the role's admin role; owner while no admin is recorded |
//! | `renounceRole` | the account itself, via a signed envelope |

pub mod contract;
pub mod domain;
pub mod ports;

// Re-export public API
pub use contract::{dispatch_access_control, AccessControlContract};
pub use domain::access_control::{
    AccessControl, MEMBERSHIP_MARKER, ROLE_ADMIN_NAMESPACE, ROLE_MEMBER_NAMESPACE,
};
pub use domain::errors::AccessControlError;
pub use domain::events::{
    RoleAdminChanged, RoleGranted, RoleRevoked, ROLE_ADMIN_CHANGED, ROLE_GRANTED, ROLE_REVOKED,
};
pub use domain::role::Role;
pub use ports::inbound::AccessControlApi;
