//! # Inbound Ports

use crate::domain::errors::AccessControlError;
use crate::domain::role::Role;
use shared_types::{Address, TransactionContext, WorldState};

/// Role membership and admin-role management.
pub trait AccessControlApi: Send + Sync {
    /// Chains into ownership initialization.
    fn initialize(&self, ctx: &mut TransactionContext<'_>) -> Result<(), AccessControlError>;

    /// Owner-only. Records `admin_role` as the role whose holders may grant
    /// and revoke `role`.
    fn set_role_admin(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        admin_role: &Role,
    ) -> Result<(), AccessControlError>;

    /// Stored admin role, or the empty role if unset.
    fn get_role_admin(&self, state: &dyn WorldState, role: &Role) -> Result<Role, AccessControlError>;

    /// Absence is `false`, never an error.
    fn has_role(
        &self,
        state: &dyn WorldState,
        role: &Role,
        account: &Address,
    ) -> Result<bool, AccessControlError>;

    fn grant_role(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: &str,
    ) -> Result<(), AccessControlError>;

    fn revoke_role(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: &str,
    ) -> Result<(), AccessControlError>;

    /// Signed call: the envelope signer drops its own membership.
    fn renounce_role(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: &str,
    ) -> Result<(), AccessControlError>;

    /// Fails with `MissingRole` unless `account` holds `role`.
    fn only_role(
        &self,
        state: &dyn WorldState,
        role: &Role,
        account: &Address,
    ) -> Result<(), AccessControlError> {
        if self.has_role(state, role, account)? {
            Ok(())
        } else {
            Err(AccessControlError::MissingRole {
                account: *account,
                role: role.clone(),
            })
        }
    }
}
