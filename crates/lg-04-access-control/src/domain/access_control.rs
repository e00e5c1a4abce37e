//! # Access Control
//!
//! Membership and admin mappings live under composite keys:
//!
//! | Entry | Key | Value |
//! |-------|-----|-------|
//! | admin | `("role~admin", [hex(role)])` | raw admin role bytes |
//! | member | `("role~account", [hex(role), account])` | `"true"` |
//!
//! ## Authorization
//!
//! - `setRoleAdmin` is owner-gated. There is no super-admin role.
//! - `grantRole`/`revokeRole` require the operator to hold the role's admin
//!   role. A role with no recorded admin can only be managed by the owner;
//!   once an admin is recorded the owner has no implicit override.
//! - `renounceRole` is a signed call: the envelope signer must be the
//!   account, and the signer's nonce is consumed.

use crate::domain::errors::AccessControlError;
use crate::domain::events::{
    RoleAdminChanged, RoleGranted, RoleRevoked, ROLE_ADMIN_CHANGED, ROLE_GRANTED, ROLE_REVOKED,
};
use crate::domain::role::Role;
use crate::ports::inbound::AccessControlApi;
use lg_02_replay_guard::{LedgerNonceSequencer, NonceSequencer};
use lg_03_ownable::{Ownable, OwnableApi};
use shared_types::{composite_key, Address, TransactionContext, WorldState};
use tracing::{debug, info, warn};

pub const ROLE_ADMIN_NAMESPACE: &str = "role~admin";
pub const ROLE_MEMBER_NAMESPACE: &str = "role~account";

/// Value stored for a held role.
pub const MEMBERSHIP_MARKER: &[u8] = b"true";

pub struct AccessControl<O = Ownable, N = LedgerNonceSequencer> {
    ownable: O,
    nonces: N,
}

impl Default for AccessControl {
    fn default() -> Self {
        Self::new(Ownable::default(), LedgerNonceSequencer::default())
    }
}

impl<O: OwnableApi, N: NonceSequencer> AccessControl<O, N> {
    pub fn new(ownable: O, nonces: N) -> Self {
        Self { ownable, nonces }
    }

    pub fn ownable(&self) -> &O {
        &self.ownable
    }

    pub fn nonces(&self) -> &N {
        &self.nonces
    }

    fn admin_key(role: &Role) -> Result<String, AccessControlError> {
        Ok(composite_key(ROLE_ADMIN_NAMESPACE, &[role.key_part()])?)
    }

    fn member_key(role: &Role, account: &Address) -> Result<String, AccessControlError> {
        Ok(composite_key(
            ROLE_MEMBER_NAMESPACE,
            &[role.key_part(), account.to_string()],
        )?)
    }

    /// Returns the operator if it may manage `role`.
    fn only_role_admin(
        &self,
        ctx: &TransactionContext<'_>,
        role: &Role,
    ) -> Result<Address, AccessControlError> {
        let caller = ctx.operator();
        let admin = self.get_role_admin(ctx.state(), role)?;
        let allowed = if admin.is_empty() {
            self.ownable.is_owner(ctx)?
        } else {
            self.has_role(ctx.state(), &admin, &caller)?
        };

        if !allowed {
            warn!(caller = %caller, role = %role, admin = %admin, "role admin check failed");
            return Err(AccessControlError::NotRoleAdmin {
                caller,
                role: role.clone(),
            });
        }
        Ok(caller)
    }

    fn revoke(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: Address,
        sender: Address,
    ) -> Result<(), AccessControlError> {
        ctx.delete_state(&Self::member_key(role, &account)?)?;
        ctx.emit_event(
            ROLE_REVOKED,
            &RoleRevoked {
                role: role.clone(),
                account,
                sender,
            },
        )?;
        info!(role = %role, account = %account, sender = %sender, "role revoked");
        Ok(())
    }
}

fn require_role(role: &Role) -> Result<(), AccessControlError> {
    if role.is_empty() {
        return Err(AccessControlError::EmptyInput);
    }
    Ok(())
}

impl<O: OwnableApi, N: NonceSequencer> AccessControlApi for AccessControl<O, N> {
    fn initialize(&self, ctx: &mut TransactionContext<'_>) -> Result<(), AccessControlError> {
        Ok(self.ownable.initialize(ctx)?)
    }

    fn set_role_admin(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        admin_role: &Role,
    ) -> Result<(), AccessControlError> {
        if role.is_empty() || admin_role.is_empty() {
            return Err(AccessControlError::EmptyInput);
        }
        if role == admin_role {
            return Err(AccessControlError::SameRole);
        }
        self.ownable.only_owner(ctx)?;

        let previous_admin_role = self.get_role_admin(ctx.state(), role)?;
        ctx.put_state(&Self::admin_key(role)?, admin_role.as_bytes().to_vec())?;
        ctx.emit_event(
            ROLE_ADMIN_CHANGED,
            &RoleAdminChanged {
                role: role.clone(),
                previous_admin_role: previous_admin_role.clone(),
                new_admin_role: admin_role.clone(),
            },
        )?;
        info!(role = %role, previous = %previous_admin_role, new = %admin_role, "role admin changed");
        Ok(())
    }

    fn get_role_admin(&self, state: &dyn WorldState, role: &Role) -> Result<Role, AccessControlError> {
        let admin = state.get_state(&Self::admin_key(role)?)?;
        Ok(admin.map(Role::from_bytes).unwrap_or_default())
    }

    fn has_role(
        &self,
        state: &dyn WorldState,
        role: &Role,
        account: &Address,
    ) -> Result<bool, AccessControlError> {
        let marker = state.get_state(&Self::member_key(role, account)?)?;
        Ok(marker.as_deref() == Some(MEMBERSHIP_MARKER))
    }

    fn grant_role(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: &str,
    ) -> Result<(), AccessControlError> {
        require_role(role)?;
        let account = Address::parse(account)?;
        let sender = self.only_role_admin(ctx, role)?;

        ctx.put_state(&Self::member_key(role, &account)?, MEMBERSHIP_MARKER.to_vec())?;
        ctx.emit_event(
            ROLE_GRANTED,
            &RoleGranted {
                role: role.clone(),
                account,
                sender,
            },
        )?;
        info!(role = %role, account = %account, sender = %sender, "role granted");
        Ok(())
    }

    fn revoke_role(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: &str,
    ) -> Result<(), AccessControlError> {
        require_role(role)?;
        let account = Address::parse(account)?;
        let sender = self.only_role_admin(ctx, role)?;
        self.revoke(ctx, role, account, sender)
    }

    fn renounce_role(
        &self,
        ctx: &mut TransactionContext<'_>,
        role: &Role,
        account: &str,
    ) -> Result<(), AccessControlError> {
        require_role(role)?;
        let account = Address::parse(account)?;
        let signer = ctx.signer().ok_or(AccessControlError::Unauthenticated)?;
        if signer.address != account {
            warn!(signer = %signer.address, account = %account, "renounce for another account");
            return Err(AccessControlError::NotSelf {
                signer: signer.address,
                account,
            });
        }

        let next = self
            .nonces
            .check_and_increment(ctx.state(), &signer.address, signer.nonce)?;
        debug!(account = %account, nonce = next, "renounce authenticated");

        let sender = ctx.operator();
        self.revoke(ctx, role, account, sender)
    }
}
