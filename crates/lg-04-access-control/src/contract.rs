//! # Access Control Contract Surface
//!
//! Roles are hex strings at this surface (optional `0x`). Ownership
//! functions are served by the embedded ownable.

use crate::domain::access_control::AccessControl;
use crate::domain::role::Role;
use crate::ports::inbound::AccessControlApi;
use lg_02_replay_guard::{LedgerNonceSequencer, NonceSequencer};
use lg_03_ownable::{dispatch_ownable, Ownable, OwnableApi};
use shared_types::{
    expect_params, unknown_function, Address, Contract, ContractError, TransactionContext,
};

pub struct AccessControlContract<O = Ownable, N = LedgerNonceSequencer> {
    access: AccessControl<O, N>,
}

impl Default for AccessControlContract {
    fn default() -> Self {
        Self::new(AccessControl::default())
    }
}

impl<O: OwnableApi, N: NonceSequencer> AccessControlContract<O, N> {
    pub fn new(access: AccessControl<O, N>) -> Self {
        Self { access }
    }

    pub fn access(&self) -> &AccessControl<O, N> {
        &self.access
    }
}

fn parse_role(raw: &str) -> Result<Role, ContractError> {
    Role::from_hex(raw)
        .map_err(|e| ContractError::invalid_argument(format!("role {raw:?} is not hex: {e}")))
}

fn two_params(ctx: &TransactionContext<'_>) -> Result<(Role, String), ContractError> {
    let [role, other] = expect_params::<2>(ctx)?;
    Ok((parse_role(role)?, other.clone()))
}

/// Handles an access-control function, or returns `None` if
/// `ctx.function()` is not one.
pub fn dispatch_access_control<O: OwnableApi, N: NonceSequencer>(
    access: &AccessControl<O, N>,
    ctx: &mut TransactionContext<'_>,
) -> Option<Result<String, ContractError>> {
    let function = ctx.function().to_string();
    let result = match function.as_str() {
        "initialize" => access.initialize(ctx).map(|_| String::new()),
        "setRoleAdmin" => {
            let (role, admin) = match two_params(ctx) {
                Ok(params) => params,
                Err(e) => return Some(Err(e)),
            };
            let admin = match parse_role(&admin) {
                Ok(admin) => admin,
                Err(e) => return Some(Err(e)),
            };
            access
                .set_role_admin(ctx, &role, &admin)
                .map(|_| String::new())
        }
        "getRoleAdmin" => {
            let role = match expect_params::<1>(ctx).and_then(|[role]| parse_role(role)) {
                Ok(role) => role,
                Err(e) => return Some(Err(e)),
            };
            access
                .get_role_admin(ctx.state(), &role)
                .map(|admin| admin.to_string())
        }
        "hasRole" => {
            let (role, account) = match two_params(ctx) {
                Ok(params) => params,
                Err(e) => return Some(Err(e)),
            };
            // Malformed accounts are input errors, not `false`.
            let account = match Address::decode(&account) {
                Ok(account) => account,
                Err(e) => return Some(Err(e.into())),
            };
            access
                .has_role(ctx.state(), &role, &account)
                .map(|held| held.to_string())
        }
        "grantRole" | "revokeRole" | "renounceRole" => {
            let (role, account) = match two_params(ctx) {
                Ok(params) => params,
                Err(e) => return Some(Err(e)),
            };
            let outcome = match function.as_str() {
                "grantRole" => access.grant_role(ctx, &role, &account),
                "revokeRole" => access.revoke_role(ctx, &role, &account),
                _ => access.renounce_role(ctx, &role, &account),
            };
            outcome.map(|_| String::new())
        }
        _ => return dispatch_ownable(access.ownable(), ctx),
    };
    Some(result.map_err(ContractError::from))
}

impl<O: OwnableApi, N: NonceSequencer> Contract for AccessControlContract<O, N> {
    fn name(&self) -> &str {
        "AccessControlContract"
    }

    fn invoke(&self, ctx: &mut TransactionContext<'_>) -> Result<String, ContractError> {
        dispatch_access_control(&self.access, ctx)
            .unwrap_or_else(|| Err(unknown_function(self.name(), ctx.function())))
    }
}
