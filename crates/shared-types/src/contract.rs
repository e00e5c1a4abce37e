//! # Contract Port
//!
//! String-typed call surface shared by every ledger-resident component.

use crate::context::TransactionContext;
use crate::errors::{ContractError, ErrorKind};

/// A dispatchable contract.
pub trait Contract: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Runs `ctx.function()` against `ctx.params()`.
    fn invoke(&self, ctx: &mut TransactionContext<'_>) -> Result<String, ContractError>;
}

/// Returns the parameters if there are exactly `N` of them.
pub fn expect_params<'c, const N: usize>(
    ctx: &'c TransactionContext<'_>,
) -> Result<&'c [String; N], ContractError> {
    let params = ctx.params();
    params.try_into().map_err(|_| {
        ContractError::invalid_argument(format!(
            "{} expects {N} argument(s), got {}",
            ctx.function(),
            params.len()
        ))
    })
}

/// Error for a function name the contract does not export.
pub fn unknown_function(contract: &str, function: &str) -> ContractError {
    ContractError::new(
        ErrorKind::UnknownFunction,
        format!("{contract} has no function {function:?}"),
    )
}
