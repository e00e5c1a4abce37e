//! # Ownable Contract Surface

use crate::domain::ownable::Ownable;
use crate::ports::inbound::OwnableApi;
use shared_types::{
    expect_params, unknown_function, Contract, ContractError, TransactionContext,
};

/// Dispatches `initialize`, `owner`, `transferOwnership` and
/// `renounceOwnership`.
pub struct OwnableContract<O: OwnableApi = Ownable> {
    ownable: O,
}

impl Default for OwnableContract {
    fn default() -> Self {
        Self::new(Ownable::default())
    }
}

impl<O: OwnableApi> OwnableContract<O> {
    pub fn new(ownable: O) -> Self {
        Self { ownable }
    }

    pub fn ownable(&self) -> &O {
        &self.ownable
    }
}

/// Handles an ownable function, or returns `None` if `ctx.function()` is not
/// one. Shared with contracts that embed ownership.
pub fn dispatch_ownable<O: OwnableApi + ?Sized>(
    ownable: &O,
    ctx: &mut TransactionContext<'_>,
) -> Option<Result<String, ContractError>> {
    let function = ctx.function().to_string();
    let result = match function.as_str() {
        "initialize" => ownable.initialize(ctx).map(|_| String::new()),
        "owner" => ownable.owner(ctx.state()).map(|a| a.to_string()),
        "transferOwnership" => {
            let new_owner = match expect_params::<1>(ctx) {
                Ok([new_owner]) => new_owner.clone(),
                Err(e) => return Some(Err(e)),
            };
            ownable
                .transfer_ownership(ctx, &new_owner)
                .map(|_| String::new())
        }
        "renounceOwnership" => ownable.renounce_ownership(ctx).map(|_| String::new()),
        _ => return None,
    };
    Some(result.map_err(ContractError::from))
}

impl<O: OwnableApi> Contract for OwnableContract<O> {
    fn name(&self) -> &str {
        "OwnableContract"
    }

    fn invoke(&self, ctx: &mut TransactionContext<'_>) -> Result<String, ContractError> {
        dispatch_ownable(&self.ownable, ctx)
            .unwrap_or_else(|| Err(unknown_function(self.name(), ctx.function())))
    }
}
