//! # Inbound Ports

use crate::domain::errors::OwnableError;
use shared_types::{Address, TransactionContext, WorldState};

/// Single-owner access control.
///
/// The caller of every owner-gated operation is the transaction operator.
pub trait OwnableApi: Send + Sync {
    /// One-shot: records the operator as owner.
    fn initialize(&self, ctx: &mut TransactionContext<'_>) -> Result<(), OwnableError>;

    /// Current owner; the zero address if none.
    fn owner(&self, state: &dyn WorldState) -> Result<Address, OwnableError>;

    /// Fails with `NotOwner` unless the operator is the (non-zero) owner.
    fn only_owner(&self, ctx: &TransactionContext<'_>) -> Result<Address, OwnableError>;

    fn transfer_ownership(
        &self,
        ctx: &mut TransactionContext<'_>,
        new_owner: &str,
    ) -> Result<(), OwnableError>;

    fn renounce_ownership(&self, ctx: &mut TransactionContext<'_>) -> Result<(), OwnableError>;

    /// True iff the operator currently owns the contract.
    fn is_owner(&self, ctx: &TransactionContext<'_>) -> Result<bool, OwnableError> {
        match self.only_owner(ctx) {
            Ok(_) => Ok(true),
            Err(OwnableError::NotOwner { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }
}
