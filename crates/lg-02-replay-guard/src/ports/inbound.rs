//! # Inbound Ports

use crate::domain::errors::NonceError;
use shared_types::{Address, WorldState};

/// Per-account replay guard.
///
/// `check` then `increment` must run exactly once per accepted signed call,
/// inside the same invocation as the call's effects.
pub trait NonceSequencer: Send + Sync {
    /// Stored counter, 0 for an unseen account.
    fn current(&self, state: &dyn WorldState, account: &Address) -> Result<u64, NonceError>;

    /// Advances the counter by one and returns the new value.
    fn increment(&self, state: &dyn WorldState, account: &Address) -> Result<u64, NonceError>;

    /// Accepts only `presented == current(account)`.
    fn check(
        &self,
        state: &dyn WorldState,
        account: &Address,
        presented: u64,
    ) -> Result<(), NonceError> {
        let expected = self.current(state, account)?;
        if presented != expected {
            return Err(NonceError::Mismatch {
                account: *account,
                expected,
                presented,
            });
        }
        Ok(())
    }

    /// `check` followed by `increment`.
    fn check_and_increment(
        &self,
        state: &dyn WorldState,
        account: &Address,
        presented: u64,
    ) -> Result<u64, NonceError> {
        self.check(state, account, presented)?;
        self.increment(state, account)
    }
}
