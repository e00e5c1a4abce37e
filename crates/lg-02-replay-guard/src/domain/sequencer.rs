//! # Ledger-Backed Sequencer
//!
//! One decimal-string counter per account under
//! `composite_key("nonce~account", [address])`. Accounts never share a key,
//! so only calls for the same signer contend.

use crate::domain::errors::NonceError;
use crate::ports::inbound::NonceSequencer;
use shared_types::{composite_key, Address, Counter, WorldState};
use tracing::debug;

/// Default namespace for nonce keys.
pub const NONCE_NAMESPACE: &str = "nonce~account";

/// Stores nonces in world state.
#[derive(Clone, Debug)]
pub struct LedgerNonceSequencer {
    namespace: String,
}

impl Default for LedgerNonceSequencer {
    fn default() -> Self {
        Self::new(NONCE_NAMESPACE)
    }
}

impl LedgerNonceSequencer {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn key_for(&self, account: &Address) -> Result<String, NonceError> {
        Ok(composite_key(&self.namespace, &[account.to_string()])?)
    }

    fn load(&self, state: &dyn WorldState, key: &str, account: &Address) -> Result<Counter, NonceError> {
        let raw = state.get_state(key)?;
        Counter::from_state(raw.as_deref()).map_err(|e| NonceError::from_counter(e, *account))
    }
}

impl NonceSequencer for LedgerNonceSequencer {
    fn current(&self, state: &dyn WorldState, account: &Address) -> Result<u64, NonceError> {
        let key = self.key_for(account)?;
        Ok(self.load(state, &key, account)?.value())
    }

    fn increment(&self, state: &dyn WorldState, account: &Address) -> Result<u64, NonceError> {
        let key = self.key_for(account)?;
        let next = self
            .load(state, &key, account)?
            .increment()
            .map_err(|e| NonceError::from_counter(e, *account))?;
        state.put_state(&key, next.to_state())?;
        debug!(account = %account, nonce = next.value(), "nonce advanced");
        Ok(next.value())
    }
}
