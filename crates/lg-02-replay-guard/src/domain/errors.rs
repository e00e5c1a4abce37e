//! # Nonce Errors

use shared_types::{Address, ContractError, CounterError, ErrorKind, KeyError, StateError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NonceError {
    /// Presented nonce differs from the stored counter. Replays and
    /// out-of-order submissions both land here.
    #[error("nonce mismatch for {account}: expected {expected}, got {presented}")]
    Mismatch {
        account: Address,
        expected: u64,
        presented: u64,
    },

    #[error("nonce overflow for {0}")]
    Overflow(Address),

    #[error("stored nonce is corrupted: {0}")]
    Corrupted(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Key(#[from] KeyError),
}

impl NonceError {
    pub(crate) fn from_counter(err: CounterError, account: Address) -> Self {
        match err {
            CounterError::Overflow | CounterError::Underflow => Self::Overflow(account),
            CounterError::Corrupted(raw) => Self::Corrupted(raw),
        }
    }
}

impl From<NonceError> for ContractError {
    fn from(err: NonceError) -> Self {
        match err {
            NonceError::State(inner) => inner.into(),
            NonceError::Key(inner) => inner.into(),
            NonceError::Mismatch { .. } => ContractError::new(ErrorKind::NonceMismatch, err.to_string()),
            NonceError::Overflow(_) => ContractError::new(ErrorKind::Overflow, err.to_string()),
            NonceError::Corrupted(_) => {
                ContractError::new(ErrorKind::CorruptedState, err.to_string())
            }
        }
    }
}
