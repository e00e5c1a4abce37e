//! # Ownable Errors

use shared_types::{Address, AddressError, ContractError, ErrorKind, EventError, StateError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OwnableError {
    #[error("already initialized")]
    AlreadyInitialized,

    #[error("Ownable: caller {caller} is not the owner")]
    NotOwner { caller: Address },

    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    #[error("stored owner is corrupted: {0}")]
    Corrupted(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Event(#[from] EventError),
}

impl From<OwnableError> for ContractError {
    fn from(err: OwnableError) -> Self {
        match err {
            OwnableError::InvalidAddress(inner) => inner.into(),
            OwnableError::State(inner) => inner.into(),
            OwnableError::Event(inner) => inner.into(),
            OwnableError::AlreadyInitialized => {
                ContractError::new(ErrorKind::AlreadyInitialized, err.to_string())
            }
            OwnableError::NotOwner { .. } => ContractError::new(ErrorKind::NotOwner, err.to_string()),
            OwnableError::Corrupted(_) => {
                ContractError::new(ErrorKind::CorruptedState, err.to_string())
            }
        }
    }
}
