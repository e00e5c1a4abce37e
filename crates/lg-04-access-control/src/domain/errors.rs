//! # Access Control Errors

use crate::domain::role::Role;
use lg_02_replay_guard::NonceError;
use lg_03_ownable::OwnableError;
use shared_types::{
    Address, AddressError, ContractError, ErrorKind, EventError, KeyError, StateError,
};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessControlError {
    #[error("AccessControl: role and adminRole must not be empty")]
    EmptyInput,

    #[error("AccessControl: role and adminRole must not be the same")]
    SameRole,

    #[error("AccessControl: {caller} is not an admin of role {role}")]
    NotRoleAdmin { caller: Address, role: Role },

    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: Address, role: Role },

    #[error("AccessControl: can only renounce roles for self (signer {signer}, account {account})")]
    NotSelf { signer: Address, account: Address },

    #[error("AccessControl: call requires a signed envelope")]
    Unauthenticated,

    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    #[error(transparent)]
    Ownable(#[from] OwnableError),

    #[error(transparent)]
    Nonce(#[from] NonceError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Event(#[from] EventError),
}

impl From<AccessControlError> for ContractError {
    fn from(err: AccessControlError) -> Self {
        let message = err.to_string();
        let kind = match err {
            AccessControlError::InvalidAddress(inner) => return inner.into(),
            AccessControlError::Ownable(inner) => return inner.into(),
            AccessControlError::Nonce(inner) => return inner.into(),
            AccessControlError::State(inner) => return inner.into(),
            AccessControlError::Key(inner) => return inner.into(),
            AccessControlError::Event(inner) => return inner.into(),
            AccessControlError::EmptyInput => ErrorKind::EmptyInput,
            AccessControlError::SameRole => ErrorKind::SameRole,
            AccessControlError::NotRoleAdmin { .. } => ErrorKind::NotRoleAdmin,
            AccessControlError::MissingRole { .. } => ErrorKind::MissingRole,
            AccessControlError::NotSelf { .. } => ErrorKind::NotSelf,
            AccessControlError::Unauthenticated => ErrorKind::Unauthenticated,
        };
        ContractError::new(kind, message)
    }
}
