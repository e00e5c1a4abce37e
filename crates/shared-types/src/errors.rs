//! # Error Types
//!
//! Every failure that reaches a caller carries an [`ErrorKind`] plus a
//! human-readable message. Crate-local error enums convert into
//! [`ContractError`] at the call surface.

use crate::address::AddressError;
use crate::keys::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Broad failure classes. Determines at which point a call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Rejected before any state read.
    InputValidation,
    /// Rejected after reading owner / admin / membership state.
    Authorization,
    /// Envelope could not be authenticated.
    Authentication,
    /// Nonce did not match.
    Replay,
    /// Stored data unreadable or a counter overflowed.
    StateCorruption,
    /// Store or serialization failure outside the caller's control.
    Infrastructure,
}

/// Distinguishable failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    BadLength,
    MissingPrefix,
    BadCharacters,
    NullAddress,
    EmptyInput,
    SameRole,
    InvalidArgument,
    UnknownFunction,
    NotOwner,
    NotRoleAdmin,
    NotSelf,
    MissingRole,
    Unauthenticated,
    MalformedKey,
    UnsupportedAlgorithm,
    BadSignature,
    NonceMismatch,
    AlreadyInitialized,
    Overflow,
    CorruptedState,
    Conflict,
    Storage,
}

impl ErrorKind {
    /// Maps the kind onto its failure class.
    pub fn category(self) -> ErrorCategory {
        use ErrorKind::*;
        match self {
            BadLength | MissingPrefix | BadCharacters | NullAddress | EmptyInput | SameRole
            | InvalidArgument | UnknownFunction => ErrorCategory::InputValidation,
            NotOwner | NotRoleAdmin | NotSelf | MissingRole | AlreadyInitialized => {
                ErrorCategory::Authorization
            }
            Unauthenticated | MalformedKey | UnsupportedAlgorithm | BadSignature => {
                ErrorCategory::Authentication
            }
            NonceMismatch => ErrorCategory::Replay,
            Overflow | CorruptedState => ErrorCategory::StateCorruption,
            Conflict | Storage => ErrorCategory::Infrastructure,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<AddressError> for ErrorKind {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::BadLength(_) => ErrorKind::BadLength,
            AddressError::MissingPrefix => ErrorKind::MissingPrefix,
            AddressError::BadCharacters => ErrorKind::BadCharacters,
            AddressError::NullAddress => ErrorKind::NullAddress,
        }
    }
}

/// Error returned from a contract invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ContractError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ContractError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// World-state errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    /// A key read during the invocation changed before commit.
    #[error("write conflict on key {key:?}")]
    Conflict { key: String },

    /// Backing store failure.
    #[error("storage error: {0}")]
    Backend(String),
}

/// Event emission errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("event name must not be empty")]
    EmptyName,

    #[error("event payload could not be serialized: {0}")]
    Payload(String),
}

impl From<AddressError> for ContractError {
    fn from(err: AddressError) -> Self {
        Self::new(err.into(), err.to_string())
    }
}

impl From<KeyError> for ContractError {
    fn from(err: KeyError) -> Self {
        Self::new(ErrorKind::InvalidArgument, err.to_string())
    }
}

impl From<StateError> for ContractError {
    fn from(err: StateError) -> Self {
        let kind = match err {
            StateError::Conflict { .. } => ErrorKind::Conflict,
            StateError::Backend(_) => ErrorKind::Storage,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<EventError> for ContractError {
    fn from(err: EventError) -> Self {
        Self::new(ErrorKind::Storage, err.to_string())
    }
}
