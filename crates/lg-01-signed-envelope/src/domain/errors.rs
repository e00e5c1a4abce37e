//! # Envelope Errors

use shared_crypto::CryptoError;
use shared_types::{ContractError, ErrorKind};
use thiserror::Error;

/// Errors from envelope decoding, signing and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Argument does not decode as an envelope. Not an authentication
    /// failure: callers treat the call as unsigned.
    #[error("Argument is not a signed envelope: {0}")]
    NotEnvelope(String),

    /// Embedded public key could not be decoded.
    #[error("Malformed public key: {0}")]
    MalformedKey(String),

    /// Embedded public key uses an algorithm or curve we do not verify.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature does not verify over the rebuilt payload.
    #[error("Signature verification failed")]
    BadSignature,

    /// Signing failed on the client side.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

impl From<CryptoError> for EnvelopeError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::MalformedKey(reason) => Self::MalformedKey(reason),
            CryptoError::UnsupportedAlgorithm(reason) => Self::UnsupportedAlgorithm(reason),
            CryptoError::BadSignature => Self::BadSignature,
            other => Self::SigningFailed(other.to_string()),
        }
    }
}

impl From<EnvelopeError> for ContractError {
    fn from(err: EnvelopeError) -> Self {
        let kind = match err {
            EnvelopeError::NotEnvelope(_) => ErrorKind::InvalidArgument,
            EnvelopeError::MalformedKey(_) => ErrorKind::MalformedKey,
            EnvelopeError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            EnvelopeError::BadSignature | EnvelopeError::SigningFailed(_) => {
                ErrorKind::BadSignature
            }
        };
        ContractError::new(kind, err.to_string())
    }
}
