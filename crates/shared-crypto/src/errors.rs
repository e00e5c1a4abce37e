//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Public key bytes could not be decoded.
    #[error("Malformed public key: {0}")]
    MalformedKey(String),

    /// Key algorithm, curve or digest is not supported.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature is malformed or does not verify.
    #[error("Signature verification failed")]
    BadSignature,

    /// Signing failed.
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Invalid private key material.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Public key could not be encoded.
    #[error("Key encoding failed: {0}")]
    KeyEncoding(String),
}
