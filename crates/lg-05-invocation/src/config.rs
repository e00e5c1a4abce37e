//! # Invocation Configuration

use shared_crypto::DigestAlgorithm;
use std::env;
use thiserror::Error;

/// Default cap on the envelope argument, in bytes.
pub const DEFAULT_MAX_ENVELOPE_BYTES: usize = 8 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    /// Digest applied to the payload before signing and verification.
    pub digest: DigestAlgorithm,

    /// A first argument longer than this is never treated as an envelope.
    pub max_envelope_bytes: usize,

    /// Prepend the function name to the signed arguments.
    ///
    /// With `true` (the default) the payload is
    /// `decimal(nonce) || function || args[1..]`, so a signature cannot be
    /// replayed against another function. With `false` it is
    /// `decimal(nonce) || args[1..]`, the payload existing clients sign;
    /// set `LG_BIND_FUNCTION=false` to stay wire-compatible with them.
    pub bind_function: bool,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self {
            digest: DigestAlgorithm::default(),
            max_envelope_bytes: DEFAULT_MAX_ENVELOPE_BYTES,
            bind_function: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("max_envelope_bytes must be greater than zero")]
    ZeroEnvelopeLimit,
}

impl InvocationConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LG_DIGEST`: `sha3-256` (default), `keccak256` or `sha256`
    /// - `LG_MAX_ENVELOPE_BYTES`: envelope size cap (default: 8192)
    /// - `LG_BIND_FUNCTION`: sign the function name too (default: true; `false` gives the
    ///   `nonce || args` payload of existing clients)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("LG_DIGEST") {
            config.digest = value.parse().map_err(|e: shared_crypto::CryptoError| {
                ConfigError::InvalidValue {
                    var: "LG_DIGEST",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("LG_MAX_ENVELOPE_BYTES") {
            config.max_envelope_bytes =
                value.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        var: "LG_MAX_ENVELOPE_BYTES",
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?;
        }

        if let Some(value) = lookup("LG_BIND_FUNCTION") {
            config.bind_function = value.to_lowercase() != "false" && value != "0";
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_envelope_bytes == 0 {
            return Err(ConfigError::ZeroEnvelopeLimit);
        }
        Ok(())
    }
}
