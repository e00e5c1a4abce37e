//! # Payload Digests
//!
//! Signing and verification both hash the payload through one
//! [`PayloadDigest`] instance. Nothing else in the workspace hashes a
//! payload before handing it to a key, so the two paths cannot drift.

use crate::CryptoError;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::{Digest, Keccak256, Sha3_256};
use std::fmt;
use std::str::FromStr;

/// 256-bit digest output.
pub type Hash = [u8; 32];

/// Digest applied to a payload before it is signed or verified.
pub trait PayloadDigest: Send + Sync {
    /// Hash the full payload.
    fn digest(&self, payload: &[u8]) -> Hash;

    /// Stable name used in logs and metrics.
    fn name(&self) -> &'static str;
}

/// Built-in digest choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// FIPS-202 SHA3-256. Same function the address codec uses.
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// Pre-standard Keccak-256.
    #[serde(rename = "keccak256")]
    Keccak256,
    /// SHA-256.
    #[serde(rename = "sha256")]
    Sha256,
}

impl PayloadDigest for DigestAlgorithm {
    fn digest(&self, payload: &[u8]) -> Hash {
        match self {
            Self::Sha3_256 => sha3_256(payload),
            Self::Keccak256 => keccak256(payload),
            Self::Sha256 => sha256(payload),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Sha3_256 => "sha3-256",
            Self::Keccak256 => "keccak256",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha3-256" | "sha3_256" | "sha3" => Ok(Self::Sha3_256),
            "keccak256" | "keccak-256" => Ok(Self::Keccak256),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(CryptoError::UnsupportedAlgorithm(format!(
                "digest {other}"
            ))),
        }
    }
}

/// SHA3-256 (one-shot).
pub fn sha3_256(data: &[u8]) -> Hash {
    Sha3_256::digest(data).into()
}

/// Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}
