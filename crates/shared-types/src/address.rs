//! # Account Addresses
//!
//! An address is `0x` followed by 40 hex characters: the last 20 bytes of a
//! 32-byte digest of a public key. The all-zero address is the sentinel for
//! "no account" and is never accepted by [`Address::validate`].
//!
//! Addresses compare by value. Parsing accepts either hex case; rendering is
//! always lowercase, so two spellings of the same account map to one key.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a rendered address, prefix included.
pub const ADDRESS_STR_LEN: usize = 42;

/// Address prefix.
pub const ADDRESS_PREFIX: &str = "0x";

/// Reasons an address string is rejected.
///
/// Checked in declaration order; the first failing rule wins.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Not exactly 42 characters.
    #[error("address must be {ADDRESS_STR_LEN} characters, got {0}")]
    BadLength(usize),

    /// Does not start with `0x`.
    #[error("address must start with 0x")]
    MissingPrefix,

    /// The 40 characters after the prefix are not all hex digits.
    #[error("address contains non-hex characters")]
    BadCharacters,

    /// The zero address.
    #[error("address is the null address")]
    NullAddress,
}

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Takes the trailing 20 bytes of a 32-byte digest.
    #[must_use]
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..]);
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Pure well-formedness check, null address included.
    pub fn validate(addr: &str) -> Result<(), AddressError> {
        Self::decode(addr).and_then(|address| {
            if address.is_zero() {
                Err(AddressError::NullAddress)
            } else {
                Ok(())
            }
        })
    }

    /// Validates and decodes an address supplied as call input.
    pub fn parse(addr: &str) -> Result<Self, AddressError> {
        Self::validate(addr)?;
        Self::decode(addr)
    }

    /// Decodes a well-formed address, accepting the zero address.
    ///
    /// Used when reading addresses back from state, where the zero address
    /// is a legitimate stored value (e.g. a renounced owner).
    pub fn decode(addr: &str) -> Result<Self, AddressError> {
        if addr.len() != ADDRESS_STR_LEN {
            return Err(AddressError::BadLength(addr.len()));
        }
        let body = addr
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or(AddressError::MissingPrefix)?;

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::BadCharacters)?;
        Ok(Self(bytes))
    }
}

/// True for the zero address, the empty string and the bare prefix.
///
/// Distinguishes "nothing assigned yet" from a usable address. A malformed
/// string is not empty; run [`Address::validate`] to reject it.
#[must_use]
pub fn is_empty_address(addr: &str) -> bool {
    if addr.is_empty() || addr == ADDRESS_PREFIX {
        return true;
    }
    matches!(Address::decode(addr), Ok(a) if a.is_zero())
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ADDRESS_PREFIX}{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}
