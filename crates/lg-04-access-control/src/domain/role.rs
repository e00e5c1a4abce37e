//! # Roles
//!
//! A role is an opaque byte string, usually the SHA3-256 digest of a
//! readable name. At the string call surface and in events a role is
//! `0x`-prefixed lowercase hex; the empty role renders as `""`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::sha3_256;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Role(Vec<u8>);

impl Role {
    /// `sha3_256(name)`.
    pub fn from_name(name: &str) -> Self {
        Self(sha3_256(name.as_bytes()).to_vec())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parses hex with an optional `0x` prefix. `""` and `"0x"` are the
    /// empty role.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(digits).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unprefixed hex, used as a composite-key component.
    pub fn key_part(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role({self})")
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
