//! # Signed Envelope
//!
//! `{nonce, publicKey, signature}` carried as the first call argument.
//!
//! ## Wire format
//!
//! ```json
//! {"nonce": 0, "publicKey": "<base64 SPKI DER>", "signature": "<base64>"}
//! ```
//!
//! The argument is either that JSON text or standard base64 of it. Byte
//! fields are base64; a `0x` prefix selects hex instead.

use crate::domain::errors::EnvelopeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DeserializeAs, SerializeAs};

/// Byte-field encoding: base64 out, base64 or `0x`-hex in.
pub struct Base64OrHex;

impl SerializeAs<Vec<u8>> for Base64OrHex {
    fn serialize_as<S: Serializer>(source: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(source))
    }
}

impl<'de> DeserializeAs<'de, Vec<u8>> for Base64OrHex {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        decode_bytes(&encoded).map_err(serde::de::Error::custom)
    }
}

fn decode_bytes(encoded: &str) -> Result<Vec<u8>, String> {
    match encoded.strip_prefix("0x") {
        Some(hex_digits) => hex::decode(hex_digits).map_err(|e| format!("invalid hex: {e}")),
        None => STANDARD
            .decode(encoded)
            .map_err(|e| format!("invalid base64: {e}")),
    }
}

/// Caller-built authentication envelope.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedEnvelope {
    pub nonce: u64,
    /// DER `SubjectPublicKeyInfo`.
    #[serde_as(as = "Base64OrHex")]
    pub public_key: Vec<u8>,
    #[serde_as(as = "Base64OrHex")]
    pub signature: Vec<u8>,
}

impl SignedEnvelope {
    /// Decodes a call argument as an envelope.
    ///
    /// Any decoding failure is [`EnvelopeError::NotEnvelope`]; the argument
    /// may simply be an ordinary parameter.
    pub fn parse_argument(arg: &str) -> Result<Self, EnvelopeError> {
        let trimmed = arg.trim();
        if trimmed.starts_with('{') {
            return serde_json::from_str(trimmed)
                .map_err(|e| EnvelopeError::NotEnvelope(e.to_string()));
        }
        let json = STANDARD
            .decode(trimmed)
            .map_err(|e| EnvelopeError::NotEnvelope(e.to_string()))?;
        serde_json::from_slice(&json).map_err(|e| EnvelopeError::NotEnvelope(e.to_string()))
    }

    /// JSON text form.
    pub fn to_argument(&self) -> String {
        // Plain struct of u64 and strings: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Base64-of-JSON form.
    pub fn to_base64_argument(&self) -> String {
        STANDARD.encode(self.to_argument())
    }
}
