//! # Shared Crypto
//!
//! Cryptographic primitives behind account identity and envelope signing.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA3-256, Keccak-256, SHA-256 | Payload digests, address derivation |
//! | `keys` | SPKI DER | Public-key decoding, address derivation |
//! | `ecdsa` | P-256, secp256k1 | Envelope signing |
//! | `signatures` | Ed25519 | Envelope signing |
//!
//! ## Security Properties
//!
//! - **ECDSA**: RFC 6979 deterministic, low-S enforced on verify
//! - **Ed25519**: strict verification (no small-order keys, canonical `s`)
//! - Secret key exports are wrapped in `Zeroizing`

#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod signatures;

// Re-exports
pub use ecdsa::{P256KeyPair, Secp256k1KeyPair};
pub use errors::CryptoError;
pub use hashing::{keccak256, sha256, sha3_256, DigestAlgorithm, Hash, PayloadDigest};
pub use keys::{address_from_der, KeyAlgorithm, PublicKey, SigningKeyPair};
pub use signatures::Ed25519KeyPair;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
