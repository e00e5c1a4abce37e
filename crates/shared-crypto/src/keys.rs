//! # Public Keys and Key Pairs
//!
//! Public keys travel as DER-encoded `SubjectPublicKeyInfo`. Three algorithms
//! are recognised:
//!
//! | Algorithm | SPKI OID | Curve parameter | Canonical bytes |
//! |-----------|----------|-----------------|-----------------|
//! | ECDSA P-256 | 1.2.840.10045.2.1 | 1.2.840.10045.3.1.7 | uncompressed SEC1 (65) |
//! | ECDSA secp256k1 | 1.2.840.10045.2.1 | 1.3.132.0.10 | uncompressed SEC1 (65) |
//! | Ed25519 | 1.3.101.112 | none | raw key (32) |
//!
//! A key's address is `SHA3-256(canonical bytes)[12..]`.

use crate::hashing::{sha3_256, Hash};
use crate::{ecdsa, signatures, CryptoError, Ed25519KeyPair, P256KeyPair, Secp256k1KeyPair};
use k256::pkcs8::der::Decode;
use k256::pkcs8::{ObjectIdentifier, SubjectPublicKeyInfoRef};
use shared_types::Address;
use std::fmt;

const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const P256_CURVE: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP256K1_CURVE: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");
const ID_ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// Supported signature algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    P256,
    Secp256k1,
    Ed25519,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P256 => f.write_str("ecdsa-p256"),
            Self::Secp256k1 => f.write_str("ecdsa-secp256k1"),
            Self::Ed25519 => f.write_str("ed25519"),
        }
    }
}

/// A decoded verification key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicKey {
    P256(p256::ecdsa::VerifyingKey),
    Secp256k1(k256::ecdsa::VerifyingKey),
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl PublicKey {
    /// Decodes a DER `SubjectPublicKeyInfo`.
    ///
    /// Undecodable input is `MalformedKey`; a well-formed SPKI for any other
    /// algorithm or curve is `UnsupportedAlgorithm`.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let spki = SubjectPublicKeyInfoRef::from_der(der)
            .map_err(|e| CryptoError::MalformedKey(e.to_string()))?;
        let key_bytes = spki
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| CryptoError::MalformedKey("unaligned key bit string".into()))?;

        let oid = spki.algorithm.oid;
        if oid == ID_EC_PUBLIC_KEY {
            let curve = spki
                .algorithm
                .parameters_oid()
                .map_err(|e| CryptoError::MalformedKey(e.to_string()))?;
            if curve == P256_CURVE {
                let key = p256::ecdsa::VerifyingKey::from_sec1_bytes(key_bytes)
                    .map_err(|_| CryptoError::MalformedKey("invalid P-256 point".into()))?;
                Ok(Self::P256(key))
            } else if curve == SECP256K1_CURVE {
                let key = k256::ecdsa::VerifyingKey::from_sec1_bytes(key_bytes)
                    .map_err(|_| CryptoError::MalformedKey("invalid secp256k1 point".into()))?;
                Ok(Self::Secp256k1(key))
            } else {
                Err(CryptoError::UnsupportedAlgorithm(format!("curve {curve}")))
            }
        } else if oid == ID_ED25519 {
            let raw: [u8; 32] = key_bytes
                .try_into()
                .map_err(|_| CryptoError::MalformedKey("ed25519 key must be 32 bytes".into()))?;
            let key = ed25519_dalek::VerifyingKey::from_bytes(&raw)
                .map_err(|_| CryptoError::MalformedKey("invalid ed25519 point".into()))?;
            Ok(Self::Ed25519(key))
        } else {
            Err(CryptoError::UnsupportedAlgorithm(format!("key algorithm {oid}")))
        }
    }

    /// Encodes as DER `SubjectPublicKeyInfo`.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        let document = match self {
            Self::P256(key) => {
                let public = p256::PublicKey::from(key);
                p256::pkcs8::EncodePublicKey::to_public_key_der(&public)
            }
            Self::Secp256k1(key) => {
                let public = k256::PublicKey::from(key);
                k256::pkcs8::EncodePublicKey::to_public_key_der(&public)
            }
            Self::Ed25519(key) => ed25519_dalek::pkcs8::EncodePublicKey::to_public_key_der(key),
        }
        .map_err(|e| CryptoError::KeyEncoding(e.to_string()))?;
        Ok(document.as_bytes().to_vec())
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::P256(_) => KeyAlgorithm::P256,
            Self::Secp256k1(_) => KeyAlgorithm::Secp256k1,
            Self::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    /// Fixed encoding hashed into the address.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        match self {
            Self::P256(key) => ecdsa::p256_sec1_uncompressed(key),
            Self::Secp256k1(key) => ecdsa::sec1_uncompressed(key),
            Self::Ed25519(key) => key.to_bytes().to_vec(),
        }
    }

    /// Derives the account address.
    pub fn address(&self) -> Address {
        Address::from_digest(&sha3_256(&self.canonical_bytes()))
    }

    /// Verifies `signature` over a payload digest.
    pub fn verify_digest(&self, digest: &Hash, signature: &[u8]) -> Result<(), CryptoError> {
        match self {
            Self::P256(key) => ecdsa::verify_p256_digest(key, digest, signature),
            Self::Secp256k1(key) => ecdsa::verify_digest(key, digest, signature),
            Self::Ed25519(key) => signatures::verify_digest(key, digest, signature),
        }
    }
}

/// Address derived from a DER public key.
pub fn address_from_der(der: &[u8]) -> Result<Address, CryptoError> {
    PublicKey::from_der(der).map(|key| key.address())
}

/// A signing key of either supported algorithm.
#[derive(Clone)]
pub enum SigningKeyPair {
    P256(P256KeyPair),
    Secp256k1(Secp256k1KeyPair),
    Ed25519(Ed25519KeyPair),
}

impl SigningKeyPair {
    /// Generate a random key pair.
    pub fn generate(algorithm: KeyAlgorithm) -> Self {
        match algorithm {
            KeyAlgorithm::P256 => Self::P256(P256KeyPair::generate()),
            KeyAlgorithm::Secp256k1 => Self::Secp256k1(Secp256k1KeyPair::generate()),
            KeyAlgorithm::Ed25519 => Self::Ed25519(Ed25519KeyPair::generate()),
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::P256(_) => KeyAlgorithm::P256,
            Self::Secp256k1(_) => KeyAlgorithm::Secp256k1,
            Self::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            Self::P256(pair) => PublicKey::P256(pair.verifying_key()),
            Self::Secp256k1(pair) => PublicKey::Secp256k1(pair.verifying_key()),
            Self::Ed25519(pair) => PublicKey::Ed25519(pair.verifying_key()),
        }
    }

    /// Signs a payload digest.
    pub fn sign_digest(&self, digest: &Hash) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::P256(pair) => pair.sign_digest(digest),
            Self::Secp256k1(pair) => pair.sign_digest(digest),
            Self::Ed25519(pair) => Ok(pair.sign_digest(digest).to_vec()),
        }
    }
}

impl fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("algorithm", &self.algorithm())
            .field("address", &self.public_key().address())
            .finish_non_exhaustive()
    }
}
