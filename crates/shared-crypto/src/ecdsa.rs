//! # ECDSA Signatures (secp256k1, P-256)
//!
//! Signs and verifies 32-byte digests. Signatures travel as ASN.1 DER.
//! P-256 is the curve of X.509 client identities; secp256k1 is kept for
//! wallet-style clients.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization on signing; high-S signatures rejected on verify

use crate::hashing::Hash;
use crate::CryptoError;
use k256::ecdsa::{
    signature::hazmat::{PrehashSigner, PrehashVerifier},
    Signature, SigningKey, VerifyingKey,
};
use zeroize::Zeroizing;

/// secp256k1 ECDSA keypair.
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret scalar bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Secret scalar, wiped when the returned buffer drops.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }

    /// Sign a digest; returns a low-S DER signature.
    pub fn sign_digest(&self, digest: &Hash) -> Result<Vec<u8>, CryptoError> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

/// Verify a DER signature over a digest.
pub fn verify_digest(
    key: &VerifyingKey,
    digest: &Hash,
    der_signature: &[u8],
) -> Result<(), CryptoError> {
    let signature = Signature::from_der(der_signature).map_err(|_| CryptoError::BadSignature)?;

    // normalize_s returns Some only when s was in the upper half.
    if signature.normalize_s().is_some() {
        return Err(CryptoError::BadSignature);
    }

    key.verify_prehash(digest, &signature)
        .map_err(|_| CryptoError::BadSignature)
}

/// Uncompressed SEC1 encoding (`0x04 || x || y`).
pub fn sec1_uncompressed(key: &VerifyingKey) -> Vec<u8> {
    key.to_encoded_point(false).as_bytes().to_vec()
}

/// P-256 ECDSA keypair.
#[derive(Clone)]
pub struct P256KeyPair {
    signing_key: p256::ecdsa::SigningKey,
}

impl P256KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret scalar bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = p256::ecdsa::SigningKey::from_bytes((&bytes).into())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    pub fn verifying_key(&self) -> p256::ecdsa::VerifyingKey {
        *self.signing_key.verifying_key()
    }

    /// Sign a digest; returns a low-S DER signature.
    pub fn sign_digest(&self, digest: &Hash) -> Result<Vec<u8>, CryptoError> {
        let signature: p256::ecdsa::Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

/// Verify a DER P-256 signature over a digest. High-S is rejected.
pub fn verify_p256_digest(
    key: &p256::ecdsa::VerifyingKey,
    digest: &Hash,
    der_signature: &[u8],
) -> Result<(), CryptoError> {
    let signature =
        p256::ecdsa::Signature::from_der(der_signature).map_err(|_| CryptoError::BadSignature)?;
    if signature.normalize_s().is_some() {
        return Err(CryptoError::BadSignature);
    }
    key.verify_prehash(digest, &signature)
        .map_err(|_| CryptoError::BadSignature)
}

/// Uncompressed SEC1 encoding of a P-256 key.
pub fn p256_sec1_uncompressed(key: &p256::ecdsa::VerifyingKey) -> Vec<u8> {
    key.to_encoded_point(false).as_bytes().to_vec()
}
