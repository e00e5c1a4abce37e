//! # Ed25519 Signatures
//!
//! Signs the 32-byte payload digest rather than the raw payload so both
//! supported schemes share one digest step. Signatures are the raw 64 bytes.

use crate::hashing::Hash;
use crate::CryptoError;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use zeroize::Zeroizing;

/// Ed25519 keypair.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret seed (32 bytes).
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Secret seed, wiped when the returned buffer drops.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn sign_digest(&self, digest: &Hash) -> [u8; 64] {
        self.signing_key.sign(digest).to_bytes()
    }
}

/// Strict verification (rejects small-order keys and non-canonical `s`).
pub fn verify_digest(key: &VerifyingKey, digest: &Hash, signature: &[u8]) -> Result<(), CryptoError> {
    let signature = Signature::from_slice(signature).map_err(|_| CryptoError::BadSignature)?;
    key.verify_strict(digest, &signature)
        .map_err(|_| CryptoError::BadSignature)
}
