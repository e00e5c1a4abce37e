//! # Envelope Service
//!
//! Implements both envelope ports over a single [`PayloadDigest`]. Signing
//! and verification call the same `digest` on the same payload bytes.

use crate::domain::envelope::SignedEnvelope;
use crate::domain::errors::EnvelopeError;
use crate::domain::payload::build_payload;
use crate::ports::inbound::{EnvelopeSigner, EnvelopeVerifier};
use shared_crypto::{DigestAlgorithm, PayloadDigest, PublicKey, SigningKeyPair};
use shared_types::Address;
use tracing::debug;

/// Signs and verifies envelopes.
#[derive(Clone, Debug, Default)]
pub struct EnvelopeService<D: PayloadDigest = DigestAlgorithm> {
    digest: D,
}

impl<D: PayloadDigest> EnvelopeService<D> {
    pub fn new(digest: D) -> Self {
        Self { digest }
    }

    pub fn digest(&self) -> &D {
        &self.digest
    }
}

impl<D: PayloadDigest> EnvelopeVerifier for EnvelopeService<D> {
    fn verify(&self, envelope: &SignedEnvelope, args: &[&str]) -> Result<Address, EnvelopeError> {
        let payload = build_payload(envelope.nonce, args);
        let key = PublicKey::from_der(&envelope.public_key)?;
        let signer = key.address();

        let digest = self.digest.digest(&payload);
        key.verify_digest(&digest, &envelope.signature)?;

        debug!(
            signer = %signer,
            nonce = envelope.nonce,
            algorithm = %key.algorithm(),
            "envelope verified"
        );
        Ok(signer)
    }

    fn digest_name(&self) -> &'static str {
        self.digest.name()
    }
}

impl<D: PayloadDigest> EnvelopeSigner for EnvelopeService<D> {
    fn sign(
        &self,
        nonce: u64,
        args: &[&str],
        key: &SigningKeyPair,
    ) -> Result<SignedEnvelope, EnvelopeError> {
        let payload = build_payload(nonce, args);
        let digest = self.digest.digest(&payload);
        let signature = key.sign_digest(&digest)?;
        let public_key = key.public_key().to_der()?;
        Ok(SignedEnvelope {
            nonce,
            public_key,
            signature,
        })
    }
}
