//! # Inbound Ports
//!
//! Narrow interfaces consumed by the invocation preprocessor and by clients
//! that build envelopes.

use crate::domain::envelope::SignedEnvelope;
use crate::domain::errors::EnvelopeError;
use shared_crypto::SigningKeyPair;
use shared_types::Address;

/// Establishes who authorized a call.
pub trait EnvelopeVerifier: Send + Sync {
    /// Rebuilds the payload from `envelope.nonce` and `args`, checks the
    /// signature against the embedded key and returns the signer address.
    fn verify(&self, envelope: &SignedEnvelope, args: &[&str]) -> Result<Address, EnvelopeError>;

    /// Name of the digest applied to payloads.
    fn digest_name(&self) -> &'static str;
}

/// Client-side envelope construction.
pub trait EnvelopeSigner {
    /// Signs `nonce` + `args` with `key` and packs the result.
    fn sign(
        &self,
        nonce: u64,
        args: &[&str],
        key: &SigningKeyPair,
    ) -> Result<SignedEnvelope, EnvelopeError>;
}
