//! Key-holding participants.
//!
//! An actor can act as a transport client (its key becomes the operator)
//! and as an envelope signer. The two roles are independent: a relayer
//! may submit a request signed by someone else.

use lg_01_signed_envelope::{EnvelopeService, EnvelopeSigner};
use lg_05_invocation::InvocationRequest;
use shared_crypto::{DigestAlgorithm, KeyAlgorithm, SigningKeyPair};
use shared_types::Address;

#[derive(Debug, Clone)]
pub struct Actor {
    key: SigningKeyPair,
}

impl Actor {
    pub fn new(algorithm: KeyAlgorithm) -> Self {
        Self {
            key: SigningKeyPair::generate(algorithm),
        }
    }

    /// The key type of X.509 client identities.
    pub fn p256() -> Self {
        Self::new(KeyAlgorithm::P256)
    }

    pub fn secp256k1() -> Self {
        Self::new(KeyAlgorithm::Secp256k1)
    }

    pub fn ed25519() -> Self {
        Self::new(KeyAlgorithm::Ed25519)
    }

    pub fn key(&self) -> &SigningKeyPair {
        &self.key
    }

    pub fn address(&self) -> Address {
        self.key.public_key().address()
    }

    /// SPKI DER of the public key, as a transport client would present it.
    pub fn client_key(&self) -> Vec<u8> {
        self.key
            .public_key()
            .to_der()
            .expect("public key encodes")
    }

    /// Unsigned call submitted by this actor.
    pub fn call(&self, function: &str, params: &[&str]) -> InvocationRequest {
        InvocationRequest::new(function, params.iter().map(|s| s.to_string()).collect())
            .with_client_key(self.client_key())
    }

    /// Call signed by this actor with the default digest, submitted by
    /// `relayer` (or by the actor itself).
    pub fn signed_call(
        &self,
        nonce: u64,
        function: &str,
        params: &[&str],
        relayer: Option<&Actor>,
    ) -> InvocationRequest {
        self.signed_call_with(DigestAlgorithm::default(), nonce, function, params, relayer)
    }

    pub fn signed_call_with(
        &self,
        digest: DigestAlgorithm,
        nonce: u64,
        function: &str,
        params: &[&str],
        relayer: Option<&Actor>,
    ) -> InvocationRequest {
        let mut signed = vec![function];
        signed.extend_from_slice(params);
        let envelope = EnvelopeService::new(digest)
            .sign(nonce, &signed, &self.key)
            .expect("signing succeeds");

        let mut args = vec![envelope.to_base64_argument()];
        args.extend(params.iter().map(|s| s.to_string()));
        InvocationRequest::new(function, args)
            .with_client_key(relayer.unwrap_or(self).client_key())
    }
}
