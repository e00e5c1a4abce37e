//! # Invocation Preprocessor
//!
//! Runs ahead of every contract call:
//!
//! 1. Treat `args[0]` as a candidate envelope. If it does not parse, the
//!    call proceeds with no signer.
//! 2. Verify the envelope over the remaining arguments, prefixed with the
//!    function name when `bind_function` is set.
//! 3. On success bind the signer; on failure abort the call.
//!
//! Nonce ordering is left to the handlers, since some calls are reads.

use crate::config::InvocationConfig;
use ledger_telemetry::record_signature_verification;
use lg_01_signed_envelope::{EnvelopeError, EnvelopeService, EnvelopeVerifier, SignedEnvelope};
use shared_crypto::PublicKey;
use shared_types::{TransactionContext, VerifiedSigner};
use tracing::{debug, warn};

pub struct InvocationPreprocessor<V = EnvelopeService> {
    verifier: V,
    max_envelope_bytes: usize,
    bind_function: bool,
}

impl InvocationPreprocessor {
    pub fn from_config(config: &InvocationConfig) -> Self {
        Self::new(EnvelopeService::new(config.digest), config)
    }
}

impl<V: EnvelopeVerifier> InvocationPreprocessor<V> {
    pub fn new(verifier: V, config: &InvocationConfig) -> Self {
        Self {
            verifier,
            max_envelope_bytes: config.max_envelope_bytes,
            bind_function: config.bind_function,
        }
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Arguments the signer is expected to have signed, for a call to
    /// `function` whose arguments after the envelope are `params`.
    pub fn signed_arguments<'s>(&self, function: &'s str, params: &'s [String]) -> Vec<&'s str> {
        let mut signed = Vec::with_capacity(params.len() + 1);
        if self.bind_function {
            signed.push(function);
        }
        signed.extend(params.iter().map(String::as_str));
        signed
    }

    fn candidate(&self, ctx: &TransactionContext<'_>) -> Option<SignedEnvelope> {
        let first = ctx.args().first()?;
        if first.len() > self.max_envelope_bytes {
            debug!(len = first.len(), "first argument too large to be an envelope");
            return None;
        }
        match SignedEnvelope::parse_argument(first) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                debug!(error = %e, "no envelope, call is unsigned");
                None
            }
        }
    }

    /// Establishes the call's signer, if any.
    ///
    /// Returns `Ok(None)` for unsigned calls. A verification failure is
    /// returned as-is and must abort the call.
    pub fn preprocess(
        &self,
        ctx: &mut TransactionContext<'_>,
    ) -> Result<Option<VerifiedSigner>, EnvelopeError> {
        let Some(envelope) = self.candidate(ctx) else {
            return Ok(None);
        };

        let algorithm = PublicKey::from_der(&envelope.public_key)
            .map(|key| key.algorithm().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let verified = {
            let signed = self.signed_arguments(ctx.function(), &ctx.args()[1..]);
            self.verifier.verify(&envelope, &signed)
        };

        match verified {
            Ok(address) => {
                record_signature_verification(&algorithm, true);
                let signer = VerifiedSigner {
                    address,
                    nonce: envelope.nonce,
                };
                ctx.bind_signer(signer);
                debug!(signer = %address, nonce = envelope.nonce, "signer bound");
                Ok(Some(signer))
            }
            Err(e) => {
                record_signature_verification(&algorithm, false);
                warn!(
                    function = ctx.function(),
                    algorithm = %algorithm,
                    digest = self.verifier.digest_name(),
                    error = %e,
                    "envelope rejected"
                );
                Err(e)
            }
        }
    }
}
