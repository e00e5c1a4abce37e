//! # Invocation Host
//!
//! Drives one contract over a shared world state. Every call runs against a
//! [`TransactionOverlay`]:
//!
//! - `submit` commits the overlay when the contract returns `Ok` and drops
//!   it otherwise, so a failed call writes nothing (nonces included).
//! - `evaluate` runs the same path and always drops the overlay.
//!
//! Concurrent submits touching the same keys are serialized by the commit
//! check: the loser fails with `Conflict` instead of overwriting.

use crate::config::InvocationConfig;
use crate::operator::derive_operator;
use crate::preprocessor::InvocationPreprocessor;
use ledger_telemetry::{
    record_invocation, record_nonce_rejection, record_state_conflict, InvocationOutcome,
};
use lg_01_signed_envelope::{EnvelopeService, EnvelopeVerifier};
use shared_types::{
    Contract, ContractError, ContractEvent, ErrorKind, InMemoryWorldState, TransactionContext,
    TransactionOverlay,
};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// A call as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub function: String,
    pub args: Vec<String>,
    /// SPKI DER public key of the submitting client.
    pub client_key: Option<Vec<u8>>,
}

impl InvocationRequest {
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            function: function.into(),
            args,
            client_key: None,
        }
    }

    #[must_use]
    pub fn with_client_key(mut self, der: Vec<u8>) -> Self {
        self.client_key = Some(der);
        self
    }
}

/// Result of a committed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub tx_id: Uuid,
    pub result: String,
    /// Events in emission order.
    pub events: Vec<ContractEvent>,
}

pub struct InvocationHost<C, V = EnvelopeService> {
    state: Arc<InMemoryWorldState>,
    contract: C,
    preprocessor: InvocationPreprocessor<V>,
}

impl<C: Contract> InvocationHost<C> {
    pub fn new(state: Arc<InMemoryWorldState>, contract: C, config: &InvocationConfig) -> Self {
        Self::with_preprocessor(state, contract, InvocationPreprocessor::from_config(config))
    }
}

impl<C: Contract, V: EnvelopeVerifier> InvocationHost<C, V> {
    pub fn with_preprocessor(
        state: Arc<InMemoryWorldState>,
        contract: C,
        preprocessor: InvocationPreprocessor<V>,
    ) -> Self {
        Self {
            state,
            contract,
            preprocessor,
        }
    }

    pub fn state(&self) -> &Arc<InMemoryWorldState> {
        &self.state
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    pub fn preprocessor(&self) -> &InvocationPreprocessor<V> {
        &self.preprocessor
    }

    fn execute(
        &self,
        overlay: &TransactionOverlay<'_>,
        tx_id: Uuid,
        request: InvocationRequest,
    ) -> Result<(String, Vec<ContractEvent>), ContractError> {
        let operator = derive_operator(request.client_key.as_deref());
        let mut ctx = TransactionContext::new(overlay, request.function, request.args, operator)
            .with_tx_id(tx_id);

        self.preprocessor.preprocess(&mut ctx)?;
        let result = self.contract.invoke(&mut ctx)?;
        Ok((result, ctx.into_events()))
    }

    fn record_failure(err: &ContractError) {
        match err.kind {
            ErrorKind::NonceMismatch => record_nonce_rejection(),
            ErrorKind::Conflict => record_state_conflict(),
            _ => {}
        }
        record_invocation(InvocationOutcome::Aborted);
    }

    /// Runs the call and commits its writes and events atomically.
    pub fn submit(&self, request: InvocationRequest) -> Result<Receipt, ContractError> {
        let tx_id = Uuid::new_v4();
        let span = info_span!("invocation", %tx_id, function = %request.function);
        let _enter = span.enter();

        let overlay = TransactionOverlay::new(&self.state);
        let outcome = self
            .execute(&overlay, tx_id, request)
            .and_then(|(result, events)| {
                overlay.commit()?;
                Ok((result, events))
            });

        match outcome {
            Ok((result, events)) => {
                record_invocation(InvocationOutcome::Committed);
                info!(events = events.len(), "invocation committed");
                Ok(Receipt {
                    tx_id,
                    result,
                    events,
                })
            }
            Err(err) => {
                Self::record_failure(&err);
                warn!(kind = %err.kind, error = %err.message, "invocation aborted");
                Err(err)
            }
        }
    }

    /// Runs the call as a query. Nothing is written, even on success.
    pub fn evaluate(&self, request: InvocationRequest) -> Result<String, ContractError> {
        let tx_id = Uuid::new_v4();
        let span = info_span!("evaluation", %tx_id, function = %request.function);
        let _enter = span.enter();

        let overlay = TransactionOverlay::new(&self.state);
        match self.execute(&overlay, tx_id, request) {
            Ok((result, _)) => {
                record_invocation(InvocationOutcome::Evaluated);
                debug!(discarded_writes = overlay.pending_writes(), "evaluation finished");
                Ok(result)
            }
            Err(err) => {
                Self::record_failure(&err);
                Err(err)
            }
        }
    }
}
