//! # Transaction Context
//!
//! Everything a contract sees during one invocation: the state handle, the
//! call arguments, who submitted the transaction (the operator) and, when the
//! call carried a verified envelope, who authorized it (the signer).

use crate::address::Address;
use crate::errors::{EventError, StateError};
use crate::state::WorldState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity recovered from a verified signed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedSigner {
    pub address: Address,
    /// Nonce the envelope was signed with; checked by the replay guard.
    pub nonce: u64,
}

/// A structured fact emitted during an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEvent {
    pub name: String,
    /// JSON-encoded payload.
    pub payload: Vec<u8>,
}

impl ContractEvent {
    /// Decodes the payload into a typed event.
    pub fn decode<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

/// Per-invocation context.
pub struct TransactionContext<'a> {
    state: &'a dyn WorldState,
    tx_id: Uuid,
    function: String,
    args: Vec<String>,
    operator: Address,
    signer: Option<VerifiedSigner>,
    events: Vec<ContractEvent>,
}

impl<'a> TransactionContext<'a> {
    pub fn new(
        state: &'a dyn WorldState,
        function: impl Into<String>,
        args: Vec<String>,
        operator: Address,
    ) -> Self {
        Self {
            state,
            tx_id: Uuid::new_v4(),
            function: function.into(),
            args,
            operator,
            signer: None,
            events: Vec::new(),
        }
    }

    /// Overrides the generated transaction id.
    #[must_use]
    pub fn with_tx_id(mut self, tx_id: Uuid) -> Self {
        self.tx_id = tx_id;
        self
    }

    pub fn state(&self) -> &'a dyn WorldState {
        self.state
    }

    pub fn tx_id(&self) -> Uuid {
        self.tx_id
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Raw arguments as submitted, envelope included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Call parameters: the arguments after the envelope when one was
    /// verified, otherwise all arguments.
    pub fn params(&self) -> &[String] {
        match self.signer {
            Some(_) if !self.args.is_empty() => &self.args[1..],
            _ => &self.args,
        }
    }

    /// Ledger-level identity of the submitter.
    pub fn operator(&self) -> Address {
        self.operator
    }

    pub fn signer(&self) -> Option<VerifiedSigner> {
        self.signer
    }

    /// Binds the verified envelope identity for the rest of the call.
    pub fn bind_signer(&mut self, signer: VerifiedSigner) {
        self.signer = Some(signer);
    }

    /// Records a structured event.
    ///
    /// Events are only published if the invocation commits.
    pub fn emit_event<T: Serialize>(&mut self, name: &str, payload: &T) -> Result<(), EventError> {
        if name.is_empty() {
            return Err(EventError::EmptyName);
        }
        let payload =
            serde_json::to_vec(payload).map_err(|e| EventError::Payload(e.to_string()))?;
        tracing::debug!(event = name, tx_id = %self.tx_id, "event recorded");
        self.events.push(ContractEvent {
            name: name.to_string(),
            payload,
        });
        Ok(())
    }

    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ContractEvent> {
        self.events
    }

    // Convenience passthroughs so contracts read like the store they use.

    pub fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        self.state.get_state(key)
    }

    pub fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        self.state.put_state(key, value)
    }

    pub fn delete_state(&self, key: &str) -> Result<(), StateError> {
        self.state.delete_state(key)
    }
}
