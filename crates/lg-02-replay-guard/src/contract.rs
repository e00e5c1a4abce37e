//! # Nonce Contract Surface
//!
//! Read-only queries. Advancing a nonce is only reachable through a signed
//! call that passes `check`, never as a public function.

use crate::domain::sequencer::LedgerNonceSequencer;
use crate::ports::inbound::NonceSequencer;
use shared_types::{
    expect_params, unknown_function, Address, Contract, ContractError, TransactionContext,
};

pub struct NonceContract<N: NonceSequencer = LedgerNonceSequencer> {
    sequencer: N,
}

impl Default for NonceContract {
    fn default() -> Self {
        Self::new(LedgerNonceSequencer::default())
    }
}

impl<N: NonceSequencer> NonceContract<N> {
    pub fn new(sequencer: N) -> Self {
        Self { sequencer }
    }

    pub fn sequencer(&self) -> &N {
        &self.sequencer
    }
}

impl<N: NonceSequencer> Contract for NonceContract<N> {
    fn name(&self) -> &str {
        "NonceContract"
    }

    fn invoke(&self, ctx: &mut TransactionContext<'_>) -> Result<String, ContractError> {
        match ctx.function() {
            "current" => {
                let [account] = expect_params::<1>(ctx)?;
                let account = Address::parse(account)?;
                Ok(self.sequencer.current(ctx.state(), &account)?.to_string())
            }
            "check" => {
                let [account, nonce] = expect_params::<2>(ctx)?;
                let account = Address::parse(account)?;
                let nonce: u64 = nonce.parse().map_err(|_| {
                    ContractError::invalid_argument(format!("nonce {nonce:?} is not a u64"))
                })?;
                self.sequencer.check(ctx.state(), &account, nonce)?;
                Ok(true.to_string())
            }
            other => Err(unknown_function(self.name(), other)),
        }
    }
}
