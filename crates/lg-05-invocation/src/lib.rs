//! # Invocation (LG-05)
//!
//! Everything between the ledger transport and a contract:
//!
//! - **Configuration** (`config.rs`): digest, envelope size cap, function binding
//! - **Operator** (`operator.rs`): transport identity from the client key
//! - **Preprocessor** (`preprocessor.rs`): envelope extraction and signer binding
//! - **Host** (`host.rs`): atomic `submit` and side-effect-free `evaluate`
//!
//! ## Identities
//!
//! | Identity | Source | Used by |
//! |----------|--------|---------|
//! | operator | client key presented to the transport | owner and role-admin checks |
//! | signer | verified signed envelope in `args[0]` | replay guard, `renounceRole`, role-gated calls |

pub mod config;
pub mod host;
pub mod operator;
pub mod preprocessor;

// Re-export public API
pub use config::{ConfigError, InvocationConfig, DEFAULT_MAX_ENVELOPE_BYTES};
pub use host::{InvocationHost, InvocationRequest, Receipt};
pub use operator::derive_operator;
pub use preprocessor::InvocationPreprocessor;
