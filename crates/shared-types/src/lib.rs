//! # Shared Types Crate
//!
//! Types every ledger-gate component builds on.
//!
//! ## Contents
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `address` | `0x`-prefixed 20-byte account addresses and their validation |
//! | `keys` | Composite state-key builder (`\0`-delimited namespaces) |
//! | `state` | `WorldState` port, in-memory store, per-invocation overlay |
//! | `context` | `TransactionContext`: operator, signer, arguments, events |
//! | `counter` | Checked decimal counters |
//! | `contract` | `Contract` dispatch trait |
//! | `errors` | `ErrorKind` taxonomy and `ContractError` |

pub mod address;
pub mod context;
pub mod contract;
pub mod counter;
pub mod errors;
pub mod keys;
pub mod state;

pub use address::{is_empty_address, Address, AddressError};
pub use context::{ContractEvent, TransactionContext, VerifiedSigner};
pub use contract::{expect_params, unknown_function, Contract};
pub use counter::{Counter, CounterError};
pub use errors::{ContractError, ErrorCategory, ErrorKind, EventError, StateError};
pub use keys::{composite_key, partial_composite_key, split_composite_key, KeyError};
pub use state::{InMemoryWorldState, TransactionOverlay, WorldState};
