//! # Replay Guard (LG-02)
//!
//! Per-account monotonic nonce. A signed call is accepted only when its
//! envelope nonce equals the account's stored counter; acceptance advances
//! the counter by exactly one. Overflow is an error, never a wrap.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): ledger-backed sequencer, errors
//! - **Ports Layer** (`ports/`): `NonceSequencer`
//! - **Contract** (`contract.rs`): read-only `current` / `check` queries

pub mod contract;
pub mod domain;
pub mod ports;

pub use contract::NonceContract;
pub use domain::errors::NonceError;
pub use domain::sequencer::{LedgerNonceSequencer, NONCE_NAMESPACE};
pub use ports::inbound::NonceSequencer;
