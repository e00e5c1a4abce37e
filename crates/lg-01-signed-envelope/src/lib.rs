//! # Signed-Request Envelope (LG-01)
//!
//! Authenticates the holder of a key independently of whoever relayed the
//! transaction to the ledger.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): envelope structure, payload rule, errors
//! - **Ports Layer** (`ports/`): `EnvelopeVerifier` and `EnvelopeSigner`
//! - **Service Layer** (`service.rs`): both ports over one pluggable digest
//!
//! ## Payload Rule
//!
//! `decimal(nonce) || arg0 || arg1 || ...`, hashed once, then signed. The
//! argument list and its order are part of what is authenticated.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::envelope::{Base64OrHex, SignedEnvelope};
pub use domain::errors::EnvelopeError;
pub use domain::payload::build_payload;
pub use ports::inbound::{EnvelopeSigner, EnvelopeVerifier};
pub use service::EnvelopeService;
