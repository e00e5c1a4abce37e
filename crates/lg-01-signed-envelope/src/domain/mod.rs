//! # Domain Layer
//!
//! Envelope structure, payload construction and errors. No I/O.

pub mod envelope;
pub mod errors;
pub mod payload;
