//! # Ledger-Gate Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures/         # Key-holding actors and a reference consumer contract
//! └── integration/      # Cross-crate scenarios through the invocation host
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lg-tests
//!
//! # By category
//! cargo test -p lg-tests integration::
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
