//! # Initialization Guard
//!
//! One state key per initializable unit. The first successful call writes
//! the `Initialized` marker; every later call fails.

use shared_types::{StateError, WorldState};
use thiserror::Error;

/// Marker written under an initialized key.
pub const INITIALIZED_MARKER: &[u8] = b"Initialized";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    State(#[from] StateError),
}

#[derive(Clone, Debug)]
pub struct Initializable {
    key: String,
}

impl Initializable {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_initialized(&self, state: &dyn WorldState) -> Result<bool, StateError> {
        Ok(state.get_state(&self.key)?.as_deref() == Some(INITIALIZED_MARKER))
    }

    /// Writes the marker, or fails if it is already present.
    pub fn try_initialize(&self, state: &dyn WorldState) -> Result<(), InitError> {
        if self.is_initialized(state)? {
            return Err(InitError::AlreadyInitialized);
        }
        state.put_state(&self.key, INITIALIZED_MARKER.to_vec())?;
        Ok(())
    }
}
