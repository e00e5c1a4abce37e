//! Decimal-string counters stored in world state.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("counter overflow")]
    Overflow,

    #[error("counter underflow")]
    Underflow,

    #[error("stored counter {0:?} is not a decimal u64")]
    Corrupted(String),
}

/// An unsigned 64-bit counter with checked arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter(u64);

impl Counter {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parses stored bytes; absent state is zero.
    pub fn from_state(raw: Option<&[u8]>) -> Result<Self, CounterError> {
        let Some(raw) = raw else {
            return Ok(Self(0));
        };
        std::str::from_utf8(raw)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| CounterError::Corrupted(String::from_utf8_lossy(raw).into_owned()))
    }

    pub fn to_state(self) -> Vec<u8> {
        self.0.to_string().into_bytes()
    }

    pub fn increment(self) -> Result<Self, CounterError> {
        self.0.checked_add(1).map(Self).ok_or(CounterError::Overflow)
    }

    pub fn decrement(self) -> Result<Self, CounterError> {
        self.0.checked_sub(1).map(Self).ok_or(CounterError::Underflow)
    }
}
