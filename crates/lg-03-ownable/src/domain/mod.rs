//! # Domain Layer

pub mod errors;
pub mod events;
pub mod initializable;
pub mod ownable;
