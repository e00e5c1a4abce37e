//! # Domain Layer

pub mod access_control;
pub mod errors;
pub mod events;
pub mod role;
