//! Shared test fixtures.

pub mod actors;

pub use actors::Actor;
pub use basic::{BasicContract, PutValue, CLIENT_ROLE_NAME, ADMIN_ROLE_NAME};
