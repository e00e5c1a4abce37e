//! # Ownable (LG-03)
//!
//! Single privileged address plus the one-shot initialization guard that
//! installs it.
//!
//! ## Lifecycle
//!
//! `Uninitialized -> Initialized(owner = operator)`. Ownership moves only via
//! `transferOwnership` and ends only via `renounceOwnership`, which leaves the
//! zero address in place. Both emit `OwnershipTransferred`.
//!
//! The caller for owner checks is always the transaction operator, never an
//! envelope signer.

pub mod contract;
pub mod domain;
pub mod ports;

pub use contract::{dispatch_ownable, OwnableContract};
pub use domain::errors::OwnableError;
pub use domain::events::{OwnershipTransferred, OWNERSHIP_TRANSFERRED};
pub use domain::initializable::{InitError, Initializable, INITIALIZED_MARKER};
pub use domain::ownable::{Ownable, OWNABLE_INITIALIZED_KEY, OWNER_KEY};
pub use ports::inbound::OwnableApi;
