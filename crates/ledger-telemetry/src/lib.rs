//! # Ledger Telemetry
//!
//! Logging and metrics shared by every Ledger-Gate crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("telemetry");
//!     // Invocations now log and count.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LG_SERVICE_NAME` | `ledger-gate` | Service name in log lines |
//! | `LG_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honoured) |
//! | `LG_CONSOLE_OUTPUT` | `true` | Write log lines |
//! | `LG_JSON_LOGS` | `false` | JSON log lines |

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{
    gather_metrics, record_invocation, record_nonce_rejection, record_signature_verification,
    record_state_conflict, register_metrics, InvocationOutcome, INVOCATIONS, NONCE_REJECTIONS,
    REGISTRY, SIGNATURE_VERIFICATIONS, STATE_CONFLICTS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Registers metrics, then installs logging.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}
