//! Prometheus metrics.
//!
//! All metrics follow the naming convention: `lg_<metric>_<unit>` and live
//! on a crate-owned registry rather than the prometheus default one.

use lazy_static::lazy_static;
use parking_lot::Mutex;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Registry behind `gather_metrics`
    pub static ref REGISTRY: Registry = Registry::new();

    static ref REGISTERED: Mutex<bool> = Mutex::new(false);

    /// Envelope signature verifications
    pub static ref SIGNATURE_VERIFICATIONS: CounterVec = CounterVec::new(
        Opts::new("lg_signature_verifications_total", "Envelope signature verifications"),
        &["algorithm", "result"]  // algorithm: ecdsa-secp256k1/ed25519/unknown, result: valid/invalid
    ).expect("metric creation failed");

    /// Calls rejected by the replay guard
    pub static ref NONCE_REJECTIONS: Counter = Counter::new(
        "lg_nonce_rejections_total",
        "Signed calls rejected for a nonce mismatch"
    ).expect("metric creation failed");

    /// Invocations by outcome
    pub static ref INVOCATIONS: CounterVec = CounterVec::new(
        Opts::new("lg_invocations_total", "Contract invocations"),
        &["outcome"]  // outcome: committed/aborted/evaluated
    ).expect("metric creation failed");

    /// Commits refused because a key read during the invocation changed
    pub static ref STATE_CONFLICTS: Counter = Counter::new(
        "lg_state_conflicts_total",
        "Invocations aborted on a concurrent write conflict"
    ).expect("metric creation failed");
}

/// Outcome label for `INVOCATIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    Committed,
    Aborted,
    Evaluated,
}

impl InvocationOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Committed => "committed",
            Self::Aborted => "aborted",
            Self::Evaluated => "evaluated",
        }
    }
}

/// Register all metrics with `REGISTRY`. Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let mut registered = REGISTERED.lock();
    if *registered {
        return Ok(());
    }

    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SIGNATURE_VERIFICATIONS.clone()),
        Box::new(NONCE_REJECTIONS.clone()),
        Box::new(INVOCATIONS.clone()),
        Box::new(STATE_CONFLICTS.clone()),
    ];
    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    *registered = true;
    Ok(())
}

pub fn record_signature_verification(algorithm: &str, valid: bool) {
    let result = if valid { "valid" } else { "invalid" };
    SIGNATURE_VERIFICATIONS
        .with_label_values(&[algorithm, result])
        .inc();
}

pub fn record_nonce_rejection() {
    NONCE_REJECTIONS.inc();
}

pub fn record_invocation(outcome: InvocationOutcome) {
    INVOCATIONS.with_label_values(&[outcome.as_str()]).inc();
}

pub fn record_state_conflict() {
    STATE_CONFLICTS.inc();
}

/// Encode all metrics as Prometheus text format. Registers them first if
/// needed.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    register_metrics()?;
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
