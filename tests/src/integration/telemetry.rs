//! # Telemetry Wiring
//!
//! Invocations are counted on the shared registry. Counters are global to
//! the test binary, so assertions only look for growth.

#[cfg(test)]
mod tests {
    use crate::fixtures::Actor;
    use crate::integration::{deploy, enroll_clients};
    use ledger_telemetry::{
        gather_metrics, register_metrics, TelemetryConfig, INVOCATIONS, NONCE_REJECTIONS,
        SIGNATURE_VERIFICATIONS,
    };

    #[test]
    fn test_invocations_are_counted() {
        register_metrics().unwrap();
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        let committed = INVOCATIONS.with_label_values(&["committed"]).get();
        let aborted = INVOCATIONS.with_label_values(&["aborted"]).get();
        let rejections = NONCE_REJECTIONS.get();
        let valid = SIGNATURE_VERIFICATIONS
            .with_label_values(&["ecdsa-secp256k1", "valid"])
            .get();

        let request = client.signed_call(0, "put", &["counted"], None);
        host.submit(request.clone()).unwrap();
        host.submit(request).unwrap_err();

        assert!(INVOCATIONS.with_label_values(&["committed"]).get() >= committed + 1.0);
        assert!(INVOCATIONS.with_label_values(&["aborted"]).get() >= aborted + 1.0);
        assert!(NONCE_REJECTIONS.get() >= rejections + 1.0);
        assert!(
            SIGNATURE_VERIFICATIONS
                .with_label_values(&["ecdsa-secp256k1", "valid"])
                .get()
                >= valid + 2.0
        );

        let text = gather_metrics().unwrap();
        assert!(text.contains(r#"lg_invocations_total{outcome="committed"}"#));
    }

    #[test]
    fn test_logging_installs_once() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::default()
        };
        let _ = ledger_telemetry::init_logging(&config);
        assert!(ledger_telemetry::init_logging(&config).is_err());
    }
}
