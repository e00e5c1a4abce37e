//! # Replay Guard Through the Host

#[cfg(test)]
mod tests {
    use crate::fixtures::Actor;
    use crate::integration::{current_nonce, deploy, deploy_with, enroll_clients};
    use lg_05_invocation::{InvocationConfig, InvocationRequest};
    use proptest::prelude::*;
    use shared_crypto::DigestAlgorithm;
    use shared_types::{ErrorCategory, ErrorKind};

    #[test]
    fn test_out_of_order_nonces_rejected_identically() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        host.submit(client.signed_call(0, "put", &["a"], None)).unwrap();

        for stale_or_future in [0, 2, 7] {
            let err = host
                .submit(client.signed_call(stale_or_future, "put", &["b"], None))
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::NonceMismatch);
            assert_eq!(err.category(), ErrorCategory::Replay);
        }
        assert_eq!(current_nonce(&host, &client), 1);
        host.submit(client.signed_call(1, "put", &["b"], None)).unwrap();
    }

    #[test]
    fn test_check_surface() {
        let owner = Actor::secp256k1();
        let client = Actor::ed25519();
        let host = deploy(&owner);
        let check = |nonce: &str| {
            host.evaluate(InvocationRequest::new(
                "check",
                vec![client.address().to_string(), nonce.to_string()],
            ))
        };
        assert_eq!(check("0").unwrap(), "true");
        assert_eq!(check("1").unwrap_err().kind, ErrorKind::NonceMismatch);
    }

    #[test]
    fn test_digest_must_match_host_configuration() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let config = InvocationConfig {
            digest: DigestAlgorithm::Keccak256,
            ..InvocationConfig::default()
        };
        let host = deploy_with(&owner, &config);
        enroll_clients(&host, &owner, &[&client]);

        let err = host
            .submit(client.signed_call(0, "put", &["v"], None))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadSignature);
        assert_eq!(err.category(), ErrorCategory::Authentication);

        host.submit(client.signed_call_with(DigestAlgorithm::Keccak256, 0, "put", &["v"], None))
            .unwrap();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn test_only_current_nonce_commits(presented in proptest::collection::vec(0u64..6, 1..12)) {
            let owner = Actor::secp256k1();
            let client = Actor::ed25519();
            let host = deploy(&owner);
            enroll_clients(&host, &owner, &[&client]);

            let mut expected = 0u64;
            for (i, nonce) in presented.into_iter().enumerate() {
                let value = format!("v{i}");
                let outcome = host.submit(client.signed_call(nonce, "put", &[&value], None));
                if nonce == expected {
                    prop_assert!(outcome.is_ok());
                    expected += 1;
                } else {
                    prop_assert_eq!(outcome.unwrap_err().kind, ErrorKind::NonceMismatch);
                }
                prop_assert_eq!(current_nonce(&host, &client), expected);
            }
        }
    }
}
