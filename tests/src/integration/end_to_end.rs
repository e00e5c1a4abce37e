//! # End-to-End Flow
//!
//! Operator initializes, roots an admin chain at itself, enrolls a client;
//! the client then stores values through signed calls.

#[cfg(test)]
mod tests {
    use crate::fixtures::{Actor, BasicContract, PutValue};
    use crate::integration::{current_nonce, deploy, enroll_clients};
    use lg_04_access_control::{RoleGranted, ROLE_GRANTED};
    use lg_05_invocation::InvocationRequest;
    use shared_crypto::{sha3_256, KeyAlgorithm};
    use shared_types::ErrorKind;

    // =============================================================================
    // SIGNED PUT
    // =============================================================================

    #[test]
    fn test_signed_put_then_replay() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let host = deploy(&owner);

        // Enrollment emits the RoleGranted fact.
        let client_role = BasicContract::client_role().to_string();
        host.submit(owner.call(
            "setRoleAdmin",
            &[&client_role, &BasicContract::admin_role().to_string()],
        ))
        .unwrap();
        host.submit(owner.call(
            "grantRole",
            &[&BasicContract::admin_role().to_string(), &owner.address().to_string()],
        ))
        .unwrap();
        let grant = host
            .submit(owner.call("grantRole", &[&client_role, &client.address().to_string()]))
            .unwrap();
        assert_eq!(grant.events.len(), 1);
        assert_eq!(grant.events[0].name, ROLE_GRANTED);
        let granted: RoleGranted = grant.events[0].decode().unwrap();
        assert_eq!(granted.account, client.address());
        assert_eq!(granted.sender, owner.address());

        assert_eq!(current_nonce(&host, &client), 0);

        // Signed over ("put", "value1") with nonce 0.
        let request = client.signed_call(0, "put", &["value1"], None);
        let receipt = host.submit(request.clone()).unwrap();
        assert_eq!(current_nonce(&host, &client), 1);

        // Only the store's own fact, no role facts.
        assert_eq!(receipt.events.len(), 1);
        assert_eq!(receipt.events[0].name, "PutValue");
        let put: PutValue = receipt.events[0].decode().unwrap();
        assert_eq!(put.index, 0);
        assert_eq!(put.owner, client.address());
        assert_eq!(put.kid, receipt.result);

        let expected_kid = hex::encode(&sha3_256(b"0value1")[12..]);
        assert_eq!(receipt.result, expected_kid);

        // Identical envelope again.
        let before = host.state().snapshot();
        let err = host.submit(request).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NonceMismatch);
        assert_eq!(host.state().snapshot(), before);
        assert_eq!(current_nonce(&host, &client), 1);
    }

    #[test]
    fn test_values_readable_by_index_and_kid() {
        let owner = Actor::secp256k1();
        let client = Actor::ed25519();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        let first = host.submit(client.signed_call(0, "put", &["alpha"], None)).unwrap();
        let second = host.submit(client.signed_call(1, "put", &["beta"], None)).unwrap();
        assert_ne!(first.result, second.result);

        let read = |function: &str, arg: &str| {
            host.evaluate(InvocationRequest::new(function, vec![arg.to_string()]))
        };
        assert_eq!(read("getByIndex", "0").unwrap(), "alpha");
        assert_eq!(read("getByIndex", "1").unwrap(), "beta");
        assert_eq!(read("getByKid", &second.result).unwrap(), "beta");
        assert_eq!(read("getByIndex", "2").unwrap_err().kind, ErrorKind::InvalidArgument);
        assert_eq!(
            host.evaluate(InvocationRequest::new("total", vec![])).unwrap(),
            "2"
        );
    }

    #[test]
    fn test_relayed_call_separates_operator_and_signer() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let relayer = Actor::ed25519();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        let receipt = host
            .submit(client.signed_call(0, "put", &["relayed"], Some(&relayer)))
            .unwrap();
        let put: PutValue = receipt.events[0].decode().unwrap();
        assert_eq!(put.operator, relayer.address());
        assert_eq!(put.owner, client.address());

        // The relayer's own nonce is untouched.
        assert_eq!(current_nonce(&host, &relayer), 0);
        assert_eq!(current_nonce(&host, &client), 1);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[test]
    fn test_put_without_role_is_rejected() {
        let owner = Actor::secp256k1();
        let stranger = Actor::new(KeyAlgorithm::Secp256k1);
        let host = deploy(&owner);

        let err = host
            .submit(stranger.signed_call(0, "put", &["value1"], None))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRole);
        assert_eq!(current_nonce(&host, &stranger), 0);
    }

    #[test]
    fn test_unsigned_put_is_rejected() {
        let owner = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&owner]);

        let err = host.submit(owner.call("put", &["value1"])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_tampered_value_is_rejected() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        let mut request = client.signed_call(0, "put", &["value1"], None);
        request.args[1] = "value2".to_string();
        let err = host.submit(request).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadSignature);
        assert_eq!(current_nonce(&host, &client), 0);
    }
}
