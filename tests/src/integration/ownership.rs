//! # Ownership Through the Host

#[cfg(test)]
mod tests {
    use crate::fixtures::Actor;
    use crate::integration::{deploy, undeployed, Host};
    use lg_03_ownable::{OwnershipTransferred, OWNERSHIP_TRANSFERRED};
    use lg_04_access_control::Role;
    use lg_05_invocation::InvocationRequest;
    use shared_types::{Address, ErrorCategory, ErrorKind};

    fn owner_of(host: &Host) -> String {
        host.evaluate(InvocationRequest::new("owner", vec![])).unwrap()
    }

    #[test]
    fn test_initialize_is_one_shot() {
        let owner = Actor::secp256k1();
        let host = deploy(&owner);
        assert_eq!(owner_of(&host), owner.address().to_string());

        let before = host.state().snapshot();
        let err = host.submit(Actor::ed25519().call("initialize", &[])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyInitialized);
        assert_eq!(host.state().snapshot(), before);
    }

    #[test]
    fn test_initialize_emits_transfer_from_zero() {
        let owner = Actor::ed25519();
        let host = undeployed();
        let receipt = host.submit(owner.call("initialize", &[])).unwrap();
        assert_eq!(receipt.events[0].name, OWNERSHIP_TRANSFERRED);
        let event: OwnershipTransferred = receipt.events[0].decode().unwrap();
        assert_eq!(event.previous_owner, Address::ZERO);
        assert_eq!(event.new_owner, owner.address());
    }

    #[test]
    fn test_p256_client_owns_and_transfers() {
        let owner = Actor::p256();
        let successor = Actor::p256();
        let host = deploy(&owner);
        assert_ne!(owner.address(), Address::ZERO);
        assert_eq!(owner_of(&host), owner.address().to_string());

        host.submit(owner.call("transferOwnership", &[&successor.address().to_string()]))
            .unwrap();
        assert_eq!(owner_of(&host), successor.address().to_string());
    }

    #[test]
    fn test_anonymous_client_cannot_initialize() {
        let host = undeployed();
        let err = host
            .submit(InvocationRequest::new("initialize", vec![]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NullAddress);
        assert!(host.state().is_empty());
    }

    #[test]
    fn test_transfer_by_non_owner_fails() {
        let owner = Actor::secp256k1();
        let intruder = Actor::secp256k1();
        let host = deploy(&owner);

        let err = host
            .submit(intruder.call("transferOwnership", &[&intruder.address().to_string()]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotOwner);
        assert_eq!(err.category(), ErrorCategory::Authorization);
        assert_eq!(owner_of(&host), owner.address().to_string());
    }

    #[test]
    fn test_transfer_rejects_malformed_targets() {
        let owner = Actor::secp256k1();
        let host = deploy(&owner);

        let cases = [
            (Address::ZERO.to_string(), ErrorKind::NullAddress),
            ("0x1234".to_string(), ErrorKind::BadLength),
            (format!("1x{}", "a".repeat(40)), ErrorKind::MissingPrefix),
            (format!("0x{}", "g".repeat(40)), ErrorKind::BadCharacters),
        ];
        for (target, kind) in cases {
            let err = host
                .submit(owner.call("transferOwnership", &[&target]))
                .unwrap_err();
            assert_eq!(err.kind, kind, "target {target}");
            assert_eq!(err.category(), ErrorCategory::InputValidation);
        }
        assert_eq!(owner_of(&host), owner.address().to_string());
    }

    #[test]
    fn test_transfer_then_renounce() {
        let owner = Actor::secp256k1();
        let successor = Actor::ed25519();
        let host = deploy(&owner);

        host.submit(owner.call("transferOwnership", &[&successor.address().to_string()]))
            .unwrap();
        assert_eq!(owner_of(&host), successor.address().to_string());

        // The previous owner lost its privileges.
        let err = host.submit(owner.call("renounceOwnership", &[])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotOwner);

        let receipt = host.submit(successor.call("renounceOwnership", &[])).unwrap();
        let event: OwnershipTransferred = receipt.events[0].decode().unwrap();
        assert_eq!(event.previous_owner, successor.address());
        assert_eq!(event.new_owner, Address::ZERO);
        assert_eq!(owner_of(&host), Address::ZERO.to_string());

        // Owner-gated calls now fail for everyone.
        let client = Role::from_name("x").to_string();
        let admin = Role::from_name("y").to_string();
        for actor in [&owner, &successor] {
            let err = host
                .submit(actor.call("setRoleAdmin", &[&client, &admin]))
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::NotOwner);
        }
    }
}
