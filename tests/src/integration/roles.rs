//! # Role Administration Through the Host

#[cfg(test)]
mod tests {
    use crate::fixtures::{Actor, BasicContract};
    use crate::integration::{current_nonce, deploy, enroll_clients, Host};
    use lg_04_access_control::{Role, RoleAdminChanged, RoleRevoked, ROLE_ADMIN_CHANGED};
    use lg_05_invocation::InvocationRequest;
    use shared_types::ErrorKind;

    fn has_role(host: &Host, role: &Role, actor: &Actor) -> bool {
        host.evaluate(InvocationRequest::new(
            "hasRole",
            vec![role.to_string(), actor.address().to_string()],
        ))
        .unwrap()
            == "true"
    }

    #[test]
    fn test_admin_chain() {
        let owner = Actor::secp256k1();
        let admin = Actor::secp256k1();
        let member = Actor::ed25519();
        let outsider = Actor::secp256k1();
        let host = deploy(&owner);

        let r = Role::from_name("R");
        let admin_r = Role::from_name("AdminR");
        let receipt = host
            .submit(owner.call("setRoleAdmin", &[&r.to_string(), &admin_r.to_string()]))
            .unwrap();
        assert_eq!(receipt.events[0].name, ROLE_ADMIN_CHANGED);
        let changed: RoleAdminChanged = receipt.events[0].decode().unwrap();
        assert!(changed.previous_admin_role.is_empty());
        assert_eq!(
            host.evaluate(InvocationRequest::new("getRoleAdmin", vec![r.to_string()]))
                .unwrap(),
            admin_r.to_string()
        );

        // AdminR has no admin of its own, so the owner hands it out.
        host.submit(owner.call("grantRole", &[&admin_r.to_string(), &admin.address().to_string()]))
            .unwrap();

        let err = host
            .submit(outsider.call("grantRole", &[&r.to_string(), &member.address().to_string()]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotRoleAdmin);
        assert!(!has_role(&host, &r, &member));

        host.submit(admin.call("grantRole", &[&r.to_string(), &member.address().to_string()]))
            .unwrap();
        assert!(has_role(&host, &r, &member));

        let receipt = host
            .submit(admin.call("revokeRole", &[&r.to_string(), &member.address().to_string()]))
            .unwrap();
        let revoked: RoleRevoked = receipt.events[0].decode().unwrap();
        assert_eq!(revoked.sender, admin.address());
        assert!(!has_role(&host, &r, &member));
    }

    #[test]
    fn test_role_holder_is_not_its_admin() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let other = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        let err = host
            .submit(client.call(
                "grantRole",
                &[&BasicContract::client_role().to_string(), &other.address().to_string()],
            ))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotRoleAdmin);
    }

    #[test]
    fn test_set_role_admin_validation() {
        let owner = Actor::secp256k1();
        let host = deploy(&owner);
        let r = Role::from_name("R").to_string();

        let err = host.submit(owner.call("setRoleAdmin", &[&r, &r])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::SameRole);
        let err = host.submit(owner.call("setRoleAdmin", &[&r, ""])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyInput);
        let err = host
            .submit(Actor::ed25519().call("setRoleAdmin", &[&r, "0x01"]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotOwner);
    }

    #[test]
    fn test_self_renounce() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let other = Actor::ed25519();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client, &other]);
        let role = BasicContract::client_role().to_string();

        // Renouncing someone else's membership.
        let err = host
            .submit(client.signed_call(0, "renounceRole", &[&role, &other.address().to_string()], None))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotSelf);
        assert!(has_role(&host, &BasicContract::client_role(), &other));

        // Own membership, relayed by the owner.
        host.submit(client.signed_call(
            0,
            "renounceRole",
            &[&role, &client.address().to_string()],
            Some(&owner),
        ))
        .unwrap();
        assert!(!has_role(&host, &BasicContract::client_role(), &client));
        assert_eq!(current_nonce(&host, &client), 1);

        // A renounced client can no longer put.
        let err = host
            .submit(client.signed_call(1, "put", &["value"], None))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRole);
    }

    #[test]
    fn test_unsigned_renounce_is_rejected() {
        let owner = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&owner]);
        let err = host
            .submit(owner.call(
                "renounceRole",
                &[&BasicContract::client_role().to_string(), &owner.address().to_string()],
            ))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
