//! # Integration Tests
//!
//! Cross-crate scenarios driven through `InvocationHost` against the
//! reference consumer contract.

pub mod concurrency;
pub mod end_to_end;
pub mod ownership;
pub mod replay;
pub mod roles;
pub mod telemetry;

use crate::fixtures::{Actor, BasicContract};
use lg_05_invocation::{InvocationConfig, InvocationHost, InvocationRequest};
use shared_types::InMemoryWorldState;
use std::sync::Arc;

pub type Host = InvocationHost<BasicContract>;

/// Fresh host whose contract has been initialized by `owner`.
pub fn deploy(owner: &Actor) -> Host {
    deploy_with(owner, &InvocationConfig::default())
}

/// Fresh host with an uninitialized contract.
pub fn undeployed() -> Host {
    undeployed_with(&InvocationConfig::default())
}

pub fn undeployed_with(config: &InvocationConfig) -> Host {
    InvocationHost::new(
        Arc::new(InMemoryWorldState::new()),
        BasicContract::default(),
        config,
    )
}

pub fn deploy_with(owner: &Actor, config: &InvocationConfig) -> Host {
    let host = undeployed_with(config);
    host.submit(owner.call("initialize", &[]))
        .expect("initialize succeeds");
    host
}

/// Makes the admin role the admin of the client role, gives it to `owner`,
/// then grants the client role to each of `clients`.
pub fn enroll_clients(host: &Host, owner: &Actor, clients: &[&Actor]) {
    let client = BasicContract::client_role().to_string();
    let admin = BasicContract::admin_role().to_string();

    host.submit(owner.call("setRoleAdmin", &[&client, &admin]))
        .expect("setRoleAdmin succeeds");
    host.submit(owner.call("grantRole", &[&admin, &owner.address().to_string()]))
        .expect("owner becomes admin");
    for actor in clients {
        host.submit(owner.call("grantRole", &[&client, &actor.address().to_string()]))
            .expect("client granted");
    }
}

/// Replay-guard nonce of `actor`, read through the contract surface.
pub fn current_nonce(host: &Host, actor: &Actor) -> u64 {
    host.evaluate(InvocationRequest::new(
        "current",
        vec![actor.address().to_string()],
    ))
    .expect("current succeeds")
    .parse()
    .expect("decimal nonce")
}
