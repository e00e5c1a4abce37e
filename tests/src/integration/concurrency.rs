//! # Concurrent Submission
//!
//! Racing invocations that touch the same nonce key must never both
//! commit. The loser sees either the advanced nonce or a commit conflict.

#[cfg(test)]
mod tests {
    use crate::fixtures::Actor;
    use crate::integration::{current_nonce, deploy, enroll_clients};
    use lg_02_replay_guard::{LedgerNonceSequencer, NonceSequencer};
    use lg_05_invocation::InvocationRequest;
    use parking_lot::Mutex;
    use shared_types::{
        Address, ErrorKind, InMemoryWorldState, StateError, TransactionOverlay,
    };

    #[test]
    fn test_same_envelope_commits_once_across_threads() {
        let owner = Actor::secp256k1();
        let client = Actor::secp256k1();
        let host = deploy(&owner);
        enroll_clients(&host, &owner, &[&client]);

        let request = client.signed_call(0, "put", &["contended"], None);
        let failures = Mutex::new(Vec::new());
        let successes = Mutex::new(0usize);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let request = request.clone();
                let (host, failures, successes) = (&host, &failures, &successes);
                scope.spawn(move || match host.submit(request) {
                    Ok(_) => *successes.lock() += 1,
                    Err(err) => failures.lock().push(err.kind),
                });
            }
        });

        assert_eq!(*successes.lock(), 1);
        for kind in failures.lock().iter() {
            assert!(
                matches!(kind, ErrorKind::NonceMismatch | ErrorKind::Conflict),
                "unexpected failure {kind}"
            );
        }
        assert_eq!(current_nonce(&host, &client), 1);
        assert_eq!(
            host.evaluate(InvocationRequest::new("total", vec![])).unwrap(),
            "1"
        );
    }

    #[test]
    fn test_interleaved_increments_do_not_lose_updates() {
        let state = InMemoryWorldState::new();
        let nonces = LedgerNonceSequencer::default();
        let account = Address::new([7; 20]);

        let first = TransactionOverlay::new(&state);
        let second = TransactionOverlay::new(&state);
        nonces.check_and_increment(&first, &account, 0).unwrap();
        nonces.check_and_increment(&second, &account, 0).unwrap();

        first.commit().unwrap();
        let key = nonces.key_for(&account).unwrap();
        assert_eq!(second.commit(), Err(StateError::Conflict { key }));
        assert_eq!(nonces.current(&state, &account).unwrap(), 1);
    }

    #[test]
    fn test_unrelated_accounts_do_not_contend() {
        let state = InMemoryWorldState::new();
        let nonces = LedgerNonceSequencer::default();

        let first = TransactionOverlay::new(&state);
        let second = TransactionOverlay::new(&state);
        nonces.increment(&first, &Address::new([1; 20])).unwrap();
        nonces.increment(&second, &Address::new([2; 20])).unwrap();

        first.commit().unwrap();
        second.commit().unwrap();
        assert_eq!(state.len(), 2);
    }
}
