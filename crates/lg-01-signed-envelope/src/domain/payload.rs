//! # Signed Payload
//!
//! The exact bytes a caller signs: the nonce in decimal, then every argument's
//! raw bytes in call order, with no separators. Signer and verifier must feed
//! the same argument list in the same order.

/// Builds `decimal(nonce) || arg0 || arg1 || ...`.
pub fn build_payload<S: AsRef<[u8]>>(nonce: u64, args: &[S]) -> Vec<u8> {
    let nonce = nonce.to_string();
    let len = nonce.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>();

    let mut payload = Vec::with_capacity(len);
    payload.extend_from_slice(nonce.as_bytes());
    for arg in args {
        payload.extend_from_slice(arg.as_ref());
    }
    payload
}
