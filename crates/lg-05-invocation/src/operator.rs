//! Operator identity.
//!
//! The operator is whoever the ledger transport says submitted the
//! transaction. It is derived from the client's SPKI public key with the
//! same codec used for envelope signers.

use shared_crypto::address_from_der;
use shared_types::Address;
use tracing::warn;

/// Address of the submitting client, or the zero address when the client
/// presented no usable key. The zero address never passes an owner or role
/// check.
pub fn derive_operator(client_key: Option<&[u8]>) -> Address {
    let Some(der) = client_key else {
        return Address::ZERO;
    };
    match address_from_der(der) {
        Ok(address) => address,
        Err(e) => {
            warn!(error = %e, "client key unusable, operator is the zero address");
            Address::ZERO
        }
    }
}
