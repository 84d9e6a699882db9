//! `libsecp256k1` implementation of `ecrecover`. More about it in [`crate::secp256k1`].
use libsecp256k1::{recover, Error, Message, RecoveryId, Signature};
use primitives::{keccak256, Address};

/// Recover the signer address from a signature and a message digest.
///
/// This function is using the `libsecp256k1` crate.
pub fn ecrecover(sig: &[u8; 64], recid: u8, msg: &[u8; 32]) -> Result<Address, Error> {
    let recid = RecoveryId::parse(recid)?;
    let sig = Signature::parse_standard(sig)?;
    let msg = Message::parse(msg);

    // uses static context.
    let public = recover(&msg, &sig, &recid)?;

    let hash = keccak256(&public.serialize()[1..]);
    Ok(Address::from_word(hash))
}
