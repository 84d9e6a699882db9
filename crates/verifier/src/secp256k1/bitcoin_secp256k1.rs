//! bitcoin_secp256k1 implementation of `ecrecover`. More about it in [`crate::secp256k1`].
use primitives::{keccak256, Address};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

/// Recover the signer address from a signature and a message digest.
///
/// This function is using the `secp256k1` crate, it is enabled by `secp256k1` feature and it is in default.
pub fn ecrecover(sig: &[u8; 64], recid: u8, msg: &[u8; 32]) -> Result<Address, secp256k1::Error> {
    let recid = RecoveryId::try_from(recid as i32)?;
    let sig = RecoverableSignature::from_compact(sig.as_slice(), recid)?;

    let msg = Message::from_digest(*msg);
    let public = SECP256K1.recover_ecdsa(&msg, &sig)?;

    let hash = keccak256(&public.serialize_uncompressed()[1..]);
    Ok(Address::from_word(hash))
}
