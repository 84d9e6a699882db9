//! k256 implementation of `ecrecover`. More about it in [`crate::secp256k1`].
use k256::ecdsa::{Error, RecoveryId, Signature, VerifyingKey};
use primitives::{keccak256, Address};

/// Recover the signer address from a signature and a message digest.
///
/// This function is using the `k256` crate.
pub fn ecrecover(sig: &[u8; 64], mut recid: u8, msg: &[u8; 32]) -> Result<Address, Error> {
    // parse signature
    let mut sig = Signature::from_slice(sig.as_slice())?;

    // k256 only recovers from low-s signatures, normalize and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or_else(Error::new)?;

    // recover key
    let recovered_key = VerifyingKey::recover_from_prehash(&msg[..], &sig, recid)?;
    // hash it, address is the low-order 20 bytes
    let hash = keccak256(
        &recovered_key
            .to_encoded_point(/* compress = */ false)
            .as_bytes()[1..],
    );
    Ok(Address::from_word(hash))
}
