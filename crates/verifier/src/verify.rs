//! Signature verification against a public key.
use crate::{
    address::derive_address_with, crypto, secp256k1::recover_with, Crypto, HashAlgorithm,
    VerifyError,
};
use primitives::{B256, PUBLIC_KEY_LENGTH};
use tracing::debug;

/// Checks that `signature` over `message` was produced by the holder of `public_key`, using the
/// installed [`Crypto`].
///
/// See [`verify_with`].
pub fn verify(
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
    algorithm: HashAlgorithm,
) -> Result<bool, VerifyError> {
    verify_with(crypto(), message, signature, public_key, algorithm)
}

/// Checks that `signature` over `message` was produced by the holder of `public_key`.
///
/// The message is hashed with `algorithm`, the signer address is recovered from the digest and
/// compared with the address derived from `public_key`.
///
/// # Errors
///
/// * [`VerifyError::InvalidPublicKeyLength`] if `public_key` is not 64 bytes.
/// * Any error of [`recover_with`].
///
/// A well-formed signature that does not recover to `public_key` returns `Ok(false)`.
pub fn verify_with(
    crypto: &dyn Crypto,
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
    algorithm: HashAlgorithm,
) -> Result<bool, VerifyError> {
    check_public_key(public_key)?;
    let digest = algorithm.digest(crypto, message);
    compare_signer(crypto, &digest, signature, public_key)
}

/// Checks a signature over an already computed digest, using the installed [`Crypto`].
pub fn verify_digest(
    digest: &B256,
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool, VerifyError> {
    verify_digest_with(crypto(), digest, signature, public_key)
}

/// Checks a signature over an already computed digest.
///
/// The public key length is checked before the signature is decoded.
pub fn verify_digest_with(
    crypto: &dyn Crypto,
    digest: &B256,
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool, VerifyError> {
    check_public_key(public_key)?;
    compare_signer(crypto, digest, signature, public_key)
}

fn compare_signer(
    crypto: &dyn Crypto,
    digest: &B256,
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool, VerifyError> {
    let recovered = recover_with(crypto, digest, signature)?;
    let expected = derive_address_with(crypto, public_key);
    Ok(recovered == expected)
}

fn check_public_key(public_key: &[u8]) -> Result<(), VerifyError> {
    if public_key.len() != PUBLIC_KEY_LENGTH {
        debug!(len = public_key.len(), "rejecting public key with invalid length");
        return Err(VerifyError::InvalidPublicKeyLength(public_key.len()));
    }
    Ok(())
}
