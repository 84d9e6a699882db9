//! Signature recovery.
//!
//! Depending on enabled features, it will use different implementations of `ecrecover`.
//! * [`k256`](https://crates.io/crates/k256) - uses maintained pure rust lib `k256`, it is perfect use for no_std environments.
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - uses `bitcoin_secp256k1` lib, it is a C implementation of secp256k1 used in bitcoin core.
//!   It is faster than k256 and enabled by default and in std environment.
//! * [`libsecp256k1`](https://crates.io/crates/libsecp256k1) - is made from parity in pure rust, it is alternative for k256.
//!
//! Order of preference is `secp256k1` -> `libsecp256k1` -> `k256`. Where if no features are enabled, it will use `k256`.
//!
//! Signature format:
//! [32 bytes for r][32 bytes for s][1 byte for v]
//!
//! `v` is accepted as `27`/`28` or as the bare recovery id `0`/`1`.
//!
//! High-s signatures are not rejected: a signature and its `(r, n - s, v ^ 1)` twin recover the
//! same address.

use crate::{crypto, signature::Signature, Crypto, VerifyError};
use primitives::{Address, B256};

// Select and silence unused dependencies based on feature selection
cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        mod bitcoin_secp256k1;
        pub use bitcoin_secp256k1::ecrecover;

        // k256 is unused when secp256k1 is selected
        use k256 as _;

        // libsecp256k1 is also unused when secp256k1 is selected
        #[cfg(feature = "libsecp256k1")]
        use libsecp256k1 as _;
    } else if #[cfg(feature = "libsecp256k1")] {
        mod parity_libsecp256k1;
        pub use parity_libsecp256k1::ecrecover;

        // k256 is unused when libsecp256k1 is selected
        use k256 as _;
    } else {
        mod k256;
        pub use self::k256::ecrecover;
    }
}

/// Recovers the signer address of `signature` over `digest` using the installed [`Crypto`].
///
/// See [`recover_with`].
pub fn recover(digest: &B256, signature: &[u8]) -> Result<Address, VerifyError> {
    recover_with(crypto(), digest, signature)
}

/// Recovers the signer address of `signature` over `digest`.
///
/// # Errors
///
/// * [`VerifyError::InvalidSignatureLength`] if `signature` is not 65 bytes.
/// * [`VerifyError::InvalidSignatureVersion`] if `v` is not one of `0`, `1`, `27`, `28`.
///
/// A correctly sized signature that does not describe a curve point is not an error, it
/// recovers to [`Address::ZERO`].
pub fn recover_with(
    crypto: &dyn Crypto,
    digest: &B256,
    signature: &[u8],
) -> Result<Address, VerifyError> {
    let signature = Signature::from_slice(signature)?;
    let recid = signature.recovery_id()?;
    Ok(crypto.secp256k1_ecrecover(&signature.rs(), recid, &digest.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultCrypto;
    use ::k256::ecdsa::{Signature as K256Signature, SigningKey};
    use primitives::{b256, keccak256};
    use rstest::rstest;

    fn signing_key() -> SigningKey {
        SigningKey::from_slice(&[0x42; 32]).unwrap()
    }

    fn signer_address(key: &SigningKey) -> Address {
        let point = key.verifying_key().to_encoded_point(false);
        Address::from_word(keccak256(&point.as_bytes()[1..]))
    }

    fn sign(key: &SigningKey, digest: &B256) -> [u8; 65] {
        let (sig, recid) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.to_bytes());
        out[64] = recid.to_byte() + 27;
        out
    }

    #[test]
    fn backend_recovers_signer() {
        let key = signing_key();
        let digest = keccak256(b"ecrecover");
        let sig = sign(&key, &digest);

        let rs: [u8; 64] = sig[..64].try_into().unwrap();
        let address = ecrecover(&rs, sig[64] - 27, &digest.0).unwrap();
        assert_eq!(address, signer_address(&key));
    }

    #[rstest]
    #[case::bare_recovery_id(0)]
    #[case::offset(27)]
    fn recover_accepts_both_version_conventions(#[case] offset: u8) {
        let key = signing_key();
        let digest = keccak256(b"hello");
        let mut sig = sign(&key, &digest);
        sig[64] = sig[64] - 27 + offset;

        assert_eq!(recover(&digest, &sig), Ok(signer_address(&key)));
    }

    #[rstest]
    #[case::empty(0)]
    #[case::compact(64)]
    #[case::padded(66)]
    fn recover_rejects_signature_length(#[case] len: usize) {
        let sig = vec![1u8; len];
        assert_eq!(
            recover(&B256::ZERO, &sig),
            Err(VerifyError::InvalidSignatureLength(len))
        );
    }

    #[rstest]
    #[case(2)]
    #[case(26)]
    #[case(29)]
    #[case(255)]
    fn recover_rejects_version(#[case] v: u8) {
        let mut sig = [1u8; 65];
        sig[64] = v;
        assert_eq!(
            recover(&B256::ZERO, &sig),
            Err(VerifyError::InvalidSignatureVersion(v))
        );
    }

    #[test]
    fn recover_off_curve_returns_zero_address() {
        let mut sig = [0xff; 65];
        sig[64] = 27;
        let digest = b256!("1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8");
        assert_eq!(recover(&digest, &sig), Ok(Address::ZERO));
    }

    #[test]
    fn recover_accepts_high_s_twin() {
        let key = signing_key();
        let digest = keccak256(b"malleable");
        let (sig, recid) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();

        let (r, s) = sig.split_scalars();
        let twin = K256Signature::from_scalars(r, -s).unwrap();
        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&twin.to_bytes());
        bytes[64] = (recid.to_byte() ^ 1) + 27;

        assert_eq!(
            recover_with(&DefaultCrypto, &digest, &bytes),
            Ok(signer_address(&key))
        );
    }
}
