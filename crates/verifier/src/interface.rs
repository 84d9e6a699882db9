//! Interface of the verifier. It contains the crypto primitives the verifier is built on
//! and the error type returned by its operations.
use core::fmt::{self, Debug};
use primitives::{Address, DIGEST_LENGTH, RIPEMD160_LENGTH};
use tracing::trace;

/// Crypto primitives used by the verifier.
///
/// The verifier never implements hashing or curve arithmetic itself, it only composes these
/// operations. [`DefaultCrypto`] is used unless another implementation is installed with
/// [`crate::install_crypto`] or passed to one of the `*_with` functions.
pub trait Crypto: Send + Sync + Debug {
    /// Compute Keccak-256 hash
    fn keccak256(&self, input: &[u8]) -> [u8; 32];

    /// Compute SHA-256 hash
    fn sha256(&self, input: &[u8]) -> [u8; 32];

    /// Compute RIPEMD-160 hash
    fn ripemd160(&self, input: &[u8]) -> [u8; 20];

    /// secp256k1 ECDSA signature recovery.
    ///
    /// `sig` is `r || s`, `recid` is the recovery id normalized to `0` or `1` and `msg` is the
    /// signed digest. Returns the address of the recovered public key, or [`Address::ZERO`] when
    /// the inputs do not describe a recoverable signature.
    fn secp256k1_ecrecover(&self, sig: &[u8; 64], recid: u8, msg: &[u8; 32]) -> Address;
}

/// Default implementation of the [`Crypto`] trait using the existing crypto libraries.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn keccak256(&self, input: &[u8]) -> [u8; 32] {
        primitives::keccak256(input).0
    }

    fn sha256(&self, input: &[u8]) -> [u8; 32] {
        use sha2::Digest;
        let output = sha2::Sha256::digest(input);
        output.into()
    }

    fn ripemd160(&self, input: &[u8]) -> [u8; 20] {
        use ripemd::Digest;
        let mut hasher = ripemd::Ripemd160::new();
        hasher.update(input);
        hasher.finalize().into()
    }

    fn secp256k1_ecrecover(&self, sig: &[u8; 64], recid: u8, msg: &[u8; 32]) -> Address {
        crate::secp256k1::ecrecover(sig, recid, msg).unwrap_or_else(|err| {
            trace!(?err, recid, "ecrecover failed, returning zero address");
            Address::ZERO
        })
    }
}

/// Verifier error type.
///
/// Every variant is a validation failure of caller input, raised before any recovery is
/// attempted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerifyError {
    /// The signature is not exactly 65 bytes long. Holds the actual length.
    InvalidSignatureLength(usize),
    /// The recovery id is neither 27 nor 28 after mapping 0/1 to 27/28. Holds the raw byte.
    InvalidSignatureVersion(u8),
    /// The public key is not exactly 64 bytes long. Holds the actual length.
    InvalidPublicKeyLength(usize),
}

impl core::error::Error for VerifyError {}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignatureLength(len) => {
                write!(f, "invalid signature length: expected 65 bytes, got {len}")
            }
            Self::InvalidSignatureVersion(v) => {
                write!(f, "invalid signature version {v}: expected 0, 1, 27 or 28")
            }
            Self::InvalidPublicKeyLength(len) => {
                write!(f, "invalid public key length: expected 64 bytes, got {len}")
            }
        }
    }
}

/// Left-pads a RIPEMD-160 output into a digest-sized word.
#[inline]
pub(crate) fn pad_ripemd160(output: [u8; RIPEMD160_LENGTH]) -> [u8; DIGEST_LENGTH] {
    let mut padded = [0u8; DIGEST_LENGTH];
    padded[DIGEST_LENGTH - RIPEMD160_LENGTH..].copy_from_slice(&output);
    padded
}
