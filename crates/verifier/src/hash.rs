//! Message hashing.
use crate::{crypto, interface::pad_ripemd160, Crypto};
use core::{fmt, str::FromStr};
use primitives::B256;

/// Hash algorithm applied to a message before signature recovery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    /// Keccak-256.
    #[default]
    Keccak256,
    /// SHA2-256.
    Sha256,
    /// RIPEMD-160, left-zero-padded to 32 bytes.
    Ripemd160,
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [Self; 3] = [Self::Keccak256, Self::Sha256, Self::Ripemd160];

    /// Returns the lowercase name of the algorithm.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Keccak256 => "keccak256",
            Self::Sha256 => "sha256",
            Self::Ripemd160 => "ripemd160",
        }
    }

    /// Computes the digest of `message` with the given crypto implementation.
    pub fn digest(self, crypto: &dyn Crypto, message: &[u8]) -> B256 {
        match self {
            Self::Keccak256 => B256::new(crypto.keccak256(message)),
            Self::Sha256 => B256::new(crypto.sha256(message)),
            Self::Ripemd160 => B256::new(pad_ripemd160(crypto.ripemd160(message))),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`HashAlgorithm`] name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseHashAlgorithmError;

impl core::error::Error for ParseHashAlgorithmError {}

impl fmt::Display for ParseHashAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown hash algorithm, expected one of keccak256, sha256, ripemd160")
    }
}

impl FromStr for HashAlgorithm {
    type Err = ParseHashAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseHashAlgorithmError)
    }
}

/// Computes the digest of `message` using the installed [`Crypto`].
pub fn hash(message: &[u8], algorithm: HashAlgorithm) -> B256 {
    hash_with(crypto(), message, algorithm)
}

/// Computes the digest of `message`.
///
/// For [`HashAlgorithm::Ripemd160`] the 20 byte output occupies the low-order bytes and the
/// upper 12 bytes are zero.
pub fn hash_with(crypto: &dyn Crypto, message: &[u8], algorithm: HashAlgorithm) -> B256 {
    algorithm.digest(crypto, message)
}
