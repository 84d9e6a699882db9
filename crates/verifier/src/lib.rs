//! # ecverify
//!
//! Verification of secp256k1 signatures against signers identified by the hash of their
//! public key.
//!
//! A signer's address is the low-order 20 bytes of the Keccak-256 hash of its 64 byte
//! uncompressed public key. [`verify`] hashes a message, recovers the signer address from the
//! signature and compares it with the address of the expected public key:
//!
//! ```ignore
//! use ecverify::{verify, HashAlgorithm};
//!
//! let valid = verify(b"hello", &signature, &public_key, HashAlgorithm::Keccak256)?;
//! ```
//!
//! Every operation is a pure function. The crypto primitives it is built on are exposed through
//! the [`Crypto`] trait and can be replaced with [`install_crypto`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod address;
pub mod hash;
pub mod interface;
pub mod secp256k1;
pub mod signature;
pub mod verify;

pub use address::{derive_address, derive_address_with};
pub use hash::{hash, hash_with, HashAlgorithm, ParseHashAlgorithmError};
pub use interface::*;
pub use self::secp256k1::{recover, recover_with};
pub use signature::Signature;
pub use verify::{verify, verify_digest, verify_digest_with, verify_with};

pub use primitives;

use once_cell::race::OnceBox;
use std::boxed::Box;

/// Global crypto implementation instance
static CRYPTO: OnceBox<Box<dyn Crypto>> = OnceBox::new();

/// Install a custom crypto implementation globally.
///
/// Returns `true` if the implementation was installed, `false` if one was already installed or
/// the default was already in use.
///
/// # Example
/// ```ignore
/// use ecverify::{install_crypto, Crypto};
///
/// #[derive(Debug)]
/// struct MyCrypto;
/// impl Crypto for MyCrypto {
///     // ... implementation
/// }
///
/// if !install_crypto(MyCrypto) {
///     println!("Crypto already installed");
/// }
/// ```
pub fn install_crypto<C: Crypto + 'static>(crypto: C) -> bool {
    let installed = CRYPTO.set(Box::new(Box::new(crypto))).is_ok();
    if !installed {
        tracing::debug!("crypto implementation already installed");
    }
    installed
}

/// Returns the installed crypto implementation, or [`DefaultCrypto`] if none is installed.
pub fn crypto() -> &'static dyn Crypto {
    CRYPTO
        .get_or_init(|| Box::new(Box::new(DefaultCrypto)))
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_after_first_use_is_rejected() {
        let _ = crypto();
        assert!(!install_crypto(DefaultCrypto));
    }
}
