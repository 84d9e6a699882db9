//! Address derivation.
use crate::{crypto, Crypto};
use primitives::{Address, B256};

/// Derives the address of `public_key` using the installed [`Crypto`].
pub fn derive_address(public_key: &[u8]) -> Address {
    derive_address_with(crypto(), public_key)
}

/// Derives the address of `public_key`: the low-order 20 bytes of its Keccak-256 hash.
///
/// The input length is not checked, callers that establish identity from a public key must
/// ensure it is the 64 byte uncompressed encoding without the `0x04` tag.
pub fn derive_address_with(crypto: &dyn Crypto, public_key: &[u8]) -> Address {
    Address::from_word(B256::new(crypto.keccak256(public_key)))
}
