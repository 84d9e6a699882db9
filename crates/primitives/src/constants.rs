//! Sizes of the byte strings handled by the verifier.

/// Length of a recoverable signature in bytes (`r || s || v`).
pub const SIGNATURE_LENGTH: usize = 65;

/// Length of the compact `r || s` part of a signature.
pub const RS_LENGTH: usize = 64;

/// Length of a single signature scalar (`r` or `s`).
pub const SCALAR_LENGTH: usize = 32;

/// Length of an uncompressed secp256k1 public key with the leading `0x04` tag stripped.
pub const PUBLIC_KEY_LENGTH: usize = 64;

/// Length of an uncompressed secp256k1 public key including the leading `0x04` tag.
pub const PUBLIC_KEY_UNCOMPRESSED_LENGTH: usize = 65;

/// Length of a message digest.
pub const DIGEST_LENGTH: usize = 32;

/// Length of an address.
pub const ADDRESS_LENGTH: usize = 20;

/// Native output length of RIPEMD-160.
///
/// The digest is stored left-zero-padded to [`DIGEST_LENGTH`].
pub const RIPEMD160_LENGTH: usize = 20;

/// Offset added to a `0`/`1` recovery id to obtain the `27`/`28` version byte.
pub const RECOVERY_ID_OFFSET: u8 = 27;
