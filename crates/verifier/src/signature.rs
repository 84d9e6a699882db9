//! Recoverable signature layout.
use crate::VerifyError;
use primitives::{B256, RECOVERY_ID_OFFSET, RS_LENGTH, SCALAR_LENGTH, SIGNATURE_LENGTH};
use tracing::debug;

/// A 65 byte recoverable ECDSA signature.
///
/// Byte layout is `r` (32 bytes), `s` (32 bytes) and `v` (1 byte).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The `r` scalar.
    pub r: B256,
    /// The `s` scalar.
    pub s: B256,
    /// The version byte, as it appeared in the encoded signature.
    pub v: u8,
}

impl Signature {
    /// Creates a new signature from its fields.
    pub const fn new(r: B256, s: B256, v: u8) -> Self {
        Self { r, s, v }
    }

    /// Parses a signature from exactly [`SIGNATURE_LENGTH`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, VerifyError> {
        let Ok(bytes) = <&[u8; SIGNATURE_LENGTH]>::try_from(bytes) else {
            debug!(len = bytes.len(), "rejecting signature with invalid length");
            return Err(VerifyError::InvalidSignatureLength(bytes.len()));
        };

        Ok(Self {
            r: B256::from_slice(&bytes[..SCALAR_LENGTH]),
            s: B256::from_slice(&bytes[SCALAR_LENGTH..RS_LENGTH]),
            v: bytes[RS_LENGTH],
        })
    }

    /// Returns `v` with the `0`/`1` convention mapped onto `27`/`28`.
    ///
    /// Any other value is returned unchanged.
    #[inline]
    pub const fn normalized_v(&self) -> u8 {
        if self.v < RECOVERY_ID_OFFSET {
            self.v + RECOVERY_ID_OFFSET
        } else {
            self.v
        }
    }

    /// Returns the recovery id (`0` or `1`) encoded in `v`.
    pub fn recovery_id(&self) -> Result<u8, VerifyError> {
        match self.normalized_v() {
            v @ (27 | 28) => Ok(v - RECOVERY_ID_OFFSET),
            _ => {
                debug!(v = self.v, "rejecting signature with invalid version");
                Err(VerifyError::InvalidSignatureVersion(self.v))
            }
        }
    }

    /// Returns the compact `r || s` encoding.
    pub fn rs(&self) -> [u8; RS_LENGTH] {
        let mut out = [0u8; RS_LENGTH];
        out[..SCALAR_LENGTH].copy_from_slice(self.r.as_slice());
        out[SCALAR_LENGTH..].copy_from_slice(self.s.as_slice());
        out
    }

    /// Returns the 65 byte `r || s || v` encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..RS_LENGTH].copy_from_slice(&self.rs());
        out[RS_LENGTH] = self.v;
        out
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = VerifyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}
