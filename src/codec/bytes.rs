use crate::codec::{fold, split};
use crate::error::{Error, Result};
use crate::id::{K, restore_drift};

/// Byte length of the global (96-bit) wire form.
const BYTES_IN_G: usize = 12;

/// Byte length of the local (64-bit) wire form.
const BYTES_IN_L: usize = 8;

impl K {
    /// Encodes the identifier as big-endian bytes: 12 for a global value,
    /// 8 for a local one. Byte-lexicographic order of the output equals
    /// [`K::before`] order of the inputs.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.is_local() {
            let mut buf = [0u8; BYTES_IN_L];
            split(0, self.lo, 64, 8, &mut buf);
            buf.to_vec()
        } else {
            let mut buf = [0u8; BYTES_IN_G];
            split(self.hi, self.lo, 96, 8, &mut buf);
            buf.to_vec()
        }
    }

    /// Decodes an identifier from its byte form, dispatching on length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecodeInvalidLen`] for any length other than 12
    /// (global) or 8 (local).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            BYTES_IN_G => {
                let (hi, lo) = fold(96, 8, bytes);
                Ok(K {
                    hi: restore_drift(hi),
                    lo,
                })
            }
            BYTES_IN_L => {
                let (_, lo) = fold(64, 8, bytes);
                Ok(K { hi: 0, lo })
            }
            len => Err(Error::DecodeInvalidLen(len)),
        }
    }
}
