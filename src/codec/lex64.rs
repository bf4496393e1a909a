use crate::codec::{fold, split};
use crate::error::Error;
use crate::id::{K, restore_drift};
use core::fmt;
use core::str::FromStr;

/// The 64-character alphabet, listed in ascending byte order so that text
/// order equals the byte-lexicographic order of the underlying cells.
const ALPHABET: &[u8; 64] = b".0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const NO_VALUE: u8 = 255;

/// Tagged text form: `g:` or `l:` followed by 16 alphabet characters.
const TEXT_LEN: usize = 18;

/// Lookup table for decoding the 64-character alphabet.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < 64 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Encodes the identifier as an 18-character lexicographically sortable
/// string: a `g`/`l` type tag, `:`, and 16 alphabet characters covering
/// 96 bits in 6-bit cells (global) or 64 bits in 4-bit cells (local).
impl fmt::Display for K {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = [0u8; 16];
        let mut enc = [0u8; TEXT_LEN];

        if self.is_local() {
            enc[0] = b'l';
            split(0, self.lo, 64, 4, &mut cells);
        } else {
            enc[0] = b'g';
            split(self.hi, self.lo, 96, 6, &mut cells);
        }
        enc[1] = b':';

        for (dst, cell) in enc[2..].iter_mut().zip(cells) {
            *dst = ALPHABET[cell as usize];
        }

        // SAFETY: tags, separator and alphabet are all ASCII.
        f.write_str(unsafe { core::str::from_utf8_unchecked(&enc) })
    }
}

impl FromStr for K {
    type Err = Error;

    /// Decodes the tagged text form.
    ///
    /// # Errors
    ///
    /// Rejects inputs that are not 18 bytes, carry a tag other than `g`
    /// or `l`, or contain characters outside the alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != TEXT_LEN {
            return Err(Error::DecodeInvalidTextLen(bytes.len()));
        }
        if bytes[1] != b':' {
            return Err(Error::DecodeInvalidAscii {
                byte: bytes[1],
                index: 1,
            });
        }

        let mut cells = [0u8; 16];
        for (i, byte) in bytes[2..].iter().enumerate() {
            let v = LOOKUP[*byte as usize];
            if v == NO_VALUE {
                return Err(Error::DecodeInvalidAscii {
                    byte: *byte,
                    index: i + 2,
                });
            }
            cells[i] = v;
        }

        match bytes[0] {
            b'g' => {
                let (hi, lo) = fold(96, 6, &cells);
                Ok(K {
                    hi: restore_drift(hi),
                    lo,
                })
            }
            b'l' => {
                let (_, lo) = fold(64, 4, &cells);
                Ok(K { hi: 0, lo })
            }
            tag => Err(Error::DecodeInvalidTag(tag)),
        }
    }
}
