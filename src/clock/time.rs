use crate::id::SEQ_MASK;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the ⟨𝒕⟩ timestamp fraction, paired with the shaping of
/// the ⟨𝒔⟩ sequence fraction.
///
/// The pairing matters: a time source that runs backwards (see
/// [`InverseUnixNano`]) must also run its sequence backwards, or
/// identifiers allocated within one timestamp reading would sort against
/// the grain.
pub trait TimeSource {
    /// Returns the current 64-bit nanosecond-equivalent timestamp.
    fn now_nanos(&self) -> u64;

    /// Shapes a raw monotonic counter value into the 14-bit sequence.
    fn sequence(&self, count: u64) -> u64 {
        count & SEQ_MASK
    }
}

/// Wall-clock time source: nanoseconds since the UNIX epoch.
///
/// # Panics
///
/// Panics if the system clock reads before the UNIX epoch.
#[derive(Default, Clone, Copy, Debug)]
pub struct UnixNano;

impl TimeSource for UnixNano {
    fn now_nanos(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX epoch")
            .as_nanos() as u64
    }
}

/// Inverse wall-clock time source: `u64::MAX` minus nanoseconds since
/// the UNIX epoch. Identifiers allocated from it sort newest-first,
/// which suits feeds and logs read from the head.
///
/// # Panics
///
/// Panics if the system clock reads before the UNIX epoch.
#[derive(Default, Clone, Copy, Debug)]
pub struct InverseUnixNano;

impl TimeSource for InverseUnixNano {
    fn now_nanos(&self) -> u64 {
        u64::MAX - UnixNano.now_nanos()
    }

    fn sequence(&self, count: u64) -> u64 {
        SEQ_MASK - (count & SEQ_MASK)
    }
}
