use crate::clock::{Clock, TimeSource, UnixNano, location_from_env, location_from_random};
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The default [`Clock`]: a node location plus a lock-free monotonic
/// sequence over a pluggable [`TimeSource`].
///
/// The sequence is an atomic fetch-and-add masked to 14 bits on return,
/// so concurrent callers each observe a distinct ⟨𝒔⟩ within a 16384-wide
/// window. [`Clock::tick`] never blocks.
///
/// # Example
///
/// ```
/// use korder::{InverseUnixNano, K, LogicalClock};
///
/// // Wall-clock identifiers, random node location.
/// let clock = LogicalClock::new();
/// let id = K::global(&clock, None);
///
/// // Newest-first identifiers for a fixed node.
/// let feed = LogicalClock::with_location(42, InverseUnixNano);
/// let head = K::global(&feed, None);
/// ```
#[derive(Debug)]
pub struct LogicalClock<T: TimeSource = UnixNano> {
    location: u32,
    time: T,
    seq: AtomicU64,
}

impl LogicalClock<UnixNano> {
    /// Wall-clock instance with a random node location.
    pub fn new() -> Self {
        Self::with_time(UnixNano)
    }
}

impl Default for LogicalClock<UnixNano> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> LogicalClock<T> {
    /// Instance over a custom time source, with a random node location.
    pub fn with_time(time: T) -> Self {
        Self::with_location(location_from_random(), time)
    }

    /// Instance with an explicit node location.
    pub fn with_location(location: u32, time: T) -> Self {
        Self {
            location,
            time,
            seq: AtomicU64::new(0),
        }
    }

    /// Instance whose location is derived from the `KORDER_NODE_ID`
    /// environment variable.
    pub fn from_env(time: T) -> Self {
        Self::with_location(location_from_env(), time)
    }
}

impl<T: TimeSource> Clock for LogicalClock<T> {
    fn location(&self) -> u32 {
        self.location
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn tick(&self) -> (u64, u64) {
        let count = self.seq.fetch_add(1, Ordering::Relaxed);
        (self.time.now_nanos(), self.time.sequence(count))
    }
}
