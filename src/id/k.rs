use crate::clock::Clock;
use crate::drift::{DRIFT_ZERO, drift_in_bits};
use crate::id::pack::{DRIFT_BITS, SEQ_BITS, SEQ_MASK, TIME_DROP, make_global, make_local};
use core::fmt;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A k-ordered unique identifier.
///
/// `K` is an opaque 96-bit value held as two 64-bit words. A *local*
/// identifier uses only the low word (`hi == 0`) and carries no node
/// location; a *global* identifier uses all 96 effective bits and embeds
/// a 32-bit location between the high and low fractions of its timestamp.
///
/// The derived ordering is strict lexicographic on `(hi, lo)`, which
/// equals big-endian lexicographic order on [`K::to_bytes`] and on the
/// string form. Identifiers allocated by one clock therefore sort by
/// allocation order; identifiers from different clocks sort by time once
/// the clocks disagree by more than the configured drift bound, and by
/// location inside that window.
///
/// # Example
///
/// ```
/// use korder::{K, LogicalClock};
///
/// let clock = LogicalClock::new();
/// let a = K::global(&clock, None);
/// let b = K::global(&clock, None);
/// assert!(a.before(&b));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct K {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

impl K {
    /// Returns the "zero" identifier of a drift class: no timestamp, no
    /// location, no sequence. Two zeros of one class are equal; neither
    /// is before the other.
    pub fn zero(drift: impl Into<Option<Duration>>) -> Self {
        make_global(0, drift_in_bits(drift.into()), 0, 0)
    }

    /// Generates a locally unique 64-bit k-ordered identifier.
    ///
    /// ```text
    ///  3bit        47 bit           14 bit
    ///  |-|------------------------|-------|
    ///  ⟨𝒅⟩           ⟨𝒕⟩              ⟨𝒔⟩
    /// ```
    pub fn local(clock: &impl Clock, drift: impl Into<Option<Duration>>) -> Self {
        let (t, seq) = clock.tick();
        make_local(drift_in_bits(drift.into()), t, seq)
    }

    /// Generates a globally unique 96-bit k-ordered identifier. No
    /// central registration process is required: the clock's location
    /// keeps concurrent allocators apart.
    ///
    /// ```text
    ///  3bit  47 bit - 𝒅 bit         32 bit     𝒅 bit  14 bit
    ///  |-|-------------------|----------------|-----|-------|
    ///  ⟨𝒅⟩        ⟨𝒕⟩                ⟨𝒍⟩         ⟨𝒕⟩     ⟨𝒔⟩
    /// ```
    pub fn global(clock: &impl Clock, drift: impl Into<Option<Duration>>) -> Self {
        let (t, seq) = clock.tick();
        make_global(clock.location(), drift_in_bits(drift.into()), t, seq)
    }

    /// Packs a wall-clock instant as a local identifier with zero
    /// sequence. Instants before the UNIX epoch clamp to zero.
    pub fn from_time(t: SystemTime, drift: impl Into<Option<Duration>>) -> Self {
        let nanos = t
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        make_local(drift_in_bits(drift.into()), nanos, 0)
    }

    /// True for the 64-bit local form.
    pub const fn is_local(&self) -> bool {
        self.hi == 0
    }

    /// True for the 96-bit global form.
    pub const fn is_global(&self) -> bool {
        !self.is_local()
    }

    /// Returns the ⟨𝒕⟩ timestamp fraction in nanoseconds. The low 17 bits
    /// are zero: they were exchanged for the drift class and sequence.
    pub const fn time(&self) -> u64 {
        if self.is_local() {
            return (self.lo << DRIFT_BITS) >> TIME_DROP << TIME_DROP;
        }

        let d = self.drift_bits();
        let a = 64 - SEQ_BITS - d;
        let b = 32 - a;

        // Junk above bit 47 (the drift echo) falls off the final shift.
        let hi = (self.hi >> b) << d;
        let lo = (self.lo << a) >> (64 - d);

        (hi | lo) << TIME_DROP
    }

    /// Returns the ⟨𝒍⟩ location fraction, or 0 for a local identifier.
    pub const fn node(&self) -> u32 {
        if self.is_local() {
            return 0;
        }

        let d = self.drift_bits();
        let a = 64 - SEQ_BITS - d;
        let b = 32 - a;

        let lo = self.lo >> (d + SEQ_BITS);
        let hi = (self.hi & ((1 << b) - 1)) << a;

        (hi | lo) as u32
    }

    /// Returns the ⟨𝒔⟩ sequence fraction: the value of the clock's
    /// monotonic counter at allocation time.
    pub const fn seq(&self) -> u64 {
        self.lo & SEQ_MASK
    }

    /// Checks if this identifier was allocated before `other`.
    pub fn before(&self, other: &K) -> bool {
        self < other
    }

    /// Checks if this identifier was allocated after `other`.
    pub fn after(&self, other: &K) -> bool {
        self > other
    }

    /// Approximates the distance between two identifiers of one drift
    /// class. Subtractions wrap; callers are expected to pass
    /// `self >= other`.
    pub fn diff(&self, other: &K) -> K {
        let t = self.time().wrapping_sub(other.time());
        let s = self.seq().wrapping_sub(other.seq());

        if self.is_global() && other.is_global() {
            make_global(self.node(), self.drift_bits(), t, s)
        } else {
            make_local(self.drift_bits(), t, s)
        }
    }

    /// Casts a local identifier to the global form, stamping it with the
    /// clock's location. Global identifiers pass through unchanged.
    pub fn to_global(&self, clock: &impl Clock) -> K {
        if self.is_global() {
            return *self;
        }
        make_global(clock.location(), self.drift_bits(), self.time(), self.seq())
    }

    /// Casts a global identifier to the local form, dropping its
    /// location. Local identifiers pass through unchanged.
    pub fn to_local(&self) -> K {
        if self.is_local() {
            return *self;
        }
        make_local(self.drift_bits(), self.time(), self.seq())
    }

    /// The ⟨𝒕⟩ fraction as a wall-clock instant.
    pub fn epoch(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_nanos(self.time())
    }

    /// The ⟨𝒕⟩ fraction of an inverse-clock identifier as a wall-clock
    /// instant.
    pub fn epoch_inverse(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_nanos(u64::MAX - self.time())
    }

    /// Drift class `d` recovered from whichever word carries it.
    pub(crate) const fn drift_bits(&self) -> u64 {
        if self.is_local() {
            (self.lo >> 61) + DRIFT_ZERO
        } else {
            ((self.hi >> 29) & 0x7) + DRIFT_ZERO
        }
    }
}

impl fmt::Debug for K {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("K")
            .field("hi", &format_args!("{:#018x}", self.hi))
            .field("lo", &format_args!("{:#018x}", self.lo))
            .field("time", &self.time())
            .field("node", &self.node())
            .field("seq", &self.seq())
            .finish()
    }
}
