use crate::drift::DRIFT_ZERO;
use crate::id::K;

/// Width of the ⟨s⟩ sequence field.
pub(crate) const SEQ_BITS: u64 = 14;

/// Width of the ⟨d⟩ drift class field.
pub(crate) const DRIFT_BITS: u64 = 3;

/// Bits of the raw timestamp dropped before packing. 17 bits is roughly
/// 10⁵ nanoseconds: the sequence disambiguates inside that window.
pub(crate) const TIME_DROP: u64 = SEQ_BITS + DRIFT_BITS;

/// Bitmask for extracting the 14-bit sequence field.
pub(crate) const SEQ_MASK: u64 = (1 << SEQ_BITS) - 1;

/// Splits the ⟨𝒕⟩ timestamp fraction around the node field.
///
/// ```text
///   3    47 - d                32bit      d      14
///  |-|-------------------|--------!-------|-----|-------|
///  ^                         b    ^   a                 ^
/// 96                             64                     0
/// ```
///
/// The packed timestamp is `t >> 17`: 47 bits survive. Its low `d` bits
/// land in `lo` at [14, 14+d) and rank below the node; the remaining
/// `47-d` bits land in `hi` at bit `b`. The drift class is echoed into
/// `hi` at [29, 32), the top of the 96-bit layout.
pub(crate) fn split_time(t: u64, d: u64) -> (u64, u64) {
    let x = t >> TIME_DROP;
    let a = 64 - SEQ_BITS - d;
    let b = 32 - a;

    let lo = (x << (a + SEQ_BITS)) >> a;
    let hi = (x >> d) << b;
    let dd = (d - DRIFT_ZERO) << 29;

    (hi | dd, lo)
}

/// Splits the ⟨𝒍⟩ location fraction across the word boundary: the low
/// `a = 64 - 14 - d` bits sit in `lo` above the low timestamp bits, the
/// remaining `b = 32 - a` bits sit at the bottom of `hi`.
///
/// With `d = 18` the node fits `lo` entirely and the `hi` part is zero.
pub(crate) fn split_node(node: u32, d: u64) -> (u64, u64) {
    let node = u64::from(node);
    let b = d - DRIFT_ZERO;

    let lo = node << (d + SEQ_BITS);
    let hi = node >> (32 - b);

    (hi, lo)
}

/// Packs a global (96-bit) identifier. The drift class is written twice:
/// the echo inside `split_time` and the top three bits of `hi`.
pub(crate) fn make_global(node: u32, d: u64, t: u64, seq: u64) -> K {
    let (thi, tlo) = split_time(t, d);
    let (nhi, nlo) = split_node(node, d);

    K {
        hi: thi | nhi | ((d - DRIFT_ZERO) << 61),
        lo: nlo | tlo | (seq & SEQ_MASK),
    }
}

/// Packs a local (64-bit) identifier: drift class, 47 bits of timestamp,
/// 14 bits of sequence, all in `lo`.
pub(crate) fn make_local(d: u64, t: u64, seq: u64) -> K {
    let dd = (d - DRIFT_ZERO) << 61;
    let x = (t >> TIME_DROP) << SEQ_BITS;

    K {
        hi: 0,
        lo: dd | x | (seq & SEQ_MASK),
    }
}

/// Rebuilds the top-three-bit drift copy of a global `hi` word from the
/// echo at [29, 32). Wire forms carry 96 effective bits, so decoders must
/// restore the copy before equality holds against constructed values.
pub(crate) fn restore_drift(hi: u64) -> u64 {
    hi | (((hi >> 29) & 0x7) << 61)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_copies_agree_for_every_class() {
        for d in DRIFT_ZERO..DRIFT_ZERO + 8 {
            let id = make_global(0xffff_ffff, d, 1 << 40, 1);
            assert_eq!((id.hi >> 61), (id.hi >> 29) & 0x7);
            assert_eq!((id.hi >> 61) + DRIFT_ZERO, d);
        }
    }

    #[test]
    fn default_class_places_node_below_high_time() {
        // d = 21: node low 29 bits at lo[35..64), node high 3 bits at
        // hi[0..3), timestamp echo region untouched.
        let id = make_global(0xffff_ffff, 21, 0, 0);
        assert_eq!(id.lo >> 35, (1 << 29) - 1);
        assert_eq!(id.hi & 0x7, 0x7);
    }

    #[test]
    fn narrow_class_keeps_node_out_of_hi() {
        // d = 18 gives a = 32: the node never spills into hi.
        let (nhi, nlo) = split_node(0xffff_ffff, 18);
        assert_eq!(nhi, 0);
        assert_eq!(nlo, 0xffff_ffff << 32);
    }

    #[test]
    fn packed_timestamp_drops_low_17_bits() {
        let (hi, lo) = split_time((1 << 17) - 1, 21);
        assert_eq!(hi & !(0x7 << 29), 0);
        assert_eq!(lo, 0);

        let (hi, lo) = split_time(1 << 17, 21);
        assert_eq!(lo, 1 << 14);
        assert_eq!(hi & !(0x7 << 29), 0);
    }

    #[test]
    fn sequence_is_masked_at_pack_time() {
        let id = make_local(21, 0, SEQ_MASK + 5);
        assert_eq!(id.lo & SEQ_MASK, 4);
        assert_eq!((id.lo >> SEQ_BITS) & ((1 << 47) - 1), 0);
    }

    #[test]
    fn restore_drift_matches_constructed_hi() {
        for d in DRIFT_ZERO..DRIFT_ZERO + 8 {
            let id = make_global(0x0102_0304, d, 1 << 30, 7);
            let wire = id.hi & 0x0000_0000_ffff_ffff;
            assert_eq!(restore_drift(wire), id.hi);
        }
    }
}
