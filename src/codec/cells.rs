/// Boundary between the `hi` and `lo` words in the concatenated layout.
const HILO: u64 = 64;

/// Decomposes `hi ∥ lo` into `size / n` cells of `n` bits, MSB first.
///
/// Acts as a binary comprehension: cell `i` holds bits
/// `[size - (i+1)·n, size - i·n)` of the concatenation. `n` must divide
/// `size`; cells that straddle the word boundary stitch the low bits of
/// `hi` to the high bits of `lo`.
#[inline(always)]
#[allow(clippy::inline_always)]
pub(crate) fn split(hi: u64, lo: u64, size: u64, n: u64, out: &mut [u8]) {
    debug_assert_eq!(out.len() as u64, size / n);
    let mask = (1u64 << n) - 1;

    for (i, cell) in out.iter_mut().enumerate() {
        let b = size - (i as u64 + 1) * n;
        let a = b + n;

        *cell = if b >= HILO {
            ((hi >> (b - HILO)) & mask) as u8
        } else if a <= HILO {
            ((lo >> b) & mask) as u8
        } else {
            let suffix = (1u64 << (a - HILO)) - 1;
            (((hi & suffix) << (HILO - b)) | (lo >> b)) as u8
        };
    }
}

/// Composes `hi` and `lo` words from `n`-bit cells; inverse to [`split`].
#[inline(always)]
#[allow(clippy::inline_always)]
pub(crate) fn fold(size: u64, n: u64, cells: &[u8]) -> (u64, u64) {
    debug_assert_eq!(cells.len() as u64, size / n);
    let mask = (1u64 << n) - 1;
    let (mut hi, mut lo) = (0u64, 0u64);

    for (i, cell) in cells.iter().enumerate() {
        let b = size - (i as u64 + 1) * n;
        let a = b + n;
        let cell = u64::from(*cell) & mask;

        if b >= HILO {
            hi |= cell << (b - HILO);
        } else if a <= HILO {
            lo |= cell << b;
        } else {
            hi |= cell >> (HILO - b);
            lo |= cell << b;
        }
    }

    (hi, lo)
}
