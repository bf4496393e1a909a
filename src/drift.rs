use core::time::Duration;

/// Zero point of the drift class: the encoded class is `d - DRIFT_ZERO`,
/// which fits the 3 reserved bits.
pub(crate) const DRIFT_ZERO: u64 = 18;

/// Converts a clock-drift tolerance into the number of timestamp bits that
/// rank below the node location.
///
/// With a 2 minute tolerance the last 20 bits of the timestamp become less
/// significant than the location, so two nodes whose clocks disagree by
/// less than the bound still produce identifiers whose bulk order follows
/// time. Each step of `d` doubles the tolerated skew (`2^(d+17)` ns).
///
/// The default (no bound given) is approximately 5 minutes.
pub(crate) fn drift_in_bits(bound: Option<Duration>) -> u64 {
    match bound {
        None => DRIFT_ZERO + 3,
        Some(d) if d <= Duration::from_secs(34) => DRIFT_ZERO,
        Some(d) if d <= Duration::from_secs(68) => DRIFT_ZERO + 1,
        Some(d) if d <= Duration::from_secs(137) => DRIFT_ZERO + 2,
        Some(d) if d <= Duration::from_secs(274) => DRIFT_ZERO + 3,
        Some(d) if d <= Duration::from_secs(549) => DRIFT_ZERO + 4,
        Some(d) if d <= Duration::from_secs(1099) => DRIFT_ZERO + 5,
        Some(d) if d <= Duration::from_secs(2199) => DRIFT_ZERO + 6,
        Some(_) => DRIFT_ZERO + 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drift_is_five_minute_class() {
        assert_eq!(drift_in_bits(None), 21);
        assert_eq!(drift_in_bits(Some(Duration::from_secs(274))), 21);
    }

    #[test]
    fn thresholds_double_the_tolerated_skew() {
        let classes = [
            (30, 18),
            (34, 18),
            (35, 19),
            (68, 19),
            (137, 20),
            (274, 21),
            (549, 22),
            (1099, 23),
            (2199, 24),
            (2200, 25),
            (86_400, 25),
        ];
        for (secs, d) in classes {
            assert_eq!(
                drift_in_bits(Some(Duration::from_secs(secs))),
                d,
                "bound of {secs}s"
            );
        }
    }

    #[test]
    fn encoded_class_fits_three_bits() {
        for secs in [1, 34, 68, 137, 274, 549, 1099, 2199, 100_000] {
            let d = drift_in_bits(Some(Duration::from_secs(secs)));
            assert!((d - DRIFT_ZERO) < 8);
        }
    }
}
