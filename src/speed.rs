use crate::numeric::trunc_fixed;

const SPEED_K: f64 = 1000.0;

/// Format a transfer rate given in bytes per second: "999 kB/s".
pub fn speed_bps(bps: f64) -> String {
    speed(to_kbps(bps))
}

/// Floor a bytes-per-second rate into whole kB/s. Sub-kilo rates floor
/// to zero.
pub fn to_kbps(bps: f64) -> f64 {
    (bps / SPEED_K).floor()
}

/// Format a rate already expressed in kB/s. The 999.95 / 99.995 cutoffs
/// are the truncation-aware equivalents of "< 1000" and "< 100".
pub fn speed(kbps: f64) -> String {
    let mut speed = kbps;

    if speed <= 999.95 {
        // 0 kB/s to 999 kB/s
        return format!("{} kB/s", trunc_fixed(speed, 0));
    }

    speed /= SPEED_K;

    if speed <= 99.995 {
        // 1 MB/s to 99.99 MB/s
        return format!("{} MB/s", trunc_fixed(speed, 2));
    }
    if speed <= 999.95 {
        // 100 MB/s to 999.9 MB/s
        return format!("{} MB/s", trunc_fixed(speed, 1));
    }

    // insane rates stay in GB/s
    speed /= SPEED_K;
    format!("{} GB/s", trunc_fixed(speed, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_kilo_rates_floor_to_zero() {
        assert_eq!(speed_bps(0.0), "0 kB/s");
        assert_eq!(speed_bps(999.0), "0 kB/s");
        assert_eq!(speed_bps(1_500.0), "1 kB/s");
    }

    #[test]
    fn test_kilo_tier_has_no_decimals() {
        assert_eq!(speed_bps(999_950.0), "999 kB/s"); // floors to 999 kB/s
        assert_eq!(speed_bps(42_000.0), "42 kB/s");
    }

    #[test]
    fn test_mega_tier_precision() {
        assert_eq!(speed_bps(1_000_000.0), "1.00 MB/s");
        assert_eq!(speed_bps(25_500_000.0), "25.50 MB/s");
        assert_eq!(speed_bps(250_000_000.0), "250.0 MB/s");
    }

    #[test]
    fn test_giga_tier_is_unbounded() {
        assert_eq!(speed_bps(1_000_000_000.0), "1.00 GB/s");
        assert_eq!(speed_bps(2_500_000_000_000.0), "2500.00 GB/s");
    }

    #[test]
    fn test_to_kbps_is_lossy() {
        assert_eq!(to_kbps(1_999.0), 1.0);
        assert_eq!(to_kbps(999.0), 0.0);
    }
}
