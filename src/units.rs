use crate::numeric::trunc_fixed;

const SIZE_K: f64 = 1000.0;
const SIZE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

const MEM_K: f64 = 1024.0;
const MEM_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a disk capacity or file size into a human-readable string,
/// decimal units: "12.5 MB".
pub fn size(bytes: u64) -> String {
    magnitude(bytes, SIZE_K, &SIZE_UNITS)
}

/// Format a memory size into a human-readable string, binary units:
/// "12.5 MiB".
pub fn mem(bytes: u64) -> String {
    magnitude(bytes, MEM_K, &MEM_UNITS)
}

/// Shared unit ladder. Below the base the raw byte count is shown verbatim;
/// once a unit kicks in the output keeps at least 3 digits and at least
/// 1 decimal, truncated.
fn magnitude(bytes: u64, base: f64, units: &[&str; 5]) -> String {
    let b = bytes as f64;
    if b < base {
        return format!("{} {}", bytes, units[0]);
    }

    let (converted, unit) = if b < base.powi(2) {
        (b / base, units[1])
    } else if b < base.powi(3) {
        (b / base.powi(2), units[2])
    } else if b < base.powi(4) {
        (b / base.powi(3), units[3])
    } else {
        (b / base.powi(4), units[4])
    };

    if converted <= 9.995 {
        format!("{} {}", trunc_fixed(converted, 2), unit)
    } else {
        format!("{} {}", trunc_fixed(converted, 1), unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_below_base_is_raw() {
        assert_eq!(size(0), "0 B");
        assert_eq!(size(1), "1 B");
        assert_eq!(size(999), "999 B");
    }

    #[test]
    fn test_mem_below_base_is_raw() {
        assert_eq!(mem(1023), "1023 B"); // binary base, not decimal
    }

    #[test]
    fn test_rollover_boundaries() {
        assert_eq!(size(1000), "1.00 kB");
        assert_eq!(mem(1024), "1.00 KiB");
        assert_eq!(size(1_000_000), "1.00 MB");
        assert_eq!(mem(1_048_576), "1.00 MiB");
    }

    #[test]
    fn test_precision_switch_at_9995() {
        assert_eq!(size(9_995), "9.99 kB"); // <= 9.995 keeps 2 decimals
        assert_eq!(size(9_996), "9.9 kB"); // past the bucket, 1 decimal
        assert_eq!(size(10_000), "10.0 kB");
    }

    #[test]
    fn test_tier_monotonicity() {
        assert_eq!(size(999_999), "999.9 kB");
        assert_eq!(size(500_000_000), "500.0 MB");
        assert_eq!(size(5_000_000_000), "5.00 GB");
        assert_eq!(size(5_000_000_000_000), "5.00 TB");
    }

    #[test]
    fn test_tera_is_unbounded() {
        assert_eq!(size(9_000_000_000_000_000), "9000.0 TB");
        assert_eq!(mem(1_099_511_627_776), "1.00 TiB");
    }
}
