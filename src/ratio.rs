use crate::numeric::trunc_fixed;

/// Format a percentage: 2 decimals below 10, 1 below 100, none past that.
/// Always truncated.
pub fn percent(x: f64) -> String {
    if x < 10.0 {
        trunc_fixed(x, 2)
    } else if x < 100.0 {
        trunc_fixed(x, 1)
    } else {
        trunc_fixed(x, 0)
    }
}

/// Format a share ratio. -1 signals no ratio exists, -2 an infinite one;
/// anything else formats like a percentage.
pub fn ratio(x: f64) -> String {
    if x == -1.0 {
        return "None".to_string();
    }
    if x == -2.0 {
        return "∞".to_string();
    }
    percent(x)
}
