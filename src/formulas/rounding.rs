//! Rounding and display helpers

/// Round to 2 decimal places, halves rounding toward positive infinity
///
/// Matches the browser calculator's `Math.round(value * 100) / 100`, so
/// `round2(-0.005) == -0.0` whereas `f64::round` would move away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Whole US dollars with thousands separators, e.g. `-$1,235`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return format!("${}", rounded);
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Fixed-precision percentage, e.g. `format_percent(7.456, 2) == "7.46%"`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1896.2040), 1896.2);
        assert_eq!(round2(10.125), 10.13);
        assert_eq!(round2(-2.5), -2.5);
        assert_eq!(round2(0.0), 0.0);
        // Halves go up, not away from zero
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1234.5), "$1,235");
        assert_eq!(format_currency(300_000.0), "$300,000");
        assert_eq!(format_currency(-1_234_567.0), "-$1,234,567");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(7.456, 2), "7.46%");
        assert_eq!(format_percent(5.0, 0), "5%");
    }
}
