//! Display Formatting
//!
//! Pure helpers that turn KPI values into the strings shown on the cards.

/// Group an integer's digits in thousands: `45231` -> `"45,231"`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// `"$"` followed by the grouped amount. The sign follows the dollar sign.
pub fn format_currency(value: i64) -> String {
    format!("${}", group_thousands(value))
}

/// Grouped integer with no prefix
pub fn format_count(value: i64) -> String {
    group_thousands(value)
}

/// Two-decimal fixed point with a percent suffix.
///
/// Values exactly halfway between two hundredths round up (`1.125` ->
/// `"1.13%"`); everything else rounds to the nearest hundredth.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", round_half_up_hundredths(value))
}

fn round_half_up_hundredths(value: f64) -> f64 {
    // Scaling by 8 is exact, so a zero residual means `scaled` is exact too
    let eighths = value * 8.0;
    let scaled = eighths * 25.0;
    let exact = eighths.mul_add(25.0, -scaled) == 0.0;

    if exact && scaled.fract() == 0.0 && scaled.rem_euclid(2.0) == 1.0 {
        (scaled + 1.0) / 2.0 / 100.0
    } else {
        value
    }
}

/// Signed one-decimal change label, e.g. `"+12.5%"`
pub fn format_change(percent: f64) -> String {
    format!("{:+.1}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(45_231), "45,231");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-1_234), "-1,234");
        assert_eq!(group_thousands(-12), "-12");
    }

    #[test]
    fn test_group_thousands_extremes() {
        assert_eq!(group_thousands(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(45_231), "$45,231");
        assert_eq!(format_currency(-1_500), "$-1,500");
    }

    #[test]
    fn test_count() {
        assert_eq!(format_count(2_345), "2,345");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(3.24), "3.24%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(10.0), "10.00%");
    }

    #[test]
    fn test_percentage_ties_round_up() {
        assert_eq!(format_percentage(1.125), "1.13%");
        assert_eq!(format_percentage(0.125), "0.13%");
        assert_eq!(format_percentage(9.375), "9.38%");
        // Not a tie in binary: 1.005 is stored just below the midpoint
        assert_eq!(format_percentage(1.005), "1.00%");
        assert_eq!(format_percentage(3.245), "3.25%");
    }

    #[test]
    fn test_change() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-2.4), "-2.4%");
        assert_eq!(format_change(0.0), "+0.0%");
    }
}
