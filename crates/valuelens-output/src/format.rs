//! Display formatting for metric values.
//!
//! Undefined values always render as an empty string so tables keep their
//! shape when inputs are missing.

use valuelens_metrics::MetricFormat;

/// Format a currency amount with a `B`/`M` suffix.
///
/// ```
/// use valuelens_output::format_number;
///
/// assert_eq!(format_number(Some(3.2e12)), "3,200B");
/// assert_eq!(format_number(Some(-6.18e9)), "-6.2B");
/// assert_eq!(format_number(Some(250e6)), "250M");
/// assert_eq!(format_number(Some(12_345.0)), "12,345");
/// assert_eq!(format_number(None), "");
/// ```
pub fn format_number(value: Option<f64>) -> String {
    let Some(x) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };
    let magnitude = x.abs();
    if magnitude >= 1e11 {
        format!("{}B", with_thousands(x / 1e9, 0))
    } else if magnitude >= 1e9 {
        format!("{:.1}B", x / 1e9)
    } else if magnitude >= 1e8 {
        format!("{:.0}M", x / 1e6)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", x / 1e6)
    } else {
        with_thousands(x, 0)
    }
}

/// Format a fraction as a one-decimal percentage.
///
/// ```
/// use valuelens_output::format_percent;
///
/// assert_eq!(format_percent(Some(0.0326)), "3.3%");
/// assert_eq!(format_percent(None), "");
/// ```
pub fn format_percent(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|x| format!("{}%", with_thousands(x * 100.0, 1)))
        .unwrap_or_default()
}

/// Format a multiple with two decimals and a `×` suffix.
///
/// ```
/// use valuelens_output::format_ratio;
///
/// assert_eq!(format_ratio(Some(24.857)), "24.86×");
/// assert_eq!(format_ratio(None), "");
/// ```
pub fn format_ratio(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|x| format!("{}×", with_thousands(x, 2)))
        .unwrap_or_default()
}

/// Format a value according to its registry format.
pub fn format_metric(value: Option<f64>, format: MetricFormat) -> String {
    match format {
        MetricFormat::Number => format_number(value),
        MetricFormat::Percent => format_percent(value),
        MetricFormat::Ratio => format_ratio(value),
    }
}

/// Fixed-point formatting with `,` grouping in the integer part.
pub fn with_thousands(x: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, x);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3.2e12, "3,200B")]
    #[case(3.27573e12, "3,276B")]
    #[case(1e11, "100B")]
    #[case(131.78e9, "132B")]
    #[case(25.57e9, "25.6B")]
    #[case(-6.18e9, "-6.2B")]
    #[case(1e9, "1.0B")]
    #[case(999e6, "999M")]
    #[case(1e8, "100M")]
    #[case(5.26e6, "5.3M")]
    #[case(1e6, "1.0M")]
    #[case(999_999.0, "999,999")]
    #[case(1234.4, "1,234")]
    #[case(-42.0, "-42")]
    #[case(0.0, "0")]
    fn test_format_number(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(format_number(Some(x)), expected);
    }

    #[test]
    fn test_undefined_is_blank() {
        assert_eq!(format_number(None), "");
        assert_eq!(format_number(Some(f64::NAN)), "");
        assert_eq!(format_percent(Some(f64::INFINITY)), "");
        assert_eq!(format_ratio(None), "");
        assert_eq!(format_metric(None, MetricFormat::Percent), "");
    }

    #[rstest]
    #[case(0.0326, "3.3%")]
    #[case(0.1567, "15.7%")]
    #[case(3.1469, "314.7%")]
    #[case(12.3456, "1,234.6%")]
    #[case(-0.05, "-5.0%")]
    fn test_format_percent(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(format_percent(Some(x)), expected);
    }

    #[rstest]
    #[case(8.0, "8.00×")]
    #[case(24.857, "24.86×")]
    #[case(1234.5, "1,234.50×")]
    #[case(-20.0, "-20.00×")]
    fn test_format_ratio(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(format_ratio(Some(x)), expected);
    }

    #[rstest]
    #[case(1_234_567.891, 2, "1,234,567.89")]
    #[case(123.0, 0, "123")]
    #[case(-1000.0, 1, "-1,000.0")]
    fn test_with_thousands(#[case] x: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(with_thousands(x, decimals), expected);
    }
}
