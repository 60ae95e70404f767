//! Division and arithmetic over possibly-undefined values.

/// Divide two optional values.
///
/// `None` when either side is missing, the denominator is zero, or the
/// quotient is not finite.
///
/// ```
/// use valuelens_metrics::safe_div;
///
/// assert_eq!(safe_div(Some(10.0), Some(4.0)), Some(2.5));
/// assert_eq!(safe_div(Some(10.0), Some(0.0)), None);
/// assert_eq!(safe_div(None, Some(4.0)), None);
/// ```
pub fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (n, d) = (numerator?, denominator?);
    if d == 0.0 {
        return None;
    }
    finite(n / d)
}

/// `Some(x)` only if `x` is finite.
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// Sum of two defined values.
pub(crate) fn add(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    finite(a? + b?)
}

/// Difference of two defined values.
pub(crate) fn sub(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    finite(a? - b?)
}

/// Fractional change from `previous` to `current`, relative to `|previous|`.
pub fn growth(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    let previous = previous?;
    safe_div(sub(current, Some(previous)), Some(previous.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1.0), None)]
    #[case(None, Some(1.0))]
    #[case(Some(1.0), Some(0.0))]
    #[case(Some(0.0), Some(-0.0))]
    #[case(Some(f64::INFINITY), Some(1.0))]
    #[case(Some(f64::NAN), Some(1.0))]
    fn test_safe_div_undefined(#[case] n: Option<f64>, #[case] d: Option<f64>) {
        assert!(safe_div(n, d).is_none());
    }

    #[test]
    fn test_safe_div_negative() {
        assert_relative_eq!(safe_div(Some(-6.0), Some(3.0)).unwrap(), -2.0);
    }

    #[test]
    fn test_growth() {
        assert_relative_eq!(growth(Some(110.0), Some(100.0)).unwrap(), 0.10);
        // Recovery from a loss counts as positive growth
        assert_relative_eq!(growth(Some(50.0), Some(-100.0)).unwrap(), 1.5);
        assert!(growth(Some(1.0), Some(0.0)).is_none());
        assert!(growth(None, Some(1.0)).is_none());
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(add(Some(1.0), Some(2.0)), Some(3.0));
        assert_eq!(sub(Some(1.0), None), None);
    }
}
