//! Currency helpers shared by the aggregation core.
//!
//! Amounts are binary `f64`, so rounding happens on the binary value:
//! `round(1.005)` is `1.0` because `1.005 * 100.0` evaluates to
//! `100.49999999999999`.

/// Anything smaller than one cent in magnitude counts as zero.
pub const EPSILON: f64 = 0.01;

// 2^49 cents. Beyond this a float cannot carry cents through a second
// round trip, so larger amounts are returned as-is.
const MAX_EXACT_SCALED: f64 = 562_949_953_421_312.0;

/// Rounds to two decimal places, ties toward positive infinity.
pub fn round(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
        return amount;
    }
    let floor = scaled.floor();
    let cents = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    cents / 100.0
}

/// Epsilon zero test: true iff `|amount| < 0.01`.
pub fn is_zero(amount: f64) -> bool {
    amount.abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round(12.344), 12.34);
        assert_eq!(round(12.346), 12.35);
        assert_eq!(round(-50.0), -50.0);
        assert_eq!(round(0.0), 0.0);
    }

    #[test]
    fn ties_round_up_on_binary_value() {
        // 19.995 * 100.0 == 1999.5 exactly
        assert_eq!(round(19.995), 20.0);
        assert_eq!(round(2.675), 2.68);
        assert_eq!(round(10.125), 10.13);
        // half-up, not half-away-from-zero
        assert_eq!(round(-19.995), -19.99);
        assert_eq!(round(-0.005), 0.0);
    }

    #[test]
    fn representation_error_rounds_down() {
        assert_eq!(round(1.005), 1.0);
        assert_eq!(round(0.285), 0.28);
    }

    #[test]
    fn non_finite_and_huge_values_pass_through() {
        assert!(round(f64::NAN).is_nan());
        assert_eq!(round(f64::INFINITY), f64::INFINITY);
        assert_eq!(round(f64::MAX), f64::MAX);
        assert_eq!(round(1e300), 1e300);
    }

    #[test]
    fn zero_test_uses_one_cent_epsilon() {
        assert!(is_zero(0.0));
        assert!(is_zero(0.009));
        assert!(is_zero(-0.0099));
        assert!(!is_zero(0.01));
        assert!(!is_zero(-0.01));
        assert!(!is_zero(f64::NAN));
    }
}
