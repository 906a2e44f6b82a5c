//! Shared helpers for withholding calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (values at exactly 0.005 round away from zero).
///
/// The calculators carry unrounded values internally; this is applied
/// only at the result boundary so error never compounds across periods.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paystub_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn rounds_away_from_zero_for_negatives() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(62.00)), dec!(62.00));
    }

    #[test]
    fn handles_zero() {
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }
}
