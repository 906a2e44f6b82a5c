//! Gross pay for a single period.

use rust_decimal::Decimal;

/// Computes gross pay for one period: regular pay (rate x hours) plus
/// overtime pay (overtime rate x overtime hours).
///
/// The overtime rate is caller-supplied rather than derived as 1.5x the
/// regular rate, which keeps this function free of overtime policy. No
/// rounding is applied here; rounding happens only at the result
/// boundary.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paystub_core::calculations::compute_gross_pay;
///
/// let gross = compute_gross_pay(dec!(25.00), dec!(40), dec!(5), dec!(37.50));
/// assert_eq!(gross, dec!(1187.50));
/// ```
pub fn compute_gross_pay(
    rate: Decimal,
    hours: Decimal,
    overtime_hours: Decimal,
    overtime_rate: Decimal,
) -> Decimal {
    rate * hours + overtime_rate * overtime_hours
}
