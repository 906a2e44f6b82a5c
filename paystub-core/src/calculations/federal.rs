//! Federal income tax withholding for a single period.

use rust_decimal::Decimal;

use crate::models::{FilingStatus, TaxYearTable};

/// Computes federal income tax on one period's gross pay by walking the
/// filing status's marginal bracket schedule.
///
/// The schedule is applied to period gross directly (the calculator's
/// convention throughout); the unbounded terminal bracket guarantees
/// termination for arbitrarily large incomes, and zero income yields
/// zero tax.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paystub_core::calculations::compute_federal_tax;
/// use paystub_core::models::FilingStatus;
/// use paystub_core::tables;
///
/// let table = tables::resolve(Some(2024));
/// let tax = compute_federal_tax(dec!(1000.00), FilingStatus::Single, table);
/// // $1000 sits entirely in the 10% bracket.
/// assert_eq!(tax, dec!(100.00));
/// ```
pub fn compute_federal_tax(
    period_gross: Decimal,
    filing_status: FilingStatus,
    table: &TaxYearTable,
) -> Decimal {
    table.brackets_for(filing_status).marginal_tax(period_gross)
}
