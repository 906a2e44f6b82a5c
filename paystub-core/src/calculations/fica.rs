//! FICA withholding (Social Security and Medicare) for a single period.
//!
//! Social Security is a flat rate on the portion of cumulative gross
//! (YTD + this period) that does not exceed the annual wage base: once
//! YTD passes the base nothing more is withheld, and the period that
//! straddles the base is taxed only on the sub-base slice.
//!
//! Medicare is a flat rate on the full period gross, plus the additional
//! Medicare surtax on the portion of cumulative gross above the filing
//! status's threshold. The surtax model is single-employer: thresholds
//! are checked against YTD + period gross with no multi-employer wage
//! aggregation, and surtax withheld mid-year is not refunded even though
//! true reconciliation happens at annual filing. Calculators downstream
//! assert this simplified behavior; changing it to the full IRS model is
//! a product decision, not a bug fix.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FilingStatus, TaxYearTable};

/// Social Security and Medicare withheld for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaWithholding {
    pub social_security: Decimal,
    pub medicare: Decimal,
}

/// Computes FICA withholding for one period.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paystub_core::calculations::compute_fica;
/// use paystub_core::models::FilingStatus;
/// use paystub_core::tables;
///
/// let table = tables::resolve(Some(2024));
/// let fica = compute_fica(dec!(1000.00), dec!(0), FilingStatus::Single, table);
/// assert_eq!(fica.social_security, dec!(62.00));
/// assert_eq!(fica.medicare, dec!(14.50));
/// ```
pub fn compute_fica(
    period_gross: Decimal,
    ytd_gross: Decimal,
    filing_status: FilingStatus,
    table: &TaxYearTable,
) -> FicaWithholding {
    let social_security = social_security_tax(period_gross, ytd_gross, table);
    let medicare = medicare_tax(period_gross, ytd_gross, filing_status, table);
    FicaWithholding {
        social_security,
        medicare,
    }
}

fn social_security_tax(
    period_gross: Decimal,
    ytd_gross: Decimal,
    table: &TaxYearTable,
) -> Decimal {
    if ytd_gross >= table.ss_wage_base {
        return Decimal::ZERO;
    }
    let taxable = period_gross.min(table.ss_wage_base - ytd_gross);
    taxable * table.ss_rate
}

fn medicare_tax(
    period_gross: Decimal,
    ytd_gross: Decimal,
    filing_status: FilingStatus,
    table: &TaxYearTable,
) -> Decimal {
    let base = period_gross * table.medicare_rate;

    let threshold = table.additional_medicare_threshold(filing_status);
    let cumulative = ytd_gross + period_gross;
    if cumulative <= threshold {
        return base;
    }

    // Only the slice of this period's gross above the threshold is
    // surtaxed; earlier periods' slices were surtaxed when they occurred.
    let surtaxed = period_gross.min(cumulative - threshold);
    base + surtaxed * table.additional_medicare_rate
}
