use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deduction::ExtraDeduction;
use super::filing_status::FilingStatus;
use super::pay_frequency::PayFrequency;

/// Input values for a paystub calculation.
///
/// Constructed fresh per calculation request and never mutated; a changed
/// input means a new calculation, not a patched one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaystubInput {
    /// Hourly rate in dollars. Must be non-negative.
    pub hourly_rate: Decimal,

    /// Regular hours worked per pay period.
    pub hours_per_period: Decimal,

    /// Overtime hours worked per pay period.
    pub overtime_hours: Decimal,

    /// Hourly rate applied to overtime hours.
    ///
    /// Caller-supplied rather than derived as 1.5x, keeping the engine
    /// free of overtime policy.
    pub overtime_rate: Decimal,

    /// Federal filing status.
    pub filing_status: FilingStatus,

    /// Tax year to calculate under. `None` means the current calendar
    /// year; years without table data resolve to the latest known year.
    pub tax_year: Option<i32>,

    /// Two-letter state code. Unrecognized codes withhold zero state tax.
    pub state: String,

    /// Pay frequency; determines the number of periods in the annual cycle.
    pub pay_frequency: PayFrequency,

    /// Extra per-period deductions beyond the statutory taxes.
    pub extra_deductions: Vec<ExtraDeduction>,
}

/// One pay period's withholding breakdown. All dollar fields are rounded
/// to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    /// 1-based period number within the annual cycle.
    pub period: u32,
    pub gross_pay: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub other_deductions: Decimal,
    pub net_pay: Decimal,
}

/// Totals summed across every computed period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaystubTotals {
    pub gross_pay: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub other_deductions: Decimal,
    pub net_pay: Decimal,
}

/// Result of a full paystub calculation: the per-period ledger plus
/// annual totals. Derived purely from the input; no persistent identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaystubResult {
    /// Tax year the calculation actually used (after fallback resolution).
    pub tax_year: i32,
    pub periods: Vec<PeriodBreakdown>,
    pub totals: PaystubTotals,
}
