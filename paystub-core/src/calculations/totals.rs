//! The period aggregator: the full annual paystub pipeline.
//!
//! Runs the per-period calculators across every pay period in the annual
//! cycle, carrying year-to-date gross forward so the Social Security wage
//! base and additional Medicare threshold see cumulative earnings. No
//! period depends on any period after it; this is a single forward pass.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::federal::compute_federal_tax;
use crate::calculations::fica::compute_fica;
use crate::calculations::gross_pay::compute_gross_pay;
use crate::calculations::state::compute_state_tax;
use crate::calculations::validate::{ValidationError, validate_paystub_inputs};
use crate::models::{PaystubInput, PaystubResult, PaystubTotals, PeriodBreakdown};
use crate::tables;

/// Validates the input and computes the full annual cycle: one breakdown
/// per pay period plus summed totals.
///
/// Internal accumulation is unrounded; every dollar figure in the result
/// is rounded half-up to cents at this boundary. Missing tax years and
/// unknown state codes resolve to documented defaults rather than
/// failing; only invalid numeric input is rejected.
///
/// # Errors
///
/// Returns [`ValidationError`] if the input fails pre-calculation
/// validation. Calculation itself cannot fail.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paystub_core::calculations::calculate_paystub;
/// use paystub_core::models::{FilingStatus, PayFrequency, PaystubInput};
///
/// let input = PaystubInput {
///     hourly_rate: dec!(25.00),
///     hours_per_period: dec!(40),
///     overtime_hours: dec!(0),
///     overtime_rate: dec!(0),
///     filing_status: FilingStatus::Single,
///     tax_year: Some(2024),
///     state: "TX".to_string(),
///     pay_frequency: PayFrequency::Weekly,
///     extra_deductions: vec![],
/// };
///
/// let result = calculate_paystub(&input).unwrap();
/// assert_eq!(result.periods.len(), 52);
/// assert_eq!(result.periods[0].gross_pay, dec!(1000.00));
/// assert_eq!(result.periods[0].social_security, dec!(62.00));
/// ```
pub fn calculate_paystub(input: &PaystubInput) -> Result<PaystubResult, ValidationError> {
    validate_paystub_inputs(input)?;

    let table = tables::resolve(input.tax_year);
    if input.tax_year.is_some_and(|year| year != table.tax_year) {
        debug!(
            requested = input.tax_year,
            used = table.tax_year,
            "calculating under fallback tax year"
        );
    }

    let period_count = input.pay_frequency.periods_per_year();
    let period_gross = compute_gross_pay(
        input.hourly_rate,
        input.hours_per_period,
        input.overtime_hours,
        input.overtime_rate,
    );

    let mut periods = Vec::with_capacity(period_count as usize);
    let mut totals = RunningTotals::default();
    let mut ytd_gross = Decimal::ZERO;

    for period in 1..=period_count {
        let federal_tax = compute_federal_tax(period_gross, input.filing_status, table);
        let fica = compute_fica(period_gross, ytd_gross, input.filing_status, table);
        let state_tax = compute_state_tax(period_gross, ytd_gross, &input.state, input.filing_status);
        let other_deductions: Decimal = input
            .extra_deductions
            .iter()
            .map(|deduction| deduction.amount_for(period_gross))
            .sum();

        let net_pay = period_gross
            - federal_tax
            - state_tax
            - fica.social_security
            - fica.medicare
            - other_deductions;

        totals.add(
            period_gross,
            federal_tax,
            state_tax,
            fica.social_security,
            fica.medicare,
            other_deductions,
            net_pay,
        );

        periods.push(PeriodBreakdown {
            period,
            gross_pay: round_half_up(period_gross),
            federal_tax: round_half_up(federal_tax),
            state_tax: round_half_up(state_tax),
            social_security: round_half_up(fica.social_security),
            medicare: round_half_up(fica.medicare),
            other_deductions: round_half_up(other_deductions),
            net_pay: round_half_up(net_pay),
        });

        // Forward accumulation only; later periods never feed back.
        ytd_gross += period_gross;
    }

    Ok(PaystubResult {
        tax_year: table.tax_year,
        periods,
        totals: totals.into_totals(),
    })
}

/// Unrounded running sums across the cycle, rounded once at the end so
/// totals do not accumulate per-period rounding error.
#[derive(Debug, Default)]
struct RunningTotals {
    gross_pay: Decimal,
    federal_tax: Decimal,
    state_tax: Decimal,
    social_security: Decimal,
    medicare: Decimal,
    other_deductions: Decimal,
    net_pay: Decimal,
}

impl RunningTotals {
    #[allow(clippy::too_many_arguments)]
    fn add(
        &mut self,
        gross_pay: Decimal,
        federal_tax: Decimal,
        state_tax: Decimal,
        social_security: Decimal,
        medicare: Decimal,
        other_deductions: Decimal,
        net_pay: Decimal,
    ) {
        self.gross_pay += gross_pay;
        self.federal_tax += federal_tax;
        self.state_tax += state_tax;
        self.social_security += social_security;
        self.medicare += medicare;
        self.other_deductions += other_deductions;
        self.net_pay += net_pay;
    }

    fn into_totals(self) -> PaystubTotals {
        PaystubTotals {
            gross_pay: round_half_up(self.gross_pay),
            federal_tax: round_half_up(self.federal_tax),
            state_tax: round_half_up(self.state_tax),
            social_security: round_half_up(self.social_security),
            medicare: round_half_up(self.medicare),
            other_deductions: round_half_up(self.other_deductions),
            net_pay: round_half_up(self.net_pay),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ExtraDeduction, FilingStatus, PayFrequency};

    fn base_input() -> PaystubInput {
        PaystubInput {
            hourly_rate: dec!(25.00),
            hours_per_period: dec!(40),
            overtime_hours: dec!(0),
            overtime_rate: dec!(0),
            filing_status: FilingStatus::Single,
            tax_year: Some(2024),
            state: "TX".to_string(),
            pay_frequency: PayFrequency::Weekly,
            extra_deductions: vec![],
        }
    }

    #[test]
    fn produces_one_breakdown_per_period() {
        let result = calculate_paystub(&base_input()).unwrap();

        assert_eq!(result.periods.len(), 52);
        assert_eq!(result.periods[0].period, 1);
        assert_eq!(result.periods[51].period, 52);
    }

    #[test]
    fn first_period_matches_single_period_math() {
        let result = calculate_paystub(&base_input()).unwrap();
        let first = &result.periods[0];

        assert_eq!(first.gross_pay, dec!(1000.00));
        assert_eq!(first.federal_tax, dec!(100.00));
        assert_eq!(first.state_tax, dec!(0.00));
        assert_eq!(first.social_security, dec!(62.00));
        assert_eq!(first.medicare, dec!(14.50));
        assert_eq!(first.net_pay, dec!(823.50));
    }

    #[test]
    fn totals_sum_the_ledger() {
        let result = calculate_paystub(&base_input()).unwrap();

        let gross: Decimal = result.periods.iter().map(|p| p.gross_pay).sum();
        assert_eq!(result.totals.gross_pay, gross);
        assert_eq!(result.totals.gross_pay, dec!(52000.00));
    }

    #[test]
    fn ytd_accumulation_stops_ss_at_wage_base() {
        let mut input = base_input();
        // 10_000 weekly crosses the 168_600 wage base during period 17.
        input.hourly_rate = dec!(250.00);

        let result = calculate_paystub(&input).unwrap();

        assert_eq!(result.periods[15].social_security, dec!(620.00));
        // Period 17: ytd 160_000, only 8_600 remains under the base.
        assert_eq!(
            result.periods[16].social_security,
            round_half_up(dec!(8600) * dec!(0.062))
        );
        assert_eq!(result.periods[17].social_security, dec!(0.00));
        assert_eq!(
            result.totals.social_security,
            round_half_up(dec!(168600) * dec!(0.062))
        );
    }

    #[test]
    fn additional_medicare_kicks_in_after_threshold() {
        let mut input = base_input();
        // 10_000 weekly crosses the 200_000 single threshold in period 20.
        input.hourly_rate = dec!(250.00);

        let result = calculate_paystub(&input).unwrap();

        assert_eq!(result.periods[18].medicare, dec!(145.00));
        assert_eq!(result.periods[20].medicare, dec!(145.00) + dec!(90.00));
    }

    #[test]
    fn extra_deductions_reduce_net_pay() {
        let mut input = base_input();
        input.extra_deductions = vec![
            ExtraDeduction::flat("401k", dec!(100.00)),
            ExtraDeduction::percent_of_gross("hsa", dec!(0.02)),
        ];

        let result = calculate_paystub(&input).unwrap();
        let first = &result.periods[0];

        assert_eq!(first.other_deductions, dec!(120.00));
        assert_eq!(first.net_pay, dec!(823.50) - dec!(120.00));
    }

    #[test]
    fn identical_inputs_produce_identical_results() {
        let input = base_input();

        let first = calculate_paystub(&input).unwrap();
        let second = calculate_paystub(&input).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn fallback_year_is_reported_in_result() {
        let mut input = base_input();
        input.tax_year = Some(2099);

        let result = calculate_paystub(&input).unwrap();

        assert_eq!(result.tax_year, 2025);
    }

    #[test]
    fn invalid_input_is_rejected_before_calculation() {
        let mut input = base_input();
        input.hourly_rate = dec!(-25.00);

        let result = calculate_paystub(&input);

        assert_eq!(
            result,
            Err(ValidationError::NegativeHourlyRate(dec!(-25.00)))
        );
    }
}
