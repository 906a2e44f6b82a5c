use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use paystub_core::calculations::calculate_paystub;
use paystub_core::models::{
    ExtraDeduction, FilingStatus, PayFrequency, PaystubInput, PaystubResult,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Paystub withholding calculator.
///
/// Computes per-pay-period and annual gross pay, federal/state income
/// tax, Social Security, Medicare, and net pay from an hourly rate.
#[derive(Debug, Parser)]
struct Cli {
    /// Hourly rate in dollars.
    #[arg(long)]
    rate: Decimal,

    /// Regular hours per pay period.
    #[arg(long, default_value = "40")]
    hours: Decimal,

    /// Overtime hours per pay period.
    #[arg(long, default_value = "0")]
    overtime_hours: Decimal,

    /// Hourly rate for overtime hours (not derived automatically).
    #[arg(long, default_value = "0")]
    overtime_rate: Decimal,

    /// Filing status: S, MFJ, MFS, HOH, or QSS.
    #[arg(long, default_value = "S", value_parser = parse_status)]
    status: FilingStatus,

    /// Two-letter state code. Unrecognized codes withhold no state tax.
    #[arg(long, default_value = "TX")]
    state: String,

    /// Tax year. Defaults to the current calendar year; years without
    /// built-in tables use the latest available year.
    #[arg(long)]
    year: Option<i32>,

    /// Pay frequency: weekly, biweekly, semimonthly, or monthly.
    #[arg(long, default_value = "biweekly", value_parser = parse_frequency)]
    frequency: PayFrequency,

    /// Extra per-period deduction as `name=amount` (flat dollars) or
    /// `name=pct%` (percentage of gross). May be repeated.
    #[arg(long = "deduct", value_parser = parse_deduction)]
    deductions: Vec<ExtraDeduction>,

    /// Show only the first N periods of the ledger. The full annual
    /// cycle is always computed so YTD-dependent figures stay correct.
    #[arg(long)]
    periods: Option<usize>,

    /// Emit the full result as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_status(s: &str) -> Result<FilingStatus, String> {
    FilingStatus::parse(&s.to_uppercase())
        .ok_or_else(|| format!("unknown filing status '{s}' (expected S, MFJ, MFS, HOH, or QSS)"))
}

fn parse_frequency(s: &str) -> Result<PayFrequency, String> {
    PayFrequency::parse(&s.to_lowercase()).ok_or_else(|| {
        format!("unknown pay frequency '{s}' (expected weekly, biweekly, semimonthly, or monthly)")
    })
}

fn parse_deduction(s: &str) -> Result<ExtraDeduction, String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("deduction '{s}' must be name=amount or name=pct%"))?;
    if name.is_empty() {
        return Err(format!("deduction '{s}' has an empty name"));
    }

    if let Some(percent) = value.strip_suffix('%') {
        let percent: Decimal = percent
            .parse()
            .map_err(|_| format!("deduction '{s}' has an invalid percentage"))?;
        Ok(ExtraDeduction::percent_of_gross(
            name,
            percent / Decimal::ONE_HUNDRED,
        ))
    } else {
        let amount: Decimal = value
            .parse()
            .map_err(|_| format!("deduction '{s}' has an invalid amount"))?;
        Ok(ExtraDeduction::flat(name, amount))
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_table(
    result: &PaystubResult,
    cli: &Cli,
) {
    println!(
        "Paystub: tax year {}, {} in {}, {} ({} periods)",
        result.tax_year,
        cli.status.as_str(),
        cli.state.to_uppercase(),
        cli.frequency.as_str(),
        result.periods.len(),
    );
    println!(
        "{:>6} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Period", "Gross", "Federal", "State", "SocSec", "Medicare", "Other", "Net"
    );

    let shown = cli.periods.unwrap_or(result.periods.len());
    for breakdown in result.periods.iter().take(shown) {
        println!(
            "{:>6} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12}",
            breakdown.period,
            breakdown.gross_pay,
            breakdown.federal_tax,
            breakdown.state_tax,
            breakdown.social_security,
            breakdown.medicare,
            breakdown.other_deductions,
            breakdown.net_pay,
        );
    }
    if shown < result.periods.len() {
        println!("  ... {} more periods", result.periods.len() - shown);
    }

    let totals = &result.totals;
    println!(
        "{:>6} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Total",
        totals.gross_pay,
        totals.federal_tax,
        totals.state_tax,
        totals.social_security,
        totals.medicare,
        totals.other_deductions,
        totals.net_pay,
    );
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let input = PaystubInput {
        hourly_rate: cli.rate,
        hours_per_period: cli.hours,
        overtime_hours: cli.overtime_hours,
        overtime_rate: cli.overtime_rate,
        filing_status: cli.status,
        tax_year: cli.year,
        state: cli.state.clone(),
        pay_frequency: cli.frequency,
        extra_deductions: cli.deductions.clone(),
    };
    debug!(?input, "calculating paystub");

    let result = calculate_paystub(&input).context("invalid calculation input")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result, &cli);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use paystub_core::models::DeductionAmount;

    #[test]
    fn parse_status_accepts_lowercase() {
        assert_eq!(parse_status("mfj"), Ok(FilingStatus::MarriedFilingJointly));
    }

    #[test]
    fn parse_status_rejects_unknown() {
        assert!(parse_status("married").is_err());
    }

    #[test]
    fn parse_frequency_accepts_mixed_case() {
        assert_eq!(parse_frequency("Weekly"), Ok(PayFrequency::Weekly));
    }

    #[test]
    fn parse_deduction_flat() {
        let deduction = parse_deduction("401k=150.00").unwrap();

        assert_eq!(deduction.name, "401k");
        assert_eq!(deduction.amount, DeductionAmount::Flat(dec!(150.00)));
    }

    #[test]
    fn parse_deduction_percent() {
        let deduction = parse_deduction("hsa=5%").unwrap();

        assert_eq!(deduction.name, "hsa");
        assert_eq!(
            deduction.amount,
            DeductionAmount::PercentOfGross(dec!(0.05))
        );
    }

    #[test]
    fn parse_deduction_requires_name_and_value() {
        assert!(parse_deduction("401k").is_err());
        assert!(parse_deduction("=150").is_err());
        assert!(parse_deduction("401k=abc").is_err());
    }
}
