//! Built-in federal withholding tables, one per supported tax year.
//!
//! Tables are code constants rather than database rows: the data footprint
//! is small and changes once a year, so adding a year means adding one
//! builder function here, not running a migration. The map is built once
//! at first use and never mutated.
//!
//! Lookup semantics:
//!
//! - A year with an explicit table resolves to that table.
//! - A year without one resolves to the largest year present (for an
//!   always-growing table set, the most recent year). This is a silent,
//!   logged fallback, not an error.
//! - A build that omits the baseline year panics at initialization. That
//!   is a packaging defect with no sane runtime fallback, so it is kept
//!   on a separate code path from the recoverable year gap above.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::models::{
    AdditionalMedicareThresholds, BracketSchedule, FederalSchedules, TaxBracket, TaxYearTable,
};

/// The oldest year the engine is guaranteed to ship data for. The table
/// map initializer panics if this year's table is missing.
pub const BASELINE_YEAR: i32 = 2024;

static TABLES: LazyLock<BTreeMap<i32, TaxYearTable>> = LazyLock::new(build_tables);

fn build_tables() -> BTreeMap<i32, TaxYearTable> {
    let tables: BTreeMap<i32, TaxYearTable> = [year_2023(), year_2024(), year_2025()]
        .into_iter()
        .map(|table| (table.tax_year, table))
        .collect();
    assert!(
        tables.contains_key(&BASELINE_YEAR),
        "built-in tax data is missing the baseline year {BASELINE_YEAR}"
    );
    tables
}

/// Returns the table for `year`, the current calendar year when `year` is
/// `None`, or the latest available year when no table exists for the
/// requested one.
pub fn resolve(year: Option<i32>) -> &'static TaxYearTable {
    let requested = year.unwrap_or_else(|| Local::now().year());
    match TABLES.get(&requested) {
        Some(table) => table,
        None => {
            let (latest, table) = TABLES
                .last_key_value()
                .expect("table map contains at least the baseline year");
            debug!(
                requested,
                fallback = latest,
                "no table for requested tax year, using latest available"
            );
            table
        }
    }
}

/// Years with explicit built-in tables, ascending.
pub fn supported_years() -> Vec<i32> {
    TABLES.keys().copied().collect()
}

fn schedule(brackets: &[(Option<Decimal>, Decimal)]) -> BracketSchedule {
    BracketSchedule::new(
        brackets
            .iter()
            .map(|&(upper, rate)| TaxBracket::new(upper, rate))
            .collect(),
    )
}

// The additional Medicare thresholds are statutory and not indexed for
// inflation, so every year shares them.
fn additional_medicare_thresholds() -> AdditionalMedicareThresholds {
    AdditionalMedicareThresholds {
        single: dec!(200000),
        married_joint: dec!(250000),
        married_separate: dec!(125000),
        head_of_household: dec!(200000),
        qualifying_surviving_spouse: dec!(200000),
    }
}

fn year_2023() -> TaxYearTable {
    TaxYearTable {
        tax_year: 2023,
        ss_wage_base: dec!(160200),
        ss_rate: dec!(0.062),
        medicare_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_thresholds: additional_medicare_thresholds(),
        federal: FederalSchedules {
            single: schedule(&[
                (Some(dec!(11000)), dec!(0.10)),
                (Some(dec!(44725)), dec!(0.12)),
                (Some(dec!(95375)), dec!(0.22)),
                (Some(dec!(182100)), dec!(0.24)),
                (Some(dec!(231250)), dec!(0.32)),
                (Some(dec!(578125)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            married_joint: schedule(&[
                (Some(dec!(22000)), dec!(0.10)),
                (Some(dec!(89450)), dec!(0.12)),
                (Some(dec!(190750)), dec!(0.22)),
                (Some(dec!(364200)), dec!(0.24)),
                (Some(dec!(462500)), dec!(0.32)),
                (Some(dec!(693750)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            married_separate: schedule(&[
                (Some(dec!(11000)), dec!(0.10)),
                (Some(dec!(44725)), dec!(0.12)),
                (Some(dec!(95375)), dec!(0.22)),
                (Some(dec!(182100)), dec!(0.24)),
                (Some(dec!(231250)), dec!(0.32)),
                (Some(dec!(346875)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            head_of_household: schedule(&[
                (Some(dec!(15700)), dec!(0.10)),
                (Some(dec!(59850)), dec!(0.12)),
                (Some(dec!(95350)), dec!(0.22)),
                (Some(dec!(182100)), dec!(0.24)),
                (Some(dec!(231250)), dec!(0.32)),
                (Some(dec!(578100)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
        },
    }
}

fn year_2024() -> TaxYearTable {
    TaxYearTable {
        tax_year: 2024,
        ss_wage_base: dec!(168600),
        ss_rate: dec!(0.062),
        medicare_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_thresholds: additional_medicare_thresholds(),
        federal: FederalSchedules {
            single: schedule(&[
                (Some(dec!(11600)), dec!(0.10)),
                (Some(dec!(47150)), dec!(0.12)),
                (Some(dec!(100525)), dec!(0.22)),
                (Some(dec!(191950)), dec!(0.24)),
                (Some(dec!(243725)), dec!(0.32)),
                (Some(dec!(609350)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            married_joint: schedule(&[
                (Some(dec!(23200)), dec!(0.10)),
                (Some(dec!(94300)), dec!(0.12)),
                (Some(dec!(201050)), dec!(0.22)),
                (Some(dec!(383900)), dec!(0.24)),
                (Some(dec!(487450)), dec!(0.32)),
                (Some(dec!(731200)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            married_separate: schedule(&[
                (Some(dec!(11600)), dec!(0.10)),
                (Some(dec!(47150)), dec!(0.12)),
                (Some(dec!(100525)), dec!(0.22)),
                (Some(dec!(191950)), dec!(0.24)),
                (Some(dec!(243725)), dec!(0.32)),
                (Some(dec!(365600)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            head_of_household: schedule(&[
                (Some(dec!(16550)), dec!(0.10)),
                (Some(dec!(63100)), dec!(0.12)),
                (Some(dec!(100500)), dec!(0.22)),
                (Some(dec!(191950)), dec!(0.24)),
                (Some(dec!(243700)), dec!(0.32)),
                (Some(dec!(609350)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
        },
    }
}

fn year_2025() -> TaxYearTable {
    TaxYearTable {
        tax_year: 2025,
        ss_wage_base: dec!(176100),
        ss_rate: dec!(0.062),
        medicare_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_thresholds: additional_medicare_thresholds(),
        federal: FederalSchedules {
            single: schedule(&[
                (Some(dec!(11925)), dec!(0.10)),
                (Some(dec!(48475)), dec!(0.12)),
                (Some(dec!(103350)), dec!(0.22)),
                (Some(dec!(197300)), dec!(0.24)),
                (Some(dec!(250525)), dec!(0.32)),
                (Some(dec!(626350)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            married_joint: schedule(&[
                (Some(dec!(23850)), dec!(0.10)),
                (Some(dec!(96950)), dec!(0.12)),
                (Some(dec!(206700)), dec!(0.22)),
                (Some(dec!(394600)), dec!(0.24)),
                (Some(dec!(501050)), dec!(0.32)),
                (Some(dec!(751600)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            married_separate: schedule(&[
                (Some(dec!(11925)), dec!(0.10)),
                (Some(dec!(48475)), dec!(0.12)),
                (Some(dec!(103350)), dec!(0.22)),
                (Some(dec!(197300)), dec!(0.24)),
                (Some(dec!(250525)), dec!(0.32)),
                (Some(dec!(375800)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
            head_of_household: schedule(&[
                (Some(dec!(17000)), dec!(0.10)),
                (Some(dec!(64850)), dec!(0.12)),
                (Some(dec!(103350)), dec!(0.22)),
                (Some(dec!(197300)), dec!(0.24)),
                (Some(dec!(250500)), dec!(0.32)),
                (Some(dec!(626350)), dec!(0.35)),
                (None, dec!(0.37)),
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::FilingStatus;

    #[test]
    fn every_year_ships_valid_schedules() {
        for year in supported_years() {
            let table = resolve(Some(year));
            for status in FilingStatus::ALL {
                assert!(
                    table.brackets_for(status).is_valid(),
                    "invalid schedule for {year} {}",
                    status.as_str()
                );
            }
        }
    }

    #[test]
    fn explicit_year_resolves_exactly() {
        assert_eq!(resolve(Some(2023)).tax_year, 2023);
        assert_eq!(resolve(Some(2024)).tax_year, 2024);
        assert_eq!(resolve(Some(2025)).tax_year, 2025);
    }

    #[test]
    fn future_year_falls_back_to_latest() {
        let latest = *supported_years().last().unwrap();

        assert_eq!(resolve(Some(2099)).tax_year, latest);
        // Fallback idempotence: any future year lands on the same table.
        assert_eq!(resolve(Some(2099)), resolve(Some(3000)));
    }

    #[test]
    fn ancient_year_falls_back_to_latest() {
        let latest = *supported_years().last().unwrap();

        assert_eq!(resolve(Some(1999)).tax_year, latest);
    }

    #[test]
    fn baseline_year_is_present() {
        assert!(supported_years().contains(&BASELINE_YEAR));
    }

    #[test]
    fn qss_shares_the_mfj_schedule() {
        let table = resolve(Some(2024));

        assert_eq!(
            table.brackets_for(FilingStatus::QualifyingSurvivingSpouse),
            table.brackets_for(FilingStatus::MarriedFilingJointly)
        );
    }
}
