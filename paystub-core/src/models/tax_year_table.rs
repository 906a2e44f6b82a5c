use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filing_status::FilingStatus;
use super::tax_bracket::BracketSchedule;

/// Federal bracket schedules for one tax year, keyed by filing status.
///
/// Qualifying surviving spouse is not stored separately; it resolves to
/// the married filing jointly schedule (IRS schedule Y-1 covers both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalSchedules {
    pub single: BracketSchedule,
    pub married_joint: BracketSchedule,
    pub married_separate: BracketSchedule,
    pub head_of_household: BracketSchedule,
}

impl FederalSchedules {
    pub fn for_status(
        &self,
        status: FilingStatus,
    ) -> &BracketSchedule {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingSurvivingSpouse => {
                &self.married_joint
            }
            FilingStatus::MarriedFilingSeparately => &self.married_separate,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }
}

/// Additional Medicare surtax thresholds, keyed by filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalMedicareThresholds {
    pub single: Decimal,
    pub married_joint: Decimal,
    pub married_separate: Decimal,
    pub head_of_household: Decimal,
    pub qualifying_surviving_spouse: Decimal,
}

impl AdditionalMedicareThresholds {
    pub fn for_status(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedFilingJointly => self.married_joint,
            FilingStatus::MarriedFilingSeparately => self.married_separate,
            FilingStatus::HeadOfHousehold => self.head_of_household,
            FilingStatus::QualifyingSurvivingSpouse => self.qualifying_surviving_spouse,
        }
    }
}

/// All withholding reference data for one tax year.
///
/// Defined once per supported year in the static tables, looked up
/// read-only, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearTable {
    pub tax_year: i32,
    pub ss_wage_base: Decimal,
    pub ss_rate: Decimal,
    pub medicare_rate: Decimal,
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_thresholds: AdditionalMedicareThresholds,
    pub federal: FederalSchedules,
}

impl TaxYearTable {
    /// Federal bracket schedule for the given filing status.
    pub fn brackets_for(
        &self,
        status: FilingStatus,
    ) -> &BracketSchedule {
        self.federal.for_status(status)
    }

    /// Additional Medicare surtax threshold for the given filing status.
    pub fn additional_medicare_threshold(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        self.additional_medicare_thresholds.for_status(status)
    }
}
