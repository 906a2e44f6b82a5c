mod deduction;
mod filing_status;
mod pay_frequency;
mod paystub;
mod tax_bracket;
mod tax_year_table;

pub use deduction::{DeductionAmount, ExtraDeduction};
pub use filing_status::FilingStatus;
pub use pay_frequency::PayFrequency;
pub use paystub::{PaystubInput, PaystubResult, PaystubTotals, PeriodBreakdown};
pub use tax_bracket::{BracketSchedule, TaxBracket};
pub use tax_year_table::{AdditionalMedicareThresholds, FederalSchedules, TaxYearTable};
