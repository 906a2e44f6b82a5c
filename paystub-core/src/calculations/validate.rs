//! Pre-calculation input validation.
//!
//! Validation runs once, before any computation; the calculators assume
//! validated input and do not re-check. Note what is deliberately NOT
//! rejected here: unknown state codes and unsupported tax years are
//! recoverable data gaps handled by documented defaults downstream, not
//! input errors.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{DeductionAmount, PaystubInput};

/// A caller-facing rejection of a calculation request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("hourly rate must be non-negative, got {0}")]
    NegativeHourlyRate(Decimal),

    #[error("hours per period must be non-negative, got {0}")]
    NegativeHours(Decimal),

    #[error("overtime hours must be non-negative, got {0}")]
    NegativeOvertimeHours(Decimal),

    #[error("overtime rate must be non-negative, got {0}")]
    NegativeOvertimeRate(Decimal),

    #[error("deduction '{name}' must be non-negative, got {amount}")]
    NegativeDeduction { name: String, amount: Decimal },

    #[error("deduction '{name}' percentage must be between 0 and 1, got {fraction}")]
    DeductionPercentOutOfRange { name: String, fraction: Decimal },
}

/// Validates a calculation request, returning the first problem found.
///
/// # Errors
///
/// Returns [`ValidationError`] if any monetary or hour input is negative,
/// or a percentage deduction falls outside [0, 1].
pub fn validate_paystub_inputs(input: &PaystubInput) -> Result<(), ValidationError> {
    if input.hourly_rate < Decimal::ZERO {
        return Err(ValidationError::NegativeHourlyRate(input.hourly_rate));
    }
    if input.hours_per_period < Decimal::ZERO {
        return Err(ValidationError::NegativeHours(input.hours_per_period));
    }
    if input.overtime_hours < Decimal::ZERO {
        return Err(ValidationError::NegativeOvertimeHours(input.overtime_hours));
    }
    if input.overtime_rate < Decimal::ZERO {
        return Err(ValidationError::NegativeOvertimeRate(input.overtime_rate));
    }
    for deduction in &input.extra_deductions {
        match deduction.amount {
            DeductionAmount::Flat(amount) => {
                if amount < Decimal::ZERO {
                    return Err(ValidationError::NegativeDeduction {
                        name: deduction.name.clone(),
                        amount,
                    });
                }
            }
            DeductionAmount::PercentOfGross(fraction) => {
                if fraction < Decimal::ZERO || fraction > Decimal::ONE {
                    return Err(ValidationError::DeductionPercentOutOfRange {
                        name: deduction.name.clone(),
                        fraction,
                    });
                }
            }
        }
    }
    Ok(())
}
