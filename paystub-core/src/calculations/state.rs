//! State income tax withholding for a single period.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::FilingStatus;
use crate::tables::{self, StatePolicy};

/// Computes state income tax on one period's gross pay.
///
/// The state code is uppercased and dispatched to the state's policy:
/// zero-tax states withhold nothing, flat-rate states apply one
/// multiplier to period gross, and progressive states walk a marginal
/// bracket schedule (Single brackets standing in for any status the
/// state does not define).
///
/// Unrecognized codes withhold zero rather than failing the whole
/// calculation; the gap is logged and the behavior is covered by tests,
/// so preserve it unless the product contract changes.
///
/// YTD gross is part of the signature for symmetry with the FICA
/// calculator; no built-in state policy currently keys on it.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paystub_core::calculations::compute_state_tax;
/// use paystub_core::models::FilingStatus;
///
/// let tax = compute_state_tax(dec!(5000.00), dec!(25000.00), "IL", FilingStatus::Single);
/// assert_eq!(tax, dec!(5000.00) * dec!(0.0495));
/// ```
pub fn compute_state_tax(
    period_gross: Decimal,
    _ytd_gross: Decimal,
    state_code: &str,
    filing_status: FilingStatus,
) -> Decimal {
    let code = state_code.to_uppercase();
    match tables::policy_for(&code) {
        Some(StatePolicy::NoIncomeTax) => Decimal::ZERO,
        Some(StatePolicy::Flat(rate)) => period_gross * *rate,
        Some(StatePolicy::Progressive(brackets)) => {
            brackets.for_status(filing_status).marginal_tax(period_gross)
        }
        None => {
            warn!(state = %code, "unrecognized state code, withholding zero state tax");
            Decimal::ZERO
        }
    }
}
