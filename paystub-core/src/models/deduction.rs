use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an extra deduction is sized for each pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductionAmount {
    /// A fixed dollar amount withheld every period.
    Flat(Decimal),
    /// A fraction of period gross pay (0.05 = 5%).
    PercentOfGross(Decimal),
}

/// A caller-supplied deduction beyond the statutory taxes, such as a
/// retirement contribution or insurance premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDeduction {
    pub name: String,
    pub amount: DeductionAmount,
}

impl ExtraDeduction {
    pub fn flat(
        name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            amount: DeductionAmount::Flat(amount),
        }
    }

    pub fn percent_of_gross(
        name: impl Into<String>,
        fraction: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            amount: DeductionAmount::PercentOfGross(fraction),
        }
    }

    /// Dollar value of this deduction for a period with the given gross pay.
    pub fn amount_for(
        &self,
        period_gross: Decimal,
    ) -> Decimal {
        match self.amount {
            DeductionAmount::Flat(amount) => amount,
            DeductionAmount::PercentOfGross(fraction) => period_gross * fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn flat_deduction_ignores_gross() {
        let deduction = ExtraDeduction::flat("401k", dec!(150.00));

        assert_eq!(deduction.amount_for(dec!(2000.00)), dec!(150.00));
        assert_eq!(deduction.amount_for(dec!(0.00)), dec!(150.00));
    }

    #[test]
    fn percent_deduction_scales_with_gross() {
        let deduction = ExtraDeduction::percent_of_gross("401k", dec!(0.05));

        assert_eq!(deduction.amount_for(dec!(2000.00)), dec!(100.0000));
    }
}
