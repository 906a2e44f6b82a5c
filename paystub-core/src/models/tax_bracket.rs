use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single marginal tax bracket.
///
/// `upper` is the bracket's income ceiling; `None` marks the unbounded
/// top bracket that terminates every schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        upper: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self { upper, rate }
    }
}

/// An ordered list of marginal brackets for one filing status.
///
/// Brackets must be strictly increasing in upper bound and end with an
/// unbounded bracket; [`BracketSchedule::is_valid`] checks both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Checks the schedule invariant: at least one bracket, upper bounds
    /// strictly increasing, and exactly the final bracket unbounded.
    pub fn is_valid(&self) -> bool {
        let Some((last, rest)) = self.brackets.split_last() else {
            return false;
        };
        if last.upper.is_some() {
            return false;
        }
        let mut previous: Option<Decimal> = None;
        for bracket in rest {
            let Some(upper) = bracket.upper else {
                // An unbounded bracket anywhere but last would make the
                // remaining brackets unreachable.
                return false;
            };
            if let Some(prev) = previous
                && upper <= prev
            {
                return false;
            }
            previous = Some(upper);
        }
        true
    }

    /// Computes marginal tax on `income`: each bracket taxes the slice of
    /// income between the previous bound and its own, at its own rate.
    ///
    /// The unbounded terminal bracket guarantees the walk terminates for
    /// arbitrarily large incomes. Zero or negative income yields zero.
    pub fn marginal_tax(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for bracket in &self.brackets {
            let slice_top = match bracket.upper {
                Some(upper) => income.min(upper),
                None => income,
            };
            if slice_top > lower {
                tax += (slice_top - lower) * bracket.rate;
            }
            match bracket.upper {
                Some(upper) if income > upper => lower = upper,
                _ => break,
            }
        }
        tax
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn schedule() -> BracketSchedule {
        BracketSchedule::new(vec![
            TaxBracket::new(Some(dec!(10000)), dec!(0.10)),
            TaxBracket::new(Some(dec!(40000)), dec!(0.20)),
            TaxBracket::new(None, dec!(0.30)),
        ])
    }

    // =========================================================================
    // is_valid tests
    // =========================================================================

    #[test]
    fn valid_schedule_passes() {
        assert!(schedule().is_valid());
    }

    #[test]
    fn empty_schedule_is_invalid() {
        assert!(!BracketSchedule::new(vec![]).is_valid());
    }

    #[test]
    fn bounded_final_bracket_is_invalid() {
        let schedule = BracketSchedule::new(vec![
            TaxBracket::new(Some(dec!(10000)), dec!(0.10)),
            TaxBracket::new(Some(dec!(40000)), dec!(0.20)),
        ]);

        assert!(!schedule.is_valid());
    }

    #[test]
    fn non_increasing_bounds_are_invalid() {
        let schedule = BracketSchedule::new(vec![
            TaxBracket::new(Some(dec!(40000)), dec!(0.10)),
            TaxBracket::new(Some(dec!(10000)), dec!(0.20)),
            TaxBracket::new(None, dec!(0.30)),
        ]);

        assert!(!schedule.is_valid());
    }

    #[test]
    fn unbounded_bracket_before_last_is_invalid() {
        let schedule = BracketSchedule::new(vec![
            TaxBracket::new(None, dec!(0.10)),
            TaxBracket::new(None, dec!(0.30)),
        ]);

        assert!(!schedule.is_valid());
    }

    // =========================================================================
    // marginal_tax tests
    // =========================================================================

    #[test]
    fn zero_income_yields_zero_tax() {
        assert_eq!(schedule().marginal_tax(dec!(0)), dec!(0));
    }

    #[test]
    fn income_within_first_bracket() {
        assert_eq!(schedule().marginal_tax(dec!(5000)), dec!(500.00));
    }

    #[test]
    fn income_spanning_two_brackets() {
        // 10000 * 0.10 + 10000 * 0.20 = 3000
        assert_eq!(schedule().marginal_tax(dec!(20000)), dec!(3000.00));
    }

    #[test]
    fn income_reaching_unbounded_bracket() {
        // 1000 + 6000 + 60000 * 0.30 = 25000
        assert_eq!(schedule().marginal_tax(dec!(100000)), dec!(25000.00));
    }

    #[test]
    fn income_exactly_at_bracket_bound() {
        // Bound itself is taxed at the lower bracket's rate.
        assert_eq!(schedule().marginal_tax(dec!(10000)), dec!(1000.00));
    }
}
