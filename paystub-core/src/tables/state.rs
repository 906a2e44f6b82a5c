//! Built-in state income tax policies, keyed by two-letter state code.
//!
//! Each state falls into one of three buckets:
//!
//! - no income tax at all,
//! - a single flat rate on period gross, or
//! - a progressive bracket schedule using the same marginal algorithm as
//!   the federal tables.
//!
//! Progressive states define a Single schedule and may override other
//! filing statuses; any status without an explicit schedule uses the
//! state's Single brackets. That fallback mirrors how several states
//! publish their withholding tables and is intentional, not a data gap.
//!
//! Codes outside this table are not an error: lookup returns `None` and
//! the state calculator withholds zero.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{BracketSchedule, FilingStatus, TaxBracket};

/// A state's income tax treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatePolicy {
    /// The state levies no income tax.
    NoIncomeTax,
    /// One fixed rate on all wage income.
    Flat(Decimal),
    /// Marginal brackets, keyed by filing status.
    Progressive(StateBrackets),
}

/// Per-status bracket schedules for a progressive state, with Single as
/// the fallback for statuses the state does not define separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBrackets {
    single: BracketSchedule,
    overrides: HashMap<FilingStatus, BracketSchedule>,
}

impl StateBrackets {
    pub fn new(
        single: BracketSchedule,
        overrides: HashMap<FilingStatus, BracketSchedule>,
    ) -> Self {
        Self { single, overrides }
    }

    pub fn for_status(
        &self,
        status: FilingStatus,
    ) -> &BracketSchedule {
        self.overrides.get(&status).unwrap_or(&self.single)
    }
}

static POLICIES: LazyLock<HashMap<&'static str, StatePolicy>> = LazyLock::new(build_policies);

/// Looks up the tax policy for an (already uppercased) state code.
pub fn policy_for(state_code: &str) -> Option<&'static StatePolicy> {
    POLICIES.get(state_code)
}

/// State codes with an explicit built-in policy.
pub fn supported_states() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = POLICIES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

fn schedule(brackets: &[(Option<Decimal>, Decimal)]) -> BracketSchedule {
    BracketSchedule::new(
        brackets
            .iter()
            .map(|&(upper, rate)| TaxBracket::new(upper, rate))
            .collect(),
    )
}

fn build_policies() -> HashMap<&'static str, StatePolicy> {
    let mut policies = HashMap::new();

    // States with no wage income tax.
    for code in ["AK", "FL", "NV", "NH", "SD", "TN", "TX", "WA", "WY"] {
        policies.insert(code, StatePolicy::NoIncomeTax);
    }

    // Flat-rate states.
    policies.insert("CO", StatePolicy::Flat(dec!(0.0440)));
    policies.insert("IL", StatePolicy::Flat(dec!(0.0495)));
    policies.insert("IN", StatePolicy::Flat(dec!(0.0305)));
    policies.insert("MI", StatePolicy::Flat(dec!(0.0425)));
    policies.insert("NC", StatePolicy::Flat(dec!(0.0450)));
    policies.insert("PA", StatePolicy::Flat(dec!(0.0307)));
    policies.insert("UT", StatePolicy::Flat(dec!(0.0465)));

    // Progressive states.
    policies.insert("CA", StatePolicy::Progressive(california()));
    policies.insert("MA", StatePolicy::Progressive(massachusetts()));
    policies.insert("NY", StatePolicy::Progressive(new_york()));

    policies
}

fn california() -> StateBrackets {
    let single = schedule(&[
        (Some(dec!(10412)), dec!(0.01)),
        (Some(dec!(24684)), dec!(0.02)),
        (Some(dec!(38959)), dec!(0.04)),
        (Some(dec!(54081)), dec!(0.06)),
        (Some(dec!(68350)), dec!(0.08)),
        (Some(dec!(349137)), dec!(0.093)),
        (Some(dec!(418961)), dec!(0.103)),
        (Some(dec!(698271)), dec!(0.113)),
        (None, dec!(0.123)),
    ]);
    let married_joint = schedule(&[
        (Some(dec!(20824)), dec!(0.01)),
        (Some(dec!(49368)), dec!(0.02)),
        (Some(dec!(77918)), dec!(0.04)),
        (Some(dec!(108162)), dec!(0.06)),
        (Some(dec!(136700)), dec!(0.08)),
        (Some(dec!(698274)), dec!(0.093)),
        (Some(dec!(837922)), dec!(0.103)),
        (Some(dec!(1396542)), dec!(0.113)),
        (None, dec!(0.123)),
    ]);

    let mut overrides = HashMap::new();
    overrides.insert(FilingStatus::MarriedFilingJointly, married_joint.clone());
    overrides.insert(FilingStatus::QualifyingSurvivingSpouse, married_joint);
    StateBrackets::new(single, overrides)
}

fn massachusetts() -> StateBrackets {
    // One low bracket plus the millionaire surtax; every filing status
    // uses the same schedule.
    let single = schedule(&[
        (Some(dec!(1000000)), dec!(0.0535)),
        (None, dec!(0.0935)),
    ]);
    StateBrackets::new(single, HashMap::new())
}

fn new_york() -> StateBrackets {
    let single = schedule(&[
        (Some(dec!(8500)), dec!(0.04)),
        (Some(dec!(11700)), dec!(0.045)),
        (Some(dec!(13900)), dec!(0.0525)),
        (Some(dec!(80650)), dec!(0.055)),
        (Some(dec!(215400)), dec!(0.06)),
        (Some(dec!(1077550)), dec!(0.0685)),
        (Some(dec!(5000000)), dec!(0.0965)),
        (Some(dec!(25000000)), dec!(0.103)),
        (None, dec!(0.109)),
    ]);
    let married_joint = schedule(&[
        (Some(dec!(17150)), dec!(0.04)),
        (Some(dec!(23600)), dec!(0.045)),
        (Some(dec!(27900)), dec!(0.0525)),
        (Some(dec!(161550)), dec!(0.055)),
        (Some(dec!(323200)), dec!(0.06)),
        (Some(dec!(2155350)), dec!(0.0685)),
        (Some(dec!(5000000)), dec!(0.0965)),
        (Some(dec!(25000000)), dec!(0.103)),
        (None, dec!(0.109)),
    ]);

    let mut overrides = HashMap::new();
    overrides.insert(FilingStatus::MarriedFilingJointly, married_joint.clone());
    overrides.insert(FilingStatus::QualifyingSurvivingSpouse, married_joint);
    StateBrackets::new(single, overrides)
}
