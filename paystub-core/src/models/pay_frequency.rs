use serde::{Deserialize, Serialize};

/// How often a paycheck is issued. Each frequency implies a fixed number
/// of pay periods in an annual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    Semimonthly,
    Monthly,
}

impl PayFrequency {
    /// Number of pay periods in a full year at this frequency.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Biweekly => 26,
            Self::Semimonthly => 24,
            Self::Monthly => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Semimonthly => "semimonthly",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weekly" => Some(Self::Weekly),
            "biweekly" => Some(Self::Biweekly),
            "semimonthly" => Some(Self::Semimonthly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn periods_per_year_matches_frequency() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(PayFrequency::Biweekly.periods_per_year(), 26);
        assert_eq!(PayFrequency::Semimonthly.periods_per_year(), 24);
        assert_eq!(PayFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn parse_round_trips_every_frequency() {
        for freq in [
            PayFrequency::Weekly,
            PayFrequency::Biweekly,
            PayFrequency::Semimonthly,
            PayFrequency::Monthly,
        ] {
            assert_eq!(PayFrequency::parse(freq.as_str()), Some(freq));
        }
    }

    #[test]
    fn parse_rejects_unknown_frequency() {
        assert_eq!(PayFrequency::parse("daily"), None);
    }
}
