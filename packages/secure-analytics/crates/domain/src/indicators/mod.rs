pub mod schema;
pub mod set;

pub use schema::{IndicatorError, IndicatorSchema, IndicatorSpec};
pub use set::IndicatorSet;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower and upper bound of the indicator scale.
pub const SCALE_MIN: i64 = 0;
pub const SCALE_MAX: i64 = 10;

/// Indicator group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Environment,
    Object,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Environment, Group::Object];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Environment => "environment",
            Group::Object => "object",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "environment" => Some(Group::Environment),
            "object" => Some(Group::Object),
            _ => None,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a higher value means a safer or a more dangerous situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher value = lower risk.
    Direct,
    /// Higher value = higher risk.
    Inverse,
}

impl Polarity {
    /// Convert a raw value to "goodness" on the 0-10 scale. Computed in
    /// `f64` so unclamped values of any size stay finite.
    pub fn goodness(&self, value: i64) -> f64 {
        match self {
            Polarity::Direct => value as f64,
            Polarity::Inverse => SCALE_MAX as f64 - value as f64,
        }
    }
}

/// How out-of-range input is treated on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampPolicy {
    /// Clamp to [0, 10].
    #[default]
    Clamp,
    /// Store the value as given; scores may leave [0, 10].
    Preserve,
}

impl ClampPolicy {
    pub fn apply(&self, value: i64) -> i64 {
        match self {
            ClampPolicy::Clamp => value.clamp(SCALE_MIN, SCALE_MAX),
            ClampPolicy::Preserve => value,
        }
    }
}

/// The twelve assessed indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKey {
    // Environment
    Political,
    Crime,
    Terror,
    Cyber,
    Emergency,
    Social,
    // Object protection
    Access,
    Cctv,
    Alarm,
    Fire,
    Building,
    Personnel,
}

impl IndicatorKey {
    pub const ALL: [IndicatorKey; 12] = [
        IndicatorKey::Political,
        IndicatorKey::Crime,
        IndicatorKey::Terror,
        IndicatorKey::Cyber,
        IndicatorKey::Emergency,
        IndicatorKey::Social,
        IndicatorKey::Access,
        IndicatorKey::Cctv,
        IndicatorKey::Alarm,
        IndicatorKey::Fire,
        IndicatorKey::Building,
        IndicatorKey::Personnel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKey::Political => "political",
            IndicatorKey::Crime => "crime",
            IndicatorKey::Terror => "terror",
            IndicatorKey::Cyber => "cyber",
            IndicatorKey::Emergency => "emergency",
            IndicatorKey::Social => "social",
            IndicatorKey::Access => "access",
            IndicatorKey::Cctv => "cctv",
            IndicatorKey::Alarm => "alarm",
            IndicatorKey::Fire => "fire",
            IndicatorKey::Building => "building",
            IndicatorKey::Personnel => "personnel",
        }
    }

    /// Key for a wire name; `None` when the name is unknown.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    pub fn group(&self) -> Group {
        match self {
            IndicatorKey::Political
            | IndicatorKey::Crime
            | IndicatorKey::Terror
            | IndicatorKey::Cyber
            | IndicatorKey::Emergency
            | IndicatorKey::Social => Group::Environment,
            _ => Group::Object,
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            IndicatorKey::Crime | IndicatorKey::Terror | IndicatorKey::Cyber => Polarity::Inverse,
            _ => Polarity::Direct,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKey::Political => "Political stability",
            IndicatorKey::Crime => "Crime rate",
            IndicatorKey::Terror => "Terror risk",
            IndicatorKey::Cyber => "Cyber threats",
            IndicatorKey::Emergency => "Emergency services",
            IndicatorKey::Social => "Social media",
            IndicatorKey::Access => "Access control",
            IndicatorKey::Cctv => "Video surveillance",
            IndicatorKey::Alarm => "Alarm systems",
            IndicatorKey::Fire => "Fire protection",
            IndicatorKey::Building => "Structural security",
            IndicatorKey::Personnel => "Security personnel",
        }
    }

    /// Value of the reference facility assessment.
    pub fn reference_value(&self) -> i64 {
        match self {
            IndicatorKey::Political => 8,
            IndicatorKey::Crime => 3,
            IndicatorKey::Terror => 2,
            IndicatorKey::Cyber => 6,
            IndicatorKey::Emergency => 9,
            IndicatorKey::Social => 1,
            IndicatorKey::Access => 7,
            IndicatorKey::Cctv => 8,
            IndicatorKey::Alarm => 6,
            IndicatorKey::Fire => 9,
            IndicatorKey::Building => 8,
            IndicatorKey::Personnel => 5,
        }
    }

    pub fn in_group(group: Group) -> impl Iterator<Item = IndicatorKey> {
        Self::ALL.into_iter().filter(move |k| k.group() == group)
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_table() {
        let inverse: Vec<_> = IndicatorKey::ALL
            .iter()
            .filter(|k| k.polarity() == Polarity::Inverse)
            .map(|k| k.as_str())
            .collect();
        assert_eq!(inverse, vec!["crime", "terror", "cyber"]);

        assert!(IndicatorKey::in_group(Group::Object).all(|k| k.polarity() == Polarity::Direct));
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(IndicatorKey::in_group(Group::Environment).count(), 6);
        assert_eq!(IndicatorKey::in_group(Group::Object).count(), 6);
    }

    #[test]
    fn test_parse() {
        assert_eq!(IndicatorKey::parse("cctv"), Some(IndicatorKey::Cctv));
        assert_eq!(IndicatorKey::parse("CCTV"), None);
        assert_eq!(IndicatorKey::parse("weather"), None);
    }

    #[test]
    fn test_goodness() {
        assert_eq!(Polarity::Direct.goodness(7), 7.0);
        assert_eq!(Polarity::Inverse.goodness(7), 3.0);
    }

    #[test]
    fn test_goodness_of_extreme_values() {
        assert!(Polarity::Inverse.goodness(i64::MIN).is_finite());
        assert!(Polarity::Inverse.goodness(i64::MAX) < 0.0);
        assert_eq!(Polarity::Direct.goodness(i64::MIN), i64::MIN as f64);
    }

    #[test]
    fn test_clamp_policy() {
        assert_eq!(ClampPolicy::Clamp.apply(14), 10);
        assert_eq!(ClampPolicy::Clamp.apply(-3), 0);
        assert_eq!(ClampPolicy::Clamp.apply(4), 4);
        assert_eq!(ClampPolicy::Preserve.apply(14), 14);
    }
}
