pub mod aggregator;
pub mod completion;
pub mod progress;
pub mod report;

pub use aggregator::{RiskAggregator, UpdateOutcome};
pub use completion::CompletionCount;
pub use progress::{progress_percentage, ProgressBar, ProgressInput, ProgressTier};
pub use report::{KpiCard, KpiId, ScoreReport};

use crate::indicators::{Group, SCALE_MAX};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("No {0} indicator is assessed")]
    EmptyGroup(Group),
}

/// A change was stored, but the scores could not be recomputed and still
/// reflect the previous state.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{cause}; scores are stale")]
pub struct RecomputeFailed {
    pub outcome: UpdateOutcome,
    #[source]
    pub cause: ScoringError,
}

/// Categorical risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskClass {
    Low,
    Medium,
    High,
}

impl RiskClass {
    /// `low` up to 3, `medium` up to 6, `high` above.
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            RiskClass::Low
        } else if score <= 6.0 {
            RiskClass::Medium
        } else {
            RiskClass::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::Low => "low",
            RiskClass::Medium => "medium",
            RiskClass::High => "high",
        }
    }

    /// Style class used by the dashboard (`risk-low`, ...).
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskClass::Low => "risk-low",
            RiskClass::Medium => "risk-medium",
            RiskClass::High => "risk-high",
        }
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreClasses {
    pub environment: RiskClass,
    pub object: RiskClass,
    pub total: RiskClass,
}

/// Aggregate risk values, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedScores {
    pub environment_risk: f64,
    pub object_risk: f64,
    pub total_risk: f64,
}

impl DerivedScores {
    /// Risk is the complement of mean goodness. The total is averaged from
    /// the unrounded group risks.
    pub fn from_goodness(environment_goodness: f64, object_goodness: f64) -> Self {
        let max = SCALE_MAX as f64;
        let environment_risk = max - environment_goodness;
        let object_risk = max - object_goodness;
        Self {
            environment_risk,
            object_risk,
            total_risk: (environment_risk + object_risk) / 2.0,
        }
    }

    pub fn classes(&self) -> ScoreClasses {
        ScoreClasses {
            environment: RiskClass::from_score(self.environment_risk),
            object: RiskClass::from_score(self.object_risk),
            total: RiskClass::from_score(self.total_risk),
        }
    }

    /// One-decimal display string.
    pub fn display(score: f64) -> String {
        format!("{:.1}", score)
    }
}
