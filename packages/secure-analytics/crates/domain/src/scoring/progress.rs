use crate::indicators::SCALE_MAX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrowest bar width, so a zero score still shows.
pub const MIN_WIDTH: f64 = 5.0;
pub const MAX_WIDTH: f64 = 100.0;

/// What a KPI card displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProgressInput {
    /// A score on the 0-10 scale.
    Score { value: f64 },
    /// A `current/total` counter.
    Ratio { current: u32, total: u32 },
}

impl ProgressInput {
    /// Parse a displayed KPI value such as `"4.2"` or `"5/38"`.
    pub fn parse(display: &str) -> Option<Self> {
        let display = display.trim();
        if let Some((current, total)) = display.split_once('/') {
            return Some(ProgressInput::Ratio {
                current: current.trim().parse().ok()?,
                total: total.trim().parse().ok()?,
            });
        }
        display
            .parse::<f64>()
            .ok()
            .map(|value| ProgressInput::Score { value })
    }

    pub fn percentage(&self) -> f64 {
        match *self {
            // Multiply first: 3.0 / 10 * 100 lands just above 30.
            ProgressInput::Score { value } => value * 100.0 / SCALE_MAX as f64,
            ProgressInput::Ratio { total: 0, .. } => 0.0,
            ProgressInput::Ratio { current, total } => current as f64 / total as f64 * 100.0,
        }
    }
}

/// Colour band of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    Good,
    Warning,
    Critical,
}

impl ProgressTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 30.0 {
            ProgressTier::Good
        } else if percentage <= 60.0 {
            ProgressTier::Warning
        } else {
            ProgressTier::Critical
        }
    }
}

impl fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressTier::Good => write!(f, "good"),
            ProgressTier::Warning => write!(f, "warning"),
            ProgressTier::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    /// Unclamped percentage; the tier is derived from this.
    pub percentage: f64,
    /// Rendered width, in [5, 100].
    pub width: f64,
    pub tier: ProgressTier,
}

pub fn progress_percentage(input: ProgressInput) -> ProgressBar {
    let percentage = input.percentage();
    ProgressBar {
        percentage,
        width: percentage.clamp(MIN_WIDTH, MAX_WIDTH),
        tier: ProgressTier::from_percentage(percentage),
    }
}
