use super::ProgressInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many of the expected inputs have been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCount {
    pub current: u32,
    pub total: u32,
}

impl CompletionCount {
    /// Inputs the full assessment questionnaire expects. Only part of it is
    /// tracked here; the rest counts as open.
    pub const EXPECTED_TOTAL: u32 = 38;

    pub fn new(assessed_indicators: usize, filled_profile_fields: usize) -> Self {
        let current = (assessed_indicators + filled_profile_fields) as u32;
        Self {
            current: current.min(Self::EXPECTED_TOTAL),
            total: Self::EXPECTED_TOTAL,
        }
    }

    pub fn as_progress(&self) -> ProgressInput {
        ProgressInput::Ratio {
            current: self.current,
            total: self.total,
        }
    }
}

impl fmt::Display for CompletionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}
