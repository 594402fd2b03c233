pub mod charts;
pub mod indicators;
pub mod ports;
pub mod scoring;
pub mod sources;

pub use indicators::{ClampPolicy, Group, IndicatorKey, IndicatorSchema, IndicatorSet, Polarity};
pub use scoring::{
    progress_percentage, CompletionCount, DerivedScores, ProgressBar, ProgressInput, ProgressTier,
    RecomputeFailed, RiskAggregator, RiskClass, ScoreReport, ScoringError, UpdateOutcome,
};
