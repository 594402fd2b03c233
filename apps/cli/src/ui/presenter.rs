use indicatif::{ProgressBar, ProgressStyle};
use secure_analytics::domain::ports::{Notifier, ScorePresenter, Severity};
use secure_analytics::domain::scoring::{DerivedScores, ScoreReport};
use std::time::Duration;

use crate::ui::{self, Theme};

/// Routes session notifications to the terminal message helpers.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => ui::info(message),
            Severity::Success => ui::success(message),
            Severity::Warning => ui::warn(message),
            Severity::Error => ui::error(message),
        }
    }
}

/// For one-shot commands that render once at the end.
pub struct SilentPresenter;

impl ScorePresenter for SilentPresenter {
    fn present(&self, report: &ScoreReport) {
        tracing::trace!(total = report.scores.total_risk, "report suppressed");
    }
}

/// One-line score ticker for `simulate`.
pub struct LivePresenter {
    pb: ProgressBar,
}

impl LivePresenter {
    pub fn new() -> Self {
        let pb = ui::multi_progress().add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner:.cyan} {prefix:.bold} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_prefix("Live");
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Cheap handle for the caller to finish the line after the run.
    pub fn handle(&self) -> ProgressBar {
        self.pb.clone()
    }
}

impl ScorePresenter for LivePresenter {
    fn present(&self, report: &ScoreReport) {
        self.pb.set_message(summary_line(report));
    }
}

/// `Total 2.9 · Environment 2.5 · Object 3.2`, colored by class.
pub fn summary_line(report: &ScoreReport) -> String {
    let scores = &report.scores;
    let classes = &report.classes;
    format!(
        "Total {} · Environment {} · Object {}",
        Theme::risk(DerivedScores::display(scores.total_risk), classes.total),
        Theme::risk(
            DerivedScores::display(scores.environment_risk),
            classes.environment
        ),
        Theme::risk(DerivedScores::display(scores.object_risk), classes.object),
    )
}
