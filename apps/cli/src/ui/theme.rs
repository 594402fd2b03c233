use owo_colors::OwoColorize;
use secure_analytics::domain::scoring::{ProgressTier, RiskClass};
use std::fmt;

/// The central theme definition for the SecureAnalytics CLI.
/// Defines the official color palette and iconography.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) - headings, keys.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", text.cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", text.bold())
    }

    /// Success Color (Green)
    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", text.green().bold())
    }

    /// Warning Color (Yellow)
    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", text.yellow().bold())
    }

    /// Error Color (Red)
    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", text.red().bold())
    }

    /// Muted/Dimmed - metadata, timestamps.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", text.dimmed())
    }

    /// Color a value by its risk class: low green, medium yellow, high red.
    pub fn risk(text: impl fmt::Display, class: RiskClass) -> String {
        match class {
            RiskClass::Low => Self::success(text),
            RiskClass::Medium => Self::warning(text),
            RiskClass::High => Self::error(text),
        }
    }

    pub fn tier(text: impl fmt::Display, tier: ProgressTier) -> String {
        match tier {
            ProgressTier::Good => Self::success(text),
            ProgressTier::Warning => Self::warning(text),
            ProgressTier::Critical => Self::error(text),
        }
    }
}

/// Standardized icons.
/// Usage: `println!("{} Saved", Icon::Check)`
pub enum Icon {
    Shield,
    Chart,
    Building,
    Satellite,
    Check,
    Cross,
    Warning,
    Info,
    File,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Shield => "🛡️ ",
            Icon::Chart => "📊",
            Icon::Building => "🏢",
            Icon::Satellite => "📡",
            Icon::Check => "✔",
            Icon::Cross => "✖",
            Icon::Warning => "⚠",
            Icon::Info => "ℹ",
            Icon::File => "📄",
        };
        write!(f, "{}", icon)
    }
}
