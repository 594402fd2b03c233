use secure_analytics::domain::indicators::IndicatorKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown indicator '{0}'")]
    UnknownIndicator(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Risk scores are unavailable: {0}")]
    Scoring(String),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Check config.toml in your SECURE_ANALYTICS_HOME for syntax errors.".to_string(),
            ),
            CliError::UnknownIndicator(_) => {
                let keys: Vec<&str> = IndicatorKey::ALL.iter().map(|k| k.as_str()).collect();
                Some(format!("Known indicators: {}", keys.join(", ")))
            }
            CliError::Snapshot(_) => Some(
                "Run `secure-analytics schema` to see the expected file format.".to_string(),
            ),
            CliError::Scoring(_) => {
                Some("Assess at least one indicator in each group.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_indicator_lists_keys() {
        let err = CliError::UnknownIndicator("weather".to_string());
        let help = err.suggestion().unwrap();
        assert!(help.contains("political"));
        assert!(help.contains("personnel"));
    }

    #[test]
    fn test_input_errors_carry_help() {
        for err in [
            CliError::Config("bad toml".to_string()),
            CliError::Snapshot("bad json".to_string()),
            CliError::Scoring("empty group".to_string()),
        ] {
            assert!(err.suggestion().is_some(), "{err}");
        }
    }

    #[test]
    fn test_cancelled_has_no_suggestion() {
        assert!(CliError::Cancelled.suggestion().is_none());
    }
}
