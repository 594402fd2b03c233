use anyhow::{Context, Result};
use domain::indicators::ClampPolicy;
use infrastructure::JsonFileSnapshotStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const HOME_ENV: &str = "SECURE_ANALYTICS_HOME";
pub const PROFILE_ENV: &str = "SECURE_ANALYTICS_PROFILE";

/// Settings read from `<home>/config.toml`. Every field has a default, so a
/// missing file or a partial one is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seconds between simulated indicator changes.
    pub simulation_interval_secs: u64,
    /// Seconds between data-source timestamp refreshes.
    pub source_refresh_secs: u64,
    /// Clamp indicator input to 0-10. Off keeps raw values.
    pub clamp_input: bool,
    /// Name of the stored assessment to work on.
    pub profile: String,
    /// Save after every change.
    pub autosave: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation_interval_secs: 10,
            source_refresh_secs: 30,
            clamp_input: true,
            profile: "default".to_string(),
            autosave: true,
        }
    }
}

impl AppConfig {
    /// `$SECURE_ANALYTICS_HOME`, else `~/.secure-analytics`.
    pub fn resolve_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var(HOME_ENV) {
            if !home.trim().is_empty() {
                return Ok(PathBuf::from(home));
            }
        }
        JsonFileSnapshotStore::default_home()
    }

    /// Load `<home>/config.toml` and apply environment overrides.
    pub fn load(home: &Path) -> Result<Self> {
        let mut config = Self::load_from(&home.join("config.toml"))?;

        if let Ok(profile) = std::env::var(PROFILE_ENV) {
            if !profile.trim().is_empty() {
                config.profile = profile;
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config {:?}", path))
    }

    pub fn clamp_policy(&self) -> ClampPolicy {
        if self.clamp_input {
            ClampPolicy::Clamp
        } else {
            ClampPolicy::Preserve
        }
    }

    pub fn simulation_interval(&self) -> Duration {
        Duration::from_secs(self.simulation_interval_secs.max(1))
    }

    pub fn source_refresh(&self) -> Duration {
        Duration::from_secs(self.source_refresh_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.simulation_interval(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "clamp_input = false\nprofile = \"werk-nord\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.clamp_policy(), ClampPolicy::Preserve);
        assert_eq!(config.profile, "werk-nord");
        assert_eq!(config.source_refresh_secs, 30);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "simulation_interval_secs = \"soon\"").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_interval_is_bumped() {
        let config = AppConfig {
            simulation_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.simulation_interval(), Duration::from_secs(1));
    }
}
