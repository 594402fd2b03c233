use analytics_snapshot::Snapshot;
use anyhow::{Context, Result};
use domain::ports::snapshot_store::{SnapshotStore, StoreError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-profile snapshot files under `<home>/profiles/<profile>.json`.
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store for `profile` below `home`, creating the profiles directory.
    pub fn for_profile(home: &Path, profile: &str) -> Result<Self> {
        let dir = home.join("profiles");
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create profile directory {:?}", dir))?;
        }
        Ok(Self::new(dir.join(format!("{}.json", sanitize(profile)))))
    }

    /// `~/.secure-analytics`
    pub fn default_home() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".secure-analytics"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Keep profile names usable as file names.
fn sanitize(profile: &str) -> String {
    let cleaned: String = profile
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let snapshot = Snapshot::from_json(&content)?;
        debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| StoreError::Location(self.path.display().to_string()))?;
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, snapshot.to_json_pretty()?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}
