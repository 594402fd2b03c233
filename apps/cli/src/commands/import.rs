use anyhow::Result;
use clap::Args;
use secure_analytics::domain::ports::SnapshotStore;
use secure_analytics::infrastructure::JsonFileSnapshotStore;
use std::path::PathBuf;

use crate::core::{CliContext, CliError};
use crate::ui::{self, presenter::summary_line};

/// Replace the current assessment with a snapshot file.
#[derive(Args, Debug)]
pub struct ImportCommand {
    /// Snapshot JSON file, current or legacy layout
    pub path: PathBuf,
}

impl ImportCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let snapshot = JsonFileSnapshotStore::new(self.path.clone())
            .load()
            .map_err(|e| CliError::Snapshot(e.to_string()))?
            .ok_or_else(|| CliError::Snapshot(format!("{} does not exist", self.path.display())))?;

        let mut session = ctx.session()?;
        let outcomes = session.apply_snapshot(&snapshot);

        // Empty means the imported values could not be scored and the
        // session kept its previous assessment. Leave the profile alone.
        if outcomes.is_empty() {
            return Err(CliError::Scoring(
                "the imported assessment leaves a group without values".to_string(),
            )
            .into());
        }

        // Restoring does not autosave, so write the import back explicitly.
        session.save()?;

        let applied = outcomes.iter().filter(|o| o.changed()).count();
        let skipped = outcomes.len() - applied;
        ui::success(format!("Imported {} indicators", applied));
        if skipped > 0 {
            ui::warn(format!("Skipped {} unknown indicators", skipped));
        }
        if let Some(report) = session.report() {
            ui::println(summary_line(&report));
        }
        Ok(())
    }
}
