use anyhow::{Context, Result};
use clap::Args;
use secure_analytics::domain::ports::SnapshotStore;
use secure_analytics::infrastructure::JsonFileSnapshotStore;
use std::path::PathBuf;

use crate::core::CliContext;
use crate::ui::{self, Icon, Theme};

#[derive(Args, Debug)]
pub struct ExportCommand {
    /// Destination JSON file
    pub path: PathBuf,
}

impl ExportCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let session = ctx.session()?;
        let snapshot = session.snapshot();

        JsonFileSnapshotStore::new(self.path.clone())
            .save(&snapshot)
            .with_context(|| format!("Failed to export to {:?}", self.path))?;

        ui::success(format!(
            "{} Exported {} indicators to {}",
            Icon::File,
            snapshot.indicator_count(),
            Theme::primary(self.path.display())
        ));
        Ok(())
    }
}
