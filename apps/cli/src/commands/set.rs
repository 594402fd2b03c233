use anyhow::Result;
use clap::Args;
use secure_analytics::domain::scoring::UpdateOutcome;

use crate::commands::resolve_key;
use crate::core::{CliContext, CliError};
use crate::ui::{self, presenter::summary_line, Theme};

#[derive(Args, Debug)]
pub struct SetCommand {
    /// Indicator key, e.g. `crime` or `object.cctv`
    pub key: String,

    /// Value on the 0-10 scale
    #[arg(allow_negative_numbers = true)]
    pub value: i64,
}

impl SetCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let mut session = ctx.session()?;
        let (group, name) = resolve_key(session.aggregator().schema(), &self.key)?;

        match session.set_indicator(group, &name, self.value) {
            UpdateOutcome::Applied { key, value } => {
                ui::success(format!("{} = {}", Theme::primary(key), value));
            }
            UpdateOutcome::Clamped {
                key,
                requested,
                stored,
            } => {
                ui::warn(format!(
                    "{} = {} (clamped from {})",
                    Theme::primary(key),
                    stored,
                    requested
                ));
            }
            UpdateOutcome::Cleared { .. } | UpdateOutcome::Ignored => {
                return Err(CliError::UnknownIndicator(self.key.clone()).into());
            }
        }

        ctx.commit(&session)?;

        if let Some(report) = session.report() {
            ui::println(summary_line(&report));
        }
        Ok(())
    }
}
