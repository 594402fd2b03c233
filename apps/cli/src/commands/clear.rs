use anyhow::Result;
use clap::Args;
use secure_analytics::domain::scoring::UpdateOutcome;

use crate::commands::resolve_key;
use crate::core::CliContext;
use crate::ui::{self, presenter::summary_line, Theme};

#[derive(Args, Debug)]
pub struct ClearCommand {
    /// Indicator key to mark as not assessed
    pub key: String,
}

impl ClearCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let mut session = ctx.session()?;
        let (group, name) = resolve_key(session.aggregator().schema(), &self.key)?;

        match session.clear_indicator(group, &name) {
            UpdateOutcome::Cleared { key } => {
                ui::success(format!("{} is no longer assessed", Theme::primary(key)));
            }
            _ => ui::info(format!("{} was not assessed", Theme::primary(&name))),
        }

        ctx.commit(&session)?;

        if let Some(report) = session.report() {
            ui::println(summary_line(&report));
        }
        Ok(())
    }
}
