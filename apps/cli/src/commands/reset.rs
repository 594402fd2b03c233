use anyhow::Result;
use clap::Args;

use crate::core::{CliContext, CliError};
use crate::ui::{self, presenter::summary_line};

/// Restore the reference facility and assessment.
#[derive(Args, Debug)]
pub struct ResetCommand {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ResetCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        if !self.yes {
            let confirmed = cliclack::confirm(format!(
                "Discard the '{}' assessment and start from the reference facility?",
                ctx.config.profile
            ))
            .initial_value(false)
            .interact()?;

            if !confirmed {
                return Err(CliError::Cancelled.into());
            }
        }

        let mut session = ctx.session()?;
        session.reset()?;
        ctx.commit(&session)?;

        ui::success("Assessment reset");
        if let Some(report) = session.report() {
            ui::println(summary_line(&report));
        }
        Ok(())
    }
}
