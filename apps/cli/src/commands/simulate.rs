use anyhow::Result;
use clap::Args;
use secure_analytics::application::LiveSimulator;
use std::time::Duration;

use crate::core::CliContext;
use crate::ui::{self, presenter::summary_line, presenter::LivePresenter};

/// Drift environment indicators at random until stopped.
#[derive(Args, Debug)]
pub struct SimulateCommand {
    /// Stop after this many changes (default: run until Ctrl-C)
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Seconds between changes (default: from config)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Largest change per tick
    #[arg(long, default_value_t = 1)]
    pub max_step: i64,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulateCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let presenter = LivePresenter::new();
        let line = presenter.handle();
        let mut session = ctx.session_with(Box::new(presenter))?;

        if let Some(report) = session.report() {
            line.set_message(summary_line(&report));
        }

        let every = self
            .interval
            .map(|secs| Duration::from_secs(secs.max(1)))
            .unwrap_or_else(|| ctx.config.simulation_interval());
        let mut simulator = match self.seed {
            Some(seed) => LiveSimulator::seeded(seed),
            None => LiveSimulator::from_entropy(),
        }
        .with_max_step(self.max_step);

        let done = tokio::select! {
            done = simulator.run(&mut session, every, ctx.config.source_refresh(), self.ticks) => Some(done),
            _ = tokio::signal::ctrl_c() => None,
        };

        line.finish_and_clear();
        ctx.commit(&session)?;

        match done {
            Some(ticks) => ui::success(format!("Simulation finished after {} changes", ticks)),
            None => ui::warn("Simulation interrupted"),
        }
        if let Some(report) = session.report() {
            ui::println(summary_line(&report));
        }
        Ok(())
    }
}
