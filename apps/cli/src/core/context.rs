use anyhow::Result;
use secure_analytics::application::{AppConfig, DashboardSession};
use secure_analytics::domain::ports::{Notifier, ScorePresenter};
use secure_analytics::infrastructure::TracingNotifier;
use std::path::PathBuf;

use crate::core::CliError;
use crate::ui::presenter::{SilentPresenter, TerminalNotifier};

/// Resolved home directory and settings shared by every command.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub home: PathBuf,
    pub config: AppConfig,
}

impl CliContext {
    pub fn load() -> Result<Self, CliError> {
        let home = AppConfig::resolve_home().map_err(|e| CliError::Config(format!("{:#}", e)))?;
        let config = AppConfig::load(&home).map_err(|e| CliError::Config(format!("{:#}", e)))?;
        tracing::debug!(home = %home.display(), profile = %config.profile, "configuration loaded");
        Ok(Self { home, config })
    }

    /// Open the configured profile without live output.
    pub fn session(&self) -> Result<DashboardSession> {
        self.session_with(Box::new(SilentPresenter))
    }

    pub fn session_with(&self, presenter: Box<dyn ScorePresenter>) -> Result<DashboardSession> {
        self.open(Box::new(TerminalNotifier), presenter)
    }

    /// Notifications go to the log only, leaving stdout to the caller.
    pub fn headless_session(&self) -> Result<DashboardSession> {
        self.open(Box::new(TracingNotifier::new()), Box::new(SilentPresenter))
    }

    fn open(
        &self,
        notifier: Box<dyn Notifier>,
        presenter: Box<dyn ScorePresenter>,
    ) -> Result<DashboardSession> {
        DashboardSession::open(&self.config, &self.home, notifier, presenter)
    }

    /// Persist explicitly when autosave is off. Commands are one-shot, so a
    /// change that is not saved here would be lost.
    pub fn commit(&self, session: &DashboardSession) -> Result<()> {
        if !self.config.autosave {
            session.save()?;
        }
        Ok(())
    }
}
