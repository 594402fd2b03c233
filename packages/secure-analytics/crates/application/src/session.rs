use analytics_snapshot::{FacilityProfile, Snapshot, SnapshotValidator, ValidationLevel};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use domain::indicators::{Group, IndicatorKey};
use domain::ports::{Notifier, ScorePresenter, Severity, SnapshotStore};
use domain::scoring::{
    CompletionCount, DerivedScores, RecomputeFailed, RiskAggregator, ScoreReport, ScoringError,
    UpdateOutcome,
};
use domain::sources::DataSourceBoard;
use infrastructure::JsonFileSnapshotStore;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::AppConfig;

const RECOMPUTE_FAILED: &str = "Risk calculation failed; showing last valid scores";

/// One user's dashboard: the aggregator plus the collaborators it reports to.
///
/// Every indicator change, whether typed in, restored or simulated, goes
/// through [`DashboardSession::set_indicator`]. A change is stored,
/// recomputed and presented before the call returns.
pub struct DashboardSession {
    aggregator: RiskAggregator,
    facility: FacilityProfile,
    sources: DataSourceBoard,
    notifier: Box<dyn Notifier>,
    presenter: Box<dyn ScorePresenter>,
    store: Option<Box<dyn SnapshotStore>>,
    autosave: bool,
}

impl DashboardSession {
    /// Session seeded with the reference facility, without storage.
    pub fn new(
        config: &AppConfig,
        notifier: Box<dyn Notifier>,
        presenter: Box<dyn ScorePresenter>,
    ) -> Result<Self> {
        let aggregator = RiskAggregator::with_reference(config.clamp_policy())
            .context("Indicator schema is inconsistent")?;

        Ok(Self {
            aggregator,
            facility: FacilityProfile::reference(),
            sources: DataSourceBoard::reference(Utc::now()),
            notifier,
            presenter,
            store: None,
            autosave: config.autosave,
        })
    }

    /// Session backed by the profile store under `home`, restored from the
    /// last save when there is one.
    pub fn open(
        config: &AppConfig,
        home: &Path,
        notifier: Box<dyn Notifier>,
        presenter: Box<dyn ScorePresenter>,
    ) -> Result<Self> {
        let store = JsonFileSnapshotStore::for_profile(home, &config.profile)?;
        let mut session = Self::new(config, notifier, presenter)?.with_store(Box::new(store));
        session.restore()?;
        Ok(session)
    }

    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn aggregator(&self) -> &RiskAggregator {
        &self.aggregator
    }

    pub fn facility(&self) -> &FacilityProfile {
        &self.facility
    }

    pub fn sources(&self) -> &DataSourceBoard {
        &self.sources
    }

    pub fn derived_scores(&self) -> Option<&DerivedScores> {
        self.aggregator.scores()
    }

    pub fn completion_count(&self) -> CompletionCount {
        CompletionCount::new(
            self.aggregator.assessed_count(),
            self.facility.filled_fields(),
        )
    }

    /// Current report, if scores have ever been computed.
    pub fn report(&self) -> Option<ScoreReport> {
        self.aggregator
            .scores()
            .map(|scores| ScoreReport::build(*scores, self.completion_count()))
    }

    /// The single update entry point.
    pub fn set_indicator(&mut self, group: Group, key: &str, value: i64) -> UpdateOutcome {
        let result = self.aggregator.set_indicator(group, key, value);
        self.settle(result)
    }

    pub fn clear_indicator(&mut self, group: Group, key: &str) -> UpdateOutcome {
        let result = self.aggregator.clear_indicator(group, key);
        self.settle(result)
    }

    /// Update by typed key.
    pub fn set(&mut self, key: IndicatorKey, value: i64) -> UpdateOutcome {
        self.set_indicator(key.group(), key.as_str(), value)
    }

    pub fn set_facility(&mut self, facility: FacilityProfile) {
        self.facility = facility;
        self.publish();
        self.autosave();
    }

    /// Put the reference facility and assessment back.
    pub fn reset(&mut self) -> Result<()> {
        self.aggregator = RiskAggregator::with_reference(self.aggregator.policy())
            .context("Indicator schema is inconsistent")?;
        self.facility = FacilityProfile::reference();
        self.publish();
        self.autosave();
        Ok(())
    }

    fn settle(&mut self, result: Result<UpdateOutcome, RecomputeFailed>) -> UpdateOutcome {
        match result {
            Ok(outcome) => {
                if outcome.changed() {
                    self.publish();
                    self.autosave();
                }
                outcome
            }
            Err(failed) => {
                self.report_failure(&failed.cause);
                // The value is stored even though scoring failed.
                self.autosave();
                failed.outcome
            }
        }
    }

    fn report_failure(&self, e: &ScoringError) {
        error!(error = %e, "risk recompute failed");
        self.notifier.notify(RECOMPUTE_FAILED, Severity::Error);
    }

    fn publish(&self) {
        if let Some(report) = self.report() {
            self.presenter.present(&report);
        }
    }

    fn autosave(&self) {
        if !self.autosave {
            return;
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "autosave failed");
            self.notifier
                .notify("Could not save the assessment", Severity::Warning);
        }
    }

    /// Plain snapshot of the facility and both indicator groups.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.facility.clone(),
            self.aggregator.set(Group::Environment).to_map(),
            self.aggregator.set(Group::Object).to_map(),
        )
    }

    /// Replace the current assessment with a snapshot. Unknown keys are
    /// skipped and values pass through the clamp policy, as with any other
    /// update. Returns the per-entry outcomes, or nothing when the restored
    /// assessment cannot be scored; the previous facility and indicators are
    /// then put back untouched.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Vec<UpdateOutcome> {
        let validation = SnapshotValidator::validate(snapshot);
        for issue in &validation.issues {
            match issue.level {
                ValidationLevel::Error | ValidationLevel::Warning => {
                    warn!(field = %issue.field, "{}", issue.message)
                }
                ValidationLevel::Info => info!(field = %issue.field, "{}", issue.message),
            }
        }

        let previous = (self.aggregator.clone(), self.facility.clone());

        self.facility = snapshot.facility.clone();
        match self
            .aggregator
            .replace_all(&snapshot.environment, &snapshot.object)
        {
            Ok(outcomes) => {
                self.publish();
                outcomes
            }
            Err(e) => {
                (self.aggregator, self.facility) = previous;
                self.report_failure(&e);
                Vec::new()
            }
        }
    }

    /// Load the stored snapshot, if any. Returns whether one was applied.
    pub fn restore(&mut self) -> Result<bool> {
        let Some(store) = &self.store else {
            return Ok(false);
        };

        match store.load().context("Failed to load saved assessment")? {
            Some(snapshot) => {
                let outcomes = self.apply_snapshot(&snapshot);
                info!(entries = outcomes.len(), "assessment restored");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(store) = &self.store {
            store
                .save(&self.snapshot())
                .context("Failed to save assessment")?;
        }
        Ok(())
    }

    /// Bump data-source timestamps.
    pub fn refresh_sources(&mut self, now: DateTime<Utc>) -> usize {
        self.sources.refresh(now)
    }
}
