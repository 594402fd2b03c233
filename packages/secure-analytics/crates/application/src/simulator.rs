use chrono::Utc;
use domain::indicators::{Group, IndicatorKey, SCALE_MAX, SCALE_MIN};
use domain::scoring::UpdateOutcome;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::session::DashboardSession;

/// Starting point for an indicator that has not been assessed yet.
const UNASSESSED_BASE: i64 = 5;

/// Drifts one random environment indicator per tick, standing in for a
/// live feed. All changes go through the session's normal update path.
pub struct LiveSimulator<R: Rng = StdRng> {
    rng: R,
    max_step: i64,
}

impl LiveSimulator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LiveSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, max_step: 1 }
    }

    /// Largest change per tick, in either direction.
    pub fn with_max_step(mut self, max_step: i64) -> Self {
        self.max_step = max_step.max(0);
        self
    }

    /// Apply one random change. Returns the key touched and the outcome.
    pub fn step(&mut self, session: &mut DashboardSession) -> (IndicatorKey, UpdateOutcome) {
        let keys: Vec<IndicatorKey> = IndicatorKey::in_group(Group::Environment).collect();
        let key = keys[self.rng.gen_range(0..keys.len())];

        let current = session
            .aggregator()
            .value(key)
            .unwrap_or(UNASSESSED_BASE);
        let change = self.rng.gen_range(-self.max_step..=self.max_step);
        // Unclamped sessions can hold any stored value.
        let next = current.saturating_add(change).clamp(SCALE_MIN, SCALE_MAX);

        debug!(%key, current, next, "simulated indicator drift");
        (key, session.set(key, next))
    }

    /// Tick until `ticks` changes have been made, or forever when `None`.
    /// Data-source timestamps are refreshed on their own interval.
    pub async fn run(
        &mut self,
        session: &mut DashboardSession,
        every: Duration,
        source_refresh: Duration,
        ticks: Option<u64>,
    ) -> u64 {
        let mut drift = interval_at(Instant::now() + every, every);
        drift.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut refresh = interval_at(Instant::now() + source_refresh, source_refresh);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(?every, ?ticks, "live simulation started");

        let mut done = 0;
        while ticks.map_or(true, |limit| done < limit) {
            tokio::select! {
                _ = drift.tick() => {
                    self.step(session);
                    done += 1;
                }
                _ = refresh.tick() => {
                    let refreshed = session.refresh_sources(Utc::now());
                    debug!(refreshed, "data sources refreshed");
                }
            }
        }

        info!(ticks = done, "live simulation finished");
        done
    }
}
