use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feed status as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Active,
    Synced,
    RateLimit,
    Live,
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceStatus::Active => write!(f, "active"),
            SourceStatus::Synced => write!(f, "synced"),
            SourceStatus::RateLimit => write!(f, "rate limited"),
            SourceStatus::Live => write!(f, "live"),
        }
    }
}

/// A labelled feed. Nothing is fetched; only status and timestamp are tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub status: SourceStatus,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceBoard {
    sources: Vec<DataSource>,
}

impl DataSourceBoard {
    /// The five feeds the dashboard lists. The rate-limited feed starts an
    /// hour behind.
    pub fn reference(now: DateTime<Utc>) -> Self {
        let source = |id: &str, name: &str, status, last_update| DataSource {
            id: id.to_string(),
            name: name.to_string(),
            status,
            last_update,
        };

        Self {
            sources: vec![
                source(
                    "verfassungsschutz",
                    "Verfassungsschutz",
                    SourceStatus::Active,
                    now,
                ),
                source("polizei", "Polizei", SourceStatus::Synced, now),
                source(
                    "twitter",
                    "Twitter",
                    SourceStatus::RateLimit,
                    now - Duration::hours(1),
                ),
                source("presseportal", "Presseportal", SourceStatus::Active, now),
                source("weather", "Weather service", SourceStatus::Live, now),
            ],
        }
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// Stamp every reachable source with `now`. Rate-limited sources keep
    /// their last timestamp. Returns how many were refreshed.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> usize {
        let mut refreshed = 0;
        for source in &mut self.sources {
            if source.status != SourceStatus::RateLimit {
                source.last_update = now;
                refreshed += 1;
            }
        }
        refreshed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_skips_rate_limited() {
        let start = Utc::now();
        let mut board = DataSourceBoard::reference(start);
        let later = start + Duration::seconds(30);

        assert_eq!(board.refresh(later), 4);
        assert_eq!(board.get("polizei").unwrap().last_update, later);
        assert_eq!(
            board.get("twitter").unwrap().last_update,
            start - Duration::hours(1)
        );
    }
}
