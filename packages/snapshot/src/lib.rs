pub mod types;
pub use types::*;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Format version written by this crate.
pub const CURRENT_VERSION: u32 = 1;

/// Wire names of the environment indicators, in display order.
pub const ENVIRONMENT_KEYS: [&str; 6] = [
    "political",
    "crime",
    "terror",
    "cyber",
    "emergency",
    "social",
];

/// Wire names of the object protection indicators, in display order.
pub const OBJECT_KEYS: [&str; 6] = ["access", "cctv", "alarm", "fire", "building", "personnel"];

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// A saved assessment: facility profile plus both indicator groups.
///
/// Indicator groups are plain `name -> value` maps so older and newer
/// schemas can be read without knowing every key. Unassessed indicators
/// are simply absent.
///
/// Documents without a `version` field are treated as version 0, the
/// untagged layout of early dashboards, and upgraded on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Snapshot {
    /// Format version. Missing means a legacy (version 0) document.
    #[serde(default)]
    pub version: u32,

    /// When the snapshot was taken.
    #[serde(default, rename = "savedAt", skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    /// Facility profile. Legacy documents call this section `general`.
    #[serde(default, alias = "general")]
    pub facility: FacilityProfile,

    /// Environment indicators (political, crime, terror, cyber, emergency, social).
    #[serde(default)]
    pub environment: BTreeMap<String, i64>,

    /// Object protection indicators (access, cctv, alarm, fire, building, personnel).
    #[serde(default)]
    pub object: BTreeMap<String, i64>,
}

impl Snapshot {
    pub fn new(
        facility: FacilityProfile,
        environment: BTreeMap<String, i64>,
        object: BTreeMap<String, i64>,
    ) -> Self {
        Self {
            version: CURRENT_VERSION,
            saved_at: Some(Utc::now()),
            facility,
            environment,
            object,
        }
    }

    /// Parse a snapshot, upgrading legacy documents and rejecting ones from
    /// a newer format.
    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let mut snapshot: Snapshot = serde_json::from_str(input)?;

        if snapshot.version > CURRENT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: CURRENT_VERSION,
            });
        }

        if snapshot.version == 0 {
            snapshot.version = CURRENT_VERSION;
        }

        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of indicator entries across both groups.
    pub fn indicator_count(&self) -> usize {
        self.environment.len() + self.object.len()
    }
}
