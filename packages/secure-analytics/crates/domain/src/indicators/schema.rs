use super::{Group, IndicatorKey, Polarity};
use crate::scoring::ScoringError;
use analytics_snapshot::{ENVIRONMENT_KEYS, OBJECT_KEYS};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IndicatorError {
    #[error("Indicator '{0}' is declared twice")]
    Duplicate(String),
    #[error("Group '{0}' has no indicators")]
    EmptyGroup(Group),
    #[error("Indicator '{name}' is stored under '{wire}' in snapshots")]
    WireMismatch { name: String, wire: String },
    #[error("Reference assessment cannot be scored: {0}")]
    Unscored(#[from] ScoringError),
}

/// Static facts about one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSpec {
    pub key: IndicatorKey,
    pub group: Group,
    pub polarity: Polarity,
}

/// Name → indicator lookup, built and checked once per aggregator.
#[derive(Debug, Clone)]
pub struct IndicatorSchema {
    by_name: HashMap<&'static str, IndicatorSpec>,
}

impl IndicatorSchema {
    /// Build the table for the standard twelve indicators.
    pub fn standard() -> Result<Self, IndicatorError> {
        Self::build(IndicatorKey::ALL)
    }

    pub fn build(keys: impl IntoIterator<Item = IndicatorKey>) -> Result<Self, IndicatorError> {
        let mut by_name = HashMap::new();

        for key in keys {
            let spec = IndicatorSpec {
                key,
                group: key.group(),
                polarity: key.polarity(),
            };
            if by_name.insert(key.as_str(), spec).is_some() {
                return Err(IndicatorError::Duplicate(key.as_str().to_string()));
            }
        }

        let schema = Self { by_name };
        schema.validate()?;
        Ok(schema)
    }

    fn validate(&self) -> Result<(), IndicatorError> {
        for group in Group::ALL {
            let wire: &[&str] = match group {
                Group::Environment => &ENVIRONMENT_KEYS,
                Group::Object => &OBJECT_KEYS,
            };

            let members: Vec<&IndicatorSpec> =
                self.by_name.values().filter(|s| s.group == group).collect();
            if members.is_empty() {
                return Err(IndicatorError::EmptyGroup(group));
            }

            for spec in members {
                if !wire.contains(&spec.key.as_str()) {
                    return Err(IndicatorError::WireMismatch {
                        name: spec.key.as_str().to_string(),
                        wire: group.as_str().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&IndicatorSpec> {
        self.by_name.get(name)
    }

    /// Resolve a key that must belong to `group`. A key from the other
    /// group resolves to `None`, same as an unknown name.
    pub fn resolve(&self, group: Group, name: &str) -> Option<IndicatorKey> {
        self.lookup(name)
            .filter(|spec| spec.group == group)
            .map(|spec| spec.key)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
