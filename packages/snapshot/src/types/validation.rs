use crate::{Snapshot, ENVIRONMENT_KEYS, OBJECT_KEYS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Error,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Warning,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_info(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Info,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks a snapshot before it is restored.
///
/// Nothing here is fatal to a restore: unknown keys are skipped and
/// out-of-range values are clamped by the session. The result only tells
/// the user what will be dropped or adjusted.
pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn validate(snapshot: &Snapshot) -> ValidationResult {
        let mut result = ValidationResult::new();

        Self::validate_group("environment", &snapshot.environment, &ENVIRONMENT_KEYS, &mut result);
        Self::validate_group("object", &snapshot.object, &OBJECT_KEYS, &mut result);
        Self::validate_facility(snapshot, &mut result);

        result
    }

    fn validate_group(
        group: &str,
        values: &BTreeMap<String, i64>,
        known: &[&str],
        result: &mut ValidationResult,
    ) {
        for (key, value) in values {
            if !known.contains(&key.as_str()) {
                result.add_warning(
                    format!("{}.{}", group, key),
                    format!("Unknown indicator '{}' will be ignored", key),
                );
                continue;
            }

            if !(0..=10).contains(value) {
                result.add_warning(
                    format!("{}.{}", group, key),
                    format!("Value {} is outside the 0-10 scale", value),
                );
            }
        }

        let missing: Vec<&str> = known
            .iter()
            .copied()
            .filter(|k| !values.contains_key(*k))
            .collect();

        if missing.len() == known.len() {
            result.add_error(
                group,
                format!("No {} indicator is assessed; its risk cannot be computed", group),
            );
        } else if !missing.is_empty() {
            result.add_info(
                group,
                format!("Unassessed indicators: {}", missing.join(", ")),
            );
        }
    }

    fn validate_facility(snapshot: &Snapshot, result: &mut ValidationResult) {
        let name_missing = snapshot
            .facility
            .object_name
            .as_deref()
            .map_or(true, |n| n.trim().is_empty());

        if name_missing {
            result.add_warning(
                "facility.objectName",
                "RECOMMENDED: Name the facility so exported reports can be told apart",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(env: &[(&str, i64)], obj: &[(&str, i64)]) -> Snapshot {
        Snapshot {
            version: crate::CURRENT_VERSION,
            saved_at: None,
            facility: crate::FacilityProfile::reference(),
            environment: env.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            object: obj.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn test_unknown_key_is_warning() {
        let result = SnapshotValidator::validate(&snapshot(
            &[("political", 5), ("bogus", 5)],
            &[("cctv", 5)],
        ));
        assert!(result.valid);
        assert!(result.has_warnings());
        assert!(result
            .issues
            .iter()
            .any(|i| i.field == "environment.bogus"));
    }

    #[test]
    fn test_empty_group_is_error() {
        let result = SnapshotValidator::validate(&snapshot(&[("crime", 2)], &[]));
        assert!(!result.valid);
        assert!(result.has_errors());
    }

    #[test]
    fn test_out_of_range_flagged() {
        let result = SnapshotValidator::validate(&snapshot(&[("crime", 14)], &[("fire", -1)]));
        let flagged = result
            .issues
            .iter()
            .filter(|i| i.message.contains("outside"))
            .count();
        assert_eq!(flagged, 2);
    }
}
