use super::{DerivedScores, RecomputeFailed, ScoringError};
use crate::indicators::{
    ClampPolicy, Group, IndicatorError, IndicatorKey, IndicatorSchema, IndicatorSet,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// What an update did to the stored indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpdateOutcome {
    Applied { key: IndicatorKey, value: i64 },
    Clamped { key: IndicatorKey, requested: i64, stored: i64 },
    Cleared { key: IndicatorKey },
    /// Unknown key, or a key from the other group. Nothing changed.
    Ignored,
}

impl UpdateOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, UpdateOutcome::Ignored)
    }
}

/// Owns both indicator groups and the last good set of scores.
///
/// Every mutation goes through this type and recomputes synchronously, so
/// callers never observe values and scores out of step. When a recompute
/// fails the previous scores are kept.
#[derive(Debug, Clone)]
pub struct RiskAggregator {
    schema: IndicatorSchema,
    policy: ClampPolicy,
    environment: IndicatorSet,
    object: IndicatorSet,
    scores: Option<DerivedScores>,
}

impl RiskAggregator {
    /// Aggregator with nothing assessed yet.
    pub fn new(policy: ClampPolicy) -> Result<Self, IndicatorError> {
        Ok(Self {
            schema: IndicatorSchema::standard()?,
            policy,
            environment: IndicatorSet::empty(Group::Environment),
            object: IndicatorSet::empty(Group::Object),
            scores: None,
        })
    }

    /// Aggregator seeded with the reference facility assessment.
    pub fn with_reference(policy: ClampPolicy) -> Result<Self, IndicatorError> {
        let mut aggregator = Self::new(policy)?;
        aggregator.environment = IndicatorSet::reference(Group::Environment);
        aggregator.object = IndicatorSet::reference(Group::Object);
        aggregator.recompute()?;
        Ok(aggregator)
    }

    pub fn policy(&self) -> ClampPolicy {
        self.policy
    }

    pub fn schema(&self) -> &IndicatorSchema {
        &self.schema
    }

    pub fn set(&self, group: Group) -> &IndicatorSet {
        match group {
            Group::Environment => &self.environment,
            Group::Object => &self.object,
        }
    }

    fn set_mut(&mut self, group: Group) -> &mut IndicatorSet {
        match group {
            Group::Environment => &mut self.environment,
            Group::Object => &mut self.object,
        }
    }

    pub fn value(&self, key: IndicatorKey) -> Option<i64> {
        self.set(key.group()).get(key)
    }

    /// Last successfully computed scores.
    pub fn scores(&self) -> Option<&DerivedScores> {
        self.scores.as_ref()
    }

    pub fn assessed_count(&self) -> usize {
        self.environment.assessed_count() + self.object.assessed_count()
    }

    /// Store a value and recompute.
    ///
    /// An unknown key is a no-op: nothing is stored and the scores are not
    /// touched. `Err` means the value was stored but scoring failed; the
    /// previous scores remain.
    pub fn set_indicator(
        &mut self,
        group: Group,
        name: &str,
        value: i64,
    ) -> Result<UpdateOutcome, RecomputeFailed> {
        let outcome = self.store(group, name, value);
        if outcome.changed() {
            self.recompute()
                .map_err(|cause| RecomputeFailed { outcome, cause })?;
        }
        Ok(outcome)
    }

    /// Mark an indicator as unassessed and recompute.
    pub fn clear_indicator(
        &mut self,
        group: Group,
        name: &str,
    ) -> Result<UpdateOutcome, RecomputeFailed> {
        let Some(key) = self.schema.resolve(group, name) else {
            debug!(%group, name, "ignoring clear of unknown indicator");
            return Ok(UpdateOutcome::Ignored);
        };

        if self.set_mut(group).remove(key).is_none() {
            return Ok(UpdateOutcome::Ignored);
        }

        let outcome = UpdateOutcome::Cleared { key };
        self.recompute()
            .map_err(|cause| RecomputeFailed { outcome, cause })?;
        Ok(outcome)
    }

    /// Replace both groups with the given maps and recompute once.
    pub fn replace_all(
        &mut self,
        environment: &BTreeMap<String, i64>,
        object: &BTreeMap<String, i64>,
    ) -> Result<Vec<UpdateOutcome>, ScoringError> {
        self.environment.clear();
        self.object.clear();

        let mut outcomes = Vec::with_capacity(environment.len() + object.len());
        for (name, value) in environment {
            outcomes.push(self.store(Group::Environment, name, *value));
        }
        for (name, value) in object {
            outcomes.push(self.store(Group::Object, name, *value));
        }

        self.recompute()?;
        Ok(outcomes)
    }

    fn store(&mut self, group: Group, name: &str, value: i64) -> UpdateOutcome {
        let Some(key) = self.schema.resolve(group, name) else {
            debug!(%group, name, "ignoring unknown indicator");
            return UpdateOutcome::Ignored;
        };

        let stored = self.policy.apply(value);
        self.set_mut(group).insert(key, stored);

        if stored != value {
            warn!(%key, requested = value, stored, "indicator value clamped to scale");
            UpdateOutcome::Clamped {
                key,
                requested: value,
                stored,
            }
        } else {
            UpdateOutcome::Applied { key, value }
        }
    }

    /// Recompute scores from the current values.
    pub fn recompute(&mut self) -> Result<DerivedScores, ScoringError> {
        let environment = self
            .environment
            .mean_goodness()
            .ok_or(ScoringError::EmptyGroup(Group::Environment))?;
        let object = self
            .object
            .mean_goodness()
            .ok_or(ScoringError::EmptyGroup(Group::Object))?;

        let scores = DerivedScores::from_goodness(environment, object);
        debug!(
            environment = scores.environment_risk,
            object = scores.object_risk,
            total = scores.total_risk,
            "risk scores recomputed"
        );

        self.scores = Some(scores);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> RiskAggregator {
        RiskAggregator::with_reference(ClampPolicy::Clamp).unwrap()
    }

    #[test]
    fn test_reference_scores() {
        let agg = reference();
        let scores = agg.scores().unwrap();
        // env goodness: (8 + 7 + 8 + 4 + 9 + 1) / 6 = 37/6
        assert!((scores.environment_risk - (10.0 - 37.0 / 6.0)).abs() < 1e-9);
        // obj goodness: (7 + 8 + 6 + 9 + 8 + 5) / 6 = 43/6
        assert!((scores.object_risk - (10.0 - 43.0 / 6.0)).abs() < 1e-9);
        assert!((scores.total_risk - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut agg = reference();
        let before = *agg.scores().unwrap();

        let outcome = agg.set_indicator(Group::Environment, "bogus", 5).unwrap();
        assert_eq!(outcome, UpdateOutcome::Ignored);
        assert_eq!(*agg.scores().unwrap(), before);
    }

    #[test]
    fn test_key_from_other_group_is_noop() {
        let mut agg = reference();
        let outcome = agg.set_indicator(Group::Environment, "cctv", 0).unwrap();
        assert_eq!(outcome, UpdateOutcome::Ignored);
        assert_eq!(agg.value(IndicatorKey::Cctv), Some(8));
    }

    #[test]
    fn test_clamping() {
        let mut agg = reference();
        let outcome = agg.set_indicator(Group::Object, "fire", 42).unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Clamped {
                key: IndicatorKey::Fire,
                requested: 42,
                stored: 10
            }
        );
        assert_eq!(agg.value(IndicatorKey::Fire), Some(10));
    }

    #[test]
    fn test_preserve_policy_propagates_raw_value() {
        let mut agg = RiskAggregator::with_reference(ClampPolicy::Preserve).unwrap();
        for key in IndicatorKey::in_group(Group::Object) {
            agg.set_indicator(Group::Object, key.as_str(), 20).unwrap();
        }
        assert_eq!(agg.scores().unwrap().object_risk, -10.0);
    }

    #[test]
    fn test_preserve_policy_survives_extreme_values() {
        let mut agg = RiskAggregator::with_reference(ClampPolicy::Preserve).unwrap();

        for value in [i64::MIN, i64::MAX] {
            for key in IndicatorKey::ALL {
                let outcome = agg.set_indicator(key.group(), key.as_str(), value).unwrap();
                assert_eq!(outcome, UpdateOutcome::Applied { key, value });
            }
            let scores = agg.scores().unwrap();
            assert!(scores.environment_risk.is_finite());
            assert!(scores.object_risk.is_finite());
            assert!(scores.total_risk.is_finite());
        }
    }

    #[test]
    fn test_empty_group_keeps_stale_scores() {
        let mut agg = reference();
        let before = *agg.scores().unwrap();

        let keys: Vec<_> = IndicatorKey::in_group(Group::Object).collect();
        let (last, rest) = keys.split_last().unwrap();
        for key in rest {
            agg.clear_indicator(Group::Object, key.as_str()).unwrap();
        }
        let after_partial = *agg.scores().unwrap();
        assert_ne!(after_partial, before);

        let err = agg
            .clear_indicator(Group::Object, last.as_str())
            .unwrap_err();
        assert_eq!(err.cause, ScoringError::EmptyGroup(Group::Object));
        assert_eq!(err.outcome, UpdateOutcome::Cleared { key: *last });
        assert_eq!(*agg.scores().unwrap(), after_partial);
    }

    #[test]
    fn test_clear_twice_is_ignored() {
        let mut agg = reference();
        assert!(agg
            .clear_indicator(Group::Environment, "social")
            .unwrap()
            .changed());
        assert_eq!(
            agg.clear_indicator(Group::Environment, "social").unwrap(),
            UpdateOutcome::Ignored
        );
    }

    #[test]
    fn test_fresh_aggregator_has_no_scores() {
        let mut agg = RiskAggregator::new(ClampPolicy::Clamp).unwrap();
        assert!(agg.scores().is_none());
        assert!(agg.set_indicator(Group::Environment, "crime", 3).is_err());
        assert!(agg.scores().is_none());
        assert_eq!(agg.value(IndicatorKey::Crime), Some(3));
    }

    #[test]
    fn test_replace_all_skips_unknown() {
        let mut agg = reference();
        let env: BTreeMap<String, i64> = [("crime".to_string(), 10), ("weather".to_string(), 3)]
            .into_iter()
            .collect();
        let obj: BTreeMap<String, i64> = [("alarm".to_string(), 0)].into_iter().collect();

        let outcomes = agg.replace_all(&env, &obj).unwrap();
        assert_eq!(outcomes.iter().filter(|o| !o.changed()).count(), 1);
        assert_eq!(agg.assessed_count(), 2);

        let scores = agg.scores().unwrap();
        assert_eq!(scores.environment_risk, 10.0);
        assert_eq!(scores.object_risk, 10.0);
    }
}
