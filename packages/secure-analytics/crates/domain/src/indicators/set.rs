use super::{Group, IndicatorKey};
use std::collections::BTreeMap;

/// Current values of one indicator group. Absent keys are unassessed.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    group: Group,
    values: BTreeMap<IndicatorKey, i64>,
}

impl IndicatorSet {
    pub fn empty(group: Group) -> Self {
        Self {
            group,
            values: BTreeMap::new(),
        }
    }

    /// Every indicator of the group at its reference value.
    pub fn reference(group: Group) -> Self {
        Self {
            group,
            values: IndicatorKey::in_group(group)
                .map(|k| (k, k.reference_value()))
                .collect(),
        }
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn get(&self, key: IndicatorKey) -> Option<i64> {
        self.values.get(&key).copied()
    }

    /// Returns false when the key belongs to another group.
    pub(crate) fn insert(&mut self, key: IndicatorKey, value: i64) -> bool {
        if key.group() != self.group {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    pub(crate) fn remove(&mut self, key: IndicatorKey) -> Option<i64> {
        self.values.remove(&key)
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }

    pub fn assessed(&self) -> impl Iterator<Item = (IndicatorKey, i64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    pub fn assessed_count(&self) -> usize {
        self.values.len()
    }

    /// Mean goodness over assessed indicators, `None` when nothing is assessed.
    pub fn mean_goodness(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self
            .values
            .iter()
            .map(|(k, v)| k.polarity().goodness(*v))
            .sum();
        Some(sum / self.values.len() as f64)
    }

    /// Plain `name -> value` mapping for snapshots.
    pub fn to_map(&self) -> BTreeMap<String, i64> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), *v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_foreign_key() {
        let mut set = IndicatorSet::empty(Group::Object);
        assert!(!set.insert(IndicatorKey::Crime, 4));
        assert_eq!(set.assessed_count(), 0);
        assert!(set.insert(IndicatorKey::Fire, 4));
        assert_eq!(set.get(IndicatorKey::Fire), Some(4));
    }

    #[test]
    fn test_mean_goodness_inverts() {
        let mut set = IndicatorSet::empty(Group::Environment);
        set.insert(IndicatorKey::Political, 8);
        set.insert(IndicatorKey::Crime, 2);
        // (8 + (10 - 2)) / 2
        assert_eq!(set.mean_goodness(), Some(8.0));
    }

    #[test]
    fn test_empty_has_no_mean() {
        assert_eq!(IndicatorSet::empty(Group::Object).mean_goodness(), None);
    }

    #[test]
    fn test_reference_map() {
        let map = IndicatorSet::reference(Group::Object).to_map();
        assert_eq!(map.len(), 6);
        assert_eq!(map.get("personnel"), Some(&5));
    }
}
