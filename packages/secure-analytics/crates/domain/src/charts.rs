//! Data series behind the dashboard charts. Styling is left to whoever
//! draws them.

use crate::indicators::{Group, IndicatorKey, IndicatorSet, Polarity, SCALE_MAX};
use crate::scoring::ProgressTier;
use serde::Serialize;

/// Environment radar: current state against target values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub current: Vec<Option<f64>>,
    pub target: Vec<f64>,
}

/// Target profile drawn next to the current environment assessment.
pub const ENVIRONMENT_TARGET: [f64; 6] = [9.0, 8.0, 9.0, 8.0, 9.0, 7.0];

/// Offset the radar adds to the social media axis.
const SOCIAL_OFFSET: f64 = 5.0;

pub fn environment_radar(set: &IndicatorSet) -> RadarSeries {
    let keys: Vec<IndicatorKey> = IndicatorKey::in_group(Group::Environment).collect();

    let labels = keys
        .iter()
        .map(|k| match k.polarity() {
            Polarity::Inverse => format!("{} (inverse)", k.label()),
            Polarity::Direct => k.label().to_string(),
        })
        .collect();

    let current = keys
        .iter()
        .map(|k| {
            set.get(*k).map(|v| {
                let axis = k.polarity().goodness(v);
                if *k == IndicatorKey::Social {
                    axis + SOCIAL_OFFSET
                } else {
                    axis
                }
            })
        })
        .collect();

    RadarSeries {
        labels,
        current,
        target: ENVIRONMENT_TARGET.to_vec(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub key: IndicatorKey,
    pub label: &'static str,
    pub value: Option<i64>,
    pub tier: Option<ProgressTier>,
}

/// Protection level tier of a single object indicator.
pub fn protection_tier(value: i64) -> ProgressTier {
    if value >= 8 {
        ProgressTier::Good
    } else if value >= 6 {
        ProgressTier::Warning
    } else {
        ProgressTier::Critical
    }
}

/// Object protection bars, one per indicator.
pub fn object_bars(set: &IndicatorSet) -> Vec<BarPoint> {
    IndicatorKey::in_group(Group::Object)
        .map(|key| {
            let value = set.get(key);
            BarPoint {
                key,
                label: key.label(),
                value,
                tier: value.map(protection_tier),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub months: Vec<&'static str>,
    pub total_risk: Vec<f64>,
    pub cyber_threats: Vec<f64>,
    pub environment_stability: Vec<f64>,
}

impl TrendSeries {
    /// Upper bound of every series.
    pub const MAX: f64 = SCALE_MAX as f64;
}

/// Six-month trend. There is no history store behind it; the figures are
/// the fixed baseline the dashboard has always shown.
pub fn trend_series() -> TrendSeries {
    TrendSeries {
        months: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        total_risk: vec![4.5, 4.3, 4.1, 4.2, 4.0, 4.2],
        cyber_threats: vec![5.2, 5.5, 6.1, 6.3, 6.0, 6.4],
        environment_stability: vec![7.8, 7.6, 7.9, 8.1, 7.8, 8.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radar_inverts_and_offsets() {
        let radar = environment_radar(&IndicatorSet::reference(Group::Environment));
        assert_eq!(
            radar.current,
            vec![
                Some(8.0),
                Some(7.0),
                Some(8.0),
                Some(4.0),
                Some(9.0),
                Some(6.0)
            ]
        );
        assert_eq!(radar.labels[1], "Crime rate (inverse)");
        assert_eq!(radar.target.len(), radar.current.len());
    }

    #[test]
    fn test_radar_gaps_for_unassessed() {
        let radar = environment_radar(&IndicatorSet::empty(Group::Environment));
        assert!(radar.current.iter().all(Option::is_none));
    }

    #[test]
    fn test_object_bar_tiers() {
        let bars = object_bars(&IndicatorSet::reference(Group::Object));
        let tiers: Vec<_> = bars.iter().map(|b| b.tier.unwrap()).collect();
        assert_eq!(
            tiers,
            vec![
                ProgressTier::Warning,  // access 7
                ProgressTier::Good,     // cctv 8
                ProgressTier::Warning,  // alarm 6
                ProgressTier::Good,     // fire 9
                ProgressTier::Good,     // building 8
                ProgressTier::Critical, // personnel 5
            ]
        );
    }

    #[test]
    fn test_trend_series_shape() {
        let trend = trend_series();
        assert_eq!(trend.months.len(), 6);
        assert_eq!(trend.total_risk.len(), 6);
        assert!(trend
            .cyber_threats
            .iter()
            .chain(&trend.environment_stability)
            .all(|v| *v <= TrendSeries::MAX));
    }
}
