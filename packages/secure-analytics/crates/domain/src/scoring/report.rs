use super::{
    progress_percentage, CompletionCount, DerivedScores, ProgressBar, ProgressInput, RiskClass,
    ScoreClasses,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KpiId {
    EnvironmentRisk,
    ObjectRisk,
    TotalRisk,
    IndicatorCount,
}

impl fmt::Display for KpiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiId::EnvironmentRisk => write!(f, "Environment risk"),
            KpiId::ObjectRisk => write!(f, "Object risk"),
            KpiId::TotalRisk => write!(f, "Total risk"),
            KpiId::IndicatorCount => write!(f, "Indicators"),
        }
    }
}

/// One dashboard tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub id: KpiId,
    pub display: String,
    pub class: Option<RiskClass>,
    pub bar: ProgressBar,
}

/// Everything the presentation layer gets after a successful recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub scores: DerivedScores,
    pub classes: ScoreClasses,
    pub completion: CompletionCount,
    pub cards: Vec<KpiCard>,
}

impl ScoreReport {
    pub fn build(scores: DerivedScores, completion: CompletionCount) -> Self {
        let classes = scores.classes();

        // Bars follow the one-decimal text on the card, so a card reading
        // "3.0" never carries a bar tiered from 3.04.
        let score_card = |id, value: f64, class| {
            let display = DerivedScores::display(value);
            let input = ProgressInput::parse(&display).unwrap_or(ProgressInput::Score { value });
            KpiCard {
                id,
                display,
                class: Some(class),
                bar: progress_percentage(input),
            }
        };

        let cards = vec![
            score_card(
                KpiId::EnvironmentRisk,
                scores.environment_risk,
                classes.environment,
            ),
            score_card(KpiId::ObjectRisk, scores.object_risk, classes.object),
            score_card(KpiId::TotalRisk, scores.total_risk, classes.total),
            KpiCard {
                id: KpiId::IndicatorCount,
                display: completion.to_string(),
                class: None,
                bar: progress_percentage(completion.as_progress()),
            },
        ];

        Self {
            scores,
            classes,
            completion,
            cards,
        }
    }

    pub fn card(&self, id: KpiId) -> Option<&KpiCard> {
        self.cards.iter().find(|c| c.id == id)
    }
}
