use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    ESCALATION_PENALTY_PER_UNIT, RAG_AMBER_THRESHOLD, RAG_GREEN_THRESHOLD,
};
use crate::errors::Result;
use crate::utils::period::Period;
use crate::utils::rounding::round2;

use super::scorecard_model::{
    CategoryScore, MetricScore, Polarity, RagStatus, ScorecardActual, ScorecardCategory,
    ScorecardMetric, ScorecardSummary,
};
use super::scorecard_traits::{ScorecardRepositoryTrait, ScorecardServiceTrait};

/// Classifies an achievement percent against the RAG thresholds.
///
/// A metric without a recorded actual is `none`, whatever its placeholder
/// achievement value says.
pub fn classify(achievement_percent: Decimal, has_actual: bool) -> RagStatus {
    if !has_actual {
        RagStatus::None
    } else if achievement_percent >= RAG_GREEN_THRESHOLD {
        RagStatus::Green
    } else if achievement_percent >= RAG_AMBER_THRESHOLD {
        RagStatus::Amber
    } else {
        RagStatus::Red
    }
}

/// Achievement percent for one metric.
///
/// - No actual recorded: `0` as a placeholder (the classification is forced
///   to `none` separately).
/// - Lower-is-better: a clean zero scores 100; every adverse unit costs 25
///   points, floored at 0.
/// - Higher-is-better: actual over target, as a percent; a missing or
///   non-positive target scores 0.
pub fn metric_achievement(metric: &ScorecardMetric, actual: Option<Decimal>) -> Decimal {
    let Some(actual) = actual else {
        return Decimal::zero();
    };

    match metric.polarity {
        Polarity::LowerIsBetter => {
            if actual.is_zero() {
                dec!(100)
            } else {
                (dec!(100) - actual * ESCALATION_PENALTY_PER_UNIT).max(Decimal::zero())
            }
        }
        Polarity::HigherIsBetter => match metric.target_value {
            Some(target) if target > Decimal::zero() => actual / target * dec!(100),
            _ => Decimal::zero(),
        },
    }
}

/// Average of capped achievements over the category's metrics that have an
/// actual; `0` when none has one. Metrics without an actual are left out of
/// the average entirely rather than dragging it down.
fn category_score(
    metrics: &[&ScorecardMetric],
    actual_values: &HashMap<&str, Decimal>,
) -> Decimal {
    let mut sum = Decimal::zero();
    let mut counted: u32 = 0;
    for metric in metrics {
        if let Some(&value) = actual_values.get(metric.id.as_str()) {
            let achievement = metric_achievement(metric, Some(value));
            sum += achievement.min(dec!(100));
            counted += 1;
        }
    }
    if counted == 0 {
        Decimal::zero()
    } else {
        sum / Decimal::from(counted)
    }
}

/// Computes the full scorecard for one reporting period from a snapshot of
/// categories, metrics, and that period's actuals.
pub fn build_summary(
    period: Period,
    categories: &[ScorecardCategory],
    metrics: &[ScorecardMetric],
    actuals: &[ScorecardActual],
) -> ScorecardSummary {
    let actual_values: HashMap<&str, Decimal> = actuals
        .iter()
        .map(|actual| (actual.metric_id.as_str(), actual.value))
        .collect();

    let metric_scores: Vec<MetricScore> = metrics
        .iter()
        .map(|metric| {
            let actual = actual_values.get(metric.id.as_str()).copied();
            let achievement = metric_achievement(metric, actual);
            MetricScore {
                metric_id: metric.id.clone(),
                name: metric.name.clone(),
                achievement: round2(achievement),
                status: classify(achievement, actual.is_some()),
            }
        })
        .collect();

    let mut category_scores = Vec::with_capacity(categories.len());
    let mut total_weight = Decimal::zero();
    let mut weighted_sum = Decimal::zero();
    let mut any_actual = false;

    for category in categories {
        let category_metrics: Vec<&ScorecardMetric> = metrics
            .iter()
            .filter(|metric| metric.category_id == category.id)
            .collect();
        let active = category_metrics
            .iter()
            .any(|metric| actual_values.contains_key(metric.id.as_str()));
        let score = category_score(&category_metrics, &actual_values);

        category_scores.push(CategoryScore {
            category_id: category.id.clone(),
            name: category.name.clone(),
            score: round2(score),
            weight: category.weight,
        });

        // A category enters the overall score as soon as one of its metrics
        // has an actual; its weight is excluded otherwise.
        if active {
            any_actual = true;
            total_weight += category.weight;
            weighted_sum += score * category.weight;
        }
    }

    // Historical formula: the weighted average is rescaled by 100 a second
    // time, so with fractional weights the overall score runs well past the
    // 0-100 range of the category scores. Reported quarters depend on these
    // numbers; do not change without product sign-off.
    let overall = if total_weight.is_zero() {
        Decimal::zero()
    } else {
        weighted_sum / total_weight * dec!(100)
    };

    ScorecardSummary {
        period,
        overall_score: round2(overall),
        overall_status: classify(overall, any_actual),
        categories: category_scores,
        metrics: metric_scores,
    }
}

/// Service computing the scorecard from the stored definition and actuals.
pub struct ScorecardService {
    scorecard_repository: Arc<dyn ScorecardRepositoryTrait>,
}

impl ScorecardService {
    pub fn new(scorecard_repository: Arc<dyn ScorecardRepositoryTrait>) -> Self {
        ScorecardService {
            scorecard_repository,
        }
    }
}

#[async_trait]
impl ScorecardServiceTrait for ScorecardService {
    async fn summary(&self, period: Period) -> Result<ScorecardSummary> {
        let categories = self.scorecard_repository.get_categories().await?;
        let metrics = self.scorecard_repository.get_metrics().await?;
        let actuals = self.scorecard_repository.get_actuals(period).await?;
        debug!(
            "Scoring {}: {} categories, {} metrics, {} actuals",
            period,
            categories.len(),
            metrics.len(),
            actuals.len()
        );
        Ok(build_summary(period, &categories, &metrics, &actuals))
    }
}
