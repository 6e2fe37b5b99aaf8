//! Scorecard domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::period::Period;

/// Whether higher or lower raw values indicate better performance.
///
/// Set when the metric is defined, never inferred from the metric's name at
/// computation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

/// Red/amber/green/none classification of performance against target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    Green,
    Amber,
    Red,
    None,
}

/// A weighted group of metrics on the quarterly scorecard.
///
/// Weights are non-negative and need not sum to 1 across categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardCategory {
    pub id: String,
    pub name: String,
    pub weight: Decimal,
}

/// A single tracked metric, bound to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardMetric {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub target_value: Option<Decimal>,
    pub polarity: Polarity,
}

/// A recorded value for one metric in one reporting period.
///
/// Absence of a record is distinct from a recorded zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardActual {
    pub metric_id: String,
    pub period: Period,
    pub value: Decimal,
}

/// Per-metric view model: achievement percent and its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricScore {
    pub metric_id: String,
    pub name: String,
    /// Uncapped achievement percent; capping applies only inside category
    /// averaging.
    pub achievement: Decimal,
    pub status: RagStatus,
}

/// Per-category view model on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category_id: String,
    pub name: String,
    pub score: Decimal,
    pub weight: Decimal,
}

/// The computed scorecard for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardSummary {
    pub period: Period,
    pub overall_score: Decimal,
    pub overall_status: RagStatus,
    pub categories: Vec<CategoryScore>,
    pub metrics: Vec<MetricScore>,
}
