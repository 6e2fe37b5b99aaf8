//! Scorecard module - RAG classification and weighted quarterly scoring.

mod scorecard_model;
mod scorecard_service;
mod scorecard_traits;


pub use scorecard_model::{
    CategoryScore, MetricScore, Polarity, RagStatus, ScorecardActual, ScorecardCategory,
    ScorecardMetric, ScorecardSummary,
};
pub use scorecard_service::{build_summary, classify, metric_achievement, ScorecardService};
pub use scorecard_traits::{ScorecardRepositoryTrait, ScorecardServiceTrait};
