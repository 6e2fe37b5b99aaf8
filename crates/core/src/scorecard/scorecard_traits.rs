//! Scorecard repository and service traits.

use async_trait::async_trait;

use super::scorecard_model::{
    ScorecardActual, ScorecardCategory, ScorecardMetric, ScorecardSummary,
};
use crate::errors::Result;
use crate::utils::period::Period;

/// Trait for scorecard repository operations.
///
/// Actuals are keyed by reporting period; the store guarantees at most one
/// actual per metric per period.
#[async_trait]
pub trait ScorecardRepositoryTrait: Send + Sync {
    async fn get_categories(&self) -> Result<Vec<ScorecardCategory>>;
    async fn get_metrics(&self) -> Result<Vec<ScorecardMetric>>;
    async fn get_actuals(&self, period: Period) -> Result<Vec<ScorecardActual>>;
}

/// Trait for scorecard service operations.
#[async_trait]
pub trait ScorecardServiceTrait: Send + Sync {
    /// The computed scorecard for one reporting period.
    async fn summary(&self, period: Period) -> Result<ScorecardSummary>;
}
