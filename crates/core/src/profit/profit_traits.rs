use async_trait::async_trait;

use super::profit_model::{CostRecord, ProfitSummary};
use crate::errors::Result;
use crate::utils::period::Period;

/// Trait for cost record repository operations.
#[async_trait]
pub trait CostRepositoryTrait: Send + Sync {
    async fn get_cost_records(&self) -> Result<Vec<CostRecord>>;
}

/// Trait for profit service operations.
#[async_trait]
pub trait ProfitServiceTrait: Send + Sync {
    /// Profit figures for a month: scheduled revenue minus that month's
    /// costs, against the overhead effective on the month's first day.
    async fn period_summary(&self, period: Period) -> Result<ProfitSummary>;
}
