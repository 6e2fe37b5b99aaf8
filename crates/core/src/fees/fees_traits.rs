use async_trait::async_trait;

use super::fees_model::{ActivityCount, ActivityFeeBreakdown};
use crate::errors::Result;
use crate::utils::period::Period;

/// Trait for activity tally repository operations.
#[async_trait]
pub trait ActivityCountRepositoryTrait: Send + Sync {
    /// The recorded tallies for a month, or `None` when nothing has been
    /// logged yet (distinct from explicit zero counts).
    async fn get_activity_count(&self, period: Period) -> Result<Option<ActivityCount>>;
}

/// Trait for fee service operations.
#[async_trait]
pub trait FeeServiceTrait: Send + Sync {
    /// The fee billable for a month under the configuration effective on the
    /// month's first day.
    async fn billing_for_period(&self, period: Period) -> Result<ActivityFeeBreakdown>;
}
