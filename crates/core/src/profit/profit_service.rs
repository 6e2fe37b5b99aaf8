use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::config::{monthly_overhead_or_default, ConfigSeries, OverheadConfigRepositoryTrait};
use crate::constants::DEFAULT_PARTNER_SHARE_PERCENT;
use crate::errors::Result;
use crate::forecasts::ForecastServiceTrait;
use crate::utils::period::Period;
use crate::utils::rounding::round2;

use super::profit_model::ProfitSummary;
use super::profit_traits::{CostRepositoryTrait, ProfitServiceTrait};

/// Turns aggregate revenue/cost totals into the distributable profit figures.
///
/// The pool is floored at zero: a period that does not clear its overhead
/// distributes nothing, it never distributes a negative amount.
pub fn compute_profit_pool(
    total_revenue: Decimal,
    total_costs: Decimal,
    overhead: Decimal,
    share_percent: Decimal,
) -> ProfitSummary {
    let gross_profit = total_revenue - total_costs;
    let profit_pool = round2((gross_profit - overhead).max(Decimal::zero()));
    let share = round2(profit_pool * share_percent / Decimal::ONE_HUNDRED);

    ProfitSummary {
        gross_profit: round2(gross_profit),
        profit_pool,
        share,
    }
}

/// Service deriving a month's profit figures from stored records.
pub struct ProfitService {
    forecast_service: Arc<dyn ForecastServiceTrait>,
    cost_repository: Arc<dyn CostRepositoryTrait>,
    overhead_config_repository: Arc<dyn OverheadConfigRepositoryTrait>,
}

impl ProfitService {
    pub fn new(
        forecast_service: Arc<dyn ForecastServiceTrait>,
        cost_repository: Arc<dyn CostRepositoryTrait>,
        overhead_config_repository: Arc<dyn OverheadConfigRepositoryTrait>,
    ) -> Self {
        ProfitService {
            forecast_service,
            cost_repository,
            overhead_config_repository,
        }
    }
}

#[async_trait]
impl ProfitServiceTrait for ProfitService {
    async fn period_summary(&self, period: Period) -> Result<ProfitSummary> {
        let schedule = self.forecast_service.monthly_schedule().await?;
        let total_revenue = schedule.get(&period).copied().unwrap_or(Decimal::ZERO);

        let costs = self.cost_repository.get_cost_records().await?;
        let total_costs: Decimal = costs
            .iter()
            .filter(|cost| Period::from_date(cost.incurred_on) == period)
            .map(|cost| cost.amount)
            .sum();

        let overheads =
            ConfigSeries::new(self.overhead_config_repository.get_overhead_configs().await?)?;
        let overhead = monthly_overhead_or_default(&overheads, period.start_date());

        debug!(
            "Profit summary for {}: revenue {}, costs {}, overhead {}",
            period, total_revenue, total_costs, overhead
        );
        Ok(compute_profit_pool(
            total_revenue,
            total_costs,
            overhead,
            DEFAULT_PARTNER_SHARE_PERCENT,
        ))
    }
}
