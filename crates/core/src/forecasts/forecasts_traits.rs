use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::forecasts_model::RevenueForecast;
use crate::errors::Result;
use crate::utils::period::Period;

/// Trait for revenue forecast repository operations.
#[async_trait]
pub trait RevenueForecastRepositoryTrait: Send + Sync {
    async fn get_revenue_forecasts(&self) -> Result<Vec<RevenueForecast>>;
}

/// Trait for forecast service operations.
#[async_trait]
pub trait ForecastServiceTrait: Send + Sync {
    /// Per-period revenue totals across all stored forecasts.
    async fn monthly_schedule(&self) -> Result<BTreeMap<Period, Decimal>>;
}
