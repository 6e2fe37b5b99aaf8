use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};
use crate::utils::period::Period;
use crate::utils::rounding::round2;

use super::forecasts_model::{MonthlyRevenue, RevenueForecast};
use super::forecasts_traits::{ForecastServiceTrait, RevenueForecastRepositoryTrait};

/// Spreads a lump value evenly across `months_to_spread` consecutive months
/// starting at `start`.
///
/// Each slice is the rounded per-month quotient. The slices are what the
/// dashboard recognizes, so no remainder correction is applied to the final
/// month: the emitted sum may drift from `total_value` by up to
/// 0.005 × months_to_spread.
pub fn spread_revenue(
    total_value: Decimal,
    start: Period,
    months_to_spread: u32,
) -> Result<Vec<MonthlyRevenue>> {
    if months_to_spread < 1 {
        return Err(CalculatorError::InvalidArgument(format!(
            "monthsToSpread must be at least 1, got {}",
            months_to_spread
        ))
        .into());
    }

    let per_month = round2(total_value / Decimal::from(months_to_spread));
    let mut entries = Vec::with_capacity(months_to_spread as usize);
    let mut period = start;
    for _ in 0..months_to_spread {
        entries.push(MonthlyRevenue {
            period,
            amount: per_month,
        });
        period = period.next();
    }
    Ok(entries)
}

/// Service producing the per-month revenue schedule from stored forecasts.
pub struct ForecastService {
    forecast_repository: Arc<dyn RevenueForecastRepositoryTrait>,
}

impl ForecastService {
    pub fn new(forecast_repository: Arc<dyn RevenueForecastRepositoryTrait>) -> Self {
        ForecastService {
            forecast_repository,
        }
    }

    /// Merges every forecast's spread slices into per-period totals.
    ///
    /// Slice amounts are already rounded, so the merged totals are exact
    /// two-decimal sums and are not rounded again.
    fn merge_schedule(forecasts: &[RevenueForecast]) -> Result<BTreeMap<Period, Decimal>> {
        let mut by_period: BTreeMap<Period, Decimal> = BTreeMap::new();
        for forecast in forecasts {
            let slices =
                spread_revenue(forecast.total_value, forecast.start, forecast.months_to_spread)?;
            for slice in slices {
                *by_period.entry(slice.period).or_insert(Decimal::ZERO) += slice.amount;
            }
        }
        Ok(by_period)
    }
}

#[async_trait]
impl ForecastServiceTrait for ForecastService {
    async fn monthly_schedule(&self) -> Result<BTreeMap<Period, Decimal>> {
        let forecasts = self.forecast_repository.get_revenue_forecasts().await?;
        debug!("Building monthly schedule from {} forecasts", forecasts.len());
        Self::merge_schedule(&forecasts)
    }
}
