//! Forecasts module - spreading invoice values across calendar months.

mod forecasts_model;
mod forecasts_service;
mod forecasts_traits;

#[cfg(test)]
mod forecasts_service_tests;

pub use forecasts_model::{MonthlyRevenue, RevenueForecast};
pub use forecasts_service::{spread_revenue, ForecastService};
pub use forecasts_traits::{ForecastServiceTrait, RevenueForecastRepositoryTrait};
