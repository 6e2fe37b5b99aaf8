//! Configuration module - time-ranged fee and overhead records.

mod config_model;
mod config_service;
mod config_traits;

#[cfg(test)]
mod config_service_tests;

pub use config_model::{FeeConfig, OverheadConfig, TimeRanged};
pub use config_service::{monthly_overhead_or_default, ConfigSeries};
pub use config_traits::{FeeConfigRepositoryTrait, OverheadConfigRepositoryTrait};
