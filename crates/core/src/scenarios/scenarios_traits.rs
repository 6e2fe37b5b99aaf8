use async_trait::async_trait;

use super::scenarios_model::{Scenario, ScenarioProjection};
use crate::errors::Result;

/// Trait for scenario repository operations.
#[async_trait]
pub trait ScenarioRepositoryTrait: Send + Sync {
    async fn get_scenarios(&self) -> Result<Vec<Scenario>>;
}

/// Trait for scenario service operations.
#[async_trait]
pub trait ScenarioServiceTrait: Send + Sync {
    /// The three-column projection over all stored scenario line items.
    async fn projection(&self) -> Result<ScenarioProjection>;
}
