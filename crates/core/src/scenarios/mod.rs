//! Scenarios module - pessimistic/realistic/optimistic projections.

mod scenarios_model;
mod scenarios_service;
mod scenarios_traits;


pub use scenarios_model::{Scenario, ScenarioKind, ScenarioProjection, ScenarioTotals};
pub use scenarios_service::{project_scenarios, ScenarioService};
pub use scenarios_traits::{ScenarioRepositoryTrait, ScenarioServiceTrait};
