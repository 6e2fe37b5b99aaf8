use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal_macros::dec;

use crate::constants::{DEFAULT_MONTHLY_OVERHEAD, DEFAULT_PARTNER_SHARE_PERCENT};
use crate::errors::Result;
use crate::profit::compute_profit_pool;

use super::scenarios_model::{Scenario, ScenarioKind, ScenarioProjection, ScenarioTotals};
use super::scenarios_traits::{ScenarioRepositoryTrait, ScenarioServiceTrait};

/// Runs the three projection columns through the profit-pool calculation.
///
/// Each column charges the default monthly overhead annualized over twelve
/// months; the projection does not consult the dated overhead series that the
/// monthly profit summary uses. Callers needing the two paths to agree must
/// reconcile the sources themselves.
pub fn project_scenarios(scenarios: &[Scenario]) -> ScenarioProjection {
    let mut revenue_totals = ScenarioTotals::default();
    let mut cost_totals = ScenarioTotals::default();
    for scenario in scenarios {
        match scenario.kind {
            ScenarioKind::Revenue => revenue_totals.add(scenario),
            ScenarioKind::Cost => cost_totals.add(scenario),
        }
    }

    let annual_overhead = DEFAULT_MONTHLY_OVERHEAD * dec!(12);
    let pessimistic = compute_profit_pool(
        revenue_totals.pessimistic,
        cost_totals.pessimistic,
        annual_overhead,
        DEFAULT_PARTNER_SHARE_PERCENT,
    );
    let realistic = compute_profit_pool(
        revenue_totals.realistic,
        cost_totals.realistic,
        annual_overhead,
        DEFAULT_PARTNER_SHARE_PERCENT,
    );
    let optimistic = compute_profit_pool(
        revenue_totals.optimistic,
        cost_totals.optimistic,
        annual_overhead,
        DEFAULT_PARTNER_SHARE_PERCENT,
    );

    ScenarioProjection {
        revenue_totals,
        cost_totals,
        pessimistic,
        realistic,
        optimistic,
    }
}

/// Service projecting the stored scenario snapshot.
pub struct ScenarioService {
    scenario_repository: Arc<dyn ScenarioRepositoryTrait>,
}

impl ScenarioService {
    pub fn new(scenario_repository: Arc<dyn ScenarioRepositoryTrait>) -> Self {
        ScenarioService {
            scenario_repository,
        }
    }
}

#[async_trait]
impl ScenarioServiceTrait for ScenarioService {
    async fn projection(&self) -> Result<ScenarioProjection> {
        let scenarios = self.scenario_repository.get_scenarios().await?;
        debug!("Projecting {} scenario line items", scenarios.len());
        Ok(project_scenarios(&scenarios))
    }
}
