//! Scenario domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::profit::ProfitSummary;

/// Whether a scenario line item projects revenue or cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Revenue,
    Cost,
}

/// A projected line item with three estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub kind: ScenarioKind,
    pub pessimistic: Decimal,
    pub realistic: Decimal,
    pub optimistic: Decimal,
}

/// Column-wise totals over one kind of scenario line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTotals {
    pub pessimistic: Decimal,
    pub realistic: Decimal,
    pub optimistic: Decimal,
}

impl ScenarioTotals {
    pub(crate) fn add(&mut self, scenario: &Scenario) {
        self.pessimistic += scenario.pessimistic;
        self.realistic += scenario.realistic;
        self.optimistic += scenario.optimistic;
    }
}

/// The three parallel profit projections plus their underlying totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioProjection {
    pub revenue_totals: ScenarioTotals,
    pub cost_totals: ScenarioTotals,
    pub pessimistic: ProfitSummary,
    pub realistic: ProfitSummary,
    pub optimistic: ProfitSummary,
}
