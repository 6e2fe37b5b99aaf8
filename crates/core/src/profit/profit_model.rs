//! Profit domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived profit figures for a period or projection column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    /// Revenue minus costs; may be negative.
    pub gross_profit: Decimal,
    /// Gross profit minus overhead, floored at zero.
    pub profit_pool: Decimal,
    /// The partner's percentage of the pool.
    pub share: Decimal,
}

/// Raw cost entry fetched from the store, filtered by period in Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub id: String,
    pub incurred_on: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
}
