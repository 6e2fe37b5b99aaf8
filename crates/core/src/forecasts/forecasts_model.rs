//! Revenue forecast domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::period::Period;

/// A lump invoice value to be recognized evenly over consecutive months.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueForecast {
    pub id: String,
    pub client_id: String,
    pub total_value: Decimal,
    pub start: Period,
    pub months_to_spread: u32,
}

/// One month's slice of a spread invoice value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub period: Period,
    pub amount: Decimal,
}
