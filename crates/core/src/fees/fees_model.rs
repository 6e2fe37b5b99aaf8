//! Activity billing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly activity tallies fetched from the store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCount {
    pub surveys_from_interviews: u32,
    pub surveys_from_roundtables: u32,
    pub surveys_from_executive: u32,
    pub executive_meetings_completed: u32,
}

/// A month's billable fee, broken down by component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeeBreakdown {
    pub fixed: Decimal,
    pub surveys: Decimal,
    pub meetings: Decimal,
    pub total: Decimal,
}

impl ActivityFeeBreakdown {
    pub fn zero() -> Self {
        ActivityFeeBreakdown {
            fixed: Decimal::ZERO,
            surveys: Decimal::ZERO,
            meetings: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}
