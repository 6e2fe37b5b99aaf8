//! Time-ranged configuration domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Behavior shared by configuration records that apply over a date interval.
///
/// `effective_to` of `None` means the record is open-ended. Both bounds are
/// inclusive.
pub trait TimeRanged {
    fn effective_from(&self) -> NaiveDate;
    fn effective_to(&self) -> Option<NaiveDate>;

    /// True when this record's effective interval contains `date`.
    fn covers(&self, date: NaiveDate) -> bool {
        self.effective_from() <= date && self.effective_to().map_or(true, |to| to >= date)
    }
}

/// Service billing rates, effective over a date interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    pub id: String,
    pub effective_from: NaiveDate,
    pub effective_to: Option<NaiveDate>,
    pub fixed_monthly_fee: Decimal,
    pub survey_fee: Decimal,
    pub meeting_fee: Decimal,
}

impl TimeRanged for FeeConfig {
    fn effective_from(&self) -> NaiveDate {
        self.effective_from
    }

    fn effective_to(&self) -> Option<NaiveDate> {
        self.effective_to
    }
}

/// Monthly central overhead, effective over a date interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadConfig {
    pub id: String,
    pub effective_from: NaiveDate,
    pub effective_to: Option<NaiveDate>,
    pub monthly_amount: Decimal,
}

impl TimeRanged for OverheadConfig {
    fn effective_from(&self) -> NaiveDate {
        self.effective_from
    }

    fn effective_to(&self) -> Option<NaiveDate> {
        self.effective_to
    }
}
