//! Validated series of time-ranged configuration records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_MONTHLY_OVERHEAD;
use crate::errors::{Result, ValidationError};

use super::config_model::{OverheadConfig, TimeRanged};

/// A sorted series of time-ranged records with non-overlapping intervals.
///
/// The no-overlap invariant is enforced here, at construction, so that lookup
/// never has to tie-break between two records claiming the same date. Series
/// are small (a handful of records), so lookup is a linear scan.
#[derive(Debug, Clone)]
pub struct ConfigSeries<T: TimeRanged> {
    entries: Vec<T>,
}

impl<T: TimeRanged> ConfigSeries<T> {
    /// Builds a series from unordered records, sorting by effective-from.
    ///
    /// Fails with `ValidationError::OverlappingIntervals` if any two records'
    /// effective intervals intersect, including the case where an open-ended
    /// record is followed by a later one.
    pub fn new(mut entries: Vec<T>) -> Result<Self> {
        entries.sort_by_key(|e| e.effective_from());
        for pair in entries.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            let reaches_into_later = earlier
                .effective_to()
                .map_or(true, |to| to >= later.effective_from());
            if reaches_into_later {
                return Err(ValidationError::OverlappingIntervals(
                    earlier.effective_from().to_string(),
                    later.effective_from().to_string(),
                )
                .into());
            }
        }
        Ok(ConfigSeries { entries })
    }

    /// The record whose effective interval contains `date`, if any.
    pub fn lookup(&self, date: NaiveDate) -> Option<&T> {
        self.entries.iter().find(|e| e.covers(date))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Overhead effective on `date`, or the fixed default when no record covers it.
pub fn monthly_overhead_or_default(
    series: &ConfigSeries<OverheadConfig>,
    date: NaiveDate,
) -> Decimal {
    series
        .lookup(date)
        .map(|config| config.monthly_amount)
        .unwrap_or(DEFAULT_MONTHLY_OVERHEAD)
}
