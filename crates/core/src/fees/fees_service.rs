use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::config::{ConfigSeries, FeeConfig, FeeConfigRepositoryTrait};
use crate::errors::Result;
use crate::utils::period::Period;
use crate::utils::rounding::round2;

use super::fees_model::{ActivityCount, ActivityFeeBreakdown};
use super::fees_traits::{ActivityCountRepositoryTrait, FeeServiceTrait};

/// Converts a month's activity counts into a billable fee.
///
/// Surveys sourced from executive-level contacts bill at the meeting rate,
/// together with completed executive meetings - not at the survey rate.
pub fn compute_activity_fee(
    counts: &ActivityCount,
    config: &FeeConfig,
) -> ActivityFeeBreakdown {
    let survey_count = counts.surveys_from_interviews + counts.surveys_from_roundtables;
    let meeting_count = counts.executive_meetings_completed + counts.surveys_from_executive;

    let surveys = round2(Decimal::from(survey_count) * config.survey_fee);
    let meetings = round2(Decimal::from(meeting_count) * config.meeting_fee);
    let total = round2(config.fixed_monthly_fee + surveys + meetings);

    ActivityFeeBreakdown {
        fixed: round2(config.fixed_monthly_fee),
        surveys,
        meetings,
        total,
    }
}

/// Service billing a month's activity against the effective fee configuration.
pub struct FeeService {
    activity_repository: Arc<dyn ActivityCountRepositoryTrait>,
    fee_config_repository: Arc<dyn FeeConfigRepositoryTrait>,
}

impl FeeService {
    pub fn new(
        activity_repository: Arc<dyn ActivityCountRepositoryTrait>,
        fee_config_repository: Arc<dyn FeeConfigRepositoryTrait>,
    ) -> Self {
        FeeService {
            activity_repository,
            fee_config_repository,
        }
    }
}

#[async_trait]
impl FeeServiceTrait for FeeService {
    async fn billing_for_period(&self, period: Period) -> Result<ActivityFeeBreakdown> {
        let counts = self
            .activity_repository
            .get_activity_count(period)
            .await?
            .unwrap_or_default();
        let configs = self.fee_config_repository.get_fee_configs().await?;
        let series = ConfigSeries::new(configs)?;

        match series.lookup(period.start_date()) {
            Some(config) => {
                debug!("Billing {} against fee config {}", period, config.id);
                Ok(compute_activity_fee(&counts, config))
            }
            None => {
                warn!("No fee configuration covers {}, billing zero", period);
                Ok(ActivityFeeBreakdown::zero())
            }
        }
    }
}
