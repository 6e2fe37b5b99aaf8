//! Fees module - monthly activity billing.

mod fees_model;
mod fees_service;
mod fees_traits;


pub use fees_model::{ActivityCount, ActivityFeeBreakdown};
pub use fees_service::{compute_activity_fee, FeeService};
pub use fees_traits::{ActivityCountRepositoryTrait, FeeServiceTrait};
