//! Profit module - gross profit, distributable pool, and partner share.

mod profit_model;
mod profit_service;
mod profit_traits;


pub use profit_model::{CostRecord, ProfitSummary};
pub use profit_service::{compute_profit_pool, ProfitService};
pub use profit_traits::{CostRepositoryTrait, ProfitServiceTrait};
