//! Configuration repository traits.
//!
//! Implemented by the persistence layer; the engine only reads snapshots.

use async_trait::async_trait;

use super::config_model::{FeeConfig, OverheadConfig};
use crate::errors::Result;

/// Trait for fee configuration repository operations.
#[async_trait]
pub trait FeeConfigRepositoryTrait: Send + Sync {
    /// Retrieves the full fee configuration series, in any order.
    async fn get_fee_configs(&self) -> Result<Vec<FeeConfig>>;
}

/// Trait for overhead configuration repository operations.
#[async_trait]
pub trait OverheadConfigRepositoryTrait: Send + Sync {
    /// Retrieves the full overhead configuration series, in any order.
    async fn get_overhead_configs(&self) -> Result<Vec<OverheadConfig>>;
}
