//! Ledgerboard Core - domain models, calculation services, and traits.
//!
//! This crate contains the financial metrics engine for the Ledgerboard
//! dashboard: profit pool and partner share, activity billing, revenue
//! spreading, scenario projections, and the quarterly scorecard. It is
//! store-agnostic and defines repository traits that are implemented by the
//! persistence layer.
//!
//! Every calculation is a pure function over a fully materialized snapshot:
//! no internal state, no clock, no I/O. Re-invoking any component with an
//! unchanged snapshot yields identical output.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fees;
pub mod forecasts;
pub mod profit;
pub mod scenarios;
pub mod scorecard;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
