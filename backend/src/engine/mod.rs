//! Dataset engine - builds and serves the synthetic dashboard data
//!
//! See `dataset.rs` for the facade and its process-wide instance.

pub mod config;
pub mod dataset;
pub mod fingerprint;

// Re-export main types for convenience
pub use config::{EngineConfig, EngineError, StoreBaseline, StoreProfile};
pub use dataset::DashboardData;
pub use fingerprint::{config_hash, ledger_fingerprint};
