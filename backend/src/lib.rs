//! Restaurant Synth Core - deterministic synthetic data for an operator dashboard
//!
//! Produces reproducible "random-looking" data: a daily content feed that
//! changes every calendar day but never within one, and 12-month vendor cost
//! ledgers for several stores derived from one hand-authored base ledger.
//!
//! # Architecture
//!
//! - **core**: Fiscal month sequencing and the day seed
//! - **rng**: Deterministic LCG and seeded shuffle
//! - **models**: Domain types (Store, Vendor, CostEntry)
//! - **ledger**: Base fixture, derivation rules, derived ledgers, queries
//! - **content**: Metrics snapshot, templates, daily selector
//! - **engine**: Configuration and the read-only dataset facade
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. All randomness is deterministic (seeded LCG, no platform RNG)
//! 3. Datasets are built once and never mutated afterwards

// Module declarations
pub mod content;
pub mod core;
pub mod engine;
pub mod ledger;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use self::content::{DailyContentSelector, MetricsSnapshot, ScoopItem, ScoopKind, ScoopTemplate};
pub use self::core::{DaySeed, FiscalMonth, FiscalYear};
pub use self::engine::{DashboardData, EngineConfig, EngineError, StoreProfile};
pub use self::ledger::{CostLedger, DerivationRule, LedgerError, MonthlySummaryLine};
pub use self::models::{round_to_whole_units, CostEntry, Store, Vendor, VendorCategory};
pub use self::rng::{shuffle, Lcg};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn restaurant_synth_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::dashboard::PyDashboard>()?;
    Ok(())
}
