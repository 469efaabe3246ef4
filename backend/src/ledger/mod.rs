//! Multi-location cost ledgers
//!
//! One store's 12-month cost history is hand-authored (`base`). Every other
//! store's history is computed from it (`generator`) by per-category rules
//! (`rules`). `book` holds the concatenation of all of them and answers the
//! read-only queries.
//!
//! # Critical Invariants
//!
//! 1. (vendor, month, year) is unique across the whole ledger
//! 2. Every derived store has exactly one entry for every (vendor counterpart,
//!    month) present in the base, and none for months absent from the base
//! 3. Derivation is a pure function of the base, the fiscal window and the
//!    store profile: rebuilding yields identical entries

pub mod base;
pub mod book;
pub mod error;
pub mod generator;
pub mod rules;

pub use base::build_base_section;
pub use book::{percent_change, CostLedger, LedgerSection, MonthlySummaryLine};
pub use error::LedgerError;
pub use generator::{check_completeness, DerivedLedgerGenerator};
pub use rules::{jitter, vendor_multiplier, DerivationRule, FixedCost};
