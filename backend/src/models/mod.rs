//! Domain models for the synthetic dashboard dataset

pub mod cost_entry;
pub mod store;
pub mod vendor;

// Re-exports
pub use cost_entry::{round_to_whole_units, CostEntry};
pub use store::{Store, MAX_STORE_ID};
pub use vendor::{RuleKind, Vendor, VendorCategory};
