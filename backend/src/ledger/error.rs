//! Ledger construction errors

use thiserror::Error;

use crate::core::CalendarError;
use crate::models::VendorCategory;

/// Errors raised while building or appending to a ledger
///
/// Lookups never produce these; they only come from construction paths.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Entry for vendor {vendor_id} in {month}/{year} already exists")]
    DuplicateEntry { vendor_id: u32, month: u32, year: i32 },

    #[error("Unknown vendor {vendor_id}")]
    UnknownVendor { vendor_id: u32 },

    #[error("Vendor {vendor_id} is already registered")]
    DuplicateVendor { vendor_id: u32 },

    #[error("Store {store_id} is already registered")]
    DuplicateStore { store_id: u32 },

    #[error("Store {store_id} has no fixed cost configured for {category}")]
    MissingFixedCost {
        store_id: u32,
        category: VendorCategory,
    },

    #[error("Store {store_id} configures a {category} cost that does not match its rule")]
    MismatchedFixedCost {
        store_id: u32,
        category: VendorCategory,
    },

    #[error("Renewal month {month} is outside 1..=12")]
    InvalidRenewalMonth { month: u32 },

    #[error("Store {store_id} renewal in month {month} falls on the first fiscal month, so the premium never steps")]
    RenewalAtWindowStart { store_id: u32, month: u32 },

    #[error("Store {store_id} renewal step of {step_bps} bps does not raise the premium")]
    NonIncreasingRenewal { store_id: u32, step_bps: i64 },

    #[error(
        "Store {store_id} has {found} entries for {category} in {month}/{year}, expected exactly 1"
    )]
    IncompleteDerivation {
        store_id: u32,
        category: VendorCategory,
        month: u32,
        year: i32,
        found: usize,
    },

    #[error("Store {store_id} has {derived} entries but the base has {base}")]
    UnexpectedEntries {
        store_id: u32,
        base: usize,
        derived: usize,
    },

    #[error("Fiscal calendar error: {0}")]
    Calendar(#[from] CalendarError),
}
