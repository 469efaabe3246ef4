//! Store model
//!
//! A store is one business location. Exactly one store is the *base*: its
//! ledger is hand-authored. Every other store is *derived* from it.

use serde::{Deserialize, Serialize};

/// Largest store id whose vendor ids (`id * 100 + 1 ..= id * 100 + 100`) fit in a `u32`.
pub const MAX_STORE_ID: u32 = u32::MAX / 100 - 1;

/// A named business location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Whether this store's ledger is the hand-authored base
    pub is_base: bool,
}

impl Store {
    pub fn base(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_base: true,
        }
    }

    pub fn derived(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_base: false,
        }
    }

    /// Vendor id for the vendor at `ordinal` in this store's vendor list.
    ///
    /// Ids are `store_id * 100 + ordinal + 1`, so vendor ids never collide
    /// across stores as long as a store has fewer than 100 vendors. Store ids
    /// must not exceed [`MAX_STORE_ID`].
    pub fn vendor_id(&self, ordinal: usize) -> u32 {
        self.id * 100 + ordinal as u32 + 1
    }
}
