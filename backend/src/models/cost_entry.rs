//! Cost entry model
//!
//! One ledger line: a vendor's amount for one calendar month.
//!
//! CRITICAL: All money values are i64 (cents). Generated amounts are rounded to
//! whole currency units, so they are always multiples of 100.
//!
//! Invariant: (vendor_id, month, year) is unique within a ledger.

use serde::{Deserialize, Serialize};

/// One vendor's cost for one month
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::CostEntry;
///
/// let entry = CostEntry::new(101, 1_320_000, 3, 2025) // $13,200.00
///     .with_invoice("INV-101-202503");
/// assert_eq!(entry.amount, 1_320_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Vendor this line belongs to
    pub vendor_id: u32,

    /// Amount in cents
    pub amount: i64,

    /// Calendar month (1-12)
    pub month: u32,

    /// Calendar year
    pub year: i32,

    /// Invoice identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CostEntry {
    pub fn new(vendor_id: u32, amount: i64, month: u32, year: i32) -> Self {
        Self {
            vendor_id,
            amount,
            month,
            year,
            invoice_id: None,
            note: None,
        }
    }

    pub fn with_invoice(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Uniqueness key within a ledger.
    pub fn key(&self) -> (u32, u32, i32) {
        (self.vendor_id, self.month, self.year)
    }

    /// Chronological sort key.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    /// Canonical invoice id `INV-{vendor}-{yyyy}{mm}`.
    pub fn invoice_id_for(vendor_id: u32, month: u32, year: i32) -> String {
        format!("INV-{}-{}{:02}", vendor_id, year, month)
    }
}

/// Round an amount in cents to the nearest whole currency unit (still in cents).
///
/// Half-way values round away from zero.
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::round_to_whole_units;
///
/// assert_eq!(round_to_whole_units(1_463_616.0), 1_463_600);
/// assert_eq!(round_to_whole_units(1_463_650.0), 1_463_700);
/// ```
pub fn round_to_whole_units(cents: f64) -> i64 {
    (cents / 100.0).round() as i64 * 100
}
