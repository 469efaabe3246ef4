//! Ledger query layer
//!
//! `CostLedger` is the concatenation of the base section and every derived
//! section. After construction it is only read; the one mutating entry point,
//! [`CostLedger::insert_entry`], exists for owned copies that append manual
//! entries and enforces the (vendor, month, year) uniqueness invariant.
//!
//! All accessors are total: unknown stores, vendors or months yield empty
//! lists or zero amounts.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::error::LedgerError;
use crate::core::previous_month;
use crate::models::{CostEntry, Store, Vendor};

/// One store's vendors and entries, as produced by a generator
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSection {
    pub store: Store,
    pub vendors: Vec<Vendor>,
    pub entries: Vec<CostEntry>,
}

/// One vendor's month-over-month comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryLine {
    pub vendor: Vendor,

    /// Amount this month (cents)
    pub amount: i64,

    /// Amount in the preceding calendar month (cents)
    pub prior_amount: i64,

    /// `amount - prior_amount` (cents)
    pub change: i64,

    /// Percentage change; 0 when the prior amount is 0
    pub change_pct: f64,
}

/// All stores, vendors and cost entries
#[derive(Debug, Clone, Default, Serialize)]
pub struct CostLedger {
    stores: Vec<Store>,
    vendors: Vec<Vendor>,
    entries: Vec<CostEntry>,

    #[serde(skip)]
    entry_index: HashMap<(u32, u32, i32), usize>,

    #[serde(skip)]
    vendor_index: HashMap<u32, usize>,
}

impl CostLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate sections into one ledger.
    pub fn from_sections(
        sections: impl IntoIterator<Item = LedgerSection>,
    ) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for section in sections {
            ledger.add_section(section)?;
        }
        Ok(ledger)
    }

    /// Register a store with its vendors and entries.
    ///
    /// The section is checked as a whole first; on error the ledger is left
    /// unchanged.
    pub fn add_section(&mut self, section: LedgerSection) -> Result<(), LedgerError> {
        self.check_section(&section)?;

        self.stores.push(section.store);
        for vendor in section.vendors {
            self.vendor_index.insert(vendor.id, self.vendors.len());
            self.vendors.push(vendor);
        }
        for entry in section.entries {
            self.entry_index.insert(entry.key(), self.entries.len());
            self.entries.push(entry);
        }
        Ok(())
    }

    fn check_section(&self, section: &LedgerSection) -> Result<(), LedgerError> {
        if self.store(section.store.id).is_some() {
            return Err(LedgerError::DuplicateStore {
                store_id: section.store.id,
            });
        }

        let mut vendor_ids = HashSet::new();
        for vendor in &section.vendors {
            if self.vendor_index.contains_key(&vendor.id) || !vendor_ids.insert(vendor.id) {
                return Err(LedgerError::DuplicateVendor {
                    vendor_id: vendor.id,
                });
            }
        }

        let mut keys = HashSet::new();
        for entry in &section.entries {
            if !self.vendor_index.contains_key(&entry.vendor_id)
                && !vendor_ids.contains(&entry.vendor_id)
            {
                return Err(LedgerError::UnknownVendor {
                    vendor_id: entry.vendor_id,
                });
            }
            let key = entry.key();
            if self.entry_index.contains_key(&key) || !keys.insert(key) {
                return Err(LedgerError::DuplicateEntry {
                    vendor_id: entry.vendor_id,
                    month: entry.month,
                    year: entry.year,
                });
            }
        }
        Ok(())
    }

    /// Register a vendor.
    pub fn add_vendor(&mut self, vendor: Vendor) -> Result<(), LedgerError> {
        if self.vendor_index.contains_key(&vendor.id) {
            return Err(LedgerError::DuplicateVendor {
                vendor_id: vendor.id,
            });
        }
        self.vendor_index.insert(vendor.id, self.vendors.len());
        self.vendors.push(vendor);
        Ok(())
    }

    /// Append an entry, rejecting unknown vendors and (vendor, month, year)
    /// collisions.
    ///
    /// # Example
    /// ```
    /// use restaurant_synth_core_rs::{CostEntry, CostLedger, Vendor, VendorCategory};
    ///
    /// let mut ledger = CostLedger::new();
    /// ledger.add_vendor(Vendor::new(101, 1, VendorCategory::Software, "7shifts")).unwrap();
    /// ledger.insert_entry(CostEntry::new(101, 18_900, 3, 2025)).unwrap();
    /// assert!(ledger.insert_entry(CostEntry::new(101, 18_900, 3, 2025)).is_err());
    /// ```
    pub fn insert_entry(&mut self, entry: CostEntry) -> Result<(), LedgerError> {
        if !self.vendor_index.contains_key(&entry.vendor_id) {
            return Err(LedgerError::UnknownVendor {
                vendor_id: entry.vendor_id,
            });
        }
        let key = entry.key();
        if self.entry_index.contains_key(&key) {
            return Err(LedgerError::DuplicateEntry {
                vendor_id: entry.vendor_id,
                month: entry.month,
                year: entry.year,
            });
        }
        self.entry_index.insert(key, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn store(&self, store_id: u32) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == store_id)
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn vendor(&self, vendor_id: u32) -> Option<&Vendor> {
        self.vendor_index.get(&vendor_id).map(|&i| &self.vendors[i])
    }

    pub fn entries(&self) -> &[CostEntry] {
        &self.entries
    }

    /// Vendors owned by `store_id`, in seeding order. Empty for unknown stores.
    pub fn vendors_for_store(&self, store_id: u32) -> Vec<&Vendor> {
        self.vendors
            .iter()
            .filter(|v| v.store_id == store_id)
            .collect()
    }

    /// All entries of `vendor_id`, oldest first.
    pub fn cost_history(&self, vendor_id: u32) -> Vec<&CostEntry> {
        let mut history: Vec<&CostEntry> = self
            .entries
            .iter()
            .filter(|e| e.vendor_id == vendor_id)
            .collect();
        history.sort_by_key(|e| e.ordinal());
        history
    }

    /// Amount (cents) of `vendor_id` in `month`/`year`, 0 when absent.
    pub fn cost_for_month(&self, vendor_id: u32, month: u32, year: i32) -> i64 {
        self.entry_index
            .get(&(vendor_id, month, year))
            .map(|&i| self.entries[i].amount)
            .unwrap_or(0)
    }

    /// Compare each vendor of `store_id` in `month`/`year` with the preceding
    /// calendar month (January compares with December of the prior year).
    ///
    /// Vendors with a zero amount in both months are left out. When the prior
    /// amount is zero, `change_pct` is 0 rather than infinite.
    pub fn monthly_summary(&self, store_id: u32, month: u32, year: i32) -> Vec<MonthlySummaryLine> {
        let (prior_month, prior_year) = previous_month(month, year);

        self.vendors_for_store(store_id)
            .into_iter()
            .filter_map(|vendor| {
                let amount = self.cost_for_month(vendor.id, month, year);
                let prior_amount = self.cost_for_month(vendor.id, prior_month, prior_year);
                if amount == 0 && prior_amount == 0 {
                    return None;
                }
                let change = amount - prior_amount;
                Some(MonthlySummaryLine {
                    vendor: vendor.clone(),
                    amount,
                    prior_amount,
                    change,
                    change_pct: percent_change(change, prior_amount),
                })
            })
            .collect()
    }
}

/// `change / prior * 100`, defined as 0 when `prior` is 0.
pub fn percent_change(change: i64, prior: i64) -> f64 {
    if prior == 0 {
        0.0
    } else {
        change as f64 / prior as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VendorCategory;

    fn ledger() -> CostLedger {
        let mut ledger = CostLedger::new();
        ledger
            .add_section(LedgerSection {
                store: Store::base(1, "Main Street"),
                vendors: vec![
                    Vendor::new(101, 1, VendorCategory::UtilitiesGas, "Gas"),
                    Vendor::new(102, 1, VendorCategory::DeliveryCommission, "DoorDash"),
                ],
                entries: vec![
                    CostEntry::new(101, 195_000, 1, 2026),
                    CostEntry::new(101, 185_000, 12, 2025),
                    CostEntry::new(102, 185_000, 5, 2025),
                ],
            })
            .unwrap();
        ledger
    }

    #[test]
    fn test_summary_wraps_year_boundary() {
        let summary = ledger().monthly_summary(1, 1, 2026);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].prior_amount, 185_000);
        assert_eq!(summary[0].change, 10_000);
        assert!((summary[0].change_pct - 5.405405).abs() < 1e-5);
    }

    #[test]
    fn test_summary_zero_prior_has_zero_pct() {
        let summary = ledger().monthly_summary(1, 5, 2025);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].vendor.id, 102);
        assert_eq!(summary[0].change_pct, 0.0);
    }

    #[test]
    fn test_duplicate_store_rejected() {
        let mut ledger = ledger();
        let err = ledger
            .add_section(LedgerSection {
                store: Store::derived(1, "Again"),
                vendors: vec![],
                entries: vec![],
            })
            .unwrap_err();
        assert_eq!(err, LedgerError::DuplicateStore { store_id: 1 });
    }

    #[test]
    fn test_rejected_section_leaves_ledger_unchanged() {
        let mut ledger = ledger();
        let before = (ledger.stores().len(), ledger.vendors().len(), ledger.entries().len());

        let err = ledger
            .add_section(LedgerSection {
                store: Store::derived(2, "Riverside"),
                vendors: vec![Vendor::new(201, 2, VendorCategory::UtilitiesGas, "Gas")],
                entries: vec![
                    CostEntry::new(201, 200_000, 12, 2025),
                    CostEntry::new(201, 210_000, 12, 2025),
                ],
            })
            .unwrap_err();

        assert_eq!(
            err,
            LedgerError::DuplicateEntry {
                vendor_id: 201,
                month: 12,
                year: 2025
            }
        );
        assert_eq!(
            (ledger.stores().len(), ledger.vendors().len(), ledger.entries().len()),
            before
        );
        assert!(ledger.store(2).is_none());
        assert!(ledger.vendor(201).is_none());
    }

    #[test]
    fn test_section_reusing_vendor_id_rejected() {
        let mut ledger = ledger();
        let err = ledger
            .add_section(LedgerSection {
                store: Store::derived(2, "Riverside"),
                vendors: vec![Vendor::new(101, 2, VendorCategory::UtilitiesGas, "Gas")],
                entries: vec![],
            })
            .unwrap_err();
        assert_eq!(err, LedgerError::DuplicateVendor { vendor_id: 101 });
        assert!(ledger.store(2).is_none());
    }

    #[test]
    fn test_history_sorted_chronologically() {
        let ledger = ledger();
        let months: Vec<(u32, i32)> = ledger
            .cost_history(101)
            .iter()
            .map(|e| (e.month, e.year))
            .collect();
        assert_eq!(months, vec![(12, 2025), (1, 2026)]);
    }
}
