//! Derived ledger generation
//!
//! Walks the base ledger month by month over the fiscal window and emits one
//! entry per (base vendor, month) for the derived store, using the store's own
//! vendor ids and the category rule resolved for each vendor.

use std::collections::HashMap;

use tracing::debug;

use super::book::LedgerSection;
use super::error::LedgerError;
use super::rules::DerivationRule;
use crate::core::FiscalYear;
use crate::engine::StoreProfile;
use crate::models::{CostEntry, Store, Vendor};

/// Produces complete ledgers for derived stores from one base section
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::core::FiscalYear;
/// use restaurant_synth_core_rs::engine::EngineConfig;
/// use restaurant_synth_core_rs::ledger::{build_base_section, DerivedLedgerGenerator};
/// use restaurant_synth_core_rs::Store;
///
/// let config = EngineConfig::default();
/// let fiscal = FiscalYear::new(3, 2025);
/// let base = build_base_section(Store::base(1, "Main Street"), &fiscal);
/// let generator = DerivedLedgerGenerator::new(&base, &fiscal);
///
/// let derived = generator.derive(&config.derived_stores[0]).unwrap();
/// assert_eq!(derived.entries.len(), base.entries.len());
/// ```
pub struct DerivedLedgerGenerator<'a> {
    base: &'a LedgerSection,
    fiscal: &'a FiscalYear,
}

impl<'a> DerivedLedgerGenerator<'a> {
    pub fn new(base: &'a LedgerSection, fiscal: &'a FiscalYear) -> Self {
        Self { base, fiscal }
    }

    /// Derive the ledger section for the store described by `profile`.
    ///
    /// # Errors
    /// - `MissingFixedCost` / `MismatchedFixedCost` when the profile does not
    ///   configure a usable fixed cost for a flat or renewal category
    /// - `InvalidRenewalMonth` for renewal months outside 1..=12
    /// - `RenewalAtWindowStart` / `NonIncreasingRenewal` when a renewal would
    ///   not raise the premium within the window
    /// - `IncompleteDerivation` / `UnexpectedEntries` if the result does not
    ///   mirror the base month coverage
    pub fn derive(&self, profile: &StoreProfile) -> Result<LedgerSection, LedgerError> {
        let store = Store::derived(profile.id, profile.name.clone());

        let mut vendors = Vec::with_capacity(self.base.vendors.len());
        // base vendor id → (derived vendor id, rule)
        let mut plan: HashMap<u32, (u32, DerivationRule)> = HashMap::new();

        for (ordinal, base_vendor) in self.base.vendors.iter().enumerate() {
            let rule = DerivationRule::resolve(base_vendor.category, ordinal, profile, self.fiscal)?;
            let name = profile
                .vendor_names
                .get(&base_vendor.category)
                .cloned()
                .unwrap_or_else(|| base_vendor.name.clone());
            let vendor = Vendor::new(store.vendor_id(ordinal), store.id, base_vendor.category, name);
            plan.insert(base_vendor.id, (vendor.id, rule));
            vendors.push(vendor);
        }

        let mut entries = Vec::with_capacity(self.base.entries.len());

        for fm in self.fiscal.months() {
            for base_entry in self
                .base
                .entries
                .iter()
                .filter(|e| e.month == fm.month && e.year == fm.year)
            {
                let (vendor_id, rule) =
                    plan.get(&base_entry.vendor_id).ok_or(LedgerError::UnknownVendor {
                        vendor_id: base_entry.vendor_id,
                    })?;

                let mut entry = CostEntry::new(
                    *vendor_id,
                    rule.amount_for(base_entry.amount, fm),
                    fm.month,
                    fm.year,
                )
                .with_invoice(CostEntry::invoice_id_for(*vendor_id, fm.month, fm.year));
                if let Some(note) = rule.note_for(fm) {
                    entry = entry.with_note(note);
                }
                entries.push(entry);
            }
        }

        let section = LedgerSection {
            store,
            vendors,
            entries,
        };
        check_completeness(self.base, &section)?;

        debug!(
            store_id = section.store.id,
            entries = section.entries.len(),
            "derived ledger"
        );

        Ok(section)
    }
}

/// Verify that `derived` has exactly one entry per (base vendor counterpart,
/// month) of `base`, and nothing else.
///
/// Counterparts are matched by position in the vendor list.
pub fn check_completeness(base: &LedgerSection, derived: &LedgerSection) -> Result<(), LedgerError> {
    let ordinal_of = |section: &LedgerSection| -> HashMap<u32, usize> {
        section
            .vendors
            .iter()
            .enumerate()
            .map(|(ordinal, v)| (v.id, ordinal))
            .collect()
    };
    let base_ordinals = ordinal_of(base);
    let derived_ordinals = ordinal_of(derived);

    let mut counts: HashMap<(usize, u32, i32), usize> = HashMap::new();
    for entry in &derived.entries {
        let ordinal = derived_ordinals
            .get(&entry.vendor_id)
            .ok_or(LedgerError::UnknownVendor {
                vendor_id: entry.vendor_id,
            })?;
        *counts.entry((*ordinal, entry.month, entry.year)).or_insert(0) += 1;
    }

    for entry in &base.entries {
        let ordinal = base_ordinals
            .get(&entry.vendor_id)
            .ok_or(LedgerError::UnknownVendor {
                vendor_id: entry.vendor_id,
            })?;
        let found = counts
            .get(&(*ordinal, entry.month, entry.year))
            .copied()
            .unwrap_or(0);
        if found != 1 {
            return Err(LedgerError::IncompleteDerivation {
                store_id: derived.store.id,
                category: base.vendors[*ordinal].category,
                month: entry.month,
                year: entry.year,
                found,
            });
        }
    }

    if derived.entries.len() != base.entries.len() {
        return Err(LedgerError::UnexpectedEntries {
            store_id: derived.store.id,
            base: base.entries.len(),
            derived: derived.entries.len(),
        });
    }

    Ok(())
}
