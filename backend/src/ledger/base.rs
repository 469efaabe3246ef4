//! Base ledger fixture
//!
//! The hand-authored 12-month cost history of the base store. This table is
//! the only authored ledger data: every derived store is computed from it.
//!
//! Amounts are whole dollars per fiscal position (index 0 = first fiscal
//! month). Seasonal shape is encoded directly: electric and water peak in
//! summer, gas in winter, food distribution trends upward with holiday bumps,
//! insurance steps up at its October renewal, fixed contracts stay flat.

use tracing::debug;

use super::book::LedgerSection;
use crate::core::FiscalYear;
use crate::models::{CostEntry, Store, Vendor, VendorCategory};

/// One vendor row of the base table
#[derive(Debug, Clone, Copy)]
struct BaseVendorRow {
    category: VendorCategory,
    name: &'static str,

    /// Whole dollars per fiscal position
    amounts: [i64; 12],

    /// First fiscal position with an invoice (vendors onboarded mid-year)
    first_index: usize,

    /// Notes attached to specific fiscal positions
    notes: &'static [(usize, &'static str)],
}

const BASE_ROWS: &[BaseVendorRow] = &[
    BaseVendorRow {
        category: VendorCategory::FoodDistribution,
        name: "Sysco Foodservice",
        amounts: [
            13_200, 13_450, 13_900, 14_300, 14_850, 14_600, 13_950, 14_100, 15_800, 16_400, 13_600,
            13_800,
        ],
        first_index: 0,
        notes: &[(8, "Holiday catering orders"), (9, "Holiday party bookings")],
    },
    BaseVendorRow {
        category: VendorCategory::Beverage,
        name: "Coastal Beverage Co.",
        amounts: [
            4_100, 4_250, 4_600, 5_100, 5_400, 5_300, 4_700, 4_500, 4_900, 5_600, 4_000, 4_150,
        ],
        first_index: 0,
        notes: &[(9, "New Year's Eve stock-up")],
    },
    BaseVendorRow {
        category: VendorCategory::UtilitiesElectric,
        name: "Metro Power & Light",
        amounts: [
            2_100, 2_250, 2_600, 3_150, 3_400, 3_300, 2_700, 2_300, 2_150, 2_250, 2_300, 2_200,
        ],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::UtilitiesGas,
        name: "Valley Natural Gas",
        amounts: [
            1_350, 1_100, 900, 780, 720, 740, 850, 1_150, 1_500, 1_850, 1_950, 1_700,
        ],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::UtilitiesWater,
        name: "City Water Utility",
        amounts: [620, 650, 700, 780, 820, 800, 720, 660, 610, 600, 590, 600],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::Insurance,
        name: "Harbor Mutual Insurance",
        amounts: [
            2_150, 2_150, 2_150, 2_150, 2_150, 2_150, 2_150, 2_322, 2_322, 2_322, 2_322, 2_322,
        ],
        first_index: 0,
        notes: &[(7, "Annual policy renewal (+8%)")],
    },
    BaseVendorRow {
        category: VendorCategory::Rent,
        name: "Main Street Properties LLC",
        amounts: [9_500; 12],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::ProcessingFees,
        name: "Square Payments",
        amounts: [
            3_650, 3_700, 3_850, 3_950, 4_100, 4_050, 3_800, 3_850, 4_200, 4_450, 3_600, 3_650,
        ],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::DeliveryCommission,
        name: "DoorDash",
        amounts: [
            0, 0, 1_850, 1_920, 2_010, 1_980, 2_100, 2_240, 2_400, 2_650, 2_300, 2_250,
        ],
        first_index: 2,
        notes: &[(2, "Delivery platform onboarded")],
    },
    BaseVendorRow {
        category: VendorCategory::Marketing,
        name: "Local Ad Partners",
        amounts: [800, 800, 950, 800, 800, 1_200, 800, 800, 1_400, 1_500, 700, 900],
        first_index: 0,
        notes: &[(5, "Back-to-school promotion")],
    },
    BaseVendorRow {
        category: VendorCategory::CleaningSupplies,
        name: "Ecolab",
        amounts: [540, 560, 575, 590, 610, 600, 580, 570, 620, 650, 530, 540],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::CleaningService,
        name: "Sparkle Commercial Cleaning",
        amounts: [1_150; 12],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::Software,
        name: "7shifts Scheduling",
        amounts: [189; 12],
        first_index: 0,
        notes: &[],
    },
    BaseVendorRow {
        category: VendorCategory::WasteRemoval,
        name: "Green Waste Services",
        amounts: [425; 12],
        first_index: 0,
        notes: &[],
    },
];

/// Materialize the base table for `store` over the fiscal window.
pub fn build_base_section(store: Store, fiscal: &FiscalYear) -> LedgerSection {
    let mut vendors = Vec::with_capacity(BASE_ROWS.len());
    let mut entries = Vec::new();

    for (ordinal, row) in BASE_ROWS.iter().enumerate() {
        let vendor = Vendor::new(store.vendor_id(ordinal), store.id, row.category, row.name);

        for fm in fiscal.months().iter().skip(row.first_index) {
            let mut entry = CostEntry::new(vendor.id, row.amounts[fm.index] * 100, fm.month, fm.year)
                .with_invoice(CostEntry::invoice_id_for(vendor.id, fm.month, fm.year));
            if let Some((_, note)) = row.notes.iter().find(|(i, _)| *i == fm.index) {
                entry = entry.with_note(*note);
            }
            entries.push(entry);
        }

        vendors.push(vendor);
    }

    debug!(
        store_id = store.id,
        vendors = vendors.len(),
        entries = entries.len(),
        "built base ledger"
    );

    LedgerSection {
        store,
        vendors,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_categories_are_unique() {
        let categories: HashSet<_> = BASE_ROWS.iter().map(|r| r.category).collect();
        assert_eq!(categories.len(), BASE_ROWS.len());
    }

    #[test]
    fn test_mid_year_vendor_skips_early_months() {
        let fiscal = FiscalYear::new(3, 2025);
        let section = build_base_section(Store::base(1, "Main Street"), &fiscal);
        let doordash = section
            .vendors
            .iter()
            .find(|v| v.category == VendorCategory::DeliveryCommission)
            .unwrap();
        let months: Vec<u32> = section
            .entries
            .iter()
            .filter(|e| e.vendor_id == doordash.id)
            .map(|e| e.month)
            .collect();
        assert_eq!(months.len(), 10);
        assert!(!months.contains(&3) && !months.contains(&4));
    }

    #[test]
    fn test_base_notes_are_attached() {
        let fiscal = FiscalYear::new(3, 2025);
        let section = build_base_section(Store::base(1, "Main Street"), &fiscal);
        let renewal = section
            .entries
            .iter()
            .find(|e| e.vendor_id == 106 && e.month == 10)
            .unwrap();
        assert_eq!(renewal.amount, 232_200);
        assert!(renewal.note.as_deref().unwrap_or("").contains("renewal"));
    }
}
