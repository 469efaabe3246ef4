//! Tests for derived ledger generation
//!
//! Covers the three derivation rules on the canonical dataset plus the
//! completeness invariant for every derived store.

use std::collections::HashMap;

use proptest::prelude::*;
use restaurant_synth_core_rs::ledger::{jitter, vendor_multiplier};
use restaurant_synth_core_rs::{DashboardData, EngineConfig, VendorCategory};

fn vendor_id(data: &DashboardData, store_id: u32, category: VendorCategory) -> u32 {
    data.vendors_for_store(store_id)
        .into_iter()
        .find(|v| v.category == category)
        .map(|v| v.id)
        .unwrap()
}

#[test]
fn test_proportional_with_jitter_scenario() {
    let data = DashboardData::shared();

    // Base food distribution: $13,200 in March 2025 (fiscal index 0)
    let base = vendor_id(data, 1, VendorCategory::FoodDistribution);
    assert_eq!(data.cost_for_month(base, 3, 2025), 1_320_000);

    // 13200 * 1.12 * 0.99 = 14636.16 → 14636
    let riverside = vendor_id(data, 2, VendorCategory::FoodDistribution);
    assert_eq!(data.cost_for_month(riverside, 3, 2025), 1_463_600);

    // 13200 * 0.80 * 0.99 = 10454.4 → 10454
    let harbor = vendor_id(data, 3, VendorCategory::FoodDistribution);
    assert_eq!(data.cost_for_month(harbor, 3, 2025), 1_045_400);
}

#[test]
fn test_proportional_uses_vendor_ordinal_multiplier() {
    let data = DashboardData::shared();

    // Electric is ordinal 2: multiplier 1.12 + 2 * 0.008 = 1.136
    // April 2025 is fiscal index 1: jitter -0.002
    // 2250 * 1.136 * 0.998 = 2550.888 → 2551
    let electric = vendor_id(data, 2, VendorCategory::UtilitiesElectric);
    assert_eq!(data.cost_for_month(electric, 4, 2025), 255_100);
}

#[test]
fn test_step_renewal_scenario() {
    let data = DashboardData::shared();
    let insurance = vendor_id(data, 2, VendorCategory::Insurance);

    let amounts: Vec<(u32, i64)> = data
        .cost_history(insurance)
        .iter()
        .map(|e| (e.month, e.amount))
        .collect();
    assert_eq!(amounts.len(), 12);

    // Renewal in September: Mar..Aug at $2,400, Sep..Feb at $2,592
    for (month, amount) in &amounts[..6] {
        assert_eq!(*amount, 240_000, "month {} before renewal", month);
    }
    for (month, amount) in &amounts[6..] {
        assert_eq!(*amount, 259_200, "month {} after renewal", month);
    }

    // Holds across the fiscal year wrap
    assert_eq!(data.cost_for_month(insurance, 1, 2026), 259_200);
    assert_eq!(data.cost_for_month(insurance, 2, 2026), 259_200);
}

#[test]
fn test_step_never_reverts() {
    let data = DashboardData::shared();
    for store in data.stores() {
        let insurance = vendor_id(data, store.id, VendorCategory::Insurance);
        let history = data.cost_history(insurance);
        assert!(
            history.windows(2).all(|w| w[1].amount >= w[0].amount),
            "store {} insurance decreased",
            store.id
        );
        let steps = history.windows(2).filter(|w| w[1].amount != w[0].amount).count();
        assert_eq!(steps, 1, "store {} should step exactly once", store.id);
    }
}

#[test]
fn test_renewal_month_is_noted() {
    let data = DashboardData::shared();
    let insurance = vendor_id(data, 2, VendorCategory::Insurance);
    let september = data
        .cost_history(insurance)
        .into_iter()
        .find(|e| e.month == 9)
        .unwrap();
    assert_eq!(september.note.as_deref(), Some("Annual policy renewal (+8%)"));
}

#[test]
fn test_flat_fee_scenario() {
    let data = DashboardData::shared();

    for store in data.stores() {
        let software = vendor_id(data, store.id, VendorCategory::Software);
        let history = data.cost_history(software);
        assert_eq!(history.len(), 12, "store {}", store.id);
        assert!(
            history.iter().all(|e| e.amount == 18_900),
            "store {} software fee varies",
            store.id
        );
    }
}

#[test]
fn test_flat_rent_is_per_store() {
    let data = DashboardData::shared();
    let rent = |store| {
        let id = vendor_id(data, store, VendorCategory::Rent);
        data.cost_for_month(id, 6, 2025)
    };
    assert_eq!(rent(1), 950_000);
    assert_eq!(rent(2), 1_120_000);
    assert_eq!(rent(3), 760_000);
}

#[test]
fn test_every_derived_store_is_complete() {
    let data = DashboardData::shared();
    let ledger = data.ledger();

    let base_vendors = data.vendors_for_store(1);
    let base_months: Vec<Vec<(u32, i32)>> = base_vendors
        .iter()
        .map(|v| data.cost_history(v.id).iter().map(|e| (e.month, e.year)).collect())
        .collect();

    for store in data.stores().iter().filter(|s| !s.is_base) {
        let vendors = data.vendors_for_store(store.id);
        assert_eq!(vendors.len(), base_vendors.len());

        for (ordinal, vendor) in vendors.iter().enumerate() {
            assert_eq!(vendor.category, base_vendors[ordinal].category);

            let mut counts: HashMap<(u32, i32), usize> = HashMap::new();
            for entry in ledger.entries().iter().filter(|e| e.vendor_id == vendor.id) {
                *counts.entry((entry.month, entry.year)).or_insert(0) += 1;
            }

            for key in &base_months[ordinal] {
                assert_eq!(
                    counts.get(key).copied().unwrap_or(0),
                    1,
                    "store {} vendor {} missing {:?}",
                    store.id,
                    vendor.id,
                    key
                );
            }
            assert_eq!(counts.len(), base_months[ordinal].len());
        }
    }
}

#[test]
fn test_mid_year_vendor_has_no_derived_entries_before_onboarding() {
    let data = DashboardData::shared();
    for store in data.stores() {
        let doordash = vendor_id(data, store.id, VendorCategory::DeliveryCommission);
        assert_eq!(data.cost_for_month(doordash, 3, 2025), 0);
        assert_eq!(data.cost_for_month(doordash, 4, 2025), 0);
        assert!(data.cost_for_month(doordash, 5, 2025) > 0);
        assert_eq!(data.cost_history(doordash).len(), 10);
    }
}

#[test]
fn test_amounts_are_whole_currency_units() {
    let data = DashboardData::shared();
    for entry in data.ledger().entries() {
        assert_eq!(entry.amount % 100, 0, "{:?} has fractional units", entry);
    }
}

#[test]
fn test_rebuild_is_identical() {
    let first = DashboardData::build(EngineConfig::default()).unwrap();
    let second = DashboardData::build(EngineConfig::default()).unwrap();

    assert_eq!(first.ledger().entries(), second.ledger().entries());
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
}

#[test]
fn test_vendor_ids_do_not_collide_across_stores() {
    let data = DashboardData::shared();
    let mut ids: Vec<u32> = data.ledger().vendors().iter().map(|v| v.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

proptest! {
    #[test]
    fn prop_jitter_is_bounded(index in 0usize..100_000) {
        let j = jitter(index);
        prop_assert!(j >= -0.01 - 1e-12 && j <= 0.01 + 1e-12, "jitter({}) = {}", index, j);
        prop_assert_eq!(j, jitter(index));
    }

    #[test]
    fn prop_vendor_multiplier_is_bounded(base in 0.5f64..2.0, ordinal in 0usize..1_000) {
        let m = vendor_multiplier(base, ordinal);
        prop_assert!(m >= base && m <= base + 6.0 * 0.008 + 1e-12);
    }
}
