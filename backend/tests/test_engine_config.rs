//! Tests for engine configuration and dataset construction

use restaurant_synth_core_rs::engine::{config_hash, EngineError};
use restaurant_synth_core_rs::ledger::FixedCost;
use restaurant_synth_core_rs::models::MAX_STORE_ID;
use restaurant_synth_core_rs::{DashboardData, EngineConfig, LedgerError, VendorCategory};

#[test]
fn test_default_config_builds() {
    let data = DashboardData::build(EngineConfig::default()).unwrap();

    assert_eq!(data.stores().len(), 3);
    assert!(data.stores()[0].is_base);
    assert_eq!(data.ledger().vendors().len(), 42);
    // 13 full-year vendors plus one ten-month vendor, per store
    assert_eq!(data.ledger().entries().len(), 3 * (13 * 12 + 10));
}

#[test]
fn test_minimal_json_uses_defaults() {
    let json = r#"{
        "base_store": {
            "id": 10,
            "name": "Test Kitchen",
            "baseline": {
                "avg_daily_sales": 500000,
                "avg_check": 2500,
                "labor_target_pct": 30.0,
                "food_cost_target_pct": 30.0
            }
        }
    }"#;

    let config = EngineConfig::from_json(json).unwrap();
    assert_eq!(config.fiscal_start_month, 3);
    assert_eq!(config.reference_year, 2025);
    assert_eq!(config.max_feed_items, 5);
    assert!(config.derived_stores.is_empty());

    let data = DashboardData::build(config).unwrap();
    assert_eq!(data.vendors_for_store(10).len(), 14);
    assert_eq!(data.vendors_for_store(10)[0].id, 1_001);
}

#[test]
fn test_custom_fiscal_anchor() {
    let mut config = EngineConfig::default();
    config.fiscal_start_month = 7;
    config.reference_year = 2024;

    let data = DashboardData::build(config).unwrap();
    let fy = data.fiscal_year();
    assert_eq!((fy.first().month, fy.first().year), (7, 2024));
    assert_eq!((fy.last().month, fy.last().year), (6, 2025));
    assert_eq!(data.cost_for_month(101, 7, 2024), 1_320_000);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(
        EngineConfig::from_json("{ not json"),
        Err(EngineError::Parse(_))
    ));
}

#[test]
fn test_invalid_start_month_rejected() {
    let mut config = EngineConfig::default();
    config.fiscal_start_month = 13;
    assert!(matches!(
        DashboardData::build(config),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn test_zero_feed_size_rejected() {
    let mut config = EngineConfig::default();
    config.max_feed_items = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_fixed_cost_fails_build() {
    let mut config = EngineConfig::default();
    config.derived_stores[1]
        .fixed_costs
        .remove(&VendorCategory::Insurance);

    match DashboardData::build(config) {
        Err(EngineError::Ledger(LedgerError::MissingFixedCost { store_id, category })) => {
            assert_eq!(store_id, 3);
            assert_eq!(category, VendorCategory::Insurance);
        }
        other => panic!("expected MissingFixedCost, got {:?}", other.err()),
    }
}

#[test]
fn test_wrong_fixed_cost_shape_fails_build() {
    let mut config = EngineConfig::default();
    config.derived_stores[0].fixed_costs.insert(
        VendorCategory::Insurance,
        FixedCost::Flat { amount: 100_000 },
    );

    assert!(matches!(
        DashboardData::build(config),
        Err(EngineError::Ledger(LedgerError::MismatchedFixedCost { .. }))
    ));
}

#[test]
fn test_invalid_renewal_month_fails_build() {
    let mut config = EngineConfig::default();
    config.derived_stores[0].fixed_costs.insert(
        VendorCategory::Insurance,
        FixedCost::Renewal {
            amount: 100_000,
            step_bps: 500,
            renewal_month: 14,
        },
    );

    assert!(matches!(
        DashboardData::build(config),
        Err(EngineError::Ledger(LedgerError::InvalidRenewalMonth { month: 14 }))
    ));
}

#[test]
fn test_store_id_too_large_for_vendor_ids_rejected() {
    let mut config = EngineConfig::default();
    config.derived_stores[1].id = 50_000_000;

    assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    assert!(matches!(
        DashboardData::build(config),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn test_largest_store_id_builds() {
    let mut config = EngineConfig::default();
    config.derived_stores[1].id = MAX_STORE_ID;

    let data = DashboardData::build(config).unwrap();
    let vendors = data.vendors_for_store(MAX_STORE_ID);
    assert_eq!(vendors.len(), 14);
    assert_eq!(vendors[13].id, MAX_STORE_ID * 100 + 14);
}

#[test]
fn test_decreasing_renewal_fails_build() {
    let mut config = EngineConfig::default();
    config.derived_stores[0].fixed_costs.insert(
        VendorCategory::Insurance,
        FixedCost::Renewal {
            amount: 240_000,
            step_bps: -5_000,
            renewal_month: 9,
        },
    );

    assert!(matches!(
        DashboardData::build(config),
        Err(EngineError::Ledger(LedgerError::NonIncreasingRenewal { store_id: 2, .. }))
    ));
}

#[test]
fn test_renewal_on_fiscal_start_fails_build() {
    let mut config = EngineConfig::default();
    let start = config.fiscal_start_month;
    config.derived_stores[0].fixed_costs.insert(
        VendorCategory::Insurance,
        FixedCost::Renewal {
            amount: 240_000,
            step_bps: 800,
            renewal_month: start,
        },
    );

    assert!(matches!(
        DashboardData::build(config),
        Err(EngineError::Ledger(LedgerError::RenewalAtWindowStart { store_id: 2, month: 3 }))
    ));
}

#[test]
fn test_vendor_names_from_json() {
    let json = r#"{
        "base_store": {
            "id": 1,
            "name": "Main Street",
            "baseline": {
                "avg_daily_sales": 500000,
                "avg_check": 2500,
                "labor_target_pct": 30.0,
                "food_cost_target_pct": 30.0
            }
        },
        "derived_stores": [{
            "id": 4,
            "name": "Uptown",
            "fixed_costs": {
                "Rent": { "type": "Flat", "amount": 900000 },
                "CleaningService": { "type": "Flat", "amount": 100000 },
                "Software": { "type": "Flat", "amount": 18900 },
                "WasteRemoval": { "type": "Flat", "amount": 40000 },
                "Insurance": { "type": "Renewal", "amount": 200000, "step_bps": 500, "renewal_month": 12 }
            },
            "vendor_names": { "Rent": "Uptown Tower LLC" },
            "baseline": {
                "avg_daily_sales": 700000,
                "avg_check": 3000,
                "labor_target_pct": 29.0,
                "food_cost_target_pct": 30.0
            }
        }]
    }"#;

    let data = DashboardData::build(EngineConfig::from_json(json).unwrap()).unwrap();
    let rent = data
        .vendors_for_store(4)
        .into_iter()
        .find(|v| v.category == VendorCategory::Rent)
        .unwrap();
    assert_eq!(rent.name, "Uptown Tower LLC");
    assert_eq!(data.cost_for_month(rent.id, 12, 2025), 900_000);
}

#[test]
fn test_fingerprint_tracks_configuration() {
    let default = DashboardData::build(EngineConfig::default()).unwrap();

    let mut tweaked = EngineConfig::default();
    tweaked.derived_stores[0].multiplier = 1.15;
    let tweaked = DashboardData::build(tweaked).unwrap();

    assert_eq!(default.fingerprint().unwrap().len(), 64);
    assert_ne!(default.fingerprint().unwrap(), tweaked.fingerprint().unwrap());
    assert_ne!(
        config_hash(default.config()).unwrap(),
        config_hash(tweaked.config()).unwrap()
    );
}

#[test]
fn test_shared_instance_matches_default_build() {
    let fresh = DashboardData::build(EngineConfig::default()).unwrap();
    assert_eq!(
        DashboardData::shared().fingerprint().unwrap(),
        fresh.fingerprint().unwrap()
    );
}
