//! Engine configuration
//!
//! The default configuration is the canonical dataset: one base store whose
//! ledger is the hand-authored table, and two derived stores. A JSON document
//! with the same shape can replace it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::fiscal::{FISCAL_START_MONTH, REFERENCE_YEAR};
use crate::core::CalendarError;
use crate::ledger::{FixedCost, LedgerError};
use crate::models::{VendorCategory, MAX_STORE_ID};

/// Errors raised while configuring or building the dataset
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Fiscal calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

/// Operating baseline used for the daily metrics snapshot
///
/// Money values are i64 cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreBaseline {
    pub avg_daily_sales: i64,
    pub avg_check: i64,
    pub labor_target_pct: f64,
    pub food_cost_target_pct: f64,
    #[serde(default)]
    pub signature_items: Vec<String>,
}

/// One store of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub id: u32,

    pub name: String,

    /// Scale of proportional costs relative to the base store (1.12 = 12% higher)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Parameters for flat-fee and renewal categories (derived stores only)
    #[serde(default)]
    pub fixed_costs: BTreeMap<VendorCategory, FixedCost>,

    /// Local vendor names replacing the base vendor's name for a category
    #[serde(default)]
    pub vendor_names: BTreeMap<VendorCategory, String>,

    pub baseline: StoreBaseline,
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_start_month() -> u32 {
    FISCAL_START_MONTH
}

fn default_reference_year() -> i32 {
    REFERENCE_YEAR
}

fn default_max_feed_items() -> usize {
    crate::content::selector::DEFAULT_MAX_ITEMS
}

/// Complete engine configuration
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.fiscal_start_month, 3);
/// assert_eq!(config.max_feed_items, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_start_month")]
    pub fiscal_start_month: u32,

    #[serde(default = "default_reference_year")]
    pub reference_year: i32,

    #[serde(default = "default_max_feed_items")]
    pub max_feed_items: usize,

    pub base_store: StoreProfile,

    #[serde(default)]
    pub derived_stores: Vec<StoreProfile>,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=12).contains(&self.fiscal_start_month) {
            return Err(EngineError::InvalidConfig(format!(
                "fiscal_start_month {} is outside 1..=12",
                self.fiscal_start_month
            )));
        }
        if self.max_feed_items == 0 {
            return Err(EngineError::InvalidConfig(
                "max_feed_items must be positive".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for profile in self.stores() {
            if !seen.insert(profile.id) {
                return Err(EngineError::InvalidConfig(format!(
                    "duplicate store id {}",
                    profile.id
                )));
            }
            if profile.id > MAX_STORE_ID {
                return Err(EngineError::InvalidConfig(format!(
                    "store id {} exceeds the maximum of {}",
                    profile.id, MAX_STORE_ID
                )));
            }
            if !(profile.multiplier.is_finite() && profile.multiplier > 0.0) {
                return Err(EngineError::InvalidConfig(format!(
                    "store {} multiplier must be positive, got {}",
                    profile.id, profile.multiplier
                )));
            }
        }
        Ok(())
    }

    /// Base store followed by the derived stores.
    pub fn stores(&self) -> impl Iterator<Item = &StoreProfile> {
        std::iter::once(&self.base_store).chain(self.derived_stores.iter())
    }

    pub fn profile(&self, store_id: u32) -> Option<&StoreProfile> {
        self.stores().find(|p| p.id == store_id)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fiscal_start_month: FISCAL_START_MONTH,
            reference_year: REFERENCE_YEAR,
            max_feed_items: default_max_feed_items(),
            base_store: StoreProfile {
                id: 1,
                name: "Main Street".to_string(),
                multiplier: 1.0,
                fixed_costs: BTreeMap::new(),
                vendor_names: BTreeMap::new(),
                baseline: StoreBaseline {
                    avg_daily_sales: 840_000, // $8,400
                    avg_check: 3_250,
                    labor_target_pct: 29.0,
                    food_cost_target_pct: 30.0,
                    signature_items: items(&["Smash Burger", "Truffle Fries", "Nashville Hot Chicken", "Caesar Salad"]),
                },
            },
            derived_stores: vec![
                StoreProfile {
                    id: 2,
                    name: "Riverside".to_string(),
                    multiplier: 1.12,
                    fixed_costs: fixed_costs(1_120_000, 128_000, 46_000, (240_000, 800, 9)),
                    vendor_names: vendor_names(&[
                        (VendorCategory::Rent, "Riverside Commons Realty"),
                        (VendorCategory::CleaningService, "Riverbend Janitorial"),
                        (VendorCategory::WasteRemoval, "River City Disposal"),
                    ]),
                    baseline: StoreBaseline {
                        avg_daily_sales: 960_000,
                        avg_check: 3_400,
                        labor_target_pct: 28.0,
                        food_cost_target_pct: 31.0,
                        signature_items: items(&["Smash Burger", "Fish Tacos", "Patio Pitcher", "Wedge Salad"]),
                    },
                },
                StoreProfile {
                    id: 3,
                    name: "Harbor Point".to_string(),
                    multiplier: 0.80,
                    fixed_costs: fixed_costs(760_000, 98_000, 39_000, (198_000, 800, 1)),
                    vendor_names: vendor_names(&[
                        (VendorCategory::Rent, "Harbor Point Holdings"),
                        (VendorCategory::CleaningService, "Bayside Facility Services"),
                        (VendorCategory::WasteRemoval, "Coastal Waste Management"),
                    ]),
                    baseline: StoreBaseline {
                        avg_daily_sales: 630_000,
                        avg_check: 2_975,
                        labor_target_pct: 30.0,
                        food_cost_target_pct: 29.5,
                        signature_items: items(&["Clam Chowder", "Smash Burger", "Lobster Roll"]),
                    },
                },
            ],
        }
    }
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn vendor_names(names: &[(VendorCategory, &str)]) -> BTreeMap<VendorCategory, String> {
    names
        .iter()
        .map(|(category, name)| (*category, name.to_string()))
        .collect()
}

/// Fixed-cost table shared by the default derived stores.
///
/// The software subscription is the same $189 everywhere.
fn fixed_costs(
    rent: i64,
    cleaning: i64,
    waste: i64,
    (premium, step_bps, renewal_month): (i64, i64, u32),
) -> BTreeMap<VendorCategory, FixedCost> {
    BTreeMap::from([
        (VendorCategory::Rent, FixedCost::Flat { amount: rent }),
        (VendorCategory::CleaningService, FixedCost::Flat { amount: cleaning }),
        (VendorCategory::Software, FixedCost::Flat { amount: 18_900 }),
        (VendorCategory::WasteRemoval, FixedCost::Flat { amount: waste }),
        (
            VendorCategory::Insurance,
            FixedCost::Renewal {
                amount: premium,
                step_bps,
                renewal_month,
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_duplicate_store_ids_rejected() {
        let mut config = EngineConfig::default();
        config.derived_stores[1].id = 2;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let mut config = EngineConfig::default();
        config.derived_stores[0].multiplier = 0.0;
        assert!(config.validate().is_err());
    }
}
