//! Vendor model
//!
//! A vendor is one cost-bearing relationship of one store. Vendors are seeded
//! once and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost category of a vendor
///
/// The category decides how a derived store's amounts are computed from the
/// base ledger (see [`VendorCategory::rule_kind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    FoodDistribution,
    Beverage,
    UtilitiesElectric,
    UtilitiesGas,
    UtilitiesWater,
    Insurance,
    Rent,
    ProcessingFees,
    DeliveryCommission,
    Marketing,
    CleaningSupplies,
    CleaningService,
    Software,
    WasteRemoval,
}

/// How a derived store obtains its amount for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Scaled from the base amount with a per-month jitter
    Proportional,
    /// Same amount every month, independent of the base
    FlatFee,
    /// Fixed amount that steps up once at an annual renewal month
    StepRenewal,
}

impl VendorCategory {
    /// Category → derivation rule table.
    pub fn rule_kind(&self) -> RuleKind {
        match self {
            VendorCategory::FoodDistribution
            | VendorCategory::Beverage
            | VendorCategory::UtilitiesElectric
            | VendorCategory::UtilitiesGas
            | VendorCategory::UtilitiesWater
            | VendorCategory::ProcessingFees
            | VendorCategory::DeliveryCommission
            | VendorCategory::Marketing
            | VendorCategory::CleaningSupplies => RuleKind::Proportional,
            VendorCategory::Rent
            | VendorCategory::CleaningService
            | VendorCategory::Software
            | VendorCategory::WasteRemoval => RuleKind::FlatFee,
            VendorCategory::Insurance => RuleKind::StepRenewal,
        }
    }

    pub fn is_utility(&self) -> bool {
        matches!(
            self,
            VendorCategory::UtilitiesElectric
                | VendorCategory::UtilitiesGas
                | VendorCategory::UtilitiesWater
        )
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VendorCategory::FoodDistribution => "Food Distribution",
            VendorCategory::Beverage => "Beverage",
            VendorCategory::UtilitiesElectric => "Electric",
            VendorCategory::UtilitiesGas => "Gas",
            VendorCategory::UtilitiesWater => "Water",
            VendorCategory::Insurance => "Insurance",
            VendorCategory::Rent => "Rent",
            VendorCategory::ProcessingFees => "Card Processing",
            VendorCategory::DeliveryCommission => "Delivery Commission",
            VendorCategory::Marketing => "Marketing",
            VendorCategory::CleaningSupplies => "Cleaning Supplies",
            VendorCategory::CleaningService => "Cleaning Service",
            VendorCategory::Software => "Software",
            VendorCategory::WasteRemoval => "Waste Removal",
        };
        write!(f, "{}", label)
    }
}

/// A cost-bearing relationship owned by one store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique vendor identifier
    pub id: u32,

    /// Owning store
    pub store_id: u32,

    /// Cost category
    pub category: VendorCategory,

    /// Display name
    pub name: String,
}

impl Vendor {
    pub fn new(id: u32, store_id: u32, category: VendorCategory, name: impl Into<String>) -> Self {
        Self {
            id,
            store_id,
            category,
            name: name.into(),
        }
    }
}
