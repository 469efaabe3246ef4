//! Per-category derivation rules
//!
//! A derived store's amount for a vendor is computed by one of three rules,
//! chosen by the vendor's category (see [`VendorCategory::rule_kind`]):
//!
//! 1. **Proportional with jitter**: `round(base * multiplier * (1 + jitter(i)))`
//! 2. **Flat fee**: the same configured amount every month
//! 3. **Step renewal**: a configured amount that increases once, at the renewal
//!    month, and holds the new value for the rest of the window
//!
//! All rules are pure functions of their parameters and the fiscal position.

use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use crate::core::{FiscalMonth, FiscalYear};
use crate::engine::StoreProfile;
use crate::models::{round_to_whole_units, RuleKind, VendorCategory};

/// Total width of the jitter band (±1%).
pub const JITTER_SPAN: f64 = 0.02;

/// Per-ordinal increment added to a store's multiplier.
pub const VENDOR_MULTIPLIER_STEP: f64 = 0.008;

/// Deterministic monthly perturbation, a pure function of the fiscal position.
///
/// `0.02 * ((i * 7) mod 5) / 5 - 0.01`, always within `[-0.01, 0.01]`.
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::ledger::jitter;
///
/// assert!((jitter(0) + 0.01).abs() < 1e-12);
/// ```
pub fn jitter(month_index: usize) -> f64 {
    JITTER_SPAN * ((month_index * 7) % 5) as f64 / 5.0 - JITTER_SPAN / 2.0
}

/// Multiplier for the vendor at `vendor_ordinal` in a store scaled by `store_multiplier`.
pub fn vendor_multiplier(store_multiplier: f64, vendor_ordinal: usize) -> f64 {
    store_multiplier + (vendor_ordinal % 7) as f64 * VENDOR_MULTIPLIER_STEP
}

/// Fixed-cost parameters a store configures for a non-proportional category
///
/// Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FixedCost {
    /// Constant monthly fee
    Flat { amount: i64 },

    /// Monthly premium stepping up by `step_bps` basis points from `renewal_month`
    Renewal {
        amount: i64,
        step_bps: i64,
        renewal_month: u32,
    },
}

/// A resolved rule for one derived vendor
#[derive(Debug, Clone, PartialEq)]
pub enum DerivationRule {
    ProportionalWithJitter { multiplier: f64 },
    FlatFee { amount: i64 },
    StepRenewal {
        amount: i64,
        renewed_amount: i64,
        renewal_index: usize,
    },
}

impl DerivationRule {
    /// Resolve the rule for the base vendor at `vendor_ordinal` in `profile`'s store.
    pub fn resolve(
        category: VendorCategory,
        vendor_ordinal: usize,
        profile: &StoreProfile,
        fiscal: &FiscalYear,
    ) -> Result<Self, LedgerError> {
        let fixed = profile.fixed_costs.get(&category);

        match (category.rule_kind(), fixed) {
            (RuleKind::Proportional, _) => Ok(DerivationRule::ProportionalWithJitter {
                multiplier: vendor_multiplier(profile.multiplier, vendor_ordinal),
            }),
            (RuleKind::FlatFee, Some(FixedCost::Flat { amount })) => {
                Ok(DerivationRule::FlatFee { amount: *amount })
            }
            (
                RuleKind::StepRenewal,
                Some(FixedCost::Renewal {
                    amount,
                    step_bps,
                    renewal_month,
                }),
            ) => {
                let renewal_index = fiscal
                    .position_of(*renewal_month)
                    .ok_or(LedgerError::InvalidRenewalMonth {
                        month: *renewal_month,
                    })?;
                if renewal_index == 0 {
                    return Err(LedgerError::RenewalAtWindowStart {
                        store_id: profile.id,
                        month: *renewal_month,
                    });
                }
                let renewed_amount =
                    round_to_whole_units(*amount as f64 * (10_000 + step_bps) as f64 / 10_000.0);
                if *step_bps <= 0 || renewed_amount <= *amount {
                    return Err(LedgerError::NonIncreasingRenewal {
                        store_id: profile.id,
                        step_bps: *step_bps,
                    });
                }
                Ok(DerivationRule::StepRenewal {
                    amount: *amount,
                    renewed_amount,
                    renewal_index,
                })
            }
            (_, None) => Err(LedgerError::MissingFixedCost {
                store_id: profile.id,
                category,
            }),
            (_, Some(_)) => Err(LedgerError::MismatchedFixedCost {
                store_id: profile.id,
                category,
            }),
        }
    }

    /// Derived amount (cents) for a month whose base amount is `base_amount`.
    pub fn amount_for(&self, base_amount: i64, fm: &FiscalMonth) -> i64 {
        match self {
            DerivationRule::ProportionalWithJitter { multiplier } => round_to_whole_units(
                base_amount as f64 * multiplier * (1.0 + jitter(fm.index)),
            ),
            DerivationRule::FlatFee { amount } => *amount,
            DerivationRule::StepRenewal {
                amount,
                renewed_amount,
                renewal_index,
            } => {
                if fm.index >= *renewal_index {
                    *renewed_amount
                } else {
                    *amount
                }
            }
        }
    }

    /// Note for the derived entry at `fm`, if the rule marks that month.
    pub fn note_for(&self, fm: &FiscalMonth) -> Option<String> {
        match self {
            DerivationRule::StepRenewal {
                amount,
                renewed_amount,
                renewal_index,
            } if fm.index == *renewal_index && *amount > 0 => {
                let pct = (*renewed_amount - *amount) as f64 / *amount as f64 * 100.0;
                Some(format!("Annual policy renewal (+{:.0}%)", pct))
            }
            _ => None,
        }
    }
}
