//! Per-store daily metrics snapshot
//!
//! Operational numbers are drawn from the store's baseline with an LCG seeded
//! by (day seed, store id); ledger facts come from the store's cost ledger for
//! the fiscal month that shares today's calendar month. Nothing here reads the
//! clock: the snapshot is a pure function of its inputs.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::{DaySeed, FiscalMonth, FiscalYear};
use crate::engine::StoreBaseline;
use crate::ledger::CostLedger;
use crate::models::{Store, VendorCategory};
use crate::rng::Lcg;

/// Largest month-over-month vendor cost change for a store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostMover {
    pub vendor_name: String,
    pub category: VendorCategory,
    pub amount: i64,
    pub prior_amount: i64,
    pub change_pct: f64,
}

/// An insurance premium step found in the store's ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenewalNotice {
    pub vendor_name: String,
    pub fiscal_month: FiscalMonth,
    pub amount: i64,
    pub prior_amount: i64,
}

/// Metrics a template can read
///
/// Money values are i64 cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub store_id: u32,
    pub store_name: String,
    pub seed: DaySeed,

    pub net_sales: i64,
    pub prior_week_sales: i64,
    pub guest_count: u32,
    pub average_check: i64,
    pub prior_average_check: i64,

    pub labor_pct: f64,
    pub labor_target_pct: f64,
    pub food_cost_pct: f64,
    pub food_cost_target_pct: f64,
    pub waste_pct: f64,
    pub delivery_share_pct: f64,

    pub new_reviews: u32,
    pub review_rating: f64,
    pub top_item: Option<String>,
    pub top_item_units: u32,
    /// Busiest hour of the day, 24h clock
    pub peak_hour: u32,

    /// Fiscal month sharing today's calendar month
    pub ledger_month: Option<FiscalMonth>,
    pub top_cost_mover: Option<CostMover>,
    pub utility_total: i64,
    pub utility_prior_total: i64,
    pub insurance_renewal: Option<RenewalNotice>,
}

impl MetricsSnapshot {
    /// Build the snapshot for `store` on the date behind `seed`.
    pub fn build(
        store: &Store,
        baseline: &StoreBaseline,
        ledger: &CostLedger,
        fiscal: &FiscalYear,
        seed: DaySeed,
    ) -> Self {
        let mut rng = Lcg::new(
            seed.value()
                .wrapping_mul(31)
                .wrapping_add(store.id as u64 * 1_000_003),
        );

        let net_sales = scale(baseline.avg_daily_sales, rng.between(0.85, 1.18));
        let prior_week_sales = scale(baseline.avg_daily_sales, rng.between(0.88, 1.12));
        let average_check = scale(baseline.avg_check, rng.between(0.93, 1.08));
        let prior_average_check = scale(baseline.avg_check, rng.between(0.95, 1.05));
        let guest_count = if average_check > 0 {
            (net_sales / average_check) as u32
        } else {
            0
        };

        let labor_pct = round1(baseline.labor_target_pct + rng.between(-3.5, 4.5));
        let food_cost_pct = round1(baseline.food_cost_target_pct + rng.between(-2.5, 3.5));
        let waste_pct = round1(rng.between(1.2, 4.8));
        let delivery_share_pct = round1(rng.between(8.0, 32.0));

        let new_reviews = rng.below(14) as u32;
        let review_rating = round1(rng.between(3.8, 4.9));
        let top_item = if baseline.signature_items.is_empty() {
            None
        } else {
            let i = rng.below(baseline.signature_items.len() as u64) as usize;
            Some(baseline.signature_items[i].clone())
        };
        let top_item_units = 18 + rng.below(60) as u32;
        let peak_hour = 11 + rng.below(9) as u32;

        let ledger_month = fiscal.for_calendar_month(seed.date().month());
        let (top_cost_mover, utility_total, utility_prior_total) = match ledger_month {
            Some(fm) => ledger_facts(store.id, ledger, fm),
            None => (None, 0, 0),
        };

        Self {
            store_id: store.id,
            store_name: store.name.clone(),
            seed,
            net_sales,
            prior_week_sales,
            guest_count,
            average_check,
            prior_average_check,
            labor_pct,
            labor_target_pct: baseline.labor_target_pct,
            food_cost_pct,
            food_cost_target_pct: baseline.food_cost_target_pct,
            waste_pct,
            delivery_share_pct,
            new_reviews,
            review_rating,
            top_item,
            top_item_units,
            peak_hour,
            ledger_month,
            top_cost_mover,
            utility_total,
            utility_prior_total,
            insurance_renewal: find_renewal(store.id, ledger, fiscal),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.seed.date()
    }
}

fn scale(cents: i64, factor: f64) -> i64 {
    (cents as f64 * factor).round() as i64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn ledger_facts(store_id: u32, ledger: &CostLedger, fm: FiscalMonth) -> (Option<CostMover>, i64, i64) {
    let summary = ledger.monthly_summary(store_id, fm.month, fm.year);

    let top_cost_mover = summary
        .iter()
        .filter(|line| line.prior_amount > 0)
        .max_by(|a, b| a.change_pct.abs().total_cmp(&b.change_pct.abs()))
        .map(|line| CostMover {
            vendor_name: line.vendor.name.clone(),
            category: line.vendor.category,
            amount: line.amount,
            prior_amount: line.prior_amount,
            change_pct: line.change_pct,
        });

    let (utility_total, utility_prior_total) = summary
        .iter()
        .filter(|line| line.vendor.category.is_utility())
        .fold((0, 0), |(now, prior), line| {
            (now + line.amount, prior + line.prior_amount)
        });

    (top_cost_mover, utility_total, utility_prior_total)
}

/// First month in the window where the store's insurance premium rises.
fn find_renewal(store_id: u32, ledger: &CostLedger, fiscal: &FiscalYear) -> Option<RenewalNotice> {
    let vendor = ledger
        .vendors_for_store(store_id)
        .into_iter()
        .find(|v| v.category == VendorCategory::Insurance)?;

    fiscal.months().windows(2).find_map(|pair| {
        let prior_amount = ledger.cost_for_month(vendor.id, pair[0].month, pair[0].year);
        let amount = ledger.cost_for_month(vendor.id, pair[1].month, pair[1].year);
        (prior_amount > 0 && amount > prior_amount).then(|| RenewalNotice {
            vendor_name: vendor.name.clone(),
            fiscal_month: pair[1],
            amount,
            prior_amount,
        })
    })
}
