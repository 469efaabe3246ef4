//! Dashboard dataset facade
//!
//! `DashboardData` owns the fiscal window, the complete cost ledger and the
//! content selector. It is built once and only read afterwards, so a single
//! instance can be shared by any number of concurrent callers without locking.
//!
//! # Lifecycle
//!
//! [`DashboardData::shared`] builds the canonical dataset on first use and
//! keeps it for the lifetime of the process. There is no invalidation path;
//! a restart rebuilds identical data.

use std::sync::OnceLock;

use chrono::NaiveDate;
use tracing::info;

use super::config::{EngineConfig, EngineError};
use super::fingerprint::ledger_fingerprint;
use crate::content::{DailyContentSelector, MetricsSnapshot, ScoopItem};
use crate::core::{validate_sequence, DaySeed, FiscalYear};
use crate::ledger::{build_base_section, CostLedger, DerivedLedgerGenerator, MonthlySummaryLine};
use crate::models::{CostEntry, Store, Vendor};

static SHARED: OnceLock<DashboardData> = OnceLock::new();

/// Read-only synthetic dataset: ledgers plus the daily content feed
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::DashboardData;
///
/// let data = DashboardData::shared();
/// let vendors = data.vendors_for_store(2);
/// assert!(!vendors.is_empty());
/// assert!(data.vendors_for_store(999).is_empty());
/// ```
pub struct DashboardData {
    config: EngineConfig,
    fiscal: FiscalYear,
    ledger: CostLedger,
    selector: DailyContentSelector,
}

impl DashboardData {
    /// Build the dataset described by `config`.
    ///
    /// # Errors
    /// Fails on invalid configuration or when a generated ledger breaks its
    /// invariants (duplicate keys, incomplete derivation).
    pub fn build(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let fiscal = FiscalYear::new(config.fiscal_start_month, config.reference_year);
        validate_sequence(fiscal.months())?;

        let base = build_base_section(
            Store::base(config.base_store.id, config.base_store.name.clone()),
            &fiscal,
        );
        let derived = {
            let generator = DerivedLedgerGenerator::new(&base, &fiscal);
            config
                .derived_stores
                .iter()
                .map(|profile| generator.derive(profile))
                .collect::<Result<Vec<_>, _>>()?
        };
        let ledger = CostLedger::from_sections(std::iter::once(base).chain(derived))?;

        info!(
            stores = ledger.stores().len(),
            vendors = ledger.vendors().len(),
            entries = ledger.entries().len(),
            first_month = %fiscal.first().label(),
            "built dashboard dataset"
        );

        let selector = DailyContentSelector::standard(config.max_feed_items);
        Ok(Self {
            config,
            fiscal,
            ledger,
            selector,
        })
    }

    /// The canonical dataset, built on first access.
    ///
    /// # Panics
    /// Panics if the default configuration fails to build. That can only
    /// happen if the seed tables or generators are broken.
    pub fn shared() -> &'static DashboardData {
        SHARED.get_or_init(|| match Self::build(EngineConfig::default()) {
            Ok(data) => data,
            Err(e) => panic!("canonical dataset violates its invariants: {}", e),
        })
    }

    /// Replace the content selector (custom template sets).
    pub fn with_selector(mut self, selector: DailyContentSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fiscal_year(&self) -> &FiscalYear {
        &self.fiscal
    }

    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    pub fn stores(&self) -> &[Store] {
        self.ledger.stores()
    }

    // ========================================================================
    // Content feed
    // ========================================================================

    /// Today's feed for `store_id`. Empty for unknown stores.
    pub fn daily_content(&self, store_id: u32) -> Vec<ScoopItem> {
        self.daily_content_on(store_id, DaySeed::today().date())
    }

    /// The feed `store_id` sees on `date`.
    pub fn daily_content_on(&self, store_id: u32, date: NaiveDate) -> Vec<ScoopItem> {
        match self.snapshot(store_id, DaySeed::from_date(date)) {
            Some(snapshot) => self.selector.select(&snapshot),
            None => Vec::new(),
        }
    }

    /// Metrics snapshot for `store_id` on the date behind `seed`.
    pub fn snapshot(&self, store_id: u32, seed: DaySeed) -> Option<MetricsSnapshot> {
        let store = self.ledger.store(store_id)?;
        let profile = self.config.profile(store_id)?;
        Some(MetricsSnapshot::build(
            store,
            &profile.baseline,
            &self.ledger,
            &self.fiscal,
            seed,
        ))
    }

    // ========================================================================
    // Ledger queries
    // ========================================================================

    pub fn vendors_for_store(&self, store_id: u32) -> Vec<&Vendor> {
        self.ledger.vendors_for_store(store_id)
    }

    pub fn cost_history(&self, vendor_id: u32) -> Vec<&CostEntry> {
        self.ledger.cost_history(vendor_id)
    }

    pub fn cost_for_month(&self, vendor_id: u32, month: u32, year: i32) -> i64 {
        self.ledger.cost_for_month(vendor_id, month, year)
    }

    pub fn monthly_summary(&self, store_id: u32, month: u32, year: i32) -> Vec<MonthlySummaryLine> {
        self.ledger.monthly_summary(store_id, month, year)
    }

    /// SHA-256 fingerprint of the whole ledger.
    pub fn fingerprint(&self) -> Result<String, EngineError> {
        ledger_fingerprint(&self.ledger)
    }
}
