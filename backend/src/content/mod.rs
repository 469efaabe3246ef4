//! Daily content feed ("scoops")
//!
//! Pipeline for one store and one calendar date:
//!
//! 1. `snapshot`: deterministic metrics for (store, day seed), including facts
//!    read from the store's cost ledger
//! 2. `template`/`templates`: each template turns the snapshot into at most one
//!    item, or nothing when its activation condition is unmet
//! 3. `selector`: drops empty and failed templates, shuffles the survivors with
//!    the day seed and truncates to the feed size
//!
//! Same (store, date) → same ordered feed, from any caller.

pub mod item;
pub mod selector;
pub mod snapshot;
pub mod template;
pub mod templates;

pub use item::{ScoopItem, ScoopKind};
pub use selector::{DailyContentSelector, DEFAULT_MAX_ITEMS};
pub use snapshot::{CostMover, MetricsSnapshot, RenewalNotice};
pub use template::{ScoopTemplate, TemplateError};
pub use templates::standard_templates;
