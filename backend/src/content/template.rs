//! Template interface
//!
//! A template turns a metrics snapshot into at most one feed item. Returning
//! `Ok(None)` means the activation condition is unmet; returning `Err` (or
//! panicking) is treated the same way by the selector, so one faulty template
//! never blanks the feed.

use thiserror::Error;

use super::item::ScoopItem;
use super::snapshot::MetricsSnapshot;

/// Template evaluation failures
#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Snapshot is missing metric '{0}'")]
    MissingMetric(&'static str),

    #[error("Metric '{name}' has unusable value {value}")]
    InvalidMetric { name: &'static str, value: String },
}

/// One content-generating strategy
pub trait ScoopTemplate: Send + Sync {
    /// Produce this template's item for `snapshot`, if it applies.
    ///
    /// `index` is the template's position in the template set; it feeds the
    /// item id and may be used to vary wording.
    fn evaluate(
        &self,
        snapshot: &MetricsSnapshot,
        index: usize,
    ) -> Result<Option<ScoopItem>, TemplateError>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// `"my_crate::module::MyType"` → `"MyType"`.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
