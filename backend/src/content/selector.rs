//! Daily content selection
//!
//! Evaluate every template → drop "no item" and failures → shuffle the
//! survivors with the day seed → truncate. The shuffle seed depends only on the
//! date, so every store on the same date uses the same permutation stream.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::item::ScoopItem;
use super::snapshot::MetricsSnapshot;
use super::template::ScoopTemplate;
use super::templates::standard_templates;
use crate::rng::shuffle;

/// Default number of items in a feed.
pub const DEFAULT_MAX_ITEMS: usize = 5;

/// Orchestrates template evaluation, shuffling and truncation
pub struct DailyContentSelector {
    templates: Vec<Box<dyn ScoopTemplate>>,
    max_items: usize,
}

impl DailyContentSelector {
    /// Selector over a custom template set.
    ///
    /// # Panics
    /// Panics if `max_items` is zero.
    pub fn new(templates: Vec<Box<dyn ScoopTemplate>>, max_items: usize) -> Self {
        assert!(max_items > 0, "max_items must be positive");
        Self {
            templates,
            max_items,
        }
    }

    /// Selector over [`standard_templates`].
    pub fn standard(max_items: usize) -> Self {
        Self::new(standard_templates(), max_items)
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Every item the templates produce for `snapshot`, in template order.
    ///
    /// A template that returns an error or panics contributes nothing.
    pub fn evaluate(&self, snapshot: &MetricsSnapshot) -> Vec<ScoopItem> {
        self.templates
            .iter()
            .enumerate()
            .filter_map(|(index, template)| evaluate_guarded(template.as_ref(), snapshot, index))
            .collect()
    }

    /// The day's feed: surviving items shuffled by the day seed, truncated to
    /// `max_items`.
    pub fn select(&self, snapshot: &MetricsSnapshot) -> Vec<ScoopItem> {
        let candidates = self.evaluate(snapshot);
        let candidate_count = candidates.len();

        let mut feed = shuffle(&candidates, snapshot.seed.value());
        feed.truncate(self.max_items);

        debug!(
            store_id = snapshot.store_id,
            seed = snapshot.seed.value(),
            candidates = candidate_count,
            selected = feed.len(),
            "selected daily content"
        );
        feed
    }
}

fn evaluate_guarded(
    template: &dyn ScoopTemplate,
    snapshot: &MetricsSnapshot,
    index: usize,
) -> Option<ScoopItem> {
    match panic::catch_unwind(AssertUnwindSafe(|| template.evaluate(snapshot, index))) {
        Ok(Ok(item)) => item,
        Ok(Err(e)) => {
            warn!(template = template.name(), error = %e, "template failed, skipping");
            None
        }
        Err(_) => {
            warn!(template = template.name(), "template panicked, skipping");
            None
        }
    }
}
