//! Feed item model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::snapshot::MetricsSnapshot;

/// Words per minute used for the read-time estimate.
const READING_WPM: usize = 200;

/// Kind tag of a feed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoopKind {
    Trend,
    Alert,
    Insight,
    Milestone,
    CostWatch,
    Tip,
}

/// One content-feed entry
///
/// Regenerated on every call; identical for repeated calls with the same
/// (store, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoopItem {
    /// Stable id derived from (store, day seed, template index)
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ScoopKind,

    pub title: String,

    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub display_date: NaiveDate,

    /// Estimated minutes to read, at least 1
    pub read_time_minutes: u32,
}

impl ScoopItem {
    pub fn new(
        snapshot: &MetricsSnapshot,
        template_index: usize,
        kind: ScoopKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let mut item = Self {
            id: scoop_id(snapshot.store_id, snapshot.seed.value(), template_index),
            kind,
            title: title.into(),
            body: body.into(),
            detail: None,
            source: None,
            display_date: snapshot.seed.date(),
            read_time_minutes: 1,
        };
        item.read_time_minutes = item.estimate_read_time();
        item
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self.read_time_minutes = self.estimate_read_time();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn estimate_read_time(&self) -> u32 {
        let words = [Some(&self.title), Some(&self.body), self.detail.as_ref()]
            .into_iter()
            .flatten()
            .map(|text| text.split_whitespace().count())
            .sum::<usize>();
        words.div_ceil(READING_WPM).max(1) as u32
    }
}

/// UUID v5 over (store, seed, template index); stable across calls and processes.
pub fn scoop_id(store_id: u32, seed: u64, template_index: usize) -> String {
    let name = format!("scoop:{}:{}:{}", store_id, seed, template_index);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoop_id_is_stable_and_distinct() {
        assert_eq!(scoop_id(1, 20250314, 3), scoop_id(1, 20250314, 3));
        assert_ne!(scoop_id(1, 20250314, 3), scoop_id(2, 20250314, 3));
        assert_ne!(scoop_id(1, 20250314, 3), scoop_id(1, 20250315, 3));
    }
}
