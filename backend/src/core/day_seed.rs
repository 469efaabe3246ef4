//! Day seed: the determinism anchor for content selection
//!
//! A day seed is a pure function of the local calendar date, encoded as
//! `year * 10000 + month * 100 + day`. It carries no time-of-day component and
//! no per-request entropy, so every caller on the same date sees the same seed.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Deterministic integer key for one calendar date
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use restaurant_synth_core_rs::DaySeed;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// assert_eq!(DaySeed::from_date(date).value(), 20250314);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySeed {
    date: NaiveDate,
}

impl DaySeed {
    /// Seed for an explicit calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Seed for today's date in the local timezone.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Integer encoding `yyyymmdd`.
    pub fn value(&self) -> u64 {
        // Years before 0 CE are outside any dashboard's range
        let year = self.date.year().max(0) as u64;
        year * 10_000 + self.date.month() as u64 * 100 + self.date.day() as u64
    }

    /// Calendar date the seed was derived from.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
