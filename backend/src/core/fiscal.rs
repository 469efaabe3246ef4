//! Fiscal month sequencing
//!
//! The reporting window is twelve consecutive calendar months starting at a
//! fixed offset month (March by default) of a reference year and wrapping into
//! January/February of the following year. Every 12-month view in the crate,
//! ledger construction and derivation included, iterates this sequence so that
//! all of them align on the same (month, year) pairs.
//!
//! # Invariants
//!
//! 1. Exactly 12 entries
//! 2. Strictly increasing chronologically
//! 3. No duplicate (month, year) pairs
//! 4. The calendar year wraps at most once

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of months in a reporting window.
pub const MONTHS_PER_FISCAL_YEAR: usize = 12;

/// Default first month of the fiscal year (March).
pub const FISCAL_START_MONTH: u32 = 3;

/// Reference year the canonical dataset is anchored to.
pub const REFERENCE_YEAR: i32 = 2025;

/// Broken fiscal sequence invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Month {month} is outside 1..=12")]
    InvalidMonth { month: u32 },

    #[error("Fiscal sequence has {len} entries, expected 12")]
    WrongLength { len: usize },

    #[error("Duplicate fiscal month {month}/{year}")]
    Duplicate { month: u32, year: i32 },

    #[error("Fiscal month at position {index} is not after its predecessor")]
    OutOfOrder { index: usize },

    #[error("Fiscal month at position {index} reports position {reported}")]
    MisnumberedPosition { index: usize, reported: usize },
}

/// One (month, year) pair plus its position in the reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalMonth {
    /// Calendar month (1-12)
    pub month: u32,

    /// Calendar year
    pub year: i32,

    /// Position 0-11 in the window
    pub index: usize,
}

impl FiscalMonth {
    /// Chronological sort key (`year * 12 + month`).
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    /// Short label such as `"Mar 2025"`.
    pub fn label(&self) -> String {
        format!("{} {}", month_abbrev(self.month), self.year)
    }
}

/// The ordered 12-month reporting window
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::core::FiscalYear;
///
/// let fy = FiscalYear::new(3, 2025);
/// assert_eq!(fy.first().month, 3);
/// assert_eq!((fy.last().month, fy.last().year), (2, 2026));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    start_month: u32,
    months: Vec<FiscalMonth>,
}

impl FiscalYear {
    /// Build the window starting at `start_month` of `year`.
    ///
    /// # Panics
    /// Panics if `start_month` is not in 1..=12. Start months are compile-time
    /// constants or validated configuration, so this is a programming error.
    pub fn new(start_month: u32, year: i32) -> Self {
        assert!(
            (1..=12).contains(&start_month),
            "start_month must be in 1..=12"
        );
        let months = fiscal_sequence(start_month, year);
        debug_assert!(
            validate_sequence(&months).is_ok(),
            "fiscal sequence violates its invariants"
        );
        Self {
            start_month,
            months,
        }
    }

    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    pub fn months(&self) -> &[FiscalMonth] {
        &self.months
    }

    pub fn first(&self) -> FiscalMonth {
        self.months[0]
    }

    pub fn last(&self) -> FiscalMonth {
        self.months[MONTHS_PER_FISCAL_YEAR - 1]
    }

    /// Fiscal month for a calendar (month, year), if inside the window.
    pub fn get(&self, month: u32, year: i32) -> Option<FiscalMonth> {
        self.months
            .iter()
            .copied()
            .find(|fm| fm.month == month && fm.year == year)
    }

    /// Position (0-11) of a calendar month of the year within the window.
    ///
    /// Every calendar month occurs exactly once in a window, so this is total
    /// for months 1..=12.
    pub fn position_of(&self, month: u32) -> Option<usize> {
        self.months.iter().position(|fm| fm.month == month)
    }

    /// The window month sharing a calendar month with `month`.
    ///
    /// Used to project "today" onto the seeded window regardless of the
    /// actual year.
    pub fn for_calendar_month(&self, month: u32) -> Option<FiscalMonth> {
        self.position_of(month).map(|i| self.months[i])
    }
}

/// Produce the ordered 12 (month, year) pairs starting at `start_month` of `year`.
///
/// Index 0 is `(start_month, year)`; index 11 is `(start_month - 1, year + 1)`
/// (or `(12, year)` when the window starts in January). Pure: equal inputs give
/// structurally equal output.
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::core::fiscal_sequence;
///
/// let seq = fiscal_sequence(3, 2025);
/// assert_eq!(seq.len(), 12);
/// assert_eq!((seq[10].month, seq[10].year), (1, 2026));
/// ```
pub fn fiscal_sequence(start_month: u32, year: i32) -> Vec<FiscalMonth> {
    (0..MONTHS_PER_FISCAL_YEAR)
        .map(|index| {
            let raw = start_month - 1 + index as u32;
            FiscalMonth {
                month: raw % 12 + 1,
                year: year + (raw / 12) as i32,
                index,
            }
        })
        .collect()
}

/// Check a sequence against the fiscal window invariants.
pub fn validate_sequence(months: &[FiscalMonth]) -> Result<(), CalendarError> {
    if months.len() != MONTHS_PER_FISCAL_YEAR {
        return Err(CalendarError::WrongLength { len: months.len() });
    }

    for (index, fm) in months.iter().enumerate() {
        if !(1..=12).contains(&fm.month) {
            return Err(CalendarError::InvalidMonth { month: fm.month });
        }
        if fm.index != index {
            return Err(CalendarError::MisnumberedPosition {
                index,
                reported: fm.index,
            });
        }
        if let Some(dup) = months[..index]
            .iter()
            .find(|prev| prev.month == fm.month && prev.year == fm.year)
        {
            return Err(CalendarError::Duplicate {
                month: dup.month,
                year: dup.year,
            });
        }
        if index > 0 && fm.ordinal() <= months[index - 1].ordinal() {
            return Err(CalendarError::OutOfOrder { index });
        }
    }

    Ok(())
}

/// Calendar month preceding `(month, year)`, wrapping January into December.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month <= 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Three-letter English month abbreviation.
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "start_month must be in 1..=12")]
    fn test_zero_start_month_panics() {
        FiscalYear::new(0, 2025);
    }

    #[test]
    fn test_january_start_never_wraps() {
        let seq = fiscal_sequence(1, 2025);
        assert!(seq.iter().all(|fm| fm.year == 2025));
        assert_eq!(seq[11].month, 12);
    }

    #[test]
    fn test_previous_month_wraps_year() {
        assert_eq!(previous_month(1, 2026), (12, 2025));
        assert_eq!(previous_month(7, 2025), (6, 2025));
    }

    #[test]
    fn test_validate_detects_duplicates() {
        let mut seq = fiscal_sequence(3, 2025);
        seq[5] = FiscalMonth { index: 5, ..seq[4] };
        assert!(matches!(
            validate_sequence(&seq),
            Err(CalendarError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_detects_short_sequence() {
        let seq = fiscal_sequence(3, 2025);
        assert_eq!(
            validate_sequence(&seq[..11]),
            Err(CalendarError::WrongLength { len: 11 })
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(FiscalYear::new(3, 2025).first().label(), "Mar 2025");
    }
}
