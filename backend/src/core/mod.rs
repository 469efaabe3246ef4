//! Calendar primitives shared by both generator families
//!
//! - **fiscal**: the 12-month reporting window anchored at a non-January month
//! - **day_seed**: the per-calendar-day determinism anchor

pub mod day_seed;
pub mod fiscal;

pub use day_seed::DaySeed;
pub use fiscal::{fiscal_sequence, previous_month, validate_sequence, CalendarError, FiscalMonth, FiscalYear};
