//! # wd-time
//!
//! Date, weekday, month, and Easter types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and `DD/MM/YYYY` parsing.
pub mod date;

/// Gregorian Easter computation.
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use easter::easter_sunday;
pub use month::Month;
pub use weekday::Weekday;
