//! # wd-holidays
//!
//! Public holiday calendars keyed by year, country and subdivision.
//!
//! [`HolidayLookup`] is the capability the working-day calculation depends
//! on. [`BuiltinHolidays`] answers it from the rule-based calendars in
//! [`countries`]; [`FixedHolidays`] answers it from caller-supplied dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The built-in, rule-based provider.
pub mod builtin;

/// Country calendars.
pub mod countries;

/// Provider backed by explicit dates.
pub mod fixed;

/// `HolidaySet`: dates and names of holidays.
pub mod holiday_set;

/// `Jurisdiction` and `Subdivision` keys.
pub mod jurisdiction;

/// The `HolidayLookup` trait.
pub mod lookup;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builtin::BuiltinHolidays;
pub use countries::{CountryHolidays, SubdivisionInfo};
pub use fixed::FixedHolidays;
pub use holiday_set::HolidaySet;
pub use jurisdiction::{Jurisdiction, Subdivision};
pub use lookup::HolidayLookup;
