//! Working-day counting.
//!
//! A working day is a Monday–Friday that is not a public holiday of the
//! chosen jurisdiction. The count covers the days strictly after the given
//! date up to and including the last day of its month.

use tracing::{debug, trace};

use wd_core::errors::Result;
use wd_core::Settings;
use wd_holidays::{BuiltinHolidays, HolidayLookup, HolidaySet, Jurisdiction};
use wd_time::Date;

/// Counts remaining working days using a [`HolidayLookup`] and default
/// jurisdiction [`Settings`].
#[derive(Debug, Clone)]
pub struct WorkingDaysCalculator<L = BuiltinHolidays> {
    settings: Settings,
    holidays: L,
}

impl WorkingDaysCalculator<BuiltinHolidays> {
    /// A calculator backed by the built-in holiday calendars.
    pub fn new(settings: Settings) -> Self {
        Self::with_lookup(settings, BuiltinHolidays)
    }
}

impl Default for WorkingDaysCalculator<BuiltinHolidays> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<L: HolidayLookup> WorkingDaysCalculator<L> {
    /// A calculator backed by any holiday provider.
    pub fn with_lookup(settings: Settings, holidays: L) -> Self {
        Self { settings, holidays }
    }

    /// The default jurisdiction settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Working days left in the month after `date` (`DD/MM/YYYY`), in the
    /// default country and subdivision.
    pub fn working_days(&self, date: &str) -> Result<u32> {
        self.working_days_in(
            date,
            self.settings.default_country(),
            self.settings.default_subdivision(),
        )
    }

    /// Working days left in the month after `date` (`DD/MM/YYYY`) in
    /// `country` / `subdivision`. A `subdivision` of `"None"` uses
    /// country-wide holidays only.
    ///
    /// # Errors
    /// * [`wd_core::Error::DateFormat`] if `date` is not a real `DD/MM/YYYY` date.
    /// * [`wd_core::Error::Jurisdiction`] if the country is unknown.
    /// * [`wd_core::Error::SubdivisionMismatch`] if the subdivision is not part
    ///   of the country.
    pub fn working_days_in(&self, date: &str, country: &str, subdivision: &str) -> Result<u32> {
        let given = Date::parse_dmy(date)?;
        let jurisdiction = Jurisdiction::new(country, subdivision);
        let holidays = self.holidays.lookup(given.year(), &jurisdiction)?;
        let count = count_after(given, &holidays)?;
        debug!(%jurisdiction, date, count, "counted working days");
        Ok(count)
    }
}

/// Count the weekdays after `given` through the end of its month that are
/// not in `holidays`.
pub fn count_after(given: Date, holidays: &HolidaySet) -> Result<u32> {
    let remaining = given.month_length() - given.day_of_month();
    let mut working_days = 0;
    for offset in 1..=i32::from(remaining) {
        let candidate = given.add_days(offset)?;
        if candidate.weekday().is_weekday() && !holidays.contains(candidate) {
            trace!(?candidate, "working day");
            working_days += 1;
        }
    }
    Ok(working_days)
}

/// Working days left in the month after `date` (`DD/MM/YYYY`), using the
/// built-in holiday calendars.
///
/// ```
/// let n = workingdays::calculate_working_days("02/02/2022", "GB", "England").unwrap();
/// assert_eq!(n, 18);
/// ```
pub fn calculate_working_days(date: &str, country: &str, subdivision: &str) -> Result<u32> {
    WorkingDaysCalculator::new(Settings::default()).working_days_in(date, country, subdivision)
}
