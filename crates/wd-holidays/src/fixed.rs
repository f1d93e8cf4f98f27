//! Fixed holiday provider, with holidays supplied by the caller.

use std::collections::HashMap;

use crate::holiday_set::HolidaySet;
use crate::jurisdiction::{Jurisdiction, Subdivision};
use crate::lookup::HolidayLookup;
use wd_core::errors::{Error, Result};
use wd_time::Date;

#[derive(Debug, Clone, Default)]
struct CountryEntry {
    nationwide: HolidaySet,
    subdivisions: HashMap<String, HolidaySet>,
}

/// A [`HolidayLookup`] holding explicit dates instead of rules.
///
/// Country and subdivision identifiers are matched exactly.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidays {
    countries: HashMap<String, CountryEntry>,
}

impl FixedHolidays {
    /// Create a provider that knows no countries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `country` with no holidays.
    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.entry(country.to_owned()).or_default();
        self
    }

    /// Register `subdivision` of `country` (and the country itself).
    pub fn with_subdivision(mut self, country: &str, subdivision: &str) -> Self {
        self.countries
            .entry(country.to_owned())
            .or_default()
            .subdivisions
            .entry(subdivision.to_owned())
            .or_default();
        self
    }

    /// Add a holiday observed across all of `country`.
    pub fn with_holiday(mut self, country: &str, date: Date, name: &str) -> Self {
        self.countries
            .entry(country.to_owned())
            .or_default()
            .nationwide
            .insert(date, name);
        self
    }

    /// Add a holiday observed only in `subdivision` of `country`.
    pub fn with_regional_holiday(mut self, country: &str, subdivision: &str, date: Date, name: &str) -> Self {
        self.countries
            .entry(country.to_owned())
            .or_default()
            .subdivisions
            .entry(subdivision.to_owned())
            .or_default()
            .insert(date, name);
        self
    }
}

impl HolidayLookup for FixedHolidays {
    fn lookup(&self, year: u16, jurisdiction: &Jurisdiction) -> Result<HolidaySet> {
        let entry = self
            .countries
            .get(jurisdiction.country())
            .ok_or_else(|| Error::unknown_country(jurisdiction.country()))?;

        let mut set = entry.nationwide.clone();
        if let Subdivision::Named(name) = jurisdiction.subdivision() {
            let regional = entry
                .subdivisions
                .get(name)
                .ok_or_else(|| Error::subdivision_mismatch(jurisdiction.country(), name.as_str()))?;
            set.extend(regional);
        }
        set.retain_year(year);
        Ok(set)
    }
}
