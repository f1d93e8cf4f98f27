//! The built-in holiday provider.

use tracing::debug;

use crate::countries::{Australia, Canada, CountryHolidays, Turkey, UnitedKingdom, UnitedStates};
use crate::holiday_set::HolidaySet;
use crate::jurisdiction::{Jurisdiction, Subdivision};
use crate::lookup::HolidayLookup;
use wd_core::errors::{Error, Result};

static COUNTRIES: [&dyn CountryHolidays; 5] = [&UnitedKingdom, &UnitedStates, &Australia, &Canada, &Turkey];

/// Holiday lookup backed by the calendars in [`crate::countries`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHolidays;

impl BuiltinHolidays {
    /// Every country this provider knows.
    pub fn countries(&self) -> &'static [&'static dyn CountryHolidays] {
        &COUNTRIES
    }

    /// Resolve a country code or name.
    pub fn country(&self, identifier: &str) -> Option<&'static dyn CountryHolidays> {
        COUNTRIES
            .iter()
            .copied()
            .find(|c| c.is_identified_by(identifier))
    }
}

impl HolidayLookup for BuiltinHolidays {
    fn lookup(&self, year: u16, jurisdiction: &Jurisdiction) -> Result<HolidaySet> {
        let country = self
            .country(jurisdiction.country())
            .ok_or_else(|| Error::unknown_country(jurisdiction.country()))?;

        let code = match jurisdiction.subdivision() {
            Subdivision::Nationwide => None,
            Subdivision::Named(name) => Some(
                country
                    .resolve_subdivision(name)
                    .ok_or_else(|| Error::subdivision_mismatch(jurisdiction.country(), name.as_str()))?,
            ),
        };

        let mut set = HolidaySet::new();
        country.populate(year, code, &mut set)?;
        debug!(
            country = country.name(),
            subdivision = code.unwrap_or("-"),
            year,
            holidays = set.len(),
            "built holiday set"
        );
        Ok(set)
    }
}
