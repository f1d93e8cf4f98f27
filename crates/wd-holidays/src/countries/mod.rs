//! Built-in country holiday calendars.
//!
//! Each country is a unit struct implementing [`CountryHolidays`]. The
//! calendars list public holidays, not exchange or settlement closures.

use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;

/// Australia and its states and territories.
pub mod australia;
/// Canada and its provinces and territories.
pub mod canada;
/// Turkey.
pub mod turkey;
/// United Kingdom and its four nations.
pub mod united_kingdom;
/// United States and its states.
pub mod united_states;

pub use australia::Australia;
pub use canada::Canada;
pub use turkey::Turkey;
pub use united_kingdom::UnitedKingdom;
pub use united_states::UnitedStates;

/// A subdivision a country calendar knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdivisionInfo {
    /// ISO 3166-2 code without the country prefix (e.g. `"ENG"`).
    pub code: &'static str,
    /// Other accepted spellings (e.g. `"England"`).
    pub names: &'static [&'static str],
}

impl SubdivisionInfo {
    pub(crate) const fn new(code: &'static str, names: &'static [&'static str]) -> Self {
        Self { code, names }
    }

    /// Return `true` if `input` names this subdivision.
    pub fn matches(&self, input: &str) -> bool {
        let key = normalize(input);
        normalize(self.code) == key || self.names.iter().any(|n| normalize(n) == key)
    }
}

/// A country's public holiday rules.
pub trait CountryHolidays: std::fmt::Debug + Send + Sync {
    /// English name of the country.
    fn name(&self) -> &'static str;

    /// Identifiers this country answers to: ISO codes and English names.
    fn identifiers(&self) -> &'static [&'static str];

    /// Subdivisions with their own holiday rules. Empty if the country has
    /// none.
    fn subdivisions(&self) -> &'static [SubdivisionInfo];

    /// Add every holiday of `year` to `set`. `subdivision` is a code from
    /// [`CountryHolidays::subdivisions`], or `None` for country-wide
    /// holidays.
    fn populate(&self, year: u16, subdivision: Option<&'static str>, set: &mut HolidaySet) -> Result<()>;

    /// Return `true` if `input` identifies this country.
    fn is_identified_by(&self, input: &str) -> bool {
        let key = normalize(input);
        self.identifiers().iter().any(|id| normalize(id) == key)
    }

    /// Resolve a subdivision code or name to its canonical code.
    fn resolve_subdivision(&self, input: &str) -> Option<&'static str> {
        self.subdivisions()
            .iter()
            .find(|s| s.matches(input))
            .map(|s| s.code)
    }
}

/// Case-fold and drop separators so that `"Northern Ireland"`,
/// `"northern_ireland"` and `"NorthernIreland"` compare equal.
pub(crate) fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}
