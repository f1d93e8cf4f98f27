//! The `HolidayLookup` capability.

use std::sync::Arc;

use crate::holiday_set::HolidaySet;
use crate::jurisdiction::Jurisdiction;
use wd_core::errors::Result;

/// Something that can produce the public holidays of a jurisdiction.
///
/// Implementations must fail with [`wd_core::Error::Jurisdiction`] for an
/// unknown country and with [`wd_core::Error::SubdivisionMismatch`] for a
/// subdivision the country does not have. A
/// [`Subdivision::Nationwide`](crate::Subdivision::Nationwide) jurisdiction
/// must always be accepted for a known country.
pub trait HolidayLookup: std::fmt::Debug + Send + Sync {
    /// Return every holiday in `year` for `jurisdiction`.
    ///
    /// The set may also hold a few dates from the neighbouring years (for
    /// example a 31 December observance of the next New Year's Day).
    fn lookup(&self, year: u16, jurisdiction: &Jurisdiction) -> Result<HolidaySet>;
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for &T {
    fn lookup(&self, year: u16, jurisdiction: &Jurisdiction) -> Result<HolidaySet> {
        (**self).lookup(year, jurisdiction)
    }
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for Box<T> {
    fn lookup(&self, year: u16, jurisdiction: &Jurisdiction) -> Result<HolidaySet> {
        (**self).lookup(year, jurisdiction)
    }
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for Arc<T> {
    fn lookup(&self, year: u16, jurisdiction: &Jurisdiction) -> Result<HolidaySet> {
        (**self).lookup(year, jurisdiction)
    }
}
