//! Turkey public holidays.

use super::{CountryHolidays, SubdivisionInfo};
use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;

/// Turkey public holidays.
///
/// * New Year's Day (Jan 1)
/// * National Sovereignty and Children's Day (Apr 23)
/// * Labour and Solidarity Day (May 1, from 2009)
/// * Commemoration of Atatürk, Youth and Sports Day (May 19)
/// * Democracy and National Unity Day (Jul 15, from 2017)
/// * Victory Day (Aug 30)
/// * Republic Day (Oct 29)
///
/// Ramadan and Sacrifice feasts follow the Islamic calendar and are not
/// included. Weekend holidays are not moved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turkey;

impl CountryHolidays for Turkey {
    fn name(&self) -> &'static str {
        "Turkey"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        &["TR", "TUR", "Turkey", "Türkiye", "Turkiye"]
    }

    fn subdivisions(&self) -> &'static [SubdivisionInfo] {
        &[]
    }

    fn populate(&self, year: u16, _subdivision: Option<&'static str>, set: &mut HolidaySet) -> Result<()> {
        set.insert_ymd(year, 1, 1, "New Year's Day")?;
        set.insert_ymd(year, 4, 23, "National Sovereignty and Children's Day")?;
        if year >= 2009 {
            set.insert_ymd(year, 5, 1, "Labour and Solidarity Day")?;
        }
        set.insert_ymd(year, 5, 19, "Commemoration of Atatürk, Youth and Sports Day")?;
        if year >= 2017 {
            set.insert_ymd(year, 7, 15, "Democracy and National Unity Day")?;
        }
        set.insert_ymd(year, 8, 30, "Victory Day")?;
        set.insert_ymd(year, 10, 29, "Republic Day")?;
        Ok(())
    }
}
