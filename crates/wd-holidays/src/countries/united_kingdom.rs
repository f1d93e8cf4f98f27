//! United Kingdom public holidays.

use super::{CountryHolidays, SubdivisionInfo};
use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;
use wd_time::{easter_sunday, Date, Weekday};

const ENGLAND: &str = "ENG";
const NORTHERN_IRELAND: &str = "NIR";
const SCOTLAND: &str = "SCT";
const WALES: &str = "WLS";

static SUBDIVISIONS: [SubdivisionInfo; 4] = [
    SubdivisionInfo::new(ENGLAND, &["England"]),
    SubdivisionInfo::new(NORTHERN_IRELAND, &["Northern Ireland"]),
    SubdivisionInfo::new(SCOTLAND, &["Scotland"]),
    SubdivisionInfo::new(WALES, &["Wales"]),
];

/// One-off bank holidays proclaimed for royal and national events.
const SPECIAL_DAYS: [(u16, u8, u8, &str); 9] = [
    (1977, 6, 7, "Silver Jubilee of Elizabeth II"),
    (1981, 7, 29, "Wedding of Charles and Diana"),
    (1999, 12, 31, "Millennium Celebrations"),
    (2002, 6, 3, "Golden Jubilee of Elizabeth II"),
    (2011, 4, 29, "Wedding of William and Catherine"),
    (2012, 6, 5, "Diamond Jubilee of Elizabeth II"),
    (2022, 6, 3, "Platinum Jubilee of Elizabeth II"),
    (2022, 9, 19, "State Funeral of Queen Elizabeth II"),
    (2023, 5, 8, "Coronation of Charles III"),
];

/// United Kingdom bank holidays.
///
/// Country-wide:
/// * New Year's Day (Jan 1, from 1974)
/// * Good Friday
/// * Early May Bank Holiday (1st Mon in May from 1978; May 8 in 1995 and 2020)
/// * Spring Bank Holiday (last Mon in May from 1971; moved in jubilee years)
/// * Christmas Day, Boxing Day
/// * one-off royal holidays
///
/// England, Wales and Northern Ireland add Easter Monday and the Late Summer
/// Bank Holiday (last Mon in Aug). Scotland adds 2 January, the Summer Bank
/// Holiday (1st Mon in Aug) and St Andrew's Day. Northern Ireland adds
/// St Patrick's Day and the Battle of the Boyne.
///
/// A holiday falling on a weekend is observed on the next free weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl CountryHolidays for UnitedKingdom {
    fn name(&self) -> &'static str {
        "United Kingdom"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        &["GB", "UK", "GBR", "United Kingdom", "Great Britain"]
    }

    fn subdivisions(&self) -> &'static [SubdivisionInfo] {
        &SUBDIVISIONS
    }

    fn populate(&self, year: u16, subdivision: Option<&'static str>, set: &mut HolidaySet) -> Result<()> {
        let scotland = subdivision == Some(SCOTLAND);
        let northern_ireland = subdivision == Some(NORTHERN_IRELAND);
        let outside_scotland = matches!(subdivision, Some(ENGLAND | WALES | NORTHERN_IRELAND));

        let mut movable: Vec<(Date, &str)> = Vec::new();

        if year >= 1974 || scotland {
            movable.push((set.insert_ymd(year, 1, 1, "New Year's Day")?, "New Year's Day"));
        }
        if scotland {
            movable.push((set.insert_ymd(year, 1, 2, "New Year Holiday")?, "New Year Holiday"));
        }
        if northern_ireland {
            movable.push((set.insert_ymd(year, 3, 17, "St Patrick's Day")?, "St Patrick's Day"));
        }

        let easter = easter_sunday(year)?;
        set.insert(easter.add_days(-2)?, "Good Friday");
        if outside_scotland {
            set.insert(easter.add_days(1)?, "Easter Monday");
        }

        if year >= 1978 {
            let may_day = match year {
                1995 | 2020 => Date::from_ymd(year, 5, 8)?,
                _ => Date::nth_weekday(1, Weekday::Monday, year, 5)?,
            };
            set.insert(may_day, "May Day");
        }

        if year >= 1971 {
            let spring = match year {
                1977 => Date::from_ymd(year, 6, 6)?,
                2002 | 2012 => Date::from_ymd(year, 6, 4)?,
                2022 => Date::from_ymd(year, 6, 2)?,
                _ => Date::last_weekday(Weekday::Monday, year, 5)?,
            };
            set.insert(spring, "Spring Bank Holiday");

            if scotland {
                set.insert(
                    Date::nth_weekday(1, Weekday::Monday, year, 8)?,
                    "Summer Bank Holiday",
                );
            } else if outside_scotland {
                set.insert(
                    Date::last_weekday(Weekday::Monday, year, 8)?,
                    "Late Summer Bank Holiday",
                );
            }
        }

        if northern_ireland {
            movable.push((
                set.insert_ymd(year, 7, 12, "Battle of the Boyne")?,
                "Battle of the Boyne",
            ));
        }
        if scotland && year >= 2007 {
            movable.push((set.insert_ymd(year, 11, 30, "St Andrew's Day")?, "St Andrew's Day"));
        }

        movable.push((set.insert_ymd(year, 12, 25, "Christmas Day")?, "Christmas Day"));
        movable.push((set.insert_ymd(year, 12, 26, "Boxing Day")?, "Boxing Day"));

        for (y, m, d, name) in SPECIAL_DAYS {
            if y == year {
                set.insert_ymd(y, m, d, name)?;
            }
        }

        for (date, name) in movable {
            set.observe_next_free_weekday(date, name)?;
        }
        Ok(())
    }
}
