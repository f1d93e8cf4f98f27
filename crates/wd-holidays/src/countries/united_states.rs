//! United States public holidays.

use super::{CountryHolidays, SubdivisionInfo};
use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;
use wd_time::{Date, Weekday};

static SUBDIVISIONS: [SubdivisionInfo; 51] = [
    SubdivisionInfo::new("AK", &["Alaska"]),
    SubdivisionInfo::new("AL", &["Alabama"]),
    SubdivisionInfo::new("AR", &["Arkansas"]),
    SubdivisionInfo::new("AZ", &["Arizona"]),
    SubdivisionInfo::new("CA", &["California"]),
    SubdivisionInfo::new("CO", &["Colorado"]),
    SubdivisionInfo::new("CT", &["Connecticut"]),
    SubdivisionInfo::new("DC", &["District of Columbia"]),
    SubdivisionInfo::new("DE", &["Delaware"]),
    SubdivisionInfo::new("FL", &["Florida"]),
    SubdivisionInfo::new("GA", &["Georgia"]),
    SubdivisionInfo::new("HI", &["Hawaii"]),
    SubdivisionInfo::new("IA", &["Iowa"]),
    SubdivisionInfo::new("ID", &["Idaho"]),
    SubdivisionInfo::new("IL", &["Illinois"]),
    SubdivisionInfo::new("IN", &["Indiana"]),
    SubdivisionInfo::new("KS", &["Kansas"]),
    SubdivisionInfo::new("KY", &["Kentucky"]),
    SubdivisionInfo::new("LA", &["Louisiana"]),
    SubdivisionInfo::new("MA", &["Massachusetts"]),
    SubdivisionInfo::new("MD", &["Maryland"]),
    SubdivisionInfo::new("ME", &["Maine"]),
    SubdivisionInfo::new("MI", &["Michigan"]),
    SubdivisionInfo::new("MN", &["Minnesota"]),
    SubdivisionInfo::new("MO", &["Missouri"]),
    SubdivisionInfo::new("MS", &["Mississippi"]),
    SubdivisionInfo::new("MT", &["Montana"]),
    SubdivisionInfo::new("NC", &["North Carolina"]),
    SubdivisionInfo::new("ND", &["North Dakota"]),
    SubdivisionInfo::new("NE", &["Nebraska"]),
    SubdivisionInfo::new("NH", &["New Hampshire"]),
    SubdivisionInfo::new("NJ", &["New Jersey"]),
    SubdivisionInfo::new("NM", &["New Mexico"]),
    SubdivisionInfo::new("NV", &["Nevada"]),
    SubdivisionInfo::new("NY", &["New York"]),
    SubdivisionInfo::new("OH", &["Ohio"]),
    SubdivisionInfo::new("OK", &["Oklahoma"]),
    SubdivisionInfo::new("OR", &["Oregon"]),
    SubdivisionInfo::new("PA", &["Pennsylvania"]),
    SubdivisionInfo::new("RI", &["Rhode Island"]),
    SubdivisionInfo::new("SC", &["South Carolina"]),
    SubdivisionInfo::new("SD", &["South Dakota"]),
    SubdivisionInfo::new("TN", &["Tennessee"]),
    SubdivisionInfo::new("TX", &["Texas"]),
    SubdivisionInfo::new("UT", &["Utah"]),
    SubdivisionInfo::new("VA", &["Virginia"]),
    SubdivisionInfo::new("VT", &["Vermont"]),
    SubdivisionInfo::new("WA", &["Washington"]),
    SubdivisionInfo::new("WI", &["Wisconsin"]),
    SubdivisionInfo::new("WV", &["West Virginia"]),
    SubdivisionInfo::new("WY", &["Wyoming"]),
];

/// United States public holidays.
///
/// Federal holidays:
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Washington's Birthday (3rd Mon in Feb from 1971; Feb 22 before)
/// * Memorial Day (last Mon in May from 1971; May 30 before)
/// * Juneteenth (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct from 1971; Oct 12 before)
/// * Veterans Day (Nov 11; 4th Mon in Oct from 1971 to 1977)
/// * Thanksgiving (4th Thu in Nov)
/// * Christmas Day (Dec 25)
///
/// Fixed-date holidays on a Saturday are observed the Friday before, on a
/// Sunday the Monday after. California, Massachusetts, New York and Texas
/// add their state holidays; every other state uses the federal list.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl CountryHolidays for UnitedStates {
    fn name(&self) -> &'static str {
        "United States"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        &["US", "USA", "United States", "United States of America", "America"]
    }

    fn subdivisions(&self) -> &'static [SubdivisionInfo] {
        &SUBDIVISIONS
    }

    fn populate(&self, year: u16, subdivision: Option<&'static str>, set: &mut HolidaySet) -> Result<()> {
        fixed(set, year, 1, 1, "New Year's Day")?;
        // Next year's New Year's Day on a Saturday is observed on 31 December.
        if year < Date::MAX_YEAR {
            let next = Date::from_ymd(year + 1, 1, 1)?;
            if next.weekday() == Weekday::Saturday {
                set.insert(next.add_days(-1)?, "New Year's Day (observed)");
            }
        }

        if year >= 1986 {
            set.insert(
                Date::nth_weekday(3, Weekday::Monday, year, 1)?,
                "Martin Luther King Jr. Day",
            );
        }

        if year >= 1971 {
            set.insert(
                Date::nth_weekday(3, Weekday::Monday, year, 2)?,
                "Washington's Birthday",
            );
            set.insert(Date::last_weekday(Weekday::Monday, year, 5)?, "Memorial Day");
        } else {
            fixed(set, year, 2, 22, "Washington's Birthday")?;
            fixed(set, year, 5, 30, "Memorial Day")?;
        }

        if year >= 2021 {
            fixed(set, year, 6, 19, "Juneteenth National Independence Day")?;
        }
        fixed(set, year, 7, 4, "Independence Day")?;
        set.insert(Date::nth_weekday(1, Weekday::Monday, year, 9)?, "Labor Day");

        if year >= 1971 {
            set.insert(Date::nth_weekday(2, Weekday::Monday, year, 10)?, "Columbus Day");
        } else if year >= 1937 {
            fixed(set, year, 10, 12, "Columbus Day")?;
        }

        if (1971..=1977).contains(&year) {
            set.insert(Date::nth_weekday(4, Weekday::Monday, year, 10)?, "Veterans Day");
        } else if year >= 1938 {
            fixed(set, year, 11, 11, "Veterans Day")?;
        }

        let thanksgiving = Date::nth_weekday(4, Weekday::Thursday, year, 11)?;
        set.insert(thanksgiving, "Thanksgiving");
        fixed(set, year, 12, 25, "Christmas Day")?;

        match subdivision {
            Some("CA") => {
                if year >= 1995 {
                    fixed(set, year, 3, 31, "Cesar Chavez Day")?;
                }
                if year >= 1975 {
                    set.insert(thanksgiving.add_days(1)?, "Day After Thanksgiving");
                }
            }
            Some("MA") if year >= 1969 => {
                set.insert(
                    Date::nth_weekday(3, Weekday::Monday, year, 4)?,
                    "Patriots' Day",
                );
            }
            Some("NY") => {
                fixed(set, year, 2, 12, "Lincoln's Birthday")?;
            }
            Some("TX") => {
                set.insert_ymd(year, 1, 19, "Confederate Heroes Day")?;
                set.insert_ymd(year, 3, 2, "Texas Independence Day")?;
                set.insert_ymd(year, 4, 21, "San Jacinto Day")?;
                if year >= 1980 {
                    set.insert_ymd(year, 6, 19, "Emancipation Day In Texas")?;
                }
                if year >= 1973 {
                    set.insert_ymd(year, 8, 27, "Lyndon Baines Johnson Day")?;
                }
                if year >= 1975 {
                    set.insert(thanksgiving.add_days(1)?, "Day After Thanksgiving");
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Add a fixed-date holiday together with its Friday/Monday observance.
fn fixed(set: &mut HolidaySet, year: u16, month: u8, day: u8, name: &str) -> Result<()> {
    let date = set.insert_ymd(year, month, day, name)?;
    set.observe_nearest_weekday(date, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holidays(year: u16, subdivision: Option<&'static str>) -> HolidaySet {
        let mut set = HolidaySet::new();
        UnitedStates.populate(year, subdivision, &mut set).unwrap();
        set
    }

    #[test]
    fn federal_2024() {
        let set = holidays(2024, None);
        for d in [
            date(2024, 1, 1),
            date(2024, 1, 15),
            date(2024, 2, 19),
            date(2024, 5, 27),
            date(2024, 6, 19),
            date(2024, 7, 4),
            date(2024, 9, 2),
            date(2024, 10, 14),
            date(2024, 11, 11),
            date(2024, 11, 28),
            date(2024, 12, 25),
        ] {
            assert!(set.contains(d), "{d:?} missing");
        }
    }

    #[test]
    fn saturday_new_year_observed_on_previous_december_31() {
        // 2022-01-01 is a Saturday
        let set = holidays(2021, None);
        assert!(set.contains(date(2021, 12, 31)));
        // Christmas 2021 on Saturday → Friday 24th
        assert!(set.contains(date(2021, 12, 24)));
    }

    #[test]
    fn sunday_holiday_moves_to_monday() {
        // 2023-01-01 is a Sunday; 2023-06-19 a Monday
        let set = holidays(2023, None);
        assert!(set.contains(date(2023, 1, 2)));
    }

    #[test]
    fn state_additions() {
        assert!(holidays(2024, Some("NY")).contains(date(2024, 2, 12)));
        assert!(!holidays(2024, Some("FL")).contains(date(2024, 2, 12)));
        assert!(holidays(2024, Some("MA")).contains(date(2024, 4, 15)));
        assert!(holidays(2024, Some("CA")).contains(date(2024, 11, 29)));
        assert!(holidays(2024, Some("TX")).contains(date(2024, 8, 27)));
    }

    #[test]
    fn no_juneteenth_before_2021() {
        assert!(!holidays(2020, None).contains(date(2020, 6, 19)));
    }
}
