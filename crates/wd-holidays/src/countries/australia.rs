//! Australia public holidays.

use super::{CountryHolidays, SubdivisionInfo};
use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;
use wd_time::{easter_sunday, Date, Weekday};

static SUBDIVISIONS: [SubdivisionInfo; 8] = [
    SubdivisionInfo::new("ACT", &["Australian Capital Territory"]),
    SubdivisionInfo::new("NSW", &["New South Wales"]),
    SubdivisionInfo::new("NT", &["Northern Territory"]),
    SubdivisionInfo::new("QLD", &["Queensland"]),
    SubdivisionInfo::new("SA", &["South Australia"]),
    SubdivisionInfo::new("TAS", &["Tasmania"]),
    SubdivisionInfo::new("VIC", &["Victoria"]),
    SubdivisionInfo::new("WA", &["Western Australia"]),
];

/// Australia public holidays.
///
/// National:
/// * New Year's Day (Jan 1)
/// * Australia Day (Jan 26)
/// * Good Friday, Easter Monday
/// * Anzac Day (Apr 25)
/// * Christmas Day, Boxing Day
///
/// States and territories add Easter Saturday/Sunday, Labour Day, the
/// sovereign's birthday and their own days (Canberra Day, Melbourne Cup,
/// Adelaide Cup, Western Australia Day, Picnic Day, …).
///
/// New Year's Day, Australia Day, Christmas and Boxing Day falling on a
/// weekend are observed on the next free weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Australia;

impl CountryHolidays for Australia {
    fn name(&self) -> &'static str {
        "Australia"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        &["AU", "AUS", "Australia"]
    }

    fn subdivisions(&self) -> &'static [SubdivisionInfo] {
        &SUBDIVISIONS
    }

    fn populate(&self, year: u16, subdivision: Option<&'static str>, set: &mut HolidaySet) -> Result<()> {
        let state = subdivision.unwrap_or_default();
        let mut movable: Vec<(Date, &str)> = Vec::new();

        movable.push((set.insert_ymd(year, 1, 1, "New Year's Day")?, "New Year's Day"));
        if year >= 1935 {
            movable.push((set.insert_ymd(year, 1, 26, "Australia Day")?, "Australia Day"));
        }

        let easter = easter_sunday(year)?;
        set.insert(easter.add_days(-2)?, "Good Friday");
        if matches!(state, "ACT" | "NSW" | "NT" | "QLD" | "SA" | "VIC") {
            set.insert(easter.add_days(-1)?, "Easter Saturday");
        }
        if matches!(state, "ACT" | "NSW" | "VIC") {
            set.insert(easter, "Easter Sunday");
        }
        set.insert(easter.add_days(1)?, "Easter Monday");

        if year >= 1921 {
            set.insert_ymd(year, 4, 25, "Anzac Day")?;
        }

        // Labour Day
        match state {
            "ACT" | "NSW" | "SA" => {
                set.insert(Date::nth_weekday(1, Weekday::Monday, year, 10)?, "Labour Day");
            }
            "QLD" if (2013..=2015).contains(&year) => {
                set.insert(Date::nth_weekday(1, Weekday::Monday, year, 10)?, "Labour Day");
            }
            "QLD" => {
                set.insert(Date::nth_weekday(1, Weekday::Monday, year, 5)?, "Labour Day");
            }
            "NT" => {
                set.insert(Date::nth_weekday(1, Weekday::Monday, year, 5)?, "May Day");
            }
            "VIC" => {
                set.insert(Date::nth_weekday(2, Weekday::Monday, year, 3)?, "Labour Day");
            }
            "TAS" => {
                set.insert(Date::nth_weekday(2, Weekday::Monday, year, 3)?, "Eight Hours Day");
            }
            "WA" => {
                set.insert(Date::nth_weekday(1, Weekday::Monday, year, 3)?, "Labour Day");
            }
            _ => {}
        }

        // Sovereign's birthday
        if !state.is_empty() {
            let name = if year >= 2023 {
                "King's Birthday"
            } else {
                "Queen's Birthday"
            };
            let date = match state {
                "QLD" if year >= 2016 => Date::nth_weekday(1, Weekday::Monday, year, 10)?,
                "WA" => Date::last_weekday(Weekday::Monday, year, 9)?,
                _ => Date::nth_weekday(2, Weekday::Monday, year, 6)?,
            };
            set.insert(date, name);
        }

        match state {
            "ACT" => {
                if year >= 2008 {
                    set.insert(Date::nth_weekday(2, Weekday::Monday, year, 3)?, "Canberra Day");
                }
                if year >= 2018 {
                    let reconciliation = Date::from_ymd(year, 5, 27)?.next_weekday_on_or_after(Weekday::Monday)?;
                    set.insert(reconciliation, "Reconciliation Day");
                }
            }
            "NT" => {
                set.insert(Date::nth_weekday(1, Weekday::Monday, year, 8)?, "Picnic Day");
            }
            "SA" if year >= 2006 => {
                set.insert(Date::nth_weekday(2, Weekday::Monday, year, 3)?, "Adelaide Cup Day");
            }
            "VIC" => {
                set.insert(Date::nth_weekday(1, Weekday::Tuesday, year, 11)?, "Melbourne Cup Day");
            }
            "WA" => {
                set.insert(
                    Date::nth_weekday(1, Weekday::Monday, year, 6)?,
                    "Western Australia Day",
                );
            }
            _ => {}
        }

        movable.push((set.insert_ymd(year, 12, 25, "Christmas Day")?, "Christmas Day"));
        let boxing = if state == "SA" {
            "Proclamation Day"
        } else {
            "Boxing Day"
        };
        movable.push((set.insert_ymd(year, 12, 26, boxing)?, boxing));

        for (date, name) in movable {
            set.observe_next_free_weekday(date, name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holidays(year: u16, subdivision: Option<&'static str>) -> HolidaySet {
        let mut set = HolidaySet::new();
        Australia.populate(year, subdivision, &mut set).unwrap();
        set
    }

    #[test]
    fn nsw_2024_december() {
        let set = holidays(2024, Some("NSW"));
        assert!(set.contains(date(2024, 12, 25)));
        assert!(set.contains(date(2024, 12, 26)));
        assert!(set.contains(date(2024, 10, 7)));
        assert!(set.contains(date(2024, 6, 10)));
    }

    #[test]
    fn good_friday_and_easter_2023() {
        let set = holidays(2023, Some("VIC"));
        assert!(set.contains(date(2023, 4, 7)));
        assert!(set.contains(date(2023, 4, 8)));
        assert!(set.contains(date(2023, 4, 9)));
        assert!(set.contains(date(2023, 4, 10)));
        assert!(set.contains(date(2023, 11, 7)));
        assert!(set.contains(date(2023, 3, 13)));
    }

    #[test]
    fn christmas_on_weekend_adjusted() {
        // 2021: Dec 25 = Saturday, Dec 26 = Sunday
        let set = holidays(2021, None);
        assert!(set.contains(date(2021, 12, 27)));
        assert!(set.contains(date(2021, 12, 28)));
    }

    #[test]
    fn australia_day_on_sunday_moves_to_monday() {
        // 2025-01-26 is a Sunday
        assert!(holidays(2025, None).contains(date(2025, 1, 27)));
    }

    #[test]
    fn queensland_kings_birthday_in_october() {
        let set = holidays(2023, Some("QLD"));
        assert_eq!(set.name(date(2023, 10, 2)), Some("King's Birthday"));
        assert!(set.contains(date(2023, 5, 1)));
    }

    #[test]
    fn nationwide_has_no_state_days() {
        let set = holidays(2024, None);
        assert!(!set.contains(date(2024, 6, 10)));
        assert!(!set.contains(date(2024, 3, 30)));
        assert!(set.contains(date(2024, 4, 25)));
    }
}
