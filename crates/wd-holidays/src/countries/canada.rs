//! Canada public holidays.

use super::{CountryHolidays, SubdivisionInfo};
use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;
use wd_time::{easter_sunday, Date, Weekday};

static SUBDIVISIONS: [SubdivisionInfo; 13] = [
    SubdivisionInfo::new("AB", &["Alberta"]),
    SubdivisionInfo::new("BC", &["British Columbia"]),
    SubdivisionInfo::new("MB", &["Manitoba"]),
    SubdivisionInfo::new("NB", &["New Brunswick"]),
    SubdivisionInfo::new("NL", &["Newfoundland and Labrador"]),
    SubdivisionInfo::new("NS", &["Nova Scotia"]),
    SubdivisionInfo::new("NT", &["Northwest Territories"]),
    SubdivisionInfo::new("NU", &["Nunavut"]),
    SubdivisionInfo::new("ON", &["Ontario"]),
    SubdivisionInfo::new("PE", &["Prince Edward Island"]),
    SubdivisionInfo::new("QC", &["Quebec"]),
    SubdivisionInfo::new("SK", &["Saskatchewan"]),
    SubdivisionInfo::new("YT", &["Yukon"]),
];

/// Canada public holidays.
///
/// National:
/// * New Year's Day (Jan 1)
/// * Good Friday
/// * Canada Day (Jul 1)
/// * Labour Day (1st Mon in Sep)
/// * Christmas Day (Dec 25)
///
/// Provinces and territories add Family Day and its regional namesakes,
/// Victoria Day, civic holidays, Thanksgiving, Remembrance Day and Boxing
/// Day where they are statutory.
///
/// Weekend holidays are observed on the next free weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

impl CountryHolidays for Canada {
    fn name(&self) -> &'static str {
        "Canada"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        &["CA", "CAN", "Canada"]
    }

    fn subdivisions(&self) -> &'static [SubdivisionInfo] {
        &SUBDIVISIONS
    }

    fn populate(&self, year: u16, subdivision: Option<&'static str>, set: &mut HolidaySet) -> Result<()> {
        let prov = subdivision.unwrap_or_default();
        let mut movable: Vec<(Date, &str)> = Vec::new();

        movable.push((set.insert_ymd(year, 1, 1, "New Year's Day")?, "New Year's Day"));

        // Third Monday of February, under a different name per province
        let february = match prov {
            "AB" if year >= 1990 => Some("Family Day"),
            "SK" if year >= 2007 => Some("Family Day"),
            "ON" if year >= 2008 => Some("Family Day"),
            "NB" if year >= 2018 => Some("Family Day"),
            "BC" if year >= 2019 => Some("Family Day"),
            "MB" if year >= 2008 => Some("Louis Riel Day"),
            "PE" if year >= 2009 => Some("Islander Day"),
            "NS" if year >= 2015 => Some("Heritage Day"),
            _ => None,
        };
        if let Some(name) = february {
            set.insert(Date::nth_weekday(3, Weekday::Monday, year, 2)?, name);
        } else if prov == "BC" && (2013..=2018).contains(&year) {
            set.insert(Date::nth_weekday(2, Weekday::Monday, year, 2)?, "Family Day");
        }

        let easter = easter_sunday(year)?;
        set.insert(easter.add_days(-2)?, "Good Friday");
        if prov == "QC" {
            set.insert(easter.add_days(1)?, "Easter Monday");
        }

        // Monday preceding May 25
        if !matches!(prov, "" | "NB" | "NL" | "NS" | "PE") {
            let victoria = Date::from_ymd(year, 5, 18)?.next_weekday_on_or_after(Weekday::Monday)?;
            let name = if prov == "QC" && year >= 2003 {
                "National Patriots' Day"
            } else {
                "Victoria Day"
            };
            set.insert(victoria, name);
        }

        if prov == "QC" {
            movable.push((
                set.insert_ymd(year, 6, 24, "Saint Jean Baptiste Day")?,
                "Saint Jean Baptiste Day",
            ));
        }
        if prov == "NT" || (prov == "YT" && year >= 2017) {
            set.insert_ymd(year, 6, 21, "National Aboriginal Day")?;
        }

        let canada_day = if year >= 1983 { "Canada Day" } else { "Dominion Day" };
        movable.push((set.insert_ymd(year, 7, 1, canada_day)?, canada_day));

        // First Monday of August
        let august = match prov {
            "BC" => Some("British Columbia Day"),
            "NB" => Some("New Brunswick Day"),
            "SK" => Some("Saskatchewan Day"),
            "NT" | "NU" => Some("Civic Holiday"),
            _ => None,
        };
        if let Some(name) = august {
            set.insert(Date::nth_weekday(1, Weekday::Monday, year, 8)?, name);
        }
        if prov == "YT" {
            set.insert(Date::nth_weekday(3, Weekday::Monday, year, 8)?, "Discovery Day");
        }

        set.insert(Date::nth_weekday(1, Weekday::Monday, year, 9)?, "Labour Day");

        if !matches!(prov, "" | "NB" | "NL" | "NS" | "PE") {
            set.insert(Date::nth_weekday(2, Weekday::Monday, year, 10)?, "Thanksgiving");
        }

        if matches!(prov, "AB" | "BC" | "NB" | "NL" | "NT" | "NU" | "PE" | "SK" | "YT") {
            movable.push((
                set.insert_ymd(year, 11, 11, "Remembrance Day")?,
                "Remembrance Day",
            ));
        }

        movable.push((set.insert_ymd(year, 12, 25, "Christmas Day")?, "Christmas Day"));
        if prov == "ON" {
            movable.push((set.insert_ymd(year, 12, 26, "Boxing Day")?, "Boxing Day"));
        }

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
        Canada.populate(year, subdivision, &mut set).unwrap();
        set
    }

    #[test]
    fn ontario_2024() {
        let set = holidays(2024, Some("ON"));
        for d in [
            date(2024, 1, 1),
            date(2024, 2, 19),
            date(2024, 3, 29),
            date(2024, 5, 20),
            date(2024, 7, 1),
            date(2024, 9, 2),
            date(2024, 10, 14),
            date(2024, 12, 25),
            date(2024, 12, 26),
        ] {
            assert!(set.contains(d), "{d:?} missing");
        }
        assert!(!set.contains(date(2024, 11, 11)));
    }

    #[test]
    fn victoria_day_is_monday_before_may_25() {
        // 2021-05-24 is a Monday, so it is Victoria Day itself
        assert!(holidays(2021, Some("AB")).contains(date(2021, 5, 24)));
        // 2025-05-25 is a Sunday
        assert!(holidays(2025, Some("AB")).contains(date(2025, 5, 19)));
    }

    #[test]
    fn canada_day_on_sunday_observed_monday() {
        // 2018-07-01 is a Sunday
        assert!(holidays(2018, None).contains(date(2018, 7, 2)));
    }

    #[test]
    fn quebec_names_and_extras() {
        let set = holidays(2024, Some("QC"));
        assert_eq!(set.name(date(2024, 5, 20)), Some("National Patriots' Day"));
        assert!(set.contains(date(2024, 6, 24)));
        assert!(set.contains(date(2024, 4, 1)));
    }
}
