//! Working-day counts against the built-in calendars.

use proptest::prelude::*;

use workingdays::holidays::HolidaySet;
use workingdays::time::{days_in_month, Date};
use workingdays::{calculate_working_days, count_after, Error};

fn england(date: &str) -> u32 {
    calculate_working_days(date, "GB", "England").unwrap()
}

// ─── Literal scenarios ────────────────────────────────────────────────────────

#[test]
fn test_may_1985() {
    // 28 remaining days, 8 weekend days, May Day and the spring bank holiday
    assert_eq!(england("03/05/1985"), 18);
}

#[test]
fn test_2022() {
    assert_eq!(england("02/02/2022"), 18);
    assert_eq!(england("12/04/2022"), 11);
    assert_eq!(england("21/06/2022"), 7);
    assert_eq!(england("01/08/2022"), 21);
    assert_eq!(england("13/10/2022"), 12);
    assert_eq!(england("20/12/2022"), 6);
}

#[test]
fn test_2030s() {
    assert_eq!(england("09/01/2030"), 16);
    assert_eq!(england("06/04/2033"), 15);
    assert_eq!(england("18/05/2034"), 8);
    assert_eq!(england("01/09/2037"), 21);
    assert_eq!(england("12/11/2038"), 12);
    assert_eq!(england("27/12/2039"), 3);
}

#[test]
fn test_leap_february() {
    assert_eq!(england("14/02/2028"), 11);
}

#[test]
fn test_subdivision_changes_result() {
    assert_eq!(calculate_working_days("01/01/2023", "GB", "England"), Ok(21));
    assert_eq!(calculate_working_days("01/01/2023", "GB", "Scotland"), Ok(20));
}

#[test]
fn test_other_countries_december_2024() {
    assert_eq!(calculate_working_days("01/12/2024", "Turkey", "None"), Ok(22));
    assert_eq!(calculate_working_days("01/12/2024", "Australia", "NSW"), Ok(20));
    assert_eq!(calculate_working_days("01/12/2024", "US", "NY"), Ok(21));
}

#[test]
fn test_dates_before_1900_and_after_2199() {
    // 19 May 1850 is a Sunday
    assert_eq!(calculate_working_days("03/05/1850", "Turkey", "None"), Ok(20));
    assert_eq!(calculate_working_days("15/06/1899", "Turkey", "None"), Ok(11));
    assert_eq!(calculate_working_days("01/01/2200", "Turkey", "None"), Ok(22));
    assert_eq!(calculate_working_days("01/02/2250", "Turkey", "None"), Ok(19));
    assert!(calculate_working_days("03/05/1850", "GB", "England").is_ok());
    assert!(calculate_working_days("01/02/2250", "US", "NY").is_ok());
    assert_eq!(
        calculate_working_days("01/01/0000", "GB", "England"),
        Err(Error::date_format("01/01/0000"))
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        calculate_working_days("55/04/2023", "GB", "England"),
        Err(Error::date_format("55/04/2023"))
    );
    assert_eq!(
        calculate_working_days("1/4/2023", "GB", "England"),
        Err(Error::date_format("1/4/2023"))
    );
    assert_eq!(
        calculate_working_days("01/02/1999", "Atlantis", "None"),
        Err(Error::unknown_country("Atlantis"))
    );
    assert_eq!(
        calculate_working_days("01/02/1999", "US", "England"),
        Err(Error::subdivision_mismatch("US", "England"))
    );
}

// ─── Properties ───────────────────────────────────────────────────────────────

const JURISDICTIONS: [(&str, &str); 6] = [
    ("GB", "England"),
    ("GB", "Scotland"),
    ("US", "None"),
    ("AU", "VIC"),
    ("CA", "ON"),
    ("TR", "None"),
];

fn dmy() -> impl Strategy<Value = (u8, u8, u16)> {
    (1950u16..=2150, 1u8..=12).prop_flat_map(|(y, m)| (1..=days_in_month(y, m), Just(m), Just(y)))
}

fn any_dmy() -> impl Strategy<Value = (u8, u8, u16)> {
    (1u16..=9999, 1u8..=12).prop_flat_map(|(y, m)| (1..=days_in_month(y, m), Just(m), Just(y)))
}

/// Monday-first weekday index (Monday = 0) by Sakamoto's method.
fn weekday_index(y: u16, m: u8, d: u8) -> u32 {
    const T: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = u32::from(y) - u32::from(m < 3);
    let sunday_first = (y + y / 4 - y / 100 + y / 400 + T[usize::from(m) - 1] + u32::from(d)) % 7;
    (sunday_first + 6) % 7
}

/// Monday–Friday days after `d` in its month.
fn monday_to_friday_after(y: u16, m: u8, d: u8) -> u32 {
    let first = weekday_index(y, m, 1);
    let count = (d + 1..=days_in_month(y, m))
        .filter(|&k| (first + u32::from(k) - 1) % 7 < 5)
        .count();
    u32::try_from(count).unwrap()
}

proptest! {
    #[test]
    fn result_bounded_by_remaining_days(
        (d, m, y) in dmy(),
        j in 0..JURISDICTIONS.len(),
    ) {
        let (country, subdivision) = JURISDICTIONS[j];
        let date = format!("{d:02}/{m:02}/{y}");
        let n = calculate_working_days(&date, country, subdivision).unwrap();
        prop_assert!(n <= u32::from(days_in_month(y, m) - d));
        prop_assert_eq!(calculate_working_days(&date, country, subdivision), Ok(n));
    }

    #[test]
    fn last_day_of_month_is_zero(y in 1950u16..=2150, m in 1u8..=12, j in 0..JURISDICTIONS.len()) {
        let (country, subdivision) = JURISDICTIONS[j];
        let date = format!("{:02}/{m:02}/{y}", days_in_month(y, m));
        prop_assert_eq!(calculate_working_days(&date, country, subdivision), Ok(0));
    }

    #[test]
    fn empty_calendar_counts_monday_to_friday((d, m, y) in any_dmy()) {
        let given = Date::from_ymd(y, m, d).unwrap();
        prop_assert_eq!(
            count_after(given, &HolidaySet::new()),
            Ok(monday_to_friday_after(y, m, d))
        );
    }

    #[test]
    fn holidays_never_add_days((d, m, y) in dmy()) {
        let date = format!("{d:02}/{m:02}/{y}");
        prop_assert!(england(&date) <= monday_to_friday_after(y, m, d));
    }
}
