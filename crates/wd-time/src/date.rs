//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch, which makes
//! weekday computation and day stepping plain integer arithmetic.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday); earlier dates have serials
//!   of zero or below.
//! * The valid date range is 0001-01-01 to 9999-12-31, the years a
//!   four-digit `YYYY` field can name.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// A proleptic Gregorian calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(serial_from_ymd(Self::MIN_YEAR, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(Self::MAX_YEAR, 12, 31));

    /// Earliest supported year.
    pub const MIN_YEAR: u16 = 1;

    /// Latest supported year.
    pub const MAX_YEAR: u16 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year),
            "year {year} out of range [{}, {}]",
            Self::MIN_YEAR,
            Self::MAX_YEAR
        );
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        let days_in = days_in_month(year, month);
        ensure!(
            day != 0 && day <= days_in,
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a `DD/MM/YYYY` string.
    ///
    /// The day and month must be two zero-padded digits and the year four
    /// digits. Anything else, including a well-formed string naming a day
    /// that does not exist, yields [`Error::DateFormat`].
    pub fn parse_dmy(input: &str) -> Result<Self> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'/',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(Error::date_format(input));
        }
        // All ten bytes are ASCII, so slicing on these offsets is safe.
        let day = input[0..2].parse::<u8>();
        let month = input[3..5].parse::<u8>();
        let year = input[6..10].parse::<u16>();
        match (day, month, year) {
            (Ok(d), Ok(m), Ok(y)) => Date::from_ymd(y, m, d).map_err(|_| Error::date_format(input)),
            _ => Err(Error::date_format(input)),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        Weekday::from_days_from_monday((self.0 - 1).rem_euclid(7) as u8)
    }

    /// Return the number of days in this date's month.
    pub fn month_length(&self) -> u8 {
        let (y, m, _) = self.ymd();
        days_in_month(y, m)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "date arithmetic: result {serial} out of range"
        );
        Ok(Date(serial))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!(n != 0, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.days_from_monday() as i32 - first.weekday().days_from_monday() as i32)
            .rem_euclid(7) as u8;
        let day = 1 + skip + 7 * (n - 1);
        ensure!(
            day <= days_in_month(year, month),
            "nth_weekday: {n}-th {weekday:?} does not exist in {year}-{month:02}"
        );
        Date::from_ymd(year, month, day)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`.
    pub fn last_weekday(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let back = (last.weekday().days_from_monday() as i32 - weekday.days_from_monday() as i32)
            .rem_euclid(7);
        last.add_days(-back)
    }

    /// Return the first `weekday` on or after this date.
    pub fn next_weekday_on_or_after(self, weekday: Weekday) -> Result<Self> {
        let ahead = (weekday.days_from_monday() as i32 - self.weekday().days_from_monday() as i32)
            .rem_euclid(7);
        self.add_days(ahead)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_dmy(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        match Month::from_number(m) {
            Some(mon) => write!(f, "{d} {mon} {y}"),
            None => write!(f, "{d:02}/{m:02}/{y:04}"),
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year, or 0 for a month outside 1–12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Serial number of 1970-01-01, the origin of the civil-day arithmetic.
const UNIX_EPOCH_SERIAL: i32 = 25_568;

/// Convert (year, month, day) to a serial number.
///
/// Counts days in 400-year eras of 146 097 days, with years starting on
/// 1 March so the leap day falls at the end of the year.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year as i32 - 1 } else { year as i32 };
    let era = y / 400;
    let year_of_era = y - era * 400;
    let month_from_march = (month as i32 + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day as i32 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    };
    let year = year_of_era + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
