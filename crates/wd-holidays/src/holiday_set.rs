//! `HolidaySet`: the public holidays of one jurisdiction.

use std::collections::BTreeMap;

use wd_core::errors::Result;
use wd_time::{Date, Weekday};

/// A set of holiday dates, each carrying a display name.
///
/// Sets are built per lookup and never shared between calculations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday. A second holiday on the same date is appended to the
    /// existing name with `"; "`.
    pub fn insert(&mut self, date: Date, name: impl Into<String>) {
        let name = name.into();
        self.days
            .entry(date)
            .and_modify(|existing| {
                if !existing.split("; ").any(|n| n == name) {
                    existing.push_str("; ");
                    existing.push_str(&name);
                }
            })
            .or_insert(name);
    }

    /// Add a holiday given as year / month / day.
    pub fn insert_ymd(&mut self, year: u16, month: u8, day: u8, name: &str) -> Result<Date> {
        let date = Date::from_ymd(year, month, day)?;
        self.insert(date, name);
        Ok(date)
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.days.contains_key(&date)
    }

    /// Return the name of the holiday on `date`, if any.
    pub fn name(&self, date: Date) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Return `true` if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over `(date, name)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.days.iter().map(|(d, n)| (*d, n.as_str()))
    }

    /// Keep only holidays falling in `year`.
    pub fn retain_year(&mut self, year: u16) {
        self.days.retain(|d, _| d.year() == year);
    }

    /// Merge every holiday of `other` into this set.
    pub fn extend(&mut self, other: &HolidaySet) {
        for (date, name) in other.iter() {
            self.insert(date, name);
        }
    }

    // ── Weekend observance ────────────────────────────────────────────────────

    /// If `date` falls on a weekend, add an "(observed)" holiday on the next
    /// weekday that is not already a holiday.
    ///
    /// Call this only after every fixed holiday near `date` has been
    /// inserted, otherwise the substitute may land on one of them.
    pub fn observe_next_free_weekday(&mut self, date: Date, name: &str) -> Result<()> {
        if date.weekday().is_weekday() {
            return Ok(());
        }
        let mut substitute = date.add_days(1)?;
        while substitute.weekday().is_weekend() || self.contains(substitute) {
            substitute = substitute.add_days(1)?;
        }
        self.insert(substitute, format!("{name} (observed)"));
        Ok(())
    }

    /// If `date` falls on a Saturday add an "(observed)" holiday on the Friday
    /// before; on a Sunday, on the Monday after.
    pub fn observe_nearest_weekday(&mut self, date: Date, name: &str) -> Result<()> {
        let shift = match date.weekday() {
            Weekday::Saturday => -1,
            Weekday::Sunday => 1,
            _ => return Ok(()),
        };
        self.insert(date.add_days(shift)?, format!("{name} (observed)"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn same_day_names_are_joined_once() {
        let mut set = HolidaySet::new();
        set.insert(date(2022, 6, 3), "Platinum Jubilee");
        set.insert(date(2022, 6, 3), "Platinum Jubilee");
        set.insert(date(2022, 6, 3), "Extra");
        assert_eq!(set.len(), 1);
        assert_eq!(set.name(date(2022, 6, 3)), Some("Platinum Jubilee; Extra"));
    }

    #[test]
    fn next_free_weekday_skips_existing_holidays() {
        // 2022: Christmas on Sunday, Boxing Day on Monday
        let mut set = HolidaySet::new();
        let christmas = set.insert_ymd(2022, 12, 25, "Christmas Day").unwrap();
        let boxing = set.insert_ymd(2022, 12, 26, "Boxing Day").unwrap();
        set.observe_next_free_weekday(christmas, "Christmas Day").unwrap();
        set.observe_next_free_weekday(boxing, "Boxing Day").unwrap();
        assert_eq!(set.name(date(2022, 12, 27)), Some("Christmas Day (observed)"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn saturday_and_sunday_pair_roll_to_monday_and_tuesday() {
        // 2021: Christmas on Saturday, Boxing Day on Sunday
        let mut set = HolidaySet::new();
        let christmas = set.insert_ymd(2021, 12, 25, "Christmas Day").unwrap();
        let boxing = set.insert_ymd(2021, 12, 26, "Boxing Day").unwrap();
        set.observe_next_free_weekday(christmas, "Christmas Day").unwrap();
        set.observe_next_free_weekday(boxing, "Boxing Day").unwrap();
        assert!(set.contains(date(2021, 12, 27)));
        assert!(set.contains(date(2021, 12, 28)));
    }

    #[test]
    fn nearest_weekday_moves_saturday_back() {
        // 2021-12-25 is a Saturday
        let mut set = HolidaySet::new();
        let christmas = set.insert_ymd(2021, 12, 25, "Christmas Day").unwrap();
        set.observe_nearest_weekday(christmas, "Christmas Day").unwrap();
        assert!(set.contains(date(2021, 12, 24)));
        // 2022-12-25 is a Sunday
        let christmas = set.insert_ymd(2022, 12, 25, "Christmas Day").unwrap();
        set.observe_nearest_weekday(christmas, "Christmas Day").unwrap();
        assert!(set.contains(date(2022, 12, 26)));
    }

    #[test]
    fn weekday_holidays_are_not_observed_elsewhere() {
        let mut set = HolidaySet::new();
        let d = set.insert_ymd(2024, 12, 25, "Christmas Day").unwrap();
        set.observe_next_free_weekday(d, "Christmas Day").unwrap();
        set.observe_nearest_weekday(d, "Christmas Day").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn retain_year_drops_spill_over() {
        let mut set = HolidaySet::new();
        set.insert(date(2021, 12, 31), "New Year's Day (observed)");
        set.insert(date(2022, 1, 3), "New Year's Day (observed)");
        set.retain_year(2022);
        assert_eq!(set.iter().map(|(d, _)| d).collect::<Vec<_>>(), vec![date(2022, 1, 3)]);
    }
}
