use super::util::{iter_days_from, n_days_after, n_days_before, WeekdayExt};
use super::OutOfTimeError;
use std::fmt;
use time::{Date, Month};

/// A calendar month, used as the navigation cursor of a picker.
///
/// Only months whose whole padded grid (from the Sunday on or before the
/// first of the month through the Saturday on or after the last of the month)
/// lies within the representable range of [`Date`] can be constructed, so
/// every `YearMonth` can be turned into a complete grid.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
    // `first` must remain the first field so that the derived `Ord` sorts
    // chronologically.
    first: Date,
    last: Date,
    grid_start: Date,
    grid_end: Date,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Result<YearMonth, OutOfTimeError> {
        let first = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        YearMonth::from_first(first).ok_or(OutOfTimeError)
    }

    /// Returns the month containing `date`
    pub fn containing(date: Date) -> Result<YearMonth, OutOfTimeError> {
        let first = date.replace_day(1).map_err(|_| OutOfTimeError)?;
        YearMonth::from_first(first).ok_or(OutOfTimeError)
    }

    fn from_first(first: Date) -> Option<YearMonth> {
        let last = iter_days_from(first)
            .take_while(|d| d.month() == first.month())
            .last()?;
        let grid_start = n_days_before(first, first.weekday().index0())?;
        let grid_end = n_days_after(last, 6 - last.weekday().index0())?;
        Some(YearMonth {
            first,
            last,
            grid_start,
            grid_end,
        })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> Month {
        self.first.month()
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    pub fn last_day(&self) -> Date {
        self.last
    }

    /// The Sunday on or before the first of the month
    pub fn grid_start(&self) -> Date {
        self.grid_start
    }

    /// The Saturday on or after the last of the month
    pub fn grid_end(&self) -> Date {
        self.grid_end
    }

    pub fn contains(&self, date: Date) -> bool {
        self.first <= date && date <= self.last
    }

    /// Returns `true` if this month comes strictly before the month containing
    /// `date`
    pub fn is_before_month_of(&self, date: Date) -> bool {
        self.last < date
    }

    /// Returns `true` if this month comes strictly after the month containing
    /// `date`
    pub fn is_after_month_of(&self, date: Date) -> bool {
        date < self.first
    }

    /// Returns the following month, or `None` if its grid would extend past
    /// the end of time
    pub fn next(&self) -> Option<YearMonth> {
        YearMonth::from_first(self.last.next_day()?)
    }

    /// Returns the preceding month, or `None` if its grid would extend past
    /// the beginning of time
    pub fn previous(&self) -> Option<YearMonth> {
        let last_of_previous = self.first.previous_day()?;
        YearMonth::from_first(last_of_previous.replace_day(1).ok()?)
    }

    /// Returns the date in this month with the given day of the month, clamped
    /// to the last day of the month.  Used to carry a cursor between months of
    /// different lengths.
    pub fn clamped_day(&self, day: u8) -> Date {
        self.first
            .replace_day(day.clamp(1, self.last.day()))
            .unwrap_or(self.last)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_march_2024() {
        let ym = YearMonth::new(2024, Month::March).unwrap();
        assert_eq!(ym.first_day(), date!(2024 - 03 - 01));
        assert_eq!(ym.last_day(), date!(2024 - 03 - 31));
        assert_eq!(ym.grid_start(), date!(2024 - 02 - 25));
        assert_eq!(ym.grid_end(), date!(2024 - 04 - 06));
        assert_eq!(ym.to_string(), "March 2024");
    }

    #[test]
    fn test_february_leap_year() {
        let ym = YearMonth::containing(date!(2024 - 02 - 14)).unwrap();
        assert_eq!(ym.last_day(), date!(2024 - 02 - 29));
        let ym = YearMonth::containing(date!(2023 - 02 - 14)).unwrap();
        assert_eq!(ym.last_day(), date!(2023 - 02 - 28));
    }

    #[test]
    fn test_no_padding_needed() {
        // February 2015 starts on a Sunday and ends on a Saturday
        let ym = YearMonth::new(2015, Month::February).unwrap();
        assert_eq!(ym.grid_start(), ym.first_day());
        assert_eq!(ym.grid_end(), ym.last_day());
    }

    #[test]
    fn test_next_and_previous_across_year() {
        let ym = YearMonth::new(2024, Month::December).unwrap();
        let next = ym.next().unwrap();
        assert_eq!((next.year(), next.month()), (2025, Month::January));
        assert_eq!(next.previous(), Some(ym));
        assert!(ym < next);
    }

    #[test]
    fn test_contains() {
        let ym = YearMonth::new(2024, Month::March).unwrap();
        assert!(ym.contains(date!(2024 - 03 - 01)));
        assert!(ym.contains(date!(2024 - 03 - 31)));
        assert!(!ym.contains(date!(2024 - 02 - 29)));
        assert!(!ym.contains(date!(2024 - 04 - 01)));
    }

    #[test]
    fn test_relative_to_date() {
        let ym = YearMonth::new(2024, Month::March).unwrap();
        assert!(ym.is_before_month_of(date!(2024 - 04 - 01)));
        assert!(!ym.is_before_month_of(date!(2024 - 03 - 31)));
        assert!(!ym.is_before_month_of(date!(2024 - 02 - 01)));
        assert!(ym.is_after_month_of(date!(2024 - 02 - 29)));
        assert!(!ym.is_after_month_of(date!(2024 - 03 - 01)));
    }

    #[test]
    fn test_clamped_day() {
        let ym = YearMonth::new(2024, Month::February).unwrap();
        assert_eq!(ym.clamped_day(31), date!(2024 - 02 - 29));
        assert_eq!(ym.clamped_day(14), date!(2024 - 02 - 14));
    }

    #[test]
    fn test_ends_of_time() {
        let mut ym = YearMonth::containing(date!(2024 - 01 - 01)).unwrap();
        while let Some(next) = ym.next() {
            ym = next;
        }
        // The grid for December 9999 would end in the year 10000.
        assert_eq!((ym.year(), ym.month()), (9999, Month::November));
        assert!(YearMonth::containing(Date::MAX).is_err());
    }
}
