use std::iter::successors;
use time::{Date, Duration, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// Iterate over `date` and every day after it, stopping at the end of time
pub(crate) fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}

pub(crate) fn n_days_before(date: Date, n: u8) -> Option<Date> {
    date.checked_sub(Duration::days(n.into()))
}

pub(crate) fn n_days_after(date: Date, n: u8) -> Option<Date> {
    date.checked_add(Duration::days(n.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_index0() {
        assert_eq!(Weekday::Sunday.index0(), 0);
        assert_eq!(Weekday::Friday.index0(), 5);
        assert_eq!(Weekday::Saturday.index0(), 6);
    }

    #[test]
    fn test_iter_days_from_crosses_month() {
        let days = iter_days_from(date!(2024 - 02 - 28)).take(3).collect::<Vec<_>>();
        assert_eq!(
            days,
            [date!(2024 - 02 - 28), date!(2024 - 02 - 29), date!(2024 - 03 - 01)]
        );
    }

    #[test]
    fn test_iter_days_from_end_of_time() {
        assert_eq!(iter_days_from(Date::MAX).count(), 1);
    }

    #[test]
    fn test_n_days() {
        assert_eq!(n_days_before(date!(2024 - 03 - 01), 5), Some(date!(2024 - 02 - 25)));
        assert_eq!(n_days_after(date!(2024 - 03 - 31), 6), Some(date!(2024 - 04 - 06)));
        assert_eq!(n_days_before(Date::MIN, 1), None);
        assert_eq!(n_days_after(Date::MAX, 0), Some(Date::MAX));
    }
}
