//! Which months may be navigated to and which dates may be picked
use crate::calendar::YearMonth;
use thiserror::Error;
use time::Date;

/// An inclusive range of pickable dates
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<DateRange, InvertedRangeError> {
        if start <= end {
            Ok(DateRange { start, end })
        } else {
            Err(InvertedRangeError { start, end })
        }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("start of date range ({start}) is after its end ({end})")]
pub struct InvertedRangeError {
    pub start: Date,
    pub end: Date,
}

/// Restrictions on what a picker lets the user navigate to and select
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateRules {
    /// Forbid months after the current one and dates after today
    pub no_future: bool,
    /// Only dates in this range may be picked.  Takes precedence over
    /// `no_future` for date disablement.
    pub range: Option<DateRange>,
}

impl DateRules {
    /// Returns `true` if the user may not move forwards from `displayed`,
    /// i.e., if `no_future` is set and `displayed` is not strictly before the
    /// month of `today`
    pub fn is_month_navigation_disabled(&self, displayed: YearMonth, today: Date) -> bool {
        self.no_future && !displayed.is_before_month_of(today)
    }

    pub fn is_date_disabled(&self, date: Date, displayed: YearMonth, today: Date) -> bool {
        if let Some(range) = self.range {
            !(displayed.contains(date) && range.contains(date))
        } else if self.no_future {
            !(displayed.contains(date) && date <= today)
        } else {
            // Days from adjacent months shown in the grid stay pickable.
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;

    fn march_2024() -> YearMonth {
        YearMonth::new(2024, Month::March).unwrap()
    }

    #[test]
    fn test_inverted_range() {
        let r = DateRange::new(date!(2024 - 03 - 20), date!(2024 - 03 - 10));
        assert_eq!(
            r,
            Err(InvertedRangeError {
                start: date!(2024 - 03 - 20),
                end: date!(2024 - 03 - 10)
            })
        );
        assert_eq!(
            r.unwrap_err().to_string(),
            "start of date range (2024-03-20) is after its end (2024-03-10)"
        );
    }

    #[test]
    fn test_single_day_range() {
        let r = DateRange::new(date!(2024 - 03 - 10), date!(2024 - 03 - 10)).unwrap();
        assert!(r.contains(date!(2024 - 03 - 10)));
        assert!(!r.contains(date!(2024 - 03 - 11)));
    }

    #[test]
    fn test_month_navigation_no_future() {
        let rules = DateRules {
            no_future: true,
            range: None,
        };
        let today = date!(2024 - 03 - 15);
        assert!(rules.is_month_navigation_disabled(march_2024(), today));
        assert!(rules.is_month_navigation_disabled(march_2024().next().unwrap(), today));
        assert!(!rules.is_month_navigation_disabled(march_2024().previous().unwrap(), today));
    }

    #[test]
    fn test_month_navigation_unrestricted() {
        let rules = DateRules::default();
        assert!(!rules.is_month_navigation_disabled(march_2024(), date!(2024 - 03 - 15)));
        assert!(!rules.is_month_navigation_disabled(march_2024(), date!(2020 - 01 - 01)));
    }

    #[test]
    fn test_range_disablement() {
        let rules = DateRules {
            no_future: false,
            range: Some(DateRange::new(date!(2024 - 03 - 10), date!(2024 - 03 - 20)).unwrap()),
        };
        let today = date!(2024 - 03 - 01);
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 15), march_2024(), today));
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 10), march_2024(), today));
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 20), march_2024(), today));
        assert!(rules.is_date_disabled(date!(2024 - 03 - 25), march_2024(), today));
        assert!(rules.is_date_disabled(date!(2024 - 02 - 28), march_2024(), today));
    }

    #[test]
    fn test_range_takes_precedence_over_no_future() {
        let rules = DateRules {
            no_future: true,
            range: Some(DateRange::new(date!(2024 - 03 - 10), date!(2024 - 03 - 20)).unwrap()),
        };
        let today = date!(2024 - 03 - 01);
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 15), march_2024(), today));
    }

    #[test]
    fn test_range_requires_displayed_month() {
        let rules = DateRules {
            no_future: false,
            range: Some(DateRange::new(date!(2024 - 02 - 01), date!(2024 - 04 - 30)).unwrap()),
        };
        let today = date!(2024 - 03 - 01);
        assert!(rules.is_date_disabled(date!(2024 - 02 - 28), march_2024(), today));
        assert!(rules.is_date_disabled(date!(2024 - 04 - 02), march_2024(), today));
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 31), march_2024(), today));
    }

    #[test]
    fn test_no_future_disablement() {
        let rules = DateRules {
            no_future: true,
            range: None,
        };
        let today = date!(2024 - 03 - 15);
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 15), march_2024(), today));
        assert!(!rules.is_date_disabled(date!(2024 - 03 - 01), march_2024(), today));
        assert!(rules.is_date_disabled(date!(2024 - 03 - 16), march_2024(), today));
        assert!(rules.is_date_disabled(date!(2024 - 02 - 29), march_2024(), today));
    }

    #[test]
    fn test_unrestricted_allows_adjacent_months() {
        let rules = DateRules::default();
        let today = date!(2024 - 03 - 15);
        assert!(!rules.is_date_disabled(date!(2024 - 02 - 25), march_2024(), today));
        assert!(!rules.is_date_disabled(date!(2024 - 04 - 06), march_2024(), today));
        assert!(!rules.is_date_disabled(date!(2030 - 01 - 01), march_2024(), today));
    }
}
