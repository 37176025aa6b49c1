use super::month::YearMonth;
use super::util::{iter_days_from, WeekdayExt, DAYS_IN_WEEK};
use std::ops::Index;
use time::{Date, Weekday};

/// One cell of a calendar grid
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CalendarDay {
    pub date: Date,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarDay {
    pub fn day(&self) -> u8 {
        self.date.day()
    }
}

/// Seven consecutive days, Sunday first
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Week([CalendarDay; DAYS_IN_WEEK]);

impl Week {
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.0.iter()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.0[0].date <= date && date <= self.0[DAYS_IN_WEEK - 1].date
    }
}

impl Index<Weekday> for Week {
    type Output = CalendarDay;

    fn index(&self, wd: Weekday) -> &CalendarDay {
        &self.0[usize::from(wd.index0())]
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The full set of weeks displayed for a month, including the days of
/// adjacent months needed to fill out the first and last weeks
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarMonth {
    month: YearMonth,
    weeks: Vec<Week>,
}

impl CalendarMonth {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.weeks.iter().flat_map(Week::iter)
    }

    pub fn get(&self, date: Date) -> Option<&CalendarDay> {
        self.weeks
            .iter()
            .find(|w| w.contains(date))
            .map(|w| &w[date.weekday()])
    }

    pub fn label(&self) -> String {
        self.month.to_string()
    }
}

/// Build the grid of weeks to display for `displayed`, flagging the cells for
/// `today` and for `selected`
pub fn generate_grid(displayed: YearMonth, selected: Date, today: Date) -> CalendarMonth {
    let end = displayed.grid_end();
    let days = iter_days_from(displayed.grid_start())
        .take_while(|&d| d <= end)
        .map(|date| CalendarDay {
            date,
            is_today: date == today,
            is_selected: date == selected,
        })
        .collect::<Vec<_>>();
    // The grid runs from a Sunday to a Saturday, so there is no remainder.
    let weeks = days
        .chunks_exact(DAYS_IN_WEEK)
        .filter_map(|chunk| chunk.try_into().ok().map(Week))
        .collect();
    CalendarMonth {
        month: displayed,
        weeks,
    }
}
