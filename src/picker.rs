//! Selection state of a date picker and notification of selection changes
use crate::calendar::{generate_grid, CalendarMonth, OutOfTimeError, YearMonth};
use crate::rules::DateRules;
use std::fmt;
use thiserror::Error;
use time::{Date, Duration};

/// Receiver of selection changes
pub trait SelectionListener {
    fn selection_changed(&mut self, date: Date);
}

impl<F: FnMut(Date)> SelectionListener for F {
    fn selection_changed(&mut self, date: Date) {
        self(date);
    }
}

/// Handle returned by [`DatePicker::subscribe()`] for use with
/// [`DatePicker::unsubscribe()`]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

/// A calendar popup's state: the selected date, the month being displayed, a
/// keyboard cursor, and whether the popup is visible
pub struct DatePicker {
    today: Date,
    rules: DateRules,
    selected: Date,
    cursor: Date,
    grid: CalendarMonth,
    visible: bool,
    listeners: Vec<(SubscriptionId, Box<dyn SelectionListener>)>,
    next_id: u64,
}

impl DatePicker {
    /// Create a hidden picker with `today` selected and its month displayed
    pub fn new(today: Date, rules: DateRules) -> Result<DatePicker, OutOfTimeError> {
        let displayed = YearMonth::containing(today)?;
        Ok(DatePicker {
            today,
            rules,
            selected: today,
            cursor: today,
            grid: generate_grid(displayed, today, today),
            visible: false,
            listeners: Vec::new(),
            next_id: 0,
        })
    }

    /// Select `date` instead of today and display its month.  No listeners
    /// are notified.
    pub fn start_date(mut self, date: Date) -> Result<DatePicker, OutOfTimeError> {
        let displayed = YearMonth::containing(date)?;
        self.selected = date;
        self.cursor = date;
        self.grid = generate_grid(displayed, date, self.today);
        Ok(self)
    }

    pub fn selection(&self) -> Date {
        self.selected
    }

    pub fn displayed(&self) -> YearMonth {
        self.grid.month()
    }

    pub fn cursor(&self) -> Date {
        self.cursor
    }

    pub fn grid(&self) -> &CalendarMonth {
        &self.grid
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Register a listener.  It is called once immediately with the current
    /// selection and then once for every subsequent call to
    /// [`select()`](DatePicker::select).
    pub fn subscribe<L>(&mut self, mut listener: L) -> SubscriptionId
    where
        L: SelectionListener + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        listener.selection_changed(self.selected);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener.  Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() < before
    }

    /// Make `date` the selection and notify every listener of it, in
    /// registration order.  Disablement rules are not consulted; see
    /// [`pick()`](DatePicker::pick).
    pub fn select(&mut self, date: Date) {
        log::debug!("Selected {date}");
        self.selected = date;
        self.regenerate();
        for (_, listener) in &mut self.listeners {
            listener.selection_changed(date);
        }
    }

    /// Select `date` on behalf of the user and close the popup, unless the
    /// rules disable the date
    pub fn pick(&mut self, date: Date) -> Result<(), PickError> {
        if self.is_disabled(date) {
            log::debug!("Refusing to pick disabled date {date}");
            return Err(PickError { date });
        }
        self.select(date);
        self.toggle();
        Ok(())
    }

    pub fn pick_cursor(&mut self) -> Result<(), PickError> {
        self.pick(self.cursor)
    }

    pub fn is_disabled(&self, date: Date) -> bool {
        self.rules.is_date_disabled(date, self.displayed(), self.today)
    }

    pub fn is_next_month_disabled(&self) -> bool {
        self.rules.is_month_navigation_disabled(self.displayed(), self.today)
    }

    pub fn next_month(&mut self) -> Result<(), NavigationError> {
        let month = self.displayed().next().ok_or(OutOfTimeError)?;
        self.move_to_month(month)?;
        self.cursor = month.clamped_day(self.cursor.day());
        Ok(())
    }

    pub fn previous_month(&mut self) -> Result<(), NavigationError> {
        let month = self.displayed().previous().ok_or(OutOfTimeError)?;
        self.move_to_month(month)?;
        self.cursor = month.clamped_day(self.cursor.day());
        Ok(())
    }

    /// Move the cursor `days` days forwards (or backwards, if negative),
    /// displaying the cursor's new month if it leaves the current one
    pub fn move_cursor(&mut self, days: i64) -> Result<(), NavigationError> {
        let date = self
            .cursor
            .checked_add(Duration::days(days))
            .ok_or(OutOfTimeError)?;
        let month = YearMonth::containing(date)?;
        self.move_to_month(month)?;
        self.cursor = date;
        Ok(())
    }

    /// Display today's month and put the cursor on today
    pub fn jump_to_today(&mut self) {
        if let Ok(month) = YearMonth::containing(self.today) {
            self.cursor = self.today;
            if month != self.displayed() {
                self.grid = generate_grid(month, self.selected, self.today);
            }
        }
    }

    fn move_to_month(&mut self, month: YearMonth) -> Result<(), NavigationError> {
        let displayed = self.displayed();
        if month == displayed {
            return Ok(());
        }
        if month > displayed && self.rules.no_future && month.is_after_month_of(self.today) {
            return Err(NavigationError::Disabled);
        }
        log::debug!("Displaying {month}");
        self.grid = generate_grid(month, self.selected, self.today);
        Ok(())
    }

    fn regenerate(&mut self) {
        self.grid = generate_grid(self.displayed(), self.selected, self.today);
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("today", &self.today)
            .field("rules", &self.rules)
            .field("selected", &self.selected)
            .field("cursor", &self.cursor)
            .field("displayed", &self.displayed())
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum NavigationError {
    #[error("months after the current month cannot be displayed")]
    Disabled,
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("{date} cannot be selected")]
pub struct PickError {
    pub date: Date,
}
