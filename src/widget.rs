//! Terminal rendering of a date picker and of a field bound to one
use crate::calendar::{CalendarDay, DAY_NAMES};
use crate::field::DateField;
use crate::picker::DatePicker;
use crate::theme::{
    field::{FOCUSED_BORDER_STYLE, ICON_STYLE, VALUE_STYLE},
    picker::{
        CURSOR_STYLE, DISABLED_STYLE, NAV_DISABLED_STYLE, NAV_STYLE, OTHER_MONTH_STYLE,
        SELECTED_STYLE, TODAY_STYLE,
    },
    BASE_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use std::iter::zip;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the grid of days, not counting the border
const GRID_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines above the weeks, used for the month navigation line and
/// the day names
const HEADER_LINES: u16 = 2;

/// Number of week lines reserved so that the popup does not change size
/// between months
const MAX_WEEKS: u16 = 6;

/// Width of the picker popup, including its border
pub const PICKER_WIDTH: u16 = GRID_WIDTH + 2;

/// Height of the picker popup, including its border
pub const PICKER_HEIGHT: u16 = HEADER_LINES + MAX_WEEKS + 2;

/// Height of the bordered text field
pub const FIELD_HEIGHT: u16 = 3;

/// Size of the area needed by a [`FieldView`] with its popup open
pub const FIELD_VIEW_WIDTH: u16 = PICKER_WIDTH;
pub const FIELD_VIEW_HEIGHT: u16 = FIELD_HEIGHT + PICKER_HEIGHT;

const PREV_ARROW: &str = "<";
const NEXT_ARROW: &str = ">";
const CALENDAR_ICON: &str = "▦";

/// Renders the calendar popup of a [`DatePicker`]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PickerView;

impl StatefulWidget for PickerView {
    type State = DatePicker;

    /*
     * ┌────────────────────────────┐
     * │<        March 2024        >│
     * │ Sun Mon Tue Wed Thu Fri Sat│
     * │ 25  26  27  28  29   1   2 │
     * │  …                         │
     * └────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.intersection(buf.area);
        Clear.render(area, buf);
        let block = Block::bordered().style(BASE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        let mut canvas = BufferCanvas::new(inner, buf);
        canvas.draw_navigation(
            &state.grid().label(),
            state.displayed().previous().is_some(),
            !state.is_next_month_disabled() && state.displayed().next().is_some(),
        );
        canvas.draw_day_names();
        for (i, week) in zip(0u16.., state.grid().weeks()) {
            for (j, day) in zip(0u16.., week) {
                canvas.draw_day(i, j, day, day_style(state, day));
            }
        }
    }
}

fn day_style(picker: &DatePicker, day: &CalendarDay) -> Style {
    let mut style = if picker.is_disabled(day.date) {
        DISABLED_STYLE
    } else if !picker.displayed().contains(day.date) {
        OTHER_MONTH_STYLE
    } else if day.is_today {
        TODAY_STYLE
    } else {
        BASE_STYLE
    };
    if day.is_selected {
        style = style.patch(SELECTED_STYLE);
    }
    if day.date == picker.cursor() {
        style = style.patch(CURSOR_STYLE);
    }
    style
}

fn day_text(day: &CalendarDay) -> String {
    if day.is_today {
        format!("[{:>2}]", day.day())
    } else {
        format!(" {:>2} ", day.day())
    }
}

/// Renders a [`DateField`] as a bordered text box, with the picker popup
/// beneath it when open
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldView;

impl StatefulWidget for FieldView {
    type State = DateField;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.intersection(buf.area);
        let width = FIELD_VIEW_WIDTH.min(area.width);
        let field_area = Rect {
            width,
            height: FIELD_HEIGHT.min(area.height),
            ..area
        };
        let mut block = Block::bordered().title(" Date ").style(BASE_STYLE);
        if state.is_open() {
            block = block.border_style(FOCUSED_BORDER_STYLE);
        }
        let inner = block.inner(field_area);
        block.render(field_area, buf);
        let mut canvas = BufferCanvas::new(inner, buf);
        canvas.mvprint(0, 1, state.value(), VALUE_STYLE);
        canvas.mvprint(0, inner.width.saturating_sub(2), CALENDAR_ICON, ICON_STYLE);
        if state.is_open() {
            let popup_area = Rect {
                y: area.y + field_area.height,
                width,
                height: PICKER_HEIGHT.min(area.height - field_area.height),
                ..area
            };
            PickerView.render(popup_area, buf, state.picker_mut());
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_navigation(&mut self, label: &str, prev_enabled: bool, next_enabled: bool) {
        let nav_style = |enabled| {
            if enabled {
                NAV_STYLE
            } else {
                NAV_DISABLED_STYLE
            }
        };
        self.mvprint(0, 0, PREV_ARROW, nav_style(prev_enabled));
        let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        let x = self.area.width.saturating_sub(label_width) / 2;
        self.mvprint(0, x, label, TITLE_STYLE);
        self.mvprint(
            0,
            self.area.width.saturating_sub(1),
            NEXT_ARROW,
            nav_style(next_enabled),
        );
    }

    fn draw_day_names(&mut self) {
        for (j, name) in zip(0u16.., DAY_NAMES) {
            self.mvprint(1, j * DAY_WIDTH, format!("{name:>4}"), WEEKDAY_STYLE);
        }
    }

    fn draw_day(&mut self, week_no: u16, wd_index: u16, day: &CalendarDay, style: Style) {
        self.mvprint(
            HEADER_LINES + week_no,
            wd_index * DAY_WIDTH,
            day_text(day),
            style,
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                s,
                usize::from(self.area.width - x),
                style,
            );
        }
    }
}
