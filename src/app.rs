//! Full-screen interactive program around a single [`DateField`]
use crate::field::DateField;
use crate::help::Help;
use crate::theme::{BASE_STYLE, HINT_STYLE};
use crate::widget::{FieldView, FIELD_VIEW_HEIGHT, FIELD_VIEW_WIDTH};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

const HINT: &str = "Press ? for help";

/// How the user left the program
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The user accepted the field's value
    Accepted(String),
    Cancelled,
}

#[derive(Debug)]
pub struct App {
    field: DateField,
    state: AppState,
}

impl App {
    pub fn new(field: DateField) -> App {
        App {
            field,
            state: AppState::Editing,
        }
    }

    /// Open the calendar as soon as the program starts
    pub fn open(mut self) -> App {
        self.field.picker_mut().show();
        self
    }

    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<Outcome> {
        loop {
            self.draw(terminal)?;
            self.handle_input()?;
            match self.state {
                AppState::Done => return Ok(Outcome::Accepted(self.field.value())),
                AppState::Cancelled => return Ok(Outcome::Cancelled),
                AppState::Editing | AppState::Helping => (),
            }
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Cancelled;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Editing if self.field.is_open() => self.handle_picker_key(key),
            AppState::Editing => match key {
                KeyCode::Char(' ') | KeyCode::Down => {
                    self.field.click();
                    true
                }
                KeyCode::Enter => {
                    self.state = AppState::Done;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Cancelled;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Editing;
                true
            }
            AppState::Done | AppState::Cancelled => false,
        }
    }

    fn handle_picker_key(&mut self, key: KeyCode) -> bool {
        let picker = self.field.picker_mut();
        match key {
            KeyCode::Char('h') | KeyCode::Left => picker.move_cursor(-1).is_ok(),
            KeyCode::Char('l') | KeyCode::Right => picker.move_cursor(1).is_ok(),
            KeyCode::Char('k') | KeyCode::Up => picker.move_cursor(-7).is_ok(),
            KeyCode::Char('j') | KeyCode::Down => picker.move_cursor(7).is_ok(),
            KeyCode::Char('<') | KeyCode::PageUp => picker.previous_month().is_ok(),
            KeyCode::Char('>') | KeyCode::PageDown => picker.next_month().is_ok(),
            KeyCode::Char('t') | KeyCode::Home => {
                picker.jump_to_today();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => picker.pick_cursor().is_ok(),
            KeyCode::Esc => {
                self.field.click_outside();
                true
            }
            KeyCode::Char('?') => {
                self.state = AppState::Helping;
                true
            }
            _ => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [main_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [field_area] = Layout::horizontal([FIELD_VIEW_WIDTH])
            .flex(Flex::Center)
            .areas(main_area);
        let [field_area] = Layout::vertical([FIELD_VIEW_HEIGHT])
            .flex(Flex::Center)
            .areas(field_area);
        FieldView.render(field_area, buf, &mut self.field);
        Line::styled(HINT, HINT_STYLE)
            .centered()
            .render(hint_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Editing,
    Helping,
    Done,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PickerOptions;
    use ratatui::buffer::Cell;
    use time::macros::date;

    fn app(options: PickerOptions) -> App {
        let config = options.build().unwrap();
        App::new(DateField::new(&config, date!(2024 - 03 - 15)).unwrap())
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        buf.content()
            .chunks(usize::from(buf.area.width))
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }

    #[test]
    fn test_pick_with_keys() {
        let mut app = app(PickerOptions::new());
        assert!(app.handle_key(KeyCode::Char(' ')));
        assert!(app.field.is_open());
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Down));
        assert!(app.handle_key(KeyCode::Enter));
        assert!(!app.field.is_open());
        assert_eq!(app.field.value(), "2024-03-23");
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Done);
    }

    #[test]
    fn test_month_keys() {
        let mut app = app(PickerOptions::new()).open();
        assert!(app.handle_key(KeyCode::Char('>')));
        assert!(app.handle_key(KeyCode::PageDown));
        assert_eq!(app.field.picker().cursor(), date!(2024 - 05 - 15));
        assert!(app.handle_key(KeyCode::Char('<')));
        assert_eq!(app.field.picker().cursor(), date!(2024 - 04 - 15));
        assert!(app.handle_key(KeyCode::Char('t')));
        assert_eq!(app.field.picker().cursor(), date!(2024 - 03 - 15));
        assert_eq!(app.field.value(), "2024-03-15");
    }

    #[test]
    fn test_invalid_keys() {
        let mut app = app(PickerOptions::new().no_future(true)).open();
        assert!(!app.handle_key(KeyCode::Char('>')));
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(app.handle_key(KeyCode::Right));
        // March 16 is in the future
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(app.field.is_open());
        assert_eq!(app.field.value(), "2024-03-15");
    }

    #[test]
    fn test_escape_closes_then_cancels() {
        let mut app = app(PickerOptions::new()).open();
        assert!(app.handle_key(KeyCode::Esc));
        assert!(!app.field.is_open());
        assert_eq!(app.state, AppState::Editing);
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Cancelled);
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let mut app = app(PickerOptions::new());
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('z')));
        assert_eq!(app.state, AppState::Editing);
    }

    #[test]
    fn test_render() {
        let mut app = app(PickerOptions::new().display_format("[day]/[month]/[year]")).open();
        let area = Rect::new(0, 0, 40, 16);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let rows = rows(&buffer);
        assert_eq!(rows[2], "     │ 15/03/2024               ▦ │     ");
        assert_eq!(rows[5], "     │<        March 2024        >│     ");
        assert_eq!(rows[15], "            Press ? for help            ");
    }

    #[test]
    fn test_render_help() {
        let mut app = app(PickerOptions::new());
        app.handle_key(KeyCode::Char('?'));
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let rows = rows(&buffer);
        assert!(rows.iter().any(|r| r.contains(" Commands ")));
    }
}
