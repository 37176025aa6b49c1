//! An embeddable date picker: calendar grid generation, selection state with
//! change notification, and a text field bound to the selection, together
//! with `ratatui` widgets for showing them in a terminal.
//!
//! ```
//! use datepick::field::DateField;
//! use datepick::options::PickerOptions;
//! use time::macros::date;
//!
//! let config = PickerOptions::new()
//!     .display_format("[day]/[month]/[year]")
//!     .build()
//!     .unwrap();
//! let mut field = DateField::new(&config, date!(2024 - 03 - 15)).unwrap();
//! assert_eq!(field.value(), "15/03/2024");
//! field.click();
//! field.picker_mut().pick(date!(2024 - 03 - 20)).unwrap();
//! assert_eq!(field.value(), "20/03/2024");
//! ```
pub mod app;
pub mod calendar;
pub mod field;
mod help;
pub mod options;
pub mod picker;
pub mod rules;
mod theme;
pub mod widget;
