//! Calendar arithmetic: months, padded week grids, and day cells
mod grid;
mod month;
mod util;
pub use self::grid::{generate_grid, CalendarDay, CalendarMonth, Week};
pub use self::month::YearMonth;
use thiserror::Error;

/// Abbreviated day names in grid column order
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;
