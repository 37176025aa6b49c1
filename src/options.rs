//! Construction options for a date field and their validation
use crate::rules::{DateRange, DateRules, InvertedRangeError};
use thiserror::Error;
use time::{
    error::{Format, InvalidFormatDescription},
    format_description::{self, OwnedFormatItem},
    macros::date,
    Date,
};

/// Display format used when none is given: ISO 8601 calendar dates
pub const DEFAULT_DISPLAY_FORMAT: &str = "[year]-[month]-[day]";

/// User-supplied settings for a picker and the field bound to it
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PickerOptions {
    no_future: bool,
    start_range: Option<Date>,
    end_range: Option<Date>,
    display_format: Option<String>,
    initial_date: Option<Date>,
}

impl PickerOptions {
    pub fn new() -> PickerOptions {
        PickerOptions::default()
    }

    pub fn no_future(mut self, flag: bool) -> Self {
        self.no_future = flag;
        self
    }

    pub fn start_range(mut self, date: Date) -> Self {
        self.start_range = Some(date);
        self
    }

    pub fn end_range(mut self, date: Date) -> Self {
        self.end_range = Some(date);
        self
    }

    /// Set the pattern used to write the selected date into the field.  The
    /// pattern uses `time`'s format description syntax, e.g.
    /// `"[day]/[month]/[year]"`.
    pub fn display_format<S: Into<String>>(mut self, fmt: S) -> Self {
        self.display_format = Some(fmt.into());
        self
    }

    /// Select this date on startup instead of today
    pub fn initial_date(mut self, date: Date) -> Self {
        self.initial_date = Some(date);
        self
    }

    pub fn build(self) -> Result<PickerConfig, OptionsError> {
        let range = match (self.start_range, self.end_range) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
            (Some(start), None) => {
                log::warn!("Ignoring start of date range ({start}) given without an end");
                None
            }
            (None, Some(end)) => {
                log::warn!("Ignoring end of date range ({end}) given without a start");
                None
            }
            (None, None) => None,
        };
        let format = match self.display_format {
            Some(pattern) => DisplayFormat::parse(pattern)?,
            None => DisplayFormat::default(),
        };
        Ok(PickerConfig {
            rules: DateRules {
                no_future: self.no_future,
                range,
            },
            format,
            initial_date: self.initial_date,
        })
    }
}

/// Validated [`PickerOptions`]
#[derive(Clone, Debug, Default)]
pub struct PickerConfig {
    rules: DateRules,
    format: DisplayFormat,
    initial_date: Option<Date>,
}

impl PickerConfig {
    pub fn rules(&self) -> DateRules {
        self.rules
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    pub fn initial_date(&self) -> Option<Date> {
        self.initial_date
    }
}

/// A parsed date display pattern
#[derive(Clone, Debug)]
pub struct DisplayFormat {
    pattern: String,
    items: OwnedFormatItem,
}

impl DisplayFormat {
    pub fn parse<S: Into<String>>(pattern: S) -> Result<DisplayFormat, OptionsError> {
        let pattern = pattern.into();
        let items = match format_description::parse_owned::<2>(&pattern) {
            Ok(items) => items,
            Err(source) => return Err(OptionsError::InvalidFormat { pattern, source }),
        };
        // Reject patterns that refer to times or offsets up front so that
        // formatting a selection cannot fail later.
        if let Err(source) = date!(2000 - 01 - 01).format(&items) {
            return Err(OptionsError::UnformattableDate { pattern, source });
        }
        Ok(DisplayFormat { pattern, items })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: Date) -> Result<String, Format> {
        date.format(&self.items)
    }
}

impl Default for DisplayFormat {
    fn default() -> DisplayFormat {
        DisplayFormat::parse(DEFAULT_DISPLAY_FORMAT)
            .expect("default display format should be valid")
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    InvertedRange(#[from] InvertedRangeError),
    #[error("invalid display format {pattern:?}")]
    InvalidFormat {
        pattern: String,
        source: InvalidFormatDescription,
    },
    #[error("display format {pattern:?} cannot be applied to a date")]
    UnformattableDate { pattern: String, source: Format },
}
