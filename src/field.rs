//! A text field bound to a date picker
use crate::calendar::OutOfTimeError;
use crate::options::{DisplayFormat, PickerConfig};
use crate::picker::{DatePicker, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;
use time::Date;

/// A text value kept in sync with the selection of the [`DatePicker`] that it
/// owns.  Every selection is written into the value using the configured
/// display format.
#[derive(Debug)]
pub struct DateField {
    picker: DatePicker,
    value: Rc<RefCell<String>>,
    format: DisplayFormat,
    subscription: SubscriptionId,
}

impl DateField {
    pub fn new(config: &PickerConfig, today: Date) -> Result<DateField, OutOfTimeError> {
        let mut picker = DatePicker::new(today, config.rules())?;
        if let Some(date) = config.initial_date() {
            picker = picker.start_date(date)?;
        }
        let format = config.format().clone();
        let value = Rc::new(RefCell::new(String::new()));
        let subscription = picker.subscribe({
            let value = Rc::clone(&value);
            let format = format.clone();
            move |date: Date| match format.format(date) {
                Ok(s) => *value.borrow_mut() = s,
                Err(e) => {
                    log::error!("Failed to format {date} as {:?}: {e}", format.pattern());
                }
            }
        });
        Ok(DateField {
            picker,
            value,
            format,
            subscription,
        })
    }

    /// The field's current text
    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    pub fn is_open(&self) -> bool {
        self.picker.is_visible()
    }

    /// Toggle the popup, as when the field itself is clicked
    pub fn click(&mut self) {
        self.picker.toggle();
    }

    /// Close the popup, as when something outside the field and popup is
    /// clicked
    pub fn click_outside(&mut self) {
        self.picker.hide();
    }

    /// Stop updating the field's text from the picker.  The text keeps its
    /// last value.
    pub fn unbind(&mut self) -> bool {
        self.picker.unsubscribe(self.subscription)
    }
}
