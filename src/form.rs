//! Form input model shared by the window and its tests.

use crate::error::{Error, Result};
use crate::measurement::MeasurementKind;

/// Raw text of the five input fields.
///
/// The form never constructs records directly; it composes a journal line
/// and lets the codec do all type coercion, so form input and file input
/// fail the same way.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub kind: MeasurementKind,
    pub date: String,
    pub place: String,
    pub value1: String,
    pub value2: String,
}

impl FormInput {
    /// Compose the textual line the codec parses.
    ///
    /// The cross-field humidity rule is enforced here, before the codec
    /// ever sees the line: the temperature variant requires value 2, the
    /// pressure variant forbids it.
    pub fn compose_line(&self) -> Result<String> {
        let date = self.date.trim();
        let place = self.place.trim();
        let value1 = self.value1.trim();
        let value2 = self.value2.trim();
        match self.kind {
            MeasurementKind::Temperature => {
                if value2.is_empty() {
                    return Err(Error::validation("Введите влажность для температуры"));
                }
                Ok(format!("temperature {date} \"{place}\" {value1} {value2}"))
            }
            MeasurementKind::Pressure => {
                if !value2.is_empty() {
                    return Err(Error::validation("Влажность не нужна для давления"));
                }
                Ok(format!("pressure {date} \"{place}\" {value1}"))
            }
        }
    }

    /// Clear the value fields after a successful add; kind, date and place
    /// stay for quick repeated entry.
    pub fn clear_values(&mut self) {
        self.value1.clear();
        self.value2.clear();
    }
}
