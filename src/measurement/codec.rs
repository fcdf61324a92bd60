use chrono::NaiveDate;

use super::{Measurement, Reading};
use crate::error::{Error, Result};

/// Date format used on disk and in the date input field.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// Parse one journal line into a measurement.
///
/// The line is split on whitespace; the first token selects the variant and
/// fixes the arity. Anything else fails with [`Error::Format`] carrying the
/// line text.
pub fn parse_line(line: &str) -> Result<Measurement> {
    let text = line.trim();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        ["temperature", date, place, temperature, humidity] => Ok(Measurement {
            date: parse_date(date, text)?,
            place: strip_quotes(place),
            reading: Reading::Temperature {
                temperature: parse_value(temperature, text)?,
                humidity: parse_value(humidity, text)?,
            },
        }),
        ["pressure", date, place, pressure] => Ok(Measurement {
            date: parse_date(date, text)?,
            place: strip_quotes(place),
            reading: Reading::Pressure {
                pressure: parse_value(pressure, text)?,
            },
        }),
        _ => Err(Error::format(text)),
    }
}

/// Serialize one measurement to its journal line (without the newline).
///
/// Float fields are always written with two decimal digits.
pub fn to_line(measurement: &Measurement) -> String {
    let date = measurement.date.format(DATE_FORMAT);
    let place = &measurement.place;
    match &measurement.reading {
        Reading::Temperature {
            temperature,
            humidity,
        } => format!("temperature {date} \"{place}\" {temperature:.2} {humidity:.2}"),
        Reading::Pressure { pressure } => {
            format!("pressure {date} \"{place}\" {pressure:.2}")
        }
    }
}

fn parse_date(token: &str, line: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|_| Error::format(line))
}

fn parse_value(token: &str, line: &str) -> Result<f64> {
    token.parse().map_err(|_| Error::format(line))
}

/// Strip the surrounding quote characters from a place token.
///
/// The format has no quoted-string syntax: the quotes are decoration on a
/// single whitespace-free token, so a place with internal whitespace is not
/// representable.
fn strip_quotes(token: &str) -> String {
    token.trim_matches('"').to_string()
}
