//! Measurement domain model and line codec.
//!
//! This module contains the core record types and the text codec that
//! converts between journal lines and records:
//! - `record`: the `Measurement` record with its tagged `Reading` variant
//! - `codec`: the parse/serialize pair for the flat file format

mod codec;
mod record;

pub use codec::{DATE_FORMAT, parse_line, to_line};
pub use record::{Measurement, MeasurementKind, Reading};
