//! Measurement Journal Library
//!
//! This library implements a small desktop journal for two kinds of
//! environmental readings (temperature+humidity and pressure), each tied
//! to a date and a place, persisted as a flat UTF-8 text file.
//!
//! # Architecture
//!
//! The library follows a layered architecture:
//! - **UI Layer**: `MeteoApp` - the eframe/egui table-and-form window
//! - **Session Layer**: `Journal` - the ordered record set with add and
//!   positional delete, re-persisting the full set after every mutation
//! - **Domain Layer**: `measurement` module - record types and line codec
//! - **Persistence Layer**: `Storage` - tolerant load and whole-file save
//!
//! # Example
//!
//! ```no_run
//! use meteolog::{Journal, Storage};
//!
//! # fn main() -> meteolog::Result<()> {
//! let storage = Storage::new("measurements.txt");
//! let report = storage.load()?;
//! let mut journal = Journal::from_report(report, storage);
//! journal.add_line("temperature 2024.01.15 \"Kyiv\" 21.5 60.2")?;
//! # Ok(())
//! # }
//! ```

mod app;
mod error;
mod form;
mod journal;
mod measurement;
mod storage;

// Re-export commonly used types
pub use app::MeteoApp;
pub use error::{Error, Result};
pub use form::FormInput;
pub use journal::Journal;
pub use measurement::{DATE_FORMAT, Measurement, MeasurementKind, Reading, parse_line, to_line};
pub use storage::{LoadReport, SkippedLine, Storage};
