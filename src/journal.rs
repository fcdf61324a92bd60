//! The in-memory measurement sequence bound to its storage.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::form::FormInput;
use crate::measurement::{self, Measurement};
use crate::storage::{LoadReport, Storage};

/// The ordered record set plus the file it persists to.
///
/// Vec is the primary storage: insertion order is file order is display
/// order, and rows are addressed by position only. Every mutation rewrites
/// the whole file through [`Storage::save`].
#[derive(Debug)]
pub struct Journal {
    measurements: Vec<Measurement>,
    storage: Storage,
}

impl Journal {
    /// Create an empty journal over the given storage.
    pub fn new(storage: Storage) -> Self {
        Self {
            measurements: Vec::new(),
            storage,
        }
    }

    /// Create a journal from a load report, keeping the loaded records.
    pub fn from_report(report: LoadReport, storage: Storage) -> Self {
        Self {
            measurements: report.measurements,
            storage,
        }
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Parse one line, append the record and save the full set.
    ///
    /// A parse failure changes nothing. A save failure keeps the record in
    /// memory and returns the error; memory is then the only copy until
    /// the next successful save.
    pub fn add_line(&mut self, line: &str) -> Result<()> {
        let record = measurement::parse_line(line)?;
        debug!(%record, "appending record");
        self.measurements.push(record);
        self.storage.save(&self.measurements)
    }

    /// Compose a line from the form fields and append it.
    ///
    /// Returns the composed line on success so the caller can echo it.
    pub fn add(&mut self, form: &FormInput) -> Result<String> {
        let line = form.compose_line()?;
        self.add_line(&line)?;
        Ok(line)
    }

    /// Remove the records at the given table rows and save the rest.
    ///
    /// Rows are deduplicated and processed from the highest index down, so
    /// earlier removals never shift positions still waiting to be removed.
    /// Out-of-range rows are ignored. Returns the removed records in their
    /// former display order.
    pub fn remove_rows(&mut self, mut rows: Vec<usize>) -> Result<Vec<Measurement>> {
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows.dedup();
        let mut removed = Vec::new();
        for row in rows {
            if row < self.measurements.len() {
                removed.push(self.measurements.remove(row));
            }
        }
        if removed.is_empty() {
            return Ok(removed);
        }
        removed.reverse();
        self.storage.save(&self.measurements)?;
        Ok(removed)
    }
}
