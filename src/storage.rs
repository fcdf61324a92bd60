use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::measurement::{self, Measurement};

/// File-backed persistence for the full measurement set.
///
/// The path is handed in at construction; there is no global default.
/// Every save rewrites the whole file.
#[derive(Debug)]
pub struct Storage {
    file_path: PathBuf,
}

/// Outcome of loading a journal file.
///
/// Loading never fails on record content: unparsable lines are collected
/// in `skipped` and the rest of the file is still read.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub measurements: Vec<Measurement>,
    pub skipped: Vec<SkippedLine>,
}

/// A line that failed to parse during load.
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub number: usize,
    /// The line text, trimmed.
    pub text: String,
    pub error: Error,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the journal file, skipping lines that fail to parse.
    ///
    /// A missing file yields an empty report. Blank lines are ignored and a
    /// leading UTF-8 byte-order mark is tolerated.
    pub fn load(&self) -> Result<LoadReport> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(LoadReport::default());
            }
            Err(err) => return Err(err.into()),
        };
        // Files exported by Windows tools may start with a BOM.
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let mut report = LoadReport::default();
        for (index, line) in content.lines().enumerate() {
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match measurement::parse_line(text) {
                Ok(record) => report.measurements.push(record),
                Err(error) => report.skipped.push(SkippedLine {
                    number: index + 1,
                    text: text.to_string(),
                    error,
                }),
            }
        }
        Ok(report)
    }

    /// Overwrite the journal file with the serialized record set.
    pub fn save(&self, measurements: &[Measurement]) -> Result<()> {
        let mut content = String::new();
        for record in measurements {
            content.push_str(&measurement::to_line(record));
            content.push('\n');
        }
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
