//! Error types for the measurement journal.
//!
//! Nothing here is fatal to the process: the binary and the window surface
//! the message and keep running with the in-memory state.

use thiserror::Error;

/// The main error type for journal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A line does not match any measurement variant: unknown keyword,
    /// wrong token count, an invalid date, or a non-numeric value field.
    /// Carries the offending line text.
    #[error("Некорректный формат строки: {line}")]
    Format {
        /// The line as it was read, trimmed.
        line: String,
    },

    /// A cross-field form rule was violated before the line ever reached
    /// the codec.
    #[error("{0}")]
    Validation(String),

    /// Reading or writing the journal file failed.
    #[error("Ошибка файла: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for journal operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a format error for an unparsable line.
    #[must_use]
    pub fn format(line: impl Into<String>) -> Self {
        Self::Format { line: line.into() }
    }

    /// Create a validation error with a user-facing message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
