//! Error type shared by every value parser.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a raw string cannot be merged into a value.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The grammar rejected the text.
    #[error("parse error: malformed value '{value}': {reason}")]
    Malformed {
        /// The offending input
        value: String,
        /// What the grammar expected
        reason: String,
    },

    /// The text was understood but falls outside the value's domain.
    #[error("value '{value}' out of range: {reason}")]
    OutOfRange {
        /// The offending input
        value: String,
        /// Which bound was violated
        reason: String,
    },

    /// A file named by the input could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An interactive prompt could not read from the terminal.
    #[error("Failed to read token: {source}")]
    Prompt {
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ValueError {
    /// Creates a `Malformed` error.
    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `OutOfRange` error.
    pub fn out_of_range(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for grammar violations.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns true for domain violations.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
