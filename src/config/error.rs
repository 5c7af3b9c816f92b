//! Error types for the configuration document.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration document operations.
///
/// Covers reading, decoding, encoding, writing and directory migration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not a flat YAML mapping.
    #[error("Failed to parse YAML config '{}': {source}", path.display())]
    Decode {
        /// Path to the config file
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// Current values could not be serialized.
    #[error("Failed to encode YAML config: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// Failed to write the configuration file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    Write {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a legacy configuration directory.
    #[error("Failed to migrate config directory '{}' to '{}': {source}", from.display(), to.display())]
    Migrate {
        /// Legacy directory
        from: PathBuf,
        /// Canonical directory
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns true when the file exists but is not a valid document.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
