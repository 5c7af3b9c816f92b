//! Errors raised while registering and resolving options.

use thiserror::Error;

use crate::config::ConfigError;
use crate::value::ValueError;

/// Error type for flag set operations.
#[derive(Debug, Error)]
pub enum FlagError {
    /// An option was registered without any name to bind it to.
    #[error("Missing binding: option with usage '{usage}' has neither a long nor a short name")]
    MissingBinding {
        /// Usage text of the rejected option
        usage: String,
    },

    /// A name is already taken by another option or reserved for help.
    #[error("Flag redefined: -{name}")]
    Redefined {
        /// The duplicate name
        name: String,
    },

    /// A registered default was rejected by its own parser.
    #[error("Invalid default for -{flag}: {source}")]
    InvalidDefault {
        /// Long name of the option
        flag: String,
        /// Parser error
        #[source]
        source: ValueError,
    },

    /// A command-line, environment or document value was rejected.
    #[error("Invalid value for -{flag}: {source}")]
    InvalidValue {
        /// Long name of the option
        flag: String,
        /// Parser error
        #[source]
        source: ValueError,
    },

    /// The argument parser rejected the command line.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Help was requested; carries the rendered text.
    #[error("{0}")]
    Help(String),

    /// The configuration document could not be read or written.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FlagError {
    /// Returns true when the error only carries help text.
    #[must_use]
    pub const fn is_help(&self) -> bool {
        matches!(self, Self::Help(_))
    }
}
