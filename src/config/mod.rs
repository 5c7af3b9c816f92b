//! Configuration document layer.
//!
//! This module provides:
//! - Path resolution ([`paths`]): `<config dir>/<app>/config.yaml`
//! - One-time migration from the legacy `~/.config/<app>` directory
//! - Loading and decoding the flat YAML mapping ([`document`])
//! - Generated document text ([`template`])
//!
//! # Priority
//!
//! Option values are resolved with the following priority (highest to lowest):
//!
//! 1. **Command-line arguments** given this run
//! 2. **Configuration document** entries, keyed by long name (short accepted)
//! 3. **Compiled defaults**, possibly re-based by an environment variable
//!
//! A document entry is applied only while the option still holds its
//! default and was not set on the command line.
//!
//! # Document Lifecycle
//!
//! The document is absent on first run; the flag set then writes one from the
//! current values and stops. Later runs merge it. It is never deleted.

pub mod document;
mod error;
pub mod paths;
pub mod template;

pub use error::ConfigError;
pub use paths::{app_name, config_file_path};
