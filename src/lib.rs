//! flagstack: typed command-line options layered over a YAML config file.
//!
//! Options are registered on a [`FlagSet`], parsed from single-dash long arguments
//! (`-name value`, `-name=value`, `--name`) and merged with a per-application
//! configuration document. Values resolve with the priority
//! **command line > configuration document > compiled default**.
//!
//! Besides the usual scalars, values understand port lists, byte sizes, rate
//! limits, severities, durations and `key=value` maps (see [`value`]).

pub mod config;
mod error;
pub mod flagset;
pub mod interrupt;
pub mod registry;
pub mod tokenize;
pub mod value;

pub use error::FlagError;
pub use flagset::{CommonFlags, FlagSet, UpdateFlags};
pub use registry::{Flag, FlagId};
