//! Typed value parsers.
//!
//! Every option is backed by a [`FlagValue`]: an accumulator that merges raw
//! text through [`FlagValue::set`] and renders a canonical form through
//! [`FlagValue::render`]. The same `set` is used for command-line occurrences,
//! configuration document entries and environment seeding.
//!
//! | Type | Grammar |
//! |------|---------|
//! | [`Port`] | `80`, `21-25`, `1-`, `full`, `top-100`, `http`, `tcp:443`, `ftp*` |
//! | [`Size`] | `2kb`, `10MB`, bare integers are megabytes |
//! | [`RateLimitMap`] | `key=count/unit`, comma separated |
//! | [`Severities`] | `info,low,medium,high,critical` |
//! | [`RuntimeMap`] | `key=value`, or a file of such lines |
//! | [`Duration`] | `90s`, `1h30m`, `2d`, bare integers are seconds |
//! | [`StringSlice`] | tokenized by its [`Policy`](crate::tokenize::Policy) |
//! | [`Enum`], [`EnumSlice`] | a closed set of names |
//! | [`Auth`] | a token, prompted for when given without a value |
//! | [`Dynamic`] | any scalar, with a fallback used when given without a value |
//! | [`Callback`] | a boolean that runs an action once parsing is done |

mod auth;
mod callback;
pub mod duration;
mod dynamic;
mod enumeration;
mod error;
mod port;
mod port_table;
mod rate_limit;
mod runtime_map;
mod severity;
mod size;
mod string_slice;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use auth::{Auth, TokenPrompt};
pub use callback::Callback;
pub use dynamic::Dynamic;
pub use enumeration::{Enum, EnumSlice};
pub use error::ValueError;
pub use port::{Port, Protocol};
pub use port_table::PORT_TABLE;
pub use rate_limit::{RateLimit, RateLimitMap};
pub use runtime_map::RuntimeMap;
pub use severity::{Severities, Severity};
pub use size::Size;
pub use string_slice::StringSlice;

use std::any::Any;
use std::fmt;
use std::time::Duration;

use serde_yaml::Value;

/// How a value is presented to the argument parser and in help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Takes a value only as `-flag=value`; bare `-flag` means `true`.
    Bool,
    /// Takes `-flag value` or a bare `-flag` (passed to `set` as `true`).
    Optional(&'static str),
    /// Always takes a value; the hint names its type in help text.
    Single(&'static str),
    /// Accumulates a value per occurrence.
    List(&'static str),
}

impl ValueKind {
    /// Type hint shown after the flag names in help text.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Bool => "",
            Self::Optional(hint) | Self::Single(hint) | Self::List(hint) => hint,
        }
    }
}

/// A typed accumulator bound to an option.
pub trait FlagValue: Any + fmt::Debug {
    /// Merges `raw` into the value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `raw` does not match the grammar.
    fn set(&mut self, raw: &str) -> Result<(), ValueError>;

    /// Canonical textual form, compared against the registered default.
    fn render(&self) -> String;

    /// Argument-parser shape and help hint.
    fn kind(&self) -> ValueKind;

    /// Raw text handed to `set` when a `Bool` or `Optional` flag is given bare.
    fn implicit_value(&self) -> &str {
        "true"
    }

    /// Clears accumulated defaults before the first explicit input.
    ///
    /// Scalars replace on every `set`, so the default does nothing.
    fn reset(&mut self) {}

    /// Value written to a natively marshalled configuration document.
    fn to_yaml(&self) -> Value {
        Value::String(self.render())
    }
}

impl FlagValue for String {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        raw.clone_into(self);
        Ok(())
    }

    fn render(&self) -> String {
        self.clone()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Single("string")
    }
}

impl FlagValue for bool {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        *self = parse_bool(raw)
            .ok_or_else(|| ValueError::malformed(raw, "expected a boolean"))?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn to_yaml(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FlagValue for i64 {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        *self = raw
            .trim()
            .parse()
            .map_err(|e| ValueError::malformed(raw, format!("{e}")))?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Single("int")
    }

    fn to_yaml(&self) -> Value {
        Value::Number((*self).into())
    }
}

impl FlagValue for f64 {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        *self = raw
            .trim()
            .parse()
            .map_err(|e| ValueError::malformed(raw, format!("{e}")))?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Single("float")
    }

    fn to_yaml(&self) -> Value {
        Value::Number((*self).into())
    }
}

impl FlagValue for Duration {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        *self = duration::parse(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        duration::format(*self)
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Single("duration")
    }
}

/// Parses the boolean literals accepted on the command line.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
