//! Options whose value is optional on the command line.

use serde_yaml::Value;

use super::{FlagValue, ValueError, ValueKind};

/// Wraps a scalar so that a bare `-flag` sets a fallback value.
///
/// ```
/// use flagstack::value::{Dynamic, FlagValue};
///
/// let mut concurrency = Dynamic::new(0_i64, 25_i64);
/// let bare = concurrency.implicit_value().to_owned();
/// concurrency.set(&bare).unwrap();
/// assert_eq!(*concurrency.get(), 25);
/// concurrency.set("100").unwrap();
/// assert_eq!(*concurrency.get(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dynamic<T> {
    value: T,
    implicit: String,
}

impl<T: FlagValue> Dynamic<T> {
    /// Starts at `value`; a bare flag stores `when_bare`.
    pub fn new(value: T, when_bare: T) -> Self {
        Self {
            value,
            implicit: when_bare.render(),
        }
    }

    /// Current value.
    pub const fn get(&self) -> &T {
        &self.value
    }
}

impl<T: FlagValue> FlagValue for Dynamic<T> {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        self.value.set(raw)
    }

    fn render(&self) -> String {
        self.value.render()
    }

    fn kind(&self) -> ValueKind {
        match self.value.kind() {
            ValueKind::Bool => ValueKind::Bool,
            ValueKind::Optional(hint) | ValueKind::Single(hint) | ValueKind::List(hint) => {
                ValueKind::Optional(hint)
            }
        }
    }

    fn implicit_value(&self) -> &str {
        &self.implicit
    }

    fn reset(&mut self) {
        self.value.reset();
    }

    fn to_yaml(&self) -> Value {
        self.value.to_yaml()
    }
}
