//! Boolean switches that trigger an action.

use std::fmt;

use serde_yaml::Value;

use super::{FlagValue, ValueError, ValueKind, parse_bool};

/// A boolean flag carrying an action.
///
/// The flag set runs the action once, after the command line was parsed,
/// when the switch ended up enabled.
pub struct Callback {
    enabled: bool,
    action: Box<dyn FnMut()>,
}

impl Callback {
    /// Creates a disabled switch running `action`.
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self {
            enabled: false,
            action: Box::new(action),
        }
    }

    /// Returns true when the switch was turned on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs the action if the switch is on. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        if self.enabled {
            (self.action)();
        }
        self.enabled
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl FlagValue for Callback {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        self.enabled = parse_bool(raw).ok_or_else(|| ValueError::malformed(raw, "expected a boolean"))?;
        Ok(())
    }

    fn render(&self) -> String {
        self.enabled.to_string()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn to_yaml(&self) -> Value {
        Value::Bool(self.enabled)
    }
}
