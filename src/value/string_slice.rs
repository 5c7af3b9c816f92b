//! Policy-driven string lists.

use serde_yaml::Value;

use super::{FlagValue, ValueError, ValueKind};
use crate::tokenize::{Policy, to_list_string, tokenize};

/// A list of strings; every `set` appends the tokens its policy produces.
///
/// ```
/// use flagstack::tokenize::Policy;
/// use flagstack::value::{FlagValue, StringSlice};
///
/// let mut hosts = StringSlice::new(Policy::NORMALIZED);
/// hosts.set("A.example, 'b.example'").unwrap();
/// assert_eq!(hosts.values(), ["a.example", "b.example"]);
/// assert_eq!(hosts.render(), r#"["a.example", "b.example"]"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSlice {
    values: Vec<String>,
    policy: Policy,
}

impl StringSlice {
    /// Creates an empty list tokenized by `policy`.
    #[must_use]
    pub const fn new(policy: Policy) -> Self {
        Self {
            values: Vec::new(),
            policy,
        }
    }

    /// Collected values in input order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Policy used to split each input.
    #[must_use]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Returns true when nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for StringSlice {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl FlagValue for StringSlice {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let tokens = tokenize(raw, &self.policy)?;
        self.values.extend(tokens);
        Ok(())
    }

    fn render(&self) -> String {
        to_list_string(&self.values)
    }

    fn kind(&self) -> ValueKind {
        ValueKind::List("string[]")
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn to_yaml(&self) -> Value {
        Value::Sequence(self.values.iter().cloned().map(Value::String).collect())
    }
}
