//! Values restricted to a closed set of names.

use serde_yaml::Value;

use super::{FlagValue, ValueError, ValueKind};
use crate::tokenize::{Policy, tokenize};

fn not_allowed(raw: &str, allowed: &[String]) -> ValueError {
    ValueError::malformed(raw, format!("allowed values are {}", allowed.join(", ")))
}

/// One name out of `allowed`, matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    value: String,
    allowed: Vec<String>,
}

impl Enum {
    /// Creates an enum holding `initial`; an empty `initial` means unset.
    pub fn new<I, S>(initial: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: initial.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected name; empty when unset.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Accepted names.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl FlagValue for Enum {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        if !self.allowed.iter().any(|name| name == raw) {
            return Err(not_allowed(raw, &self.allowed));
        }
        raw.clone_into(&mut self.value);
        Ok(())
    }

    fn render(&self) -> String {
        self.value.clone()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Single("value")
    }

    /// An unset choice is written as `null`, which the merge skips.
    fn to_yaml(&self) -> Value {
        if self.value.is_empty() {
            Value::Null
        } else {
            Value::String(self.value.clone())
        }
    }
}

/// Comma separated names out of `allowed`, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSlice {
    values: Vec<String>,
    allowed: Vec<String>,
}

impl EnumSlice {
    /// Creates an empty list over `allowed`.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: Vec::new(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected names in input order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl FlagValue for EnumSlice {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let mut parsed = Vec::new();
        for token in tokenize(raw, &Policy::NORMALIZED)? {
            let name = self
                .allowed
                .iter()
                .find(|name| name.eq_ignore_ascii_case(&token))
                .ok_or_else(|| not_allowed(&token, &self.allowed))?;
            parsed.push(name.clone());
        }
        self.values.extend(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.values.join(",")
    }

    fn kind(&self) -> ValueKind {
        ValueKind::List("value")
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn to_yaml(&self) -> Value {
        Value::Sequence(self.values.iter().cloned().map(Value::String).collect())
    }
}
