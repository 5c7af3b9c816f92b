//! Severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::{FlagValue, ValueError, ValueKind};
use crate::tokenize::{Policy, tokenize};

/// A finding severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Info,
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
    /// Critical
    Critical,
}

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Self; 5] = [Self::Info, Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for Severity {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == name)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.into_iter().map(Self::as_str).collect();
                ValueError::malformed(s, format!("allowed values are {}", allowed.join(", ")))
            })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of severities; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Severities(pub Vec<Severity>);

impl Severities {
    /// Returns true if `severity` was selected.
    #[must_use]
    pub fn contains(&self, severity: Severity) -> bool {
        self.0.contains(&severity)
    }
}

impl FlagValue for Severities {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let parsed = tokenize(raw, &Policy::NORMALIZED)?
            .iter()
            .map(|token| token.parse())
            .collect::<Result<Vec<Severity>, _>>()?;
        self.0.extend(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn kind(&self) -> ValueKind {
        ValueKind::List("value")
    }

    fn reset(&mut self) {
        self.0.clear();
    }

    fn to_yaml(&self) -> Value {
        Value::Sequence(self.0.iter().map(|s| Value::String(s.to_string())).collect())
    }
}
