//! Per-key request budgets: `key=count/unit`.

use std::collections::BTreeMap;
use std::time::Duration;

use super::{FlagValue, ValueError, ValueKind, duration};
use crate::tokenize::{Policy, tokenize};

/// At most `max_count` events per `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Events allowed per window
    pub max_count: u64,
    /// Window length
    pub duration: Duration,
}

impl RateLimit {
    /// Parses `count/unit`, e.g. `10/m` or `2/d`.
    ///
    /// The unit may also carry its own magnitude (`5/30s`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Malformed`] when the `/` is missing, the count
    /// is not a non-negative integer or the unit is unknown.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let (count, unit) = raw
            .split_once('/')
            .ok_or_else(|| ValueError::malformed(raw, "expected <count>/<unit>"))?;

        let max_count = count
            .trim()
            .parse()
            .map_err(|e| ValueError::malformed(raw, format!("invalid count: {e}")))?;

        let unit = unit.trim();
        if unit.is_empty() {
            return Err(ValueError::malformed(raw, "missing unit"));
        }
        let window = if unit.starts_with(|c: char| c.is_ascii_digit()) {
            duration::parse(unit)
        } else {
            duration::parse(&format!("1{unit}"))
        }
        .map_err(|_| ValueError::malformed(raw, format!("unknown unit '{unit}'")))?;

        Ok(Self {
            max_count,
            duration: window,
        })
    }
}

/// Rate limits keyed by name.
///
/// Input is comma separated; a key given twice keeps the last limit.
///
/// ```
/// use std::time::Duration;
/// use flagstack::value::{FlagValue, RateLimitMap};
///
/// let mut limits = RateLimitMap::default();
/// limits.set("hackertarget=10/m").unwrap();
/// let limit = limits.get("hackertarget").unwrap();
/// assert_eq!(limit.max_count, 10);
/// assert_eq!(limit.duration, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitMap {
    limits: BTreeMap<String, RateLimit>,
}

impl RateLimitMap {
    /// Limit for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RateLimit> {
        self.limits.get(key)
    }

    /// All limits, sorted by key.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, RateLimit> {
        &self.limits
    }

    /// Removes `key`, returning its limit.
    pub fn del(&mut self, key: &str) -> Option<RateLimit> {
        self.limits.remove(key)
    }

    /// Returns true when no limit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FlagValue for RateLimitMap {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let mut parsed = Vec::new();
        for entry in tokenize(raw, &Policy::COMMA_SEPARATED)? {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ValueError::malformed(&entry, "expected <key>=<count>/<unit>"))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ValueError::malformed(&entry, "empty key"));
            }
            parsed.push((key.to_owned(), RateLimit::parse(value)?));
        }
        self.limits.extend(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.limits
            .iter()
            .map(|(key, limit)| {
                format!("{key}={}/{}", limit.max_count, duration::format(limit.duration))
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn kind(&self) -> ValueKind {
        ValueKind::List("value")
    }
}
