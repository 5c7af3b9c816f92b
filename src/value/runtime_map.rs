//! Free-form `key=value` pairs, optionally loaded from a file.

use std::collections::BTreeMap;
use std::path::Path;

use super::{FlagValue, ValueError, ValueKind};

/// String map filled one `key=value` at a time.
///
/// The split happens on the first `=`, so values may contain `=` and may be
/// empty. An input without a usable `=` that names an existing file is read
/// line by line; lines without a key are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeMap {
    entries: BTreeMap<String, String>,
}

impl RuntimeMap {
    /// Value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All entries, sorted by key.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Removes `key`, returning its value.
    pub fn del(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns true when the map holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits on the first `=` when it is preceded by a key.
fn split_pair(text: &str) -> Option<(&str, &str)> {
    text.split_once('=').filter(|(key, _)| !key.is_empty())
}

impl FlagValue for RuntimeMap {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        if let Some((key, value)) = split_pair(raw) {
            self.entries.insert(key.to_owned(), value.to_owned());
            return Ok(());
        }

        if !Path::new(raw).is_file() {
            return Err(ValueError::malformed(raw, "expected <key>=<value> or a file of such lines"));
        }

        let content = std::fs::read_to_string(raw).map_err(|source| ValueError::Io {
            path: raw.into(),
            source,
        })?;
        for (key, value) in content.lines().filter_map(split_pair) {
            self.entries.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn render(&self) -> String {
        let items: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| format!("\"{key}\"=\"{value}\""))
            .collect();
        format!("{{{}}}", items.join(", "))
    }

    fn kind(&self) -> ValueKind {
        ValueKind::List("value")
    }
}
