//! Loading and storing the flat YAML document.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde_yaml::{Mapping, Value};

use super::ConfigError;

/// Reads the document at `path`.
///
/// An empty or comment-only file is an empty mapping.
///
/// # Errors
///
/// - [`ConfigError::Read`] when the file cannot be read
/// - [`ConfigError::Decode`] when it is not a YAML mapping
pub fn load(path: &Path) -> Result<Mapping, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes document text.
///
/// # Errors
///
/// Returns the YAML error for invalid syntax or a non-mapping root.
pub fn parse(content: &str) -> Result<Mapping, serde_yaml::Error> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(serde_yaml::Error::custom(format!(
            "expected a mapping at the document root, found {}",
            kind_name(&other)
        ))),
    }
}

/// Entry for the first of `keys` present in `document`.
#[must_use]
pub fn lookup<'a>(document: &'a Mapping, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| document.get(*key))
}

/// Raw strings to feed to `set`, in document order.
///
/// Scalars give one string; sequences give one per scalar element. Nulls,
/// nested mappings and nested sequences give nothing.
#[must_use]
pub fn raw_values(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(scalar).collect(),
        other => scalar(other).into_iter().collect(),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Serializes `mapping` as YAML text.
///
/// # Errors
///
/// Returns [`ConfigError::Encode`] if serialization fails.
pub fn encode(mapping: &Mapping) -> Result<String, ConfigError> {
    serde_yaml::to_string(mapping).map_err(ConfigError::Encode)
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::Write`] on any I/O failure.
pub fn write(path: &Path, content: &str) -> Result<(), ConfigError> {
    let fail = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(fail)?;
    }
    fs::write(path, content).map_err(fail)
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
