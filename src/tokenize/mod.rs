//! Quote-aware tokenization of a single textual argument.
//!
//! A [`Policy`] decides how one raw flag value becomes a list of tokens:
//!
//! - **No behavior set**: the input is exactly one token.
//! - **From file**: when the input names an existing file, each line is a token.
//! - **Raw**: the whole input is one token (still normalized and filtered).
//! - **Default**: the input is split on unescaped commas. A token may be
//!   wrapped in `"`, `'` or `` ` ``; inside the quotes commas do not split and
//!   `\` followed by the active quote yields a literal quote.
//!
//! Every candidate token is then passed through `normalize` and dropped if
//! `is_empty` accepts it. Order is preserved and duplicates are kept.
//!
//! # Examples
//!
//! ```
//! use flagstack::tokenize::{Policy, tokenize};
//!
//! let tokens = tokenize("  `aa`, 'bb',  \"CC\"  ", &Policy::NORMALIZED).unwrap();
//! assert_eq!(tokens, ["aa", "bb", "cc"]);
//! ```

pub mod normalize;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::fmt;
use std::path::Path;

use crate::value::ValueError;

/// Characters that may open and close a quoted token.
pub const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Predicate over a token or over the whole input.
pub type Predicate = fn(&str) -> bool;

/// Token rewrite applied before the emptiness check.
pub type Normalizer = fn(&str) -> String;

/// Set of behaviors controlling how a raw value becomes tokens.
///
/// Policies are plain `Copy` values; the predefined constants cover the
/// common cases and custom ones can be built with the `with_*` methods.
#[derive(Clone, Copy, Default)]
pub struct Policy {
    /// Drops tokens for which this returns true.
    pub is_empty: Option<Predicate>,
    /// Rewrites each candidate token.
    pub normalize: Option<Normalizer>,
    /// Treats the input as a path to a file of tokens, one per line.
    pub is_from_file: Option<Predicate>,
    /// Keeps the input as a single token.
    pub is_raw: Option<Predicate>,
}

impl Policy {
    /// No tokenization, no normalization: `-flag a -flag b` gives `[a, b]`.
    pub const RAW: Self = Self::new();

    /// Comma separated, blank tokens dropped.
    pub const COMMA_SEPARATED: Self = Self::new().with_is_empty(normalize::is_blank);

    /// Comma separated, or one token per line when the value names a file.
    pub const FILE_COMMA_SEPARATED: Self = Self::COMMA_SEPARATED.with_is_from_file(normalize::always);

    /// Comma separated with standard normalization, case preserved.
    pub const NORMALIZED_ORIGINAL: Self = Self::COMMA_SEPARATED.with_normalize(normalize::standard);

    /// Comma separated with standard normalization and lowercasing.
    pub const NORMALIZED: Self = Self::COMMA_SEPARATED.with_normalize(normalize::lowercase);

    /// Lowercased tokens, read from a file when the value names one.
    pub const FILE_NORMALIZED: Self = Self::NORMALIZED.with_is_from_file(normalize::always);

    /// Case-preserving tokens, read from a file when the value names one.
    pub const FILE_NORMALIZED_ORIGINAL: Self =
        Self::NORMALIZED_ORIGINAL.with_is_from_file(normalize::always);

    /// Lines of a file, or the whole value as one token; trailing comments stripped.
    pub const FILE: Self = Self::COMMA_SEPARATED
        .with_normalize(normalize::trailing_parts)
        .with_is_from_file(normalize::always)
        .with_is_raw(normalize::always);

    /// Creates a policy with no behavior set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_empty: None,
            normalize: None,
            is_from_file: None,
            is_raw: None,
        }
    }

    /// Sets the emptiness predicate.
    #[must_use]
    pub const fn with_is_empty(mut self, predicate: Predicate) -> Self {
        self.is_empty = Some(predicate);
        self
    }

    /// Sets the normalizer.
    #[must_use]
    pub const fn with_normalize(mut self, normalizer: Normalizer) -> Self {
        self.normalize = Some(normalizer);
        self
    }

    /// Sets the file predicate.
    #[must_use]
    pub const fn with_is_from_file(mut self, predicate: Predicate) -> Self {
        self.is_from_file = Some(predicate);
        self
    }

    /// Sets the raw predicate.
    #[must_use]
    pub const fn with_is_raw(mut self, predicate: Predicate) -> Self {
        self.is_raw = Some(predicate);
        self
    }

    /// Returns true when the policy leaves the input untouched.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.is_empty.is_none() && self.normalize.is_none() && self.is_from_file.is_none()
    }

    fn reads_file(&self, input: &str) -> bool {
        self.is_from_file.is_some_and(|from_file| from_file(input)) && Path::new(input).is_file()
    }

    fn is_raw_input(&self, input: &str) -> bool {
        self.is_raw.is_some_and(|raw| raw(input))
    }

    fn accept(&self, candidate: &str) -> Option<String> {
        let token = self
            .normalize
            .map_or_else(|| candidate.to_owned(), |normalize| normalize(candidate));
        if self.is_empty.is_some_and(|is_empty| is_empty(&token)) {
            None
        } else {
            Some(token)
        }
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("is_empty", &self.is_empty.is_some())
            .field("normalize", &self.normalize.is_some())
            .field("is_from_file", &self.is_from_file.is_some())
            .field("is_raw", &self.is_raw.is_some())
            .finish()
    }
}

/// Splits `input` into tokens according to `policy`.
///
/// # Errors
///
/// Returns [`ValueError::Malformed`] for an unclosed quote and
/// [`ValueError::Io`] when a token file cannot be read.
pub fn tokenize(input: &str, policy: &Policy) -> Result<Vec<String>, ValueError> {
    if policy.is_identity() {
        return Ok(vec![input.to_owned()]);
    }

    let candidates = if policy.reads_file(input) {
        let content = std::fs::read_to_string(input).map_err(|source| ValueError::Io {
            path: input.into(),
            source,
        })?;
        content.lines().map(str::to_owned).collect()
    } else if policy.is_raw_input(input) {
        vec![input.to_owned()]
    } else {
        split_quoted(input)?
    };

    Ok(candidates
        .iter()
        .filter_map(|candidate| policy.accept(candidate))
        .collect())
}

/// Splits on unescaped commas, honoring quoted tokens.
fn split_quoted(input: &str) -> Result<Vec<String>, ValueError> {
    let mut parts = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        if let Some(quote) = QUOTES.iter().copied().find(|quote| rest.starts_with(*quote)) {
            let body = &rest[quote.len_utf8()..];
            let (part, end) = scan_until(body, quote);
            let Some(end) = end else {
                return Err(ValueError::malformed(input, "unclosed quote"));
            };
            parts.push(part);
            rest = &body[end + quote.len_utf8()..];
        } else {
            let (part, end) = scan_until(rest, ',');
            parts.push(part);
            rest = end.map_or("", |end| &rest[end + 1..]);
        }
    }

    Ok(parts)
}

/// Reads `text` up to the first unescaped `stop`.
///
/// Returns the unescaped text and the byte offset of `stop`, if found.
fn scan_until(text: &str, stop: char) -> (String, Option<usize>) {
    let mut part = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|&(_, next)| next == stop) {
            part.push(stop);
            chars.next();
            continue;
        }
        if c == stop {
            return (part, Some(index));
        }
        part.push(c);
    }

    (part, None)
}

/// Renders tokens as a bracketed, quoted list: `["a", "b"]`.
#[must_use]
pub fn to_list_string(tokens: &[String]) -> String {
    let quoted: Vec<String> = tokens.iter().map(|token| format!("\"{token}\"")).collect();
    format!("[{}]", quoted.join(", "))
}
