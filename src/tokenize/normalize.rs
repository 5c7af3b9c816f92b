//! Token normalizers and predicates used by the predefined policies.

use super::QUOTES;

/// Returns true when the token holds only whitespace.
#[must_use]
pub fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}

/// Accepts every input.
#[must_use]
pub const fn always(_: &str) -> bool {
    true
}

/// Trims surrounding whitespace and strips a trailing `#` comment.
#[must_use]
pub fn trailing_parts(token: &str) -> String {
    strip_comment(token.trim()).trim().to_owned()
}

/// Standard normalization: trailing parts plus surrounding quote characters.
#[must_use]
pub fn standard(token: &str) -> String {
    strip_comment(token.trim())
        .trim_matches(|c: char| c.is_whitespace() || QUOTES.contains(&c))
        .to_owned()
}

/// Standard normalization followed by lowercasing.
#[must_use]
pub fn lowercase(token: &str) -> String {
    standard(token).to_lowercase()
}

/// Cuts the token at a `#` that starts it or follows whitespace.
fn strip_comment(token: &str) -> &str {
    token
        .char_indices()
        .find(|&(index, c)| c == '#' && (index == 0 || token[..index].ends_with(char::is_whitespace)))
        .map_or(token, |(index, _)| &token[..index])
}
