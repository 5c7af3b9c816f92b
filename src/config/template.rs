//! Text of a freshly generated document.

/// One option as it appears in a generated document.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Document key (long name)
    pub key: &'a str,
    /// Help text, written as a comment
    pub usage: &'a str,
    /// Current value rendered
    pub value: &'a str,
}

/// Leading comment naming the application.
#[must_use]
pub fn header(app: &str) -> String {
    format!("# {app} config file\n# generated by {}\n\n", env!("CARGO_PKG_NAME"))
}

/// Commented-out layout: every entry disabled, preceded by its usage.
///
/// ```text
/// # target host to scan
/// #target: example.com
/// ```
#[must_use]
pub fn commented<'a>(entries: impl IntoIterator<Item = Entry<'a>>) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str("# ");
        out.push_str(&entry.usage.to_lowercase());
        out.push_str("\n#");
        out.push_str(entry.key);
        out.push_str(": ");
        out.push_str(entry.value);
        out.push_str("\n\n");
    }
    if out.ends_with("\n\n") {
        out.truncate(out.len() - 2);
    }
    out
}
