//! Help text.
//!
//! ```text
//! Scans things
//!
//! Usage:
//!   tool [flags]
//!
//! Flags:
//! INPUT:
//!    -t, -target string  target to scan
//!    -c, -threads int    worker count (default 25)
//! ```

use super::FlagSet;
use crate::registry::{Descriptor, Group};
use crate::value::ValueKind;

/// Rendered defaults that are not worth showing.
const ZERO_DEFAULTS: [&str; 6] = ["", "0", "false", "[]", "0s", "{}"];

/// Help for `query`: a group, a single option, or everything when the query
/// is empty or matches nothing.
pub(super) fn render(flags: &FlagSet, query: &str) -> String {
    let mut out = String::new();
    if !flags.description.is_empty() {
        out.push_str(&format!("{}\n\n", flags.description));
    }
    out.push_str(&format!("Usage:\n  {} [flags]\n\nFlags:\n", flags.app_name));

    let query = query.trim();
    let registry = &flags.registry;
    if !query.is_empty() {
        if let Some(group) = registry.find_group(query) {
            out.push_str(&section(&group.description, &members(flags, group)));
            return finish(flags, out);
        }
        if let Some(descriptor) = registry.find(query).filter(|d| !d.is_config_only()) {
            out.push_str(&rows(&[descriptor]));
            return finish(flags, out);
        }
    }

    if registry.groups().is_empty() {
        out.push_str(&rows(&visible(flags)));
        return finish(flags, out);
    }

    for group in registry.groups() {
        out.push_str(&section(&group.description, &members(flags, group)));
        out.push('\n');
    }
    let others: Vec<&Descriptor> = visible(flags)
        .into_iter()
        .filter(|descriptor| {
            descriptor
                .group()
                .is_none_or(|name| registry.groups().iter().all(|group| !group.name.eq_ignore_ascii_case(name)))
        })
        .collect();
    if !others.is_empty() {
        out.push_str(&section(&flags.other_group_name, &others));
    }
    finish(flags, out)
}

fn finish(flags: &FlagSet, mut out: String) -> String {
    if let Some(custom) = &flags.custom_help {
        out.push('\n');
        out.push_str(custom);
        if !custom.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Deduplicated options with a command-line surface.
fn visible(flags: &FlagSet) -> Vec<&Descriptor> {
    flags
        .registry
        .unique()
        .into_iter()
        .filter(|descriptor| !descriptor.is_config_only())
        .collect()
}

fn members<'a>(flags: &'a FlagSet, group: &Group) -> Vec<&'a Descriptor> {
    visible(flags)
        .into_iter()
        .filter(|descriptor| {
            descriptor
                .group()
                .is_some_and(|name| name.eq_ignore_ascii_case(&group.name))
        })
        .collect()
}

fn section(heading: &str, descriptors: &[&Descriptor]) -> String {
    format!("{}:\n{}", heading.to_uppercase(), rows(descriptors))
}

/// One aligned row per descriptor.
fn rows(descriptors: &[&Descriptor]) -> String {
    let names: Vec<String> = descriptors.iter().map(|d| names_column(d)).collect();
    let width = names.iter().map(|column| column.chars().count()).max().unwrap_or(0);
    let continuation = format!("\n{}", " ".repeat(width + 5));

    descriptors
        .iter()
        .zip(&names)
        .map(|(descriptor, column)| {
            let usage = descriptor.usage().replace('\n', &continuation);
            format!("   {column:<width$}  {usage}{}\n", default_suffix(descriptor))
        })
        .collect()
}

/// `-t, -target string`
fn names_column(descriptor: &Descriptor) -> String {
    let mut text = descriptor
        .short()
        .into_iter()
        .chain(Some(descriptor.long()))
        .map(|name| format!("-{name}"))
        .collect::<Vec<_>>()
        .join(", ");
    let hint = descriptor.value().kind().hint();
    if !hint.is_empty() {
        text.push(' ');
        text.push_str(hint);
    }
    text
}

/// ` (default x)`, or nothing for zero-like defaults.
fn default_suffix(descriptor: &Descriptor) -> String {
    let default = descriptor.default_value();
    if ZERO_DEFAULTS.contains(&default) {
        return String::new();
    }
    match descriptor.value().kind() {
        ValueKind::Single("string") => format!(" (default {default:?})"),
        _ => format!(" (default {default})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> FlagSet {
        let mut flags = FlagSet::with_app_name("tool");
        flags.set_description("Scans things");
        flags.string_var("target", "t", "", "target to scan").unwrap();
        flags.int_var("threads", "c", 25, "worker count").unwrap();
        flags.bool_var("silent", "", false, "no output").unwrap();
        flags
    }

    #[test]
    fn flat_listing_without_groups() {
        let text = render(&flags(), "");
        assert!(text.starts_with("Scans things\n\nUsage:\n  tool [flags]\n\nFlags:\n"));
        assert!(text.contains("   -t, -target string  target to scan\n"));
        assert!(text.contains("   -c, -threads int    worker count (default 25)\n"));
        assert!(text.contains("   -silent             no output\n"));
    }

    #[test]
    fn string_defaults_are_quoted() {
        let mut flags = FlagSet::with_app_name("tool");
        flags.string_var("name", "", "x y", "name").unwrap();
        assert!(render(&flags, "").contains("name (default \"x y\")"));
    }

    #[test]
    fn grouped_listing_with_other_options() {
        let mut flags = flags();
        let id = flags.registry.lookup("target").unwrap();
        flags.create_group("input", "Input", [id]);

        let text = render(&flags, "");
        let input = text.find("INPUT:\n").unwrap();
        let other = text.find("OTHER OPTIONS:\n").unwrap();
        assert!(input < other);
        assert!(text[input..other].contains("-target"));
        assert!(text[other..].contains("-threads"));
    }

    #[test]
    fn query_selects_group_or_flag() {
        let mut flags = flags();
        let id = flags.registry.lookup("threads").unwrap();
        flags.create_group("perf", "Performance", [id]);

        let group = render(&flags, "performance");
        assert!(group.contains("PERFORMANCE:\n"));
        assert!(!group.contains("-target"));

        let single = render(&flags, "T");
        assert!(single.contains("-t, -target string"));
        assert!(!single.contains("-threads"));

        assert!(render(&flags, "nothing").contains("-silent"));
    }

    #[test]
    fn custom_text_is_appended() {
        let mut flags = flags();
        flags.set_custom_help_text("See the docs.");
        assert!(render(&flags, "").ends_with("\nSee the docs.\n"));
    }
}
