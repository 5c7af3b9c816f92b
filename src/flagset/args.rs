//! Command-line phase on top of `clap`.
//!
//! Long options take a single dash (`-name value`, `-name=value`, `--name`), so
//! registered names are rewritten to clap's long form before parsing. Each
//! option becomes an `Append` argument keyed by its long name, with the
//! short name as an alias. Raw values are handed back to the descriptor in
//! registration order.

use clap::{Arg, ArgAction, Command};

use super::{FlagSet, usage};
use crate::FlagError;
use crate::registry::{Descriptor, RESERVED, Registry, Source};
use crate::value::ValueKind;

const HELP: &str = "help";
const POSITIONAL: &str = "__args";

/// Parses `args` (binary name first) into `flags`.
pub(super) fn apply(flags: &mut FlagSet, args: &[String]) -> Result<(), FlagError> {
    let (bin, rest) = match args.split_first() {
        Some((bin, rest)) => (bin.clone(), rest),
        None => (flags.app_name.clone(), &[][..]),
    };
    let normalized = normalize(&flags.registry, rest);
    tracing::trace!(?normalized, "Normalized arguments");

    let matches = command(flags)
        .try_get_matches_from(std::iter::once(bin).chain(normalized))?;

    if let Some(query) = matches.get_many::<String>(HELP).and_then(Iterator::last) {
        return Err(FlagError::Help(usage::render(flags, query)));
    }

    for id in flags.registry.ids() {
        let descriptor = flags.registry.get_mut(id);
        if descriptor.is_config_only() {
            continue;
        }
        let Some(values) = matches.get_many::<String>(descriptor.long()) else {
            continue;
        };
        for raw in values {
            if let Err(source) = descriptor.apply(raw, Source::CommandLine) {
                return Err(FlagError::InvalidValue {
                    flag: descriptor.long().to_owned(),
                    source,
                });
            }
        }
    }

    flags.positional = matches
        .get_many::<String>(POSITIONAL)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    Ok(())
}

/// Builds the clap command for every option with a command-line surface.
fn command(flags: &FlagSet) -> Command {
    let help = Arg::new(HELP)
        .long(HELP)
        .alias("h")
        .num_args(0..=1)
        .default_missing_value("")
        .value_name("group|flag")
        .action(ArgAction::Append);
    let positional = Arg::new(POSITIONAL)
        .num_args(0..)
        .action(ArgAction::Append)
        .hide(true);

    flags
        .registry
        .iter()
        .filter(|descriptor| !descriptor.is_config_only())
        .fold(
            Command::new(flags.app_name.clone())
                .disable_help_flag(true)
                .disable_version_flag(true)
                .arg(help)
                .arg(positional),
            |command, descriptor| command.arg(argument(descriptor)),
        )
}

fn argument(descriptor: &Descriptor) -> Arg {
    let value = descriptor.value();
    let mut arg = Arg::new(descriptor.long().to_owned())
        .long(descriptor.long().to_owned())
        .action(ArgAction::Append);
    if let Some(short) = descriptor.short() {
        arg = arg.alias(short.to_owned());
    }

    match value.kind() {
        ValueKind::Bool => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value(value.implicit_value().to_owned()),
        ValueKind::Optional(hint) => arg
            .num_args(0..=1)
            .value_name(hint)
            .default_missing_value(value.implicit_value().to_owned()),
        ValueKind::Single(hint) | ValueKind::List(hint) => arg
            .num_args(1)
            .value_name(hint)
            .allow_hyphen_values(true),
    }
}

/// Rewrites registered `-name` and `-name=value` to `--name` forms.
///
/// The argument following an option that always takes a value is passed
/// through untouched. Rewriting stops at `--`.
fn normalize(registry: &Registry, args: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(args.len());
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            normalized.push(arg.clone());
            normalized.extend(iter.cloned());
            break;
        }

        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            normalized.push(arg.clone());
            continue;
        };
        let (name, inline) = flag.split_once('=').map_or((flag, false), |(name, _)| (name, true));

        let takes_next = if RESERVED.contains(&name) {
            false
        } else {
            match registry.lookup(name).map(|id| registry.get(id)) {
                Some(descriptor) if !descriptor.is_config_only() => matches!(
                    descriptor.value().kind(),
                    ValueKind::Single(_) | ValueKind::List(_)
                ),
                _ => {
                    normalized.push(arg.clone());
                    continue;
                }
            }
        };

        normalized.push(format!("--{flag}"));
        if takes_next && !inline {
            if let Some(value) = iter.next() {
                normalized.push(value.clone());
            }
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let mut flags = FlagSet::with_app_name("tool");
        flags.string_var("target", "t", "", "target").unwrap();
        flags.bool_var("silent", "", false, "silent").unwrap();
        flags.registry
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|&arg| arg.to_owned()).collect()
    }

    #[test]
    fn rewrites_registered_names() {
        let out = normalize(&registry(), &strings(&["-t", "x", "-silent", "-target=y"]));
        assert_eq!(out, ["--t", "x", "--silent", "--target=y"]);
    }

    #[test]
    fn leaves_values_and_unknown_names_alone() {
        let out = normalize(&registry(), &strings(&["-target", "-silent", "-unknown", "pos"]));
        assert_eq!(out, ["--target", "-silent", "-unknown", "pos"]);
    }

    #[test]
    fn stops_at_double_dash() {
        let out = normalize(&registry(), &strings(&["--", "-t", "x"]));
        assert_eq!(out, ["--", "-t", "x"]);
    }

    #[test]
    fn help_names_are_rewritten() {
        let out = normalize(&registry(), &strings(&["-h", "-help=input"]));
        assert_eq!(out, ["--h", "--help=input"]);
    }
}
