//! flagstack demo binary.
//!
//! Registers a sample option set, resolves it against the command line and
//! the configuration document, and logs the result.

use std::process::ExitCode;

use flagstack::FlagSet;

mod app;

use app::{apply_verbosity, exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let level = setup_tracing();
    let mut flags = FlagSet::new();
    let options = match app::register(&mut flags) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    // Argument errors and help exit inside `parse`
    if let Err(e) = flags.parse() {
        eprintln!("Configuration error: {e}");
        print_config_hint(&e, &flags);
        return exit_code::CONFIG_ERROR;
    }

    apply_verbosity(&level, flags.value(options.verbose).copied().unwrap_or_default());
    app::report(&flags, &options);
    exit_code::SUCCESS
}
