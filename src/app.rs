//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, error hints and the
//! sample option set registered by the demo binary.

use std::time::Duration;

use flagstack::config::ConfigError;
use flagstack::tokenize::Policy;
use flagstack::value::{Port, RateLimitMap, RuntimeMap, Severities, Size, StringSlice};
use flagstack::{CommonFlags, Flag, FlagError, FlagSet};
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - bad option, unreadable document, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Handles of the demo options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub targets: Flag<StringSlice>,
    pub ports: Flag<Port>,
    pub severity: Flag<Severities>,
    pub threads: Flag<i64>,
    pub timeout: Flag<Duration>,
    pub response_size: Flag<Size>,
    pub rate_limits: Flag<RateLimitMap>,
    pub vars: Flag<RuntimeMap>,
    pub verbose: Flag<bool>,
    pub common: CommonFlags,
}

/// Registers the demo option set.
///
/// # Errors
///
/// Returns the first registration error.
pub fn register(flags: &mut FlagSet) -> Result<Options, FlagError> {
    flags.set_description(format!(
        "{} resolves its options from the command line and {}",
        flags.app_name(),
        flags.config_file_path().display()
    ));

    let targets = flags.string_slice_var(
        "target",
        "u",
        &[],
        "target hosts to process (comma separated, file)",
        Policy::FILE_NORMALIZED_ORIGINAL,
    )?;
    let ports = flags.port_var("port", "p", &["top-100"], "ports to process (80,443, 100-200, full)")?;
    let severity = flags.severity_var("severity", "s", &[], "severities to run (info,low,medium,high,critical)")?;
    flags.create_group("input", "Input", [targets.id(), ports.id(), severity.id()]);

    let threads = flags.int_var("threads", "c", 25, "number of concurrent workers")?;
    let timeout = flags.duration_var("timeout", "", Duration::from_secs(10), "time to wait for a response")?;
    let response_size = flags.size_var("response-size", "rs", "10mb", "maximum response size to read")?;
    let rate_limits = flags.rate_limit_map_var("rate-limit", "rl", &[], "per-host rate limits (host=count/unit)")?;
    let vars = flags.runtime_map_var("var", "V", &[], "runtime variables (key=value)")?;
    flags.create_group(
        "tuning",
        "Tuning",
        [threads.id(), timeout.id(), response_size.id(), rate_limits.id(), vars.id()],
    );

    let verbose = flags.bool_var("verbose", "v", false, "show debug output")?;
    let common = flags.add_common_flags()?;

    let tool = flags.app_name().to_owned();
    flags.new_update_group(
        &tool.clone(),
        || tracing::debug!("No release channel configured, skipping update check"),
        move || tracing::warn!("{tool} has no release channel to update from"),
    )?;

    Ok(Options {
        targets,
        ports,
        severity,
        threads,
        timeout,
        response_size,
        rate_limits,
        vars,
        verbose,
        common,
    })
}

/// Logs the origin of every option and a summary of the resolved run.
pub fn report(flags: &FlagSet, options: &Options) {
    for descriptor in flags.registry().iter() {
        tracing::debug!(
            source = ?descriptor.source(),
            "{} = {}",
            descriptor.long(),
            descriptor.render()
        );
    }

    let targets = flags.value(options.targets).map_or(0, |targets| targets.values().len());
    let ports = flags.value(options.ports).map_or(0, Port::len);
    let severities = flags.value(options.severity).map(|s| s.0.clone()).unwrap_or_default();
    tracing::info!(targets, ports, ?severities, "Resolved input");

    let threads = flags.value(options.threads).copied().unwrap_or_default();
    let timeout = flags.value(options.timeout).copied().unwrap_or_default();
    let response_size = flags.value(options.response_size).map_or(0, |size| size.bytes());
    let limited_hosts = flags.value(options.rate_limits).map_or(0, |limits| limits.as_map().len());
    let vars = flags.value(options.vars).map_or(0, |vars| vars.as_map().len());
    tracing::info!(threads, ?timeout, response_size, limited_hosts, vars, "Resolved tuning");

    if let Some(max_time) = flags.value(options.common.max_time).filter(|d| !d.is_zero()) {
        tracing::info!(?max_time, "Run is limited");
    }
    if !flags.args().is_empty() {
        tracing::info!(args = ?flags.args(), "Positional arguments");
    }
}

/// Prints helpful hints for common resolution errors.
pub fn print_config_hint(error: &FlagError, flags: &FlagSet) {
    match error {
        FlagError::InvalidValue { .. } => {
            eprintln!(
                "\nCheck the value on the command line or in {}.",
                flags.config_file_path().display()
            );
        }
        FlagError::Config(ConfigError::Write { path, .. } | ConfigError::Read { path, .. }) => {
            eprintln!(
                "\nCheck the permissions of {}, or pick another document path.",
                path.display()
            );
        }
        _ => {}
    }
}

/// Handle used to raise the log level once `-verbose` is known.
pub type LevelHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Sets up the tracing subscriber for logging at `INFO`.
///
/// Installed before parsing so that events emitted while the configuration
/// document is resolved are not lost.
pub fn setup_tracing() -> LevelHandle {
    let (filter, handle) = reload::Layer::new(env_filter(Level::INFO));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
    handle
}

/// Switches to `DEBUG` when `verbose` is set.
pub fn apply_verbosity(handle: &LevelHandle, verbose: bool) {
    if !verbose {
        return;
    }
    if let Err(e) = handle.reload(env_filter(Level::DEBUG)) {
        tracing::warn!("Failed to raise log level: {e}");
    }
}
