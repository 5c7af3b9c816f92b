//! The flag set: registration, argument parsing and document resolution.
//!
//! A run goes through these phases, in order:
//!
//! 1. **Arguments**: command-line values are applied and tagged as such.
//! 2. **Callbacks**: enabled [`Callback`] switches run their action.
//! 3. **Path**: the document path is resolved; without an override, a legacy
//!    `~/.config/<app>` directory is migrated once.
//! 4. **Bootstrap or merge**: a missing document is generated from the
//!    current values; an existing one fills options still at their default.
//! 5. **Update**: with an update group, the update or the update check runs.
//! 6. **Timer**: a positive `max-time` arms the interrupt.
//!
//! # Example
//!
//! ```no_run
//! use flagstack::FlagSet;
//!
//! let mut flags = FlagSet::new();
//! flags.set_description("Scans things");
//! let target = flags.string_var("target", "t", "", "target to scan").unwrap();
//! let threads = flags.int_var("threads", "c", 25, "worker count").unwrap();
//! flags.create_group("input", "Input", [target.id(), threads.id()]);
//! flags.parse().unwrap();
//!
//! println!("{} with {}", flags.value(target).unwrap(), flags.value(threads).unwrap());
//! ```

mod args;
mod register;
mod resolve;
mod usage;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::FlagError;
use crate::config::paths;
use crate::interrupt::{self, Interrupt, SignalInterrupt};
use crate::registry::{Descriptor, Flag, FlagId, Registry};
use crate::value::{Callback, FlagValue};

/// Name of the group holding the common flags.
pub const COMMON_GROUP: &str = "common";

/// Options shared by every tool, registered by [`FlagSet::add_common_flags`].
#[derive(Debug, Clone, Copy)]
pub struct CommonFlags {
    /// `-max-time`/`-mt`: interrupt the process after this long; zero disables
    pub max_time: Flag<Duration>,
}

/// Name of the group holding the update switches.
pub const UPDATE_GROUP: &str = "update";

/// Self-update switches, registered by [`FlagSet::new_update_group`].
#[derive(Debug, Clone, Copy)]
pub struct UpdateFlags {
    /// `-update`/`-up`: run the update action instead of the check
    pub update: Flag<bool>,
    /// `-disable-update-check`/`-duc`: run neither action
    pub disable_update_check: Flag<bool>,
}

/// Update switches with the actions they select between.
struct UpdateGroup {
    flags: UpdateFlags,
    check: Box<dyn FnMut()>,
    update: Box<dyn FnMut()>,
}

/// A set of options bound to the command line and a configuration document.
pub struct FlagSet {
    registry: Registry,
    app_name: String,
    description: String,
    custom_help: Option<String>,
    other_group_name: String,
    marshal: bool,
    config_path: Option<PathBuf>,
    positional: Vec<String>,
    common: Option<CommonFlags>,
    update: Option<UpdateGroup>,
    interrupter: Arc<dyn Interrupt>,
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("app_name", &self.app_name)
            .field("options", &self.registry.len())
            .field("marshal", &self.marshal)
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagSet {
    /// Creates an empty flag set named after the running binary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_app_name(paths::app_name())
    }

    /// Creates an empty flag set with an explicit application name.
    ///
    /// The name is used in help text, in the document header and in the
    /// default document path.
    #[must_use]
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            registry: Registry::new(),
            app_name: app_name.into(),
            description: String::new(),
            custom_help: None,
            other_group_name: "other options".to_owned(),
            marshal: false,
            config_path: None,
            positional: Vec::new(),
            common: None,
            update: None,
            interrupter: Arc::new(SignalInterrupt),
        }
    }

    // ==================== Settings ====================

    /// Sets the text printed at the top of help.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets text appended after the option list in help.
    pub fn set_custom_help_text(&mut self, text: impl Into<String>) {
        self.custom_help = Some(text.into());
    }

    /// Matches help queries exactly instead of case-insensitively.
    pub const fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.registry.set_case_sensitive(case_sensitive);
    }

    /// Writes generated documents as a native YAML mapping.
    ///
    /// The default layout comments every entry out under its usage text.
    pub const fn set_marshal(&mut self, marshal: bool) {
        self.marshal = marshal;
    }

    /// Heading for options outside any group.
    pub fn set_other_group_name(&mut self, name: impl Into<String>) {
        self.other_group_name = name.into();
    }

    /// Uses `path` as the document instead of the platform default.
    ///
    /// Legacy directory migration is skipped when an override is set.
    pub fn set_config_file_path(&mut self, path: impl Into<PathBuf>) {
        self.config_path = Some(path.into());
    }

    /// Replaces the interrupter used by `max-time`.
    pub fn set_interrupter(&mut self, interrupter: Arc<dyn Interrupt>) {
        self.interrupter = interrupter;
    }

    // ==================== Access ====================

    /// Application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current value of `flag`.
    ///
    /// Returns `None` for a handle issued by another flag set.
    #[must_use]
    pub fn value<T: FlagValue>(&self, flag: Flag<T>) -> Option<&T> {
        self.descriptor(flag.id())?.downcast_ref()
    }

    /// Descriptor behind `id`.
    #[must_use]
    pub fn descriptor(&self, id: FlagId) -> Option<&Descriptor> {
        (id.0 < self.registry.len()).then(|| self.registry.get(id))
    }

    /// Descriptor registered under `name`, honoring case sensitivity.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Descriptor> {
        self.registry.find(name)
    }

    /// Names containing `term`.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&str> {
        self.registry.search(term)
    }

    /// Positional arguments left after the options.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.positional
    }

    /// Common flags, if registered.
    #[must_use]
    pub const fn common_flags(&self) -> Option<CommonFlags> {
        self.common
    }

    /// Update switches, if registered.
    #[must_use]
    pub fn update_flags(&self) -> Option<UpdateFlags> {
        self.update.as_ref().map(|group| group.flags)
    }

    // ==================== Groups ====================

    /// Declares a group, or renames an existing group's heading.
    pub fn set_group(&mut self, name: &str, description: &str) {
        self.registry.set_group(name, description);
    }

    /// Declares a group and moves `flags` into it.
    pub fn create_group(
        &mut self,
        name: &str,
        description: &str,
        flags: impl IntoIterator<Item = FlagId>,
    ) {
        self.registry.set_group(name, description);
        for id in flags {
            if self.descriptor(id).is_some() {
                self.registry.assign(id, name);
            }
        }
    }

    // ==================== Parsing ====================

    /// Parses the process arguments and resolves the document.
    ///
    /// Exits the process on malformed arguments and after printing help.
    ///
    /// # Errors
    ///
    /// Returns document and merge errors.
    pub fn parse(&mut self) -> Result<(), FlagError> {
        self.parse_from(std::env::args_os())
    }

    /// Like [`parse`](Self::parse) with explicit arguments; the first one is
    /// the binary name.
    ///
    /// # Errors
    ///
    /// Returns document and merge errors.
    pub fn parse_from<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        if let Err(e) = self.parse_arguments(args) {
            exit_with(e);
        }
        self.finish()
    }

    /// Parses `args` and resolves the document without exiting.
    ///
    /// # Errors
    ///
    /// - [`FlagError::Help`] when help was requested
    /// - [`FlagError::Cli`] for malformed arguments
    /// - [`FlagError::InvalidValue`] when a value is rejected
    /// - [`FlagError::Config`] when the document cannot be read or written
    pub fn try_parse_from<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.parse_arguments(args)?;
        self.finish()
    }

    fn parse_arguments<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .collect();
        args::apply(self, &args)
    }

    fn finish(&mut self) -> Result<(), FlagError> {
        self.fire_callbacks();
        self.resolve()?;
        self.run_update_actions();
        self.start_common_handlers();
        Ok(())
    }

    fn fire_callbacks(&mut self) {
        for descriptor in self.registry.iter_mut() {
            let long = descriptor.long().to_owned();
            if let Some(callback) = descriptor.downcast_mut::<Callback>() {
                if callback.fire() {
                    tracing::debug!(flag = %long, "Ran callback");
                }
            }
        }
    }

    fn run_update_actions(&mut self) {
        let Some(flags) = self.update_flags() else {
            return;
        };
        let enabled = |flag: Flag<bool>| self.value(flag).copied().unwrap_or_default();
        let (update, disabled) = (enabled(flags.update), enabled(flags.disable_update_check));

        let Some(group) = self.update.as_mut() else {
            return;
        };
        if disabled {
            tracing::debug!("Update check disabled");
        } else if update {
            (group.update)();
        } else {
            (group.check)();
        }
    }

    fn start_common_handlers(&self) {
        let Some(common) = self.common else {
            return;
        };
        let max_time = self.value(common.max_time).copied().unwrap_or_default();
        if !max_time.is_zero() {
            interrupt::arm(max_time, Arc::clone(&self.interrupter));
        }
    }
}

/// Terminates the process for an argument-phase error.
fn exit_with(error: FlagError) -> ! {
    match error {
        FlagError::Cli(e) => e.exit(),
        FlagError::Help(text) => {
            print!("{text}");
            std::process::exit(0)
        }
        other => {
            clap::Error::raw(clap::error::ErrorKind::ValueValidation, format!("{other}\n")).exit()
        }
    }
}
