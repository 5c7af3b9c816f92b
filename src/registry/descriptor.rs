//! Per-option bookkeeping.

use std::any::Any;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::marker::PhantomData;

use crate::value::{FlagValue, ValueError};

/// Index of a descriptor in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlagId(pub(crate) usize);

/// Typed handle returned at registration.
///
/// Used to read the value back and to put the option into a group.
pub struct Flag<T> {
    id: FlagId,
    marker: PhantomData<fn() -> T>,
}

impl<T> Flag<T> {
    pub(crate) const fn new(id: FlagId) -> Self {
        Self {
            id,
            marker: PhantomData,
        }
    }

    /// Untyped identifier.
    #[must_use]
    pub const fn id(&self) -> FlagId {
        self.id
    }
}

impl<T> Clone for Flag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Flag<T> {}

impl<T> fmt::Debug for Flag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.id.0).finish()
    }
}

impl<T> From<Flag<T>> for FlagId {
    fn from(flag: Flag<T>) -> Self {
        flag.id
    }
}

/// Where the current value of an option came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Compiled-in default
    #[default]
    Default,
    /// Seeded from an environment variable
    Environment,
    /// Applied from the configuration document
    Document,
    /// Given on the command line
    CommandLine,
}

/// A registered option: names, metadata and the owned value.
#[derive(Debug)]
pub struct Descriptor {
    long: String,
    short: Option<String>,
    usage: String,
    group: Option<String>,
    default: String,
    skip_marshal: bool,
    config_only: bool,
    env: Option<String>,
    source: Source,
    touched: bool,
    value: Box<dyn FlagValue>,
}

impl Descriptor {
    /// Creates a descriptor whose default is the current rendering of `value`.
    ///
    /// An empty `short` is treated as absent.
    pub fn new(
        long: impl Into<String>,
        short: impl Into<String>,
        usage: impl Into<String>,
        value: Box<dyn FlagValue>,
    ) -> Self {
        let short: String = short.into();
        Self {
            long: long.into(),
            short: (!short.trim().is_empty()).then_some(short),
            usage: usage.into(),
            group: None,
            default: value.render(),
            skip_marshal: false,
            config_only: false,
            env: None,
            source: Source::Default,
            touched: false,
            value,
        }
    }

    /// Excludes the option from generated configuration documents.
    #[must_use]
    pub const fn skip_marshal(mut self, skip: bool) -> Self {
        self.skip_marshal = skip;
        self
    }

    /// Keeps the option off the command line.
    #[must_use]
    pub const fn config_only(mut self, config_only: bool) -> Self {
        self.config_only = config_only;
        self
    }

    /// Long name, also the document key.
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Short alias.
    #[must_use]
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Help text.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Group name, if assigned.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Rendered default.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Returns true when generated documents leave the option out.
    #[must_use]
    pub const fn is_skip_marshal(&self) -> bool {
        self.skip_marshal
    }

    /// Returns true when the option has no command-line surface.
    #[must_use]
    pub const fn is_config_only(&self) -> bool {
        self.config_only
    }

    /// Environment variable seeding the option.
    #[must_use]
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    /// Origin of the current value.
    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    /// The owned value.
    #[must_use]
    pub fn value(&self) -> &dyn FlagValue {
        self.value.as_ref()
    }

    /// The owned value, downcast to its concrete type.
    #[must_use]
    pub fn downcast_ref<T: FlagValue>(&self) -> Option<&T> {
        let value: &dyn Any = self.value.as_ref();
        value.downcast_ref()
    }

    pub(crate) fn downcast_mut<T: FlagValue>(&mut self) -> Option<&mut T> {
        let value: &mut dyn Any = self.value.as_mut();
        value.downcast_mut()
    }

    /// Current value rendered.
    #[must_use]
    pub fn render(&self) -> String {
        self.value.render()
    }

    /// Returns true while the rendered value still matches the default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value.render().eq_ignore_ascii_case(&self.default)
    }

    /// Structural hash over the fields shown in help text.
    #[must_use]
    pub fn identity(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.long.hash(&mut hasher);
        self.short.hash(&mut hasher);
        self.usage.hash(&mut hasher);
        self.default.hash(&mut hasher);
        hasher.finish()
    }

    /// Merges `raw` into the value and records its origin.
    ///
    /// The first explicit input clears whatever the default accumulated.
    ///
    /// # Errors
    ///
    /// Returns the parser's [`ValueError`]; the source is left unchanged.
    pub fn apply(&mut self, raw: &str, source: Source) -> Result<(), ValueError> {
        if !self.touched {
            self.value.reset();
            self.touched = true;
        }
        self.value.set(raw)?;
        self.source = source;
        Ok(())
    }

    /// Applies an environment value and makes it the new default.
    pub(crate) fn seed(&mut self, env: impl Into<String>, raw: &str) -> Result<(), ValueError> {
        self.env = Some(env.into());
        self.apply(raw, Source::Environment)?;
        self.default = self.value.render();
        self.touched = false;
        Ok(())
    }

    /// Records the environment variable without applying anything.
    pub(crate) fn set_env(&mut self, env: impl Into<String>) {
        self.env = Some(env.into());
    }

    pub(crate) fn set_group(&mut self, group: &str) {
        self.group = Some(group.to_owned());
    }

    /// Uses the short name as long name when no long name was given.
    pub(crate) fn promote_short(&mut self) {
        if self.long.trim().is_empty() {
            if let Some(short) = self.short.take() {
                self.long = short;
            }
        }
    }
}
