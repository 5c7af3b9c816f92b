//! Registration methods.
//!
//! Every method returns a typed [`Flag`] handle. A default that the value's
//! own parser rejects fails the registration with
//! [`FlagError::InvalidDefault`].

use std::time::Duration;

use super::{COMMON_GROUP, CommonFlags, FlagSet, UPDATE_GROUP, UpdateFlags, UpdateGroup};
use crate::FlagError;
use crate::registry::{Descriptor, Flag, FlagId};
use crate::tokenize::Policy;
use crate::value::{
    Auth, Callback, Dynamic, Enum, EnumSlice, FlagValue, Port, RateLimitMap, RuntimeMap,
    Severities, Size, StringSlice, ValueError,
};

impl FlagSet {
    // ==================== Core ====================

    /// Registers an option backed by any [`FlagValue`].
    ///
    /// The current rendering of `value` becomes the default.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn var<T: FlagValue>(
        &mut self,
        long: &str,
        short: &str,
        value: T,
        usage: &str,
    ) -> Result<Flag<T>, FlagError> {
        self.register(Descriptor::new(long, short, usage, Box::new(value)))
    }

    fn register<T: FlagValue>(&mut self, descriptor: Descriptor) -> Result<Flag<T>, FlagError> {
        self.registry.insert(descriptor).map(Flag::new)
    }

    /// Like [`var`](Self::var), applying `default` through the value's parser
    /// first.
    fn parsed_var<T: FlagValue>(
        &mut self,
        long: &str,
        short: &str,
        mut value: T,
        default: &[&str],
        usage: &str,
    ) -> Result<Flag<T>, FlagError> {
        for raw in default {
            value.set(raw).map_err(|source| invalid_default(long, short, source))?;
        }
        self.var(long, short, value, usage)
    }

    // ==================== Scalars ====================

    /// Registers a string option.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn string_var(
        &mut self,
        long: &str,
        short: &str,
        default: &str,
        usage: &str,
    ) -> Result<Flag<String>, FlagError> {
        self.var(long, short, default.to_owned(), usage)
    }

    /// Registers a string option seeded from the environment variable `env`.
    ///
    /// A set variable replaces `default` and becomes the new default, so the
    /// document still applies on top of it.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn string_var_env(
        &mut self,
        long: &str,
        short: &str,
        default: &str,
        env: &str,
        usage: &str,
    ) -> Result<Flag<String>, FlagError> {
        let flag = self.string_var(long, short, default, usage)?;
        self.env_fallback(flag.id(), env)?;
        Ok(flag)
    }

    /// Registers a boolean switch.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn bool_var(
        &mut self,
        long: &str,
        short: &str,
        default: bool,
        usage: &str,
    ) -> Result<Flag<bool>, FlagError> {
        self.var(long, short, default, usage)
    }

    /// Registers an integer option.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn int_var(
        &mut self,
        long: &str,
        short: &str,
        default: i64,
        usage: &str,
    ) -> Result<Flag<i64>, FlagError> {
        self.var(long, short, default, usage)
    }

    /// Registers a floating point option.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn float_var(
        &mut self,
        long: &str,
        short: &str,
        default: f64,
        usage: &str,
    ) -> Result<Flag<f64>, FlagError> {
        self.var(long, short, default, usage)
    }

    /// Registers a duration option (`90s`, `1h30m`, `2d`; bare numbers are seconds).
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn duration_var(
        &mut self,
        long: &str,
        short: &str,
        default: Duration,
        usage: &str,
    ) -> Result<Flag<Duration>, FlagError> {
        self.var(long, short, default, usage)
    }

    // ==================== Lists ====================

    /// Registers a list option tokenized by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] when a default cannot be
    /// tokenized, or a registration error.
    pub fn string_slice_var(
        &mut self,
        long: &str,
        short: &str,
        default: &[&str],
        usage: &str,
        policy: Policy,
    ) -> Result<Flag<StringSlice>, FlagError> {
        self.parsed_var(long, short, StringSlice::new(policy), default, usage)
    }

    /// Registers a list option that is only read from the document.
    ///
    /// It has no command-line surface and is left out of help.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] when a default cannot be
    /// tokenized, or a registration error.
    pub fn string_slice_config_only(
        &mut self,
        long: &str,
        default: &[&str],
        usage: &str,
        policy: Policy,
    ) -> Result<Flag<StringSlice>, FlagError> {
        let mut value = StringSlice::new(policy);
        for raw in default {
            value.set(raw).map_err(|source| invalid_default(long, "", source))?;
        }
        self.register(Descriptor::new(long, "", usage, Box::new(value)).config_only(true))
    }

    /// Registers a port list (`80,443`, `1-1024`, `top-100`, `http`, `full`).
    ///
    /// Not written to generated documents.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] for a bad default, or a
    /// registration error.
    pub fn port_var(
        &mut self,
        long: &str,
        short: &str,
        default: &[&str],
        usage: &str,
    ) -> Result<Flag<Port>, FlagError> {
        self.skip_marshal_var(long, short, Port::default(), default, usage)
    }

    /// Registers a byte size (`2kb`, `10MB`; bare numbers are megabytes).
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] for a bad default, or a
    /// registration error.
    pub fn size_var(
        &mut self,
        long: &str,
        short: &str,
        default: &str,
        usage: &str,
    ) -> Result<Flag<Size>, FlagError> {
        let defaults: &[&str] = if default.is_empty() { &[] } else { &[default] };
        self.parsed_var(long, short, Size::default(), defaults, usage)
    }

    /// Registers per-key rate limits (`key=count/unit`).
    ///
    /// Not written to generated documents.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] for a bad default, or a
    /// registration error.
    pub fn rate_limit_map_var(
        &mut self,
        long: &str,
        short: &str,
        default: &[&str],
        usage: &str,
    ) -> Result<Flag<RateLimitMap>, FlagError> {
        self.skip_marshal_var(long, short, RateLimitMap::default(), default, usage)
    }

    /// Registers a `key=value` map, also readable from a file.
    ///
    /// Not written to generated documents.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] for a bad default, or a
    /// registration error.
    pub fn runtime_map_var(
        &mut self,
        long: &str,
        short: &str,
        default: &[&str],
        usage: &str,
    ) -> Result<Flag<RuntimeMap>, FlagError> {
        self.skip_marshal_var(long, short, RuntimeMap::default(), default, usage)
    }

    /// Registers a severity list (`info,low,medium,high,critical`).
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] for a bad default, or a
    /// registration error.
    pub fn severity_var(
        &mut self,
        long: &str,
        short: &str,
        default: &[&str],
        usage: &str,
    ) -> Result<Flag<Severities>, FlagError> {
        self.parsed_var(long, short, Severities::default(), default, usage)
    }

    fn skip_marshal_var<T: FlagValue>(
        &mut self,
        long: &str,
        short: &str,
        mut value: T,
        default: &[&str],
        usage: &str,
    ) -> Result<Flag<T>, FlagError> {
        for raw in default {
            value.set(raw).map_err(|source| invalid_default(long, short, source))?;
        }
        self.register(Descriptor::new(long, short, usage, Box::new(value)).skip_marshal(true))
    }

    // ==================== Closed sets ====================

    /// Registers a single choice out of `allowed`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] when `default` is not allowed,
    /// or a registration error.
    pub fn enum_var(
        &mut self,
        long: &str,
        short: &str,
        default: &str,
        allowed: &[&str],
        usage: &str,
    ) -> Result<Flag<Enum>, FlagError> {
        let mut value = Enum::new("", allowed.iter().copied());
        if !default.is_empty() {
            value.set(default).map_err(|source| invalid_default(long, short, source))?;
        }
        self.var(long, short, value, usage)
    }

    /// Registers a list of choices out of `allowed`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidDefault`] when a default is not allowed,
    /// or a registration error.
    pub fn enum_slice_var(
        &mut self,
        long: &str,
        short: &str,
        default: &[&str],
        allowed: &[&str],
        usage: &str,
    ) -> Result<Flag<EnumSlice>, FlagError> {
        let value = EnumSlice::new(allowed.iter().copied());
        self.parsed_var(long, short, value, default, usage)
    }

    // ==================== Special ====================

    /// Registers a secret token seeded from `env`.
    ///
    /// A bare `-flag` prompts for the token. Not written to generated
    /// documents.
    ///
    /// # Errors
    ///
    /// Returns a registration error, or [`FlagError::InvalidValue`] when the
    /// environment value is rejected.
    pub fn auth_var(
        &mut self,
        long: &str,
        short: &str,
        env: &str,
        usage: &str,
        value: Auth,
    ) -> Result<Flag<Auth>, FlagError> {
        let flag = self.skip_marshal_var(long, short, value, &[], usage)?;
        if !env.is_empty() {
            self.env_fallback(flag.id(), env)?;
        }
        Ok(flag)
    }

    /// Registers a value whose command-line argument is optional.
    ///
    /// A bare `-flag` stores `when_bare`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn dynamic_var<T: FlagValue>(
        &mut self,
        long: &str,
        short: &str,
        default: T,
        when_bare: T,
        usage: &str,
    ) -> Result<Flag<Dynamic<T>>, FlagError> {
        self.var(long, short, Dynamic::new(default, when_bare), usage)
    }

    /// Registers a switch that runs `action` once parsing is done.
    ///
    /// Not written to generated documents.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MissingBinding`] or [`FlagError::Redefined`].
    pub fn callback_var(
        &mut self,
        long: &str,
        short: &str,
        usage: &str,
        action: impl FnMut() + 'static,
    ) -> Result<Flag<Callback>, FlagError> {
        let value = Box::new(Callback::new(action));
        self.register(Descriptor::new(long, short, usage, value).skip_marshal(true))
    }

    /// Seeds the option behind `id` from the environment variable `env`.
    ///
    /// An unset or empty variable only records the name. A set one is applied
    /// and becomes the option's default.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidValue`] when the value is rejected.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another flag set.
    pub fn env_fallback(&mut self, id: FlagId, env: &str) -> Result<(), FlagError> {
        let raw = std::env::var(env).unwrap_or_default();
        let descriptor = self.registry.get_mut(id);
        if raw.is_empty() {
            descriptor.set_env(env);
            return Ok(());
        }

        let flag = descriptor.long().to_owned();
        tracing::debug!(%flag, env, "Seeding from environment");
        descriptor
            .seed(env, &raw)
            .map_err(|source| FlagError::InvalidValue { flag, source })
    }

    /// Registers `-max-time`/`-mt` under the "common" group.
    ///
    /// A positive value interrupts the process once it has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Redefined`] when the names are taken.
    pub fn add_common_flags(&mut self) -> Result<CommonFlags, FlagError> {
        let max_time = self.duration_var(
            "max-time",
            "mt",
            Duration::ZERO,
            "maximum time to run before automatic termination (e.g., 1h, 30m)",
        )?;
        self.create_group(COMMON_GROUP, "Common", [max_time.id()]);

        let common = CommonFlags { max_time };
        self.common = Some(common);
        Ok(common)
    }

    /// Registers `-update`/`-up` and `-disable-update-check`/`-duc` under the
    /// "update" group.
    ///
    /// Once resolution succeeds, `update` runs when `-update` is on, otherwise
    /// `check` runs. `-disable-update-check` suppresses both.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Redefined`] when the names are taken.
    pub fn new_update_group(
        &mut self,
        tool_name: &str,
        check: impl FnMut() + 'static,
        update: impl FnMut() + 'static,
    ) -> Result<UpdateFlags, FlagError> {
        let update_flag = self.bool_var(
            "update",
            "up",
            false,
            &format!("update {tool_name} to the latest released version"),
        )?;
        let disable_update_check =
            self.bool_var("disable-update-check", "duc", false, "disable automatic update check")?;
        self.create_group(UPDATE_GROUP, "Update", [update_flag.id(), disable_update_check.id()]);

        let flags = UpdateFlags {
            update: update_flag,
            disable_update_check,
        };
        self.update = Some(UpdateGroup {
            flags,
            check: Box::new(check),
            update: Box::new(update),
        });
        Ok(flags)
    }
}

fn invalid_default(long: &str, short: &str, source: ValueError) -> FlagError {
    let flag = if long.is_empty() { short } else { long };
    FlagError::InvalidDefault {
        flag: flag.to_owned(),
        source,
    }
}
