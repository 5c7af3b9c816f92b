//! Document phase: path resolution, migration, bootstrap and merge.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::FlagSet;
use crate::FlagError;
use crate::config::template::{self, Entry};
use crate::config::{ConfigError, document, paths};
use crate::registry::Source;

impl FlagSet {
    /// Document path in effect: the override, or the platform default.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| paths::config_file_path(&self.app_name))
    }

    /// Bootstraps or merges the document, after the command line was applied.
    pub(super) fn resolve(&mut self) -> Result<(), FlagError> {
        if self.config_path.is_none() {
            self.migrate_legacy_dir();
        }

        let path = self.config_file_path();
        if path.exists() {
            self.merge_config_file(&path)
        } else {
            self.write_config_file(&path)?;
            tracing::info!(path = %path.display(), "Generated configuration file");
            Ok(())
        }
    }

    fn migrate_legacy_dir(&self) {
        let Some(legacy) = paths::legacy_config_dir(&self.app_name) else {
            return;
        };
        let target = paths::app_config_dir(&self.app_name);
        match paths::migrate(&legacy, &target) {
            Ok(true) => tracing::debug!(
                from = %legacy.display(),
                to = %target.display(),
                "Migrated legacy configuration directory"
            ),
            Ok(false) => {}
            Err(e) => tracing::warn!("Ignoring failed configuration migration: {e}"),
        }
    }

    // ==================== Generation ====================

    /// Text of a document holding every option's current value.
    ///
    /// Options registered as skip-marshal are left out. With
    /// [`set_marshal`](Self::set_marshal) the values form a YAML mapping;
    /// otherwise each entry is commented out under its usage text.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Config`] when YAML encoding fails.
    pub fn generate_document(&self) -> Result<String, FlagError> {
        let entries = self
            .registry
            .iter()
            .filter(|descriptor| !descriptor.is_skip_marshal());

        let body = if self.marshal {
            let mapping: Mapping = entries
                .map(|descriptor| {
                    (
                        Value::String(descriptor.long().to_owned()),
                        descriptor.value().to_yaml(),
                    )
                })
                .collect();
            document::encode(&mapping)?
        } else {
            let rendered: Vec<(&str, &str, String)> = entries
                .map(|descriptor| (descriptor.long(), descriptor.usage(), descriptor.render()))
                .collect();
            let mut body = template::commented(rendered.iter().map(|(key, usage, value)| Entry {
                key,
                usage,
                value,
            }));
            body.push('\n');
            body
        };

        Ok(template::header(&self.app_name) + &body)
    }

    /// Writes [`generate_document`](Self::generate_document) to `path`,
    /// creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Config`] when encoding or writing fails.
    pub fn write_config_file(&self, path: &Path) -> Result<(), FlagError> {
        let content = self.generate_document()?;
        document::write(path, &content)?;
        Ok(())
    }

    // ==================== Merge ====================

    /// Merges the document at `path` into options still at their default.
    ///
    /// A document that is not a valid YAML mapping is logged and ignored.
    ///
    /// # Errors
    ///
    /// - [`FlagError::Config`] when the file cannot be read
    /// - [`FlagError::InvalidValue`] when an entry is rejected
    pub fn merge_config_file(&mut self, path: &Path) -> Result<(), FlagError> {
        let mapping = match document::load(path) {
            Ok(mapping) => mapping,
            Err(e @ ConfigError::Decode { .. }) => {
                tracing::warn!("Ignoring configuration file: {e}");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        self.merge_document(&mapping)
    }

    /// Applies `mapping` to options that were not given on the command line
    /// and still hold their default.
    ///
    /// Entries are looked up by long name, then short name. Sequences are
    /// applied one element at a time.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidValue`] when an entry is rejected; earlier
    /// entries stay applied.
    pub fn merge_document(&mut self, mapping: &Mapping) -> Result<(), FlagError> {
        for descriptor in self.registry.iter_mut() {
            if descriptor.source() == Source::CommandLine || !descriptor.is_default() {
                continue;
            }

            let keys: Vec<&str> = std::iter::once(descriptor.long())
                .chain(descriptor.short())
                .collect();
            let Some(value) = document::lookup(mapping, &keys) else {
                continue;
            };
            let raws = document::raw_values(value);
            if raws.is_empty() {
                continue;
            }

            for raw in &raws {
                if let Err(source) = descriptor.apply(raw, Source::Document) {
                    return Err(FlagError::InvalidValue {
                        flag: descriptor.long().to_owned(),
                        source,
                    });
                }
            }
            tracing::debug!(flag = %descriptor.long(), values = ?raws, "Applied configuration value");
        }
        Ok(())
    }
}
