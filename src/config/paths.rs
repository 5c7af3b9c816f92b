//! Where the configuration document lives.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::ConfigError;

/// File name of the document inside the application directory.
pub const FILE_NAME: &str = "config.yaml";

/// Application name used when the binary path gives none.
const FALLBACK_APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application name: the file stem of the running binary.
#[must_use]
pub fn app_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|argv0| app_name_from(Path::new(&argv0)))
        .unwrap_or_else(|| FALLBACK_APP_NAME.to_owned())
}

/// File stem of `binary`, e.g. `tool` for `/usr/bin/tool.exe`.
#[must_use]
pub fn app_name_from(binary: &Path) -> Option<String> {
    binary
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Platform configuration directory for `app`.
///
/// Falls back to the working directory when the platform has none.
#[must_use]
pub fn app_config_dir(app: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app)
}

/// Default document path: `<config dir>/<app>/config.yaml`.
#[must_use]
pub fn config_file_path(app: &str) -> PathBuf {
    app_config_dir(app).join(FILE_NAME)
}

/// Pre-migration directory: `~/.config/<app>`.
#[must_use]
pub fn legacy_config_dir(app: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(app))
}

/// Copies `from` into `to` once.
///
/// Nothing happens unless `from` is an existing directory, `to` does not
/// exist yet, and the two differ. Returns whether a copy was made.
///
/// # Errors
///
/// Returns [`ConfigError::Migrate`] when walking or copying fails.
pub fn migrate(from: &Path, to: &Path) -> Result<bool, ConfigError> {
    if from == to || !from.is_dir() || to.exists() {
        return Ok(false);
    }

    let fail = |source: std::io::Error| ConfigError::Migrate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    for entry in WalkDir::new(from) {
        let entry = entry.map_err(|e| fail(e.into()))?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(fail)?;
        } else {
            fs::copy(entry.path(), &target).map_err(fail)?;
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn app_name_is_binary_stem() {
        assert_eq!(app_name_from(Path::new("/usr/bin/nuclei")).as_deref(), Some("nuclei"));
        assert_eq!(app_name_from(Path::new("tool.exe")).as_deref(), Some("tool"));
        assert_eq!(app_name_from(Path::new("")), None);
    }

    #[test]
    fn default_path_ends_with_app_and_file() {
        let path = config_file_path("tool");
        assert!(path.ends_with(Path::new("tool").join(FILE_NAME)));
    }

    #[test]
    fn migrate_copies_tree_once() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("legacy");
        let to = dir.path().join("canonical");
        fs::create_dir_all(from.join("nested")).unwrap();
        fs::write(from.join(FILE_NAME), "a: 1\n").unwrap();
        fs::write(from.join("nested").join("extra.txt"), "x").unwrap();

        assert!(migrate(&from, &to).unwrap());
        assert_eq!(fs::read_to_string(to.join(FILE_NAME)).unwrap(), "a: 1\n");
        assert!(to.join("nested").join("extra.txt").is_file());

        fs::write(from.join(FILE_NAME), "a: 2\n").unwrap();
        assert!(!migrate(&from, &to).unwrap());
        assert_eq!(fs::read_to_string(to.join(FILE_NAME)).unwrap(), "a: 1\n");
    }

    #[test]
    fn migrate_skips_missing_or_identical_source() {
        let dir = tempdir().unwrap();
        let to = dir.path().join("canonical");
        assert!(!migrate(&dir.path().join("absent"), &to).unwrap());
        assert!(!migrate(&to, &to).unwrap());
        assert!(!to.exists());
    }
}
