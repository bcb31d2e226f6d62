use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::config_path;

/// Persisted imgr configuration.
///
/// Stored as JSON with a single key:
/// ```json
/// {"local-base": "/home/me/images"}
/// ```
/// `local_base` is expected to be the working tree of a git repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "local-base")]
    pub local_base: PathBuf,
}

/// Reads and writes [`Settings`] at a fixed file location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the per-user file returned by [`config_path`].
    pub fn from_env() -> Self {
        Self::new(config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration if the file exists.
    ///
    /// A missing file yields `Ok(None)` (the unconfigured state). The stored
    /// directory is not re-validated here.
    ///
    /// # Errors
    /// - The file exists but cannot be read.
    /// - The file is not a JSON object with a `local-base` string.
    pub fn load(&self) -> Result<Option<Settings>> {
        let txt = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let settings: Settings =
            serde_json::from_str(&txt).map_err(|e| Error::InvalidConfig {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(Some(settings))
    }

    /// Validate `base` and overwrite the stored configuration with it.
    ///
    /// Relative paths are made absolute against the current directory. The
    /// previous value is replaced without backup; on any validation failure
    /// the file is left untouched.
    pub fn save(&self, base: &Path) -> Result<Settings> {
        let abs = std::path::absolute(base)?;
        if !abs.exists() {
            return Err(Error::NotFound(abs));
        }
        if !abs.is_dir() {
            return Err(Error::NotADirectory(abs));
        }

        let settings = Settings { local_base: abs };
        let json = serde_json::to_string(&settings)?;
        fs::write(&self.path, json)?;
        log::debug!("wrote {}", self.path.display());
        Ok(settings)
    }

    /// Turn the result of an earlier [`load`](Self::load) into settings or a
    /// configuration error. Every command except `configure` goes through this.
    pub fn require_configured<'a>(&self, loaded: Option<&'a Settings>) -> Result<&'a Settings> {
        loaded.ok_or_else(|| Error::NotConfigured {
            path: self.path.clone(),
        })
    }
}

/// CLI command: persist `local_base` as the configured base directory.
///
/// Prints a confirmation line with the absolute path that was stored.
///
/// # Errors
/// Fails if the path does not exist, is not a directory, or the
/// configuration file cannot be written.
pub fn cmd_configure(store: &ConfigStore, local_base: &Path) -> anyhow::Result<()> {
    let settings = store
        .save(local_base)
        .with_context(|| format!("cannot configure local base {}", local_base.display()))?;
    println!(
        "Local base is set successfully to {}",
        settings.local_base.display()
    );
    Ok(())
}

/// CLI command: print the configured base directory.
pub fn cmd_base(settings: &Settings) -> anyhow::Result<()> {
    println!("{}", settings.local_base.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_yields_same_absolute_path() {
        let td = tempdir().unwrap();
        let base = td.path().join("images");
        fs::create_dir(&base).unwrap();
        let store = ConfigStore::new(td.path().join("imgr.json"));

        let saved = store.save(&base).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(saved, loaded);
        assert_eq!(loaded.local_base, base);
        assert!(loaded.local_base.is_absolute());
    }

    #[test]
    fn file_uses_local_base_key() {
        let td = tempdir().unwrap();
        let store = ConfigStore::new(td.path().join("imgr.json"));
        store.save(td.path()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["local-base"], td.path().to_str().unwrap());
    }

    #[test]
    fn load_missing_file_is_unconfigured() {
        let td = tempdir().unwrap();
        let store = ConfigStore::new(td.path().join("nope.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_rejects_missing_path_without_touching_file() {
        let td = tempdir().unwrap();
        let store = ConfigStore::new(td.path().join("imgr.json"));
        store.save(td.path()).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.save(&td.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn save_rejects_regular_file_without_creating_config() {
        let td = tempdir().unwrap();
        let file = td.path().join("a.png");
        fs::write(&file, b"x").unwrap();
        let store = ConfigStore::new(td.path().join("imgr.json"));

        let err = store.save(&file).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn load_reports_malformed_json() {
        let td = tempdir().unwrap();
        let store = ConfigStore::new(td.path().join("imgr.json"));
        fs::write(store.path(), "{\"other\": 1}").unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            Error::InvalidConfig { .. }
        ));
    }

    #[test]
    fn require_configured_fails_when_absent() {
        let store = ConfigStore::new("/tmp/imgr-test.json");
        assert!(matches!(
            store.require_configured(None).unwrap_err(),
            Error::NotConfigured { .. }
        ));

        let s = Settings {
            local_base: PathBuf::from("/srv/images"),
        };
        assert_eq!(store.require_configured(Some(&s)).unwrap(), &s);
    }
}
