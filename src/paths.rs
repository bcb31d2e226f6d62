use std::{env, path::PathBuf};

/// File name of the per-user configuration, relative to `$HOME`.
const CONFIG_FILE: &str = ".imgr.json";

/// Resolve the location of the imgr configuration file.
///
/// `$IMGR_CONFIG` wins when set and non-empty; otherwise the file lives at
/// `$HOME/.imgr.json`.
pub fn config_path() -> PathBuf {
    if let Some(p) = env::var_os("IMGR_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    PathBuf::from(env::var_os("HOME").unwrap_or_default()).join(CONFIG_FILE)
}
