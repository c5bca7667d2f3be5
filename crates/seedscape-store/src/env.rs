//! Environment-driven configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the data directory.
pub const DATA_DIR_VAR: &str = "SEEDSCAPE_DATA_DIR";

/// Used when the variable is unset or empty.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Data directory from `SEEDSCAPE_DATA_DIR`, else `./data`.
pub fn data_dir() -> PathBuf {
    data_dir_from(std::env::var_os(DATA_DIR_VAR))
}

/// Resolve the data directory from an optional variable value.
///
/// A leading `~` expands to the home directory and the result is made absolute
/// against the working directory. Symlinks are left unresolved.
pub fn data_dir_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(v) if !v.is_empty() => absolute(expand_home(Path::new(&v))),
        _ => absolute(PathBuf::from(DEFAULT_DATA_DIR)),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return if rest.as_os_str().is_empty() { home } else { home.join(rest) };
        }
    }
    path.to_path_buf()
}

fn absolute(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}
