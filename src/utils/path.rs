//! Path utilities: expand ~, resolve data files against the records
//! directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolves a user-supplied file against the records directory.
/// Absolute paths pass through untouched.
pub fn resolve_in_dir(dir: &Path, file: &str) -> PathBuf {
    let p = expand_tilde(file);
    if p.is_absolute() { p } else { dir.join(p) }
}
