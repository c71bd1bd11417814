//! Path utilities: expand ~ in user supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user supplied file path: `~/` is expanded and a relative path
/// is taken relative to the current directory.
pub fn resolve_file(path: &str) -> PathBuf {
    let p = expand_tilde(path);
    std::path::absolute(&p).unwrap_or(p)
}
