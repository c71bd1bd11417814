use super::document::EMPTY_DOCUMENT;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Make sure `path` holds a status document before it is loaded.
///
/// Writes an empty board (creating parent directories) when the file does
/// not exist yet and never touches an existing file. Returns `true` if the
/// file was created.
pub fn ensure_status_file(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    fs::write(path, EMPTY_DOCUMENT)?;
    tracing::debug!(path = %path.display(), "created empty status file");
    Ok(true)
}
