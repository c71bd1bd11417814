pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod now;

use crate::config::Config;
use crate::core::{StatusStore, ensure_status_file};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use chrono::NaiveDateTime;

/// Open the configured board, creating an empty status file on first use.
pub(crate) fn open_store(cfg: &Config) -> AppResult<StatusStore> {
    let path = cfg.status_path();
    ensure_status_file(&path)?;

    let mut store = StatusStore::new();
    store.load(&path)?;
    Ok(store)
}

/// `--at` value, or the current minute.
pub(crate) fn reference_time(at: &Option<String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => date::parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.clone())),
        None => Ok(date::now()),
    }
}

/// Change listener used by mutating commands.
pub(crate) fn report_board(store: &StatusStore) {
    let active = store.active(date::now()).len();
    info(format!(
        "Board: {} status(es), {} active now",
        store.len(),
        active
    ));
}
