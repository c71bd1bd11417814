use super::{open_store, report_board};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `clear` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let count = store.len();

    store.subscribe(report_board);
    store.clear()?;

    success(format!("Removed {} status(es)", count));
    Ok(())
}
