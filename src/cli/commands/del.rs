use super::{open_store, report_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `del` command. Numbers are 1-based, as printed by `list`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { number } = cmd {
        let mut store = open_store(cfg)?;

        let index = number
            .checked_sub(1)
            .ok_or(AppError::InvalidIndex(*number))?;
        let removed = store
            .get(index)
            .cloned()
            .ok_or(AppError::InvalidIndex(*number))?;

        store.subscribe(report_board);
        store.remove(index)?;

        success(format!(
            "Deleted #{}: {} {}",
            number,
            removed.icon(),
            removed.description()
        ));
    }
    Ok(())
}
