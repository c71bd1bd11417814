use super::{open_store, report_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::StatusRecord;
use crate::ui::messages::success;
use crate::utils::date;

/// Handle the `add` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        description,
        icon,
        start,
        duration,
    } = cmd
    {
        let start = match start {
            Some(s) => {
                date::parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.clone()))?
            }
            None => date::now(),
        };
        let icon = icon.as_deref().unwrap_or(cfg.default_icon.as_str());
        let hours = duration.unwrap_or(cfg.default_duration_hours);

        // validate before touching the file
        let record = StatusRecord::new(icon, description, start, hours)?;
        let summary = format!(
            "{} {} ({})",
            record.icon(),
            record.description(),
            record.time_range_label()
        );

        let mut store = open_store(cfg)?;
        store.subscribe(report_board);
        store.add(record)?;

        success(format!("Added {}", summary));
    }
    Ok(())
}
