use super::{open_store, reference_time};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, muted};

/// Handle the `now` command: the compact view of what is active.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Now { all, at } = cmd {
        let at = reference_time(at)?;
        let store = open_store(cfg)?;
        let active = store.active(at);

        if active.is_empty() {
            info("No active status");
            return Ok(());
        }

        // max_shown = 0 means no limit
        let shown = if *all || cfg.max_shown == 0 {
            active.len()
        } else {
            cfg.max_shown.min(active.len())
        };

        header(format!("Now ({})", at.format("%Y-%m-%d %H:%M")));
        for status in &active[..shown] {
            println!(
                "{}  {}  [{}]",
                status.icon(),
                status.description(),
                status.short_time_range_label()
            );
        }

        if shown < active.len() {
            muted(format!("+{} more (use --all)", active.len() - shown));
        }
    }
    Ok(())
}
