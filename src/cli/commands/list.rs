use super::{open_store, reference_time};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::StatusPhase;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        active,
        expired,
        at,
    } = cmd
    {
        let at = reference_time(at)?;
        let store = open_store(cfg)?;

        let wanted = |phase: StatusPhase| {
            if *active {
                phase.is_active()
            } else if *expired {
                phase.is_expired()
            } else {
                true
            }
        };

        // numbering follows the full board so `del` can use it
        let rows: Vec<_> = store
            .all()
            .iter()
            .enumerate()
            .map(|(i, s)| (i + 1, s, s.phase(at)))
            .filter(|(_, _, phase)| wanted(*phase))
            .collect();

        let title = if *active {
            "Active statuses"
        } else if *expired {
            "Expired statuses"
        } else {
            "All statuses"
        };

        if rows.is_empty() {
            info(format!("{}: none at {}", title, at.format("%Y-%m-%d %H:%M")));
            return Ok(());
        }

        header(format!("{} at {}", title, at.format("%Y-%m-%d %H:%M")));

        let mut table = Table::new(vec![
            Column::new("#", 2),
            Column::new("Icon", 4),
            Column::new("Description", 12),
            Column::new("Time", 11),
            Column::new("Hours", 5),
            Column::new("State", 8),
        ]);

        for (number, status, phase) in rows {
            table.add_row(vec![
                number.to_string(),
                status.icon().to_string(),
                status.description().to_string(),
                status.time_range_label(),
                status.duration_hours().to_string(),
                phase.as_str().to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
