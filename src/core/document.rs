//! On-disk representation of the board.
//!
//! ```json
//! { "statuses": [ { "icon": "😀", "description": "Work",
//!                   "startDateTime": "2026-02-11T09:00:00", "durationHours": 8 } ] }
//! ```
//!
//! Reading is lenient per record (missing or mistyped fields fall back to
//! defaults) but strict on the document shape. Writing always uses the
//! `startDateTime` layout, so legacy `startHour` entries are upgraded on the
//! next save.

use crate::errors::{AppError, AppResult};
use crate::models::StatusRecord;
use crate::models::status::{MAX_DURATION_HOURS, MIN_DURATION_HOURS, window_fits};
use crate::utils::date::{format_iso, parse_iso, today_at_hour};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

const KEY_STATUSES: &str = "statuses";
const KEY_ICON: &str = "icon";
const KEY_DESCRIPTION: &str = "description";
const KEY_START: &str = "startDateTime";
const KEY_LEGACY_HOUR: &str = "startHour";
const KEY_DURATION: &str = "durationHours";

/// Content of a freshly created, empty board.
pub const EMPTY_DOCUMENT: &str = "{\n  \"statuses\": []\n}\n";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredStatus<'a> {
    icon: &'a str,
    description: &'a str,
    start_date_time: String,
    duration_hours: u32,
}

#[derive(Serialize)]
struct StatusFile<'a> {
    statuses: Vec<StoredStatus<'a>>,
}

/// Parse a whole status document.
///
/// `fallback_start` is used for records whose start time is missing or
/// unreadable; the caller passes the load instant.
pub fn parse(content: &str, fallback_start: NaiveDateTime) -> AppResult<Vec<StatusRecord>> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| AppError::Format(format!("not valid JSON ({})", e)))?;

    let root = root
        .as_object()
        .ok_or_else(|| AppError::Format("top-level value is not an object".into()))?;

    let statuses = root
        .get(KEY_STATUSES)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Format(format!("missing '{}' array", KEY_STATUSES)))?;

    Ok(statuses
        .iter()
        .enumerate()
        .map(|(i, v)| record_from_value(i, v, fallback_start))
        .collect())
}

/// Serialize records into the indented on-disk layout.
pub fn render(records: &[StatusRecord]) -> AppResult<String> {
    let file = StatusFile {
        statuses: records
            .iter()
            .map(|r| StoredStatus {
                icon: r.icon(),
                description: r.description(),
                start_date_time: format_iso(r.start()),
                duration_hours: r.duration_hours(),
            })
            .collect(),
    };

    let mut out = serde_json::to_string_pretty(&file)?;
    out.push('\n');
    Ok(out)
}

fn record_from_value(pos: usize, value: &Value, fallback_start: NaiveDateTime) -> StatusRecord {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or_else(|| {
        tracing::warn!(pos, "status entry is not an object, using defaults");
        &empty
    });

    let text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let duration = duration_from(obj);
    let mut start = start_from(pos, obj, fallback_start);
    if !window_fits(start, duration) {
        tracing::warn!(pos, %start, duration, "status ends out of date range, using load time");
        start = fallback_start;
    }

    StatusRecord::from_stored(text(KEY_ICON), text(KEY_DESCRIPTION), start, duration)
}

fn start_from(pos: usize, obj: &Map<String, Value>, fallback: NaiveDateTime) -> NaiveDateTime {
    // startDateTime wins whenever the key is present, even if unreadable
    if let Some(v) = obj.get(KEY_START) {
        return v.as_str().and_then(parse_iso).unwrap_or_else(|| {
            tracing::warn!(pos, value = %v, "unreadable startDateTime, using load time");
            fallback
        });
    }

    if let Some(v) = obj.get(KEY_LEGACY_HOUR) {
        tracing::debug!(pos, value = %v, "upgrading legacy startHour entry");
        return v.as_i64().and_then(today_at_hour).unwrap_or_else(|| {
            tracing::warn!(pos, value = %v, "invalid startHour, using load time");
            fallback
        });
    }

    fallback
}

fn duration_from(obj: &Map<String, Value>) -> u32 {
    let min = i64::from(MIN_DURATION_HOURS);
    let max = i64::from(MAX_DURATION_HOURS);

    obj.get(KEY_DURATION)
        .and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        })
        .map(|h| h.clamp(min, max) as u32)
        .unwrap_or(MIN_DURATION_HOURS)
}
