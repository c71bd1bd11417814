//! Date/time helpers: local "now", minute truncation, parsing of the
//! formats accepted on the command line and in the status file.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// ISO-8601 layout written to the status file.
pub const ISO_FMT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local wall-clock time, minute precision.
pub fn now() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

pub fn format_iso(dt: NaiveDateTime) -> String {
    dt.format(ISO_FMT).to_string()
}

/// Parse an ISO-8601 date-time as found in the status file.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM` and RFC 3339 values
/// carrying an offset, which are converted to the local clock.
pub fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in [ISO_FMT, "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Parse a date-time given by the user.
///
/// Besides the ISO forms this accepts `YYYY-MM-DD HH:MM` and a bare
/// `HH:MM`, which means "today at that time".
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(today().and_time(t));
    }

    parse_iso(s)
}

/// Legacy `startHour` upgrade: today's date at `hour:00`.
/// `None` when the hour is not a valid hour of the day.
pub fn today_at_hour(hour: i64) -> Option<NaiveDateTime> {
    let hour = u32::try_from(hour).ok()?;
    today().and_hms_opt(hour, 0, 0)
}
