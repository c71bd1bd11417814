use super::phase::StatusPhase;
use crate::errors::{AppError, AppResult};
use crate::utils::date::truncate_to_minute;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Shortest allowed status, in hours.
pub const MIN_DURATION_HOURS: u32 = 1;
/// Longest allowed status: one week.
pub const MAX_DURATION_HOURS: u32 = 168;

const FULL_FMT: &str = "%Y-%m-%d %H:%M";
const TIME_FMT: &str = "%H:%M";
const DAY_TIME_FMT: &str = "%m-%d %H:%M";

/// One entry of the board: an icon, a label and the half-open window
/// `[start, start + duration_hours)` during which it is active.
///
/// Two records are equal when all four stored fields are equal; the end
/// time is always derived.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusRecord {
    icon: String,                // display glyph, never interpreted
    description: String,         // free text label
    start: NaiveDateTime,        // local clock, minute precision
    duration_hours: u32,         // 1..=168
}

impl StatusRecord {
    /// Validated constructor used by callers creating new statuses.
    /// - trims `icon` and `description` and rejects empty values
    /// - rejects durations outside `1..=168`
    /// - drops seconds and sub-seconds from `start`
    /// - rejects a start whose end falls past the last representable date
    pub fn new(
        icon: impl AsRef<str>,
        description: impl AsRef<str>,
        start: NaiveDateTime,
        duration_hours: u32,
    ) -> AppResult<Self> {
        let icon = icon.as_ref().trim();
        let description = description.as_ref().trim();

        if icon.is_empty() {
            return Err(AppError::InvalidStatus("icon must not be empty".into()));
        }
        if description.is_empty() {
            return Err(AppError::InvalidStatus(
                "description must not be empty".into(),
            ));
        }
        if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&duration_hours) {
            return Err(AppError::InvalidStatus(format!(
                "duration must be between {} and {} hours, got {}",
                MIN_DURATION_HOURS, MAX_DURATION_HOURS, duration_hours
            )));
        }
        if !window_fits(start, duration_hours) {
            return Err(AppError::InvalidStatus(format!(
                "start {} plus {} hours is out of the supported date range",
                start, duration_hours
            )));
        }

        Ok(Self::from_stored(
            icon.to_string(),
            description.to_string(),
            start,
            duration_hours,
        ))
    }

    /// Lenient constructor for records read back from the status file:
    /// text fields are kept as-is and the duration is clamped into range.
    /// The caller checks [`window_fits`] first.
    pub(crate) fn from_stored(
        icon: String,
        description: String,
        start: NaiveDateTime,
        duration_hours: u32,
    ) -> Self {
        Self {
            icon,
            description,
            start: truncate_to_minute(start),
            duration_hours: duration_hours.clamp(MIN_DURATION_HOURS, MAX_DURATION_HOURS),
        }
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    pub fn end(&self) -> NaiveDateTime {
        // constructors guarantee the window fits
        checked_end(self.start, self.duration_hours).unwrap_or(NaiveDateTime::MAX)
    }

    /// `start <= now < end`
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now < self.end()
    }

    /// `now >= end`
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.end()
    }

    pub fn phase(&self, now: NaiveDateTime) -> StatusPhase {
        if self.is_expired(now) {
            StatusPhase::Expired
        } else if self.is_active(now) {
            StatusPhase::Active
        } else {
            StatusPhase::Upcoming
        }
    }

    /// `"YYYY-MM-DD HH:MM - YYYY-MM-DD HH:MM"`
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(FULL_FMT),
            self.end().format(FULL_FMT)
        )
    }

    /// `"HH:MM - HH:MM"` when start and end share a calendar day,
    /// `"MM-DD HH:MM - MM-DD HH:MM"` otherwise.
    pub fn short_time_range_label(&self) -> String {
        let end = self.end();
        let fmt = if self.start.date() == end.date() {
            TIME_FMT
        } else {
            DAY_TIME_FMT
        };

        format!("{} - {}", self.start.format(fmt), end.format(fmt))
    }
}

fn checked_end(start: NaiveDateTime, duration_hours: u32) -> Option<NaiveDateTime> {
    truncate_to_minute(start).checked_add_signed(TimeDelta::hours(i64::from(duration_hours)))
}

/// `true` when `start + duration_hours` is still a representable date-time.
pub fn window_fits(start: NaiveDateTime, duration_hours: u32) -> bool {
    checked_end(start, duration_hours).is_some()
}
