//! Weekly schedule anchors.
//!
//! Hattrick runs training and match updates on fixed weekdays at fixed UTC
//! times. Handlers that need "the window since the last update" compute the
//! most recent past occurrence of that weekday here and derive an end point
//! from it.

use chrono::{DateTime, Datelike, Days, Duration, Local, TimeZone, Utc, Weekday};
use tracing::{debug, warn};

use crate::error::AppError;

/// A parsed `HH:MM:SS` value. Fields are kept as parsed and are not range
/// checked; out-of-range values roll over when applied to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl TimeOfDay {
    /// Whether every field is inside its usual clock range.
    pub fn is_clock_range(&self) -> bool {
        (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
    }

    /// Offset from midnight.
    pub fn since_midnight(&self) -> Option<Duration> {
        Duration::try_hours(self.hour)?
            .checked_add(&Duration::try_minutes(self.minute)?)?
            .checked_add(&Duration::try_seconds(self.second)?)
    }
}

/// Anchor and derived timestamps for one schedule computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleWindow<Tz: TimeZone> {
    /// Most recent past occurrence of the target weekday at the configured time.
    pub anchor: DateTime<Tz>,
    /// `anchor` plus the requested offset.
    pub derived: DateTime<Tz>,
}

/// Parses a `HH:MM:SS` string.
///
/// # Errors
/// * [`AppError::TimeFormat`] if there are not exactly three fields
/// * [`AppError::TimeField`] naming the first field that is not an integer
pub fn parse_time_of_day(value: &str) -> Result<TimeOfDay, AppError> {
    let parts: Vec<&str> = value.split(':').collect();
    let [hour, minute, second] = parts.as_slice() else {
        return Err(AppError::time_format(value));
    };

    let field = |name: &'static str, raw: &str| {
        raw.parse::<i64>()
            .map_err(|_| AppError::time_field(name, value))
    };

    Ok(TimeOfDay {
        hour: field("hour", hour)?,
        minute: field("minute", minute)?,
        second: field("second", second)?,
    })
}

/// Days back from `today` to the latest `target` weekday, 0 when they match.
pub fn days_since_weekday(today: Weekday, target: Weekday) -> u32 {
    (today.num_days_from_sunday() + 7 - target.num_days_from_sunday()) % 7
}

/// Finds the last `target` weekday at `time_of_day_utc` and adds `offset`,
/// both expressed in the process's local time zone.
///
/// If today is the target weekday the anchor is today, even when the
/// configured time has not been reached yet.
pub fn last_weekday_and_offset(
    target: Weekday,
    offset: Duration,
    time_of_day_utc: &str,
) -> Result<ScheduleWindow<Local>, AppError> {
    last_weekday_and_offset_at(Utc::now(), &Local, target, offset, time_of_day_utc)
}

/// Same as [`last_weekday_and_offset`] with the current instant and the output
/// zone supplied by the caller.
pub fn last_weekday_and_offset_at<Tz: TimeZone>(
    now: DateTime<Utc>,
    tz: &Tz,
    target: Weekday,
    offset: Duration,
    time_of_day_utc: &str,
) -> Result<ScheduleWindow<Tz>, AppError> {
    let days_since = days_since_weekday(now.weekday(), target);
    debug!(
        "now: {now}, weekday: {}, target: {target}, days since: {days_since}",
        now.weekday()
    );

    let anchor_date = now
        .date_naive()
        .checked_sub_days(Days::new(u64::from(days_since)))
        .ok_or_else(|| {
            AppError::datetime_error(format!("cannot step back {days_since} days from {now}"))
        })?;

    let time = parse_time_of_day(time_of_day_utc)?;
    if !time.is_clock_range() {
        warn!("Time-of-day '{time_of_day_utc}' is outside the clock range and will roll over");
    }

    let anchor_utc = anchor_date
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .zip(time.since_midnight())
        .and_then(|(midnight, since)| midnight.checked_add_signed(since))
        .ok_or_else(|| {
            AppError::datetime_error(format!(
                "time-of-day '{time_of_day_utc}' cannot be applied to {anchor_date}"
            ))
        })?;

    let anchor = anchor_utc.with_timezone(tz);
    let derived = anchor
        .clone()
        .checked_add_signed(offset)
        .ok_or_else(|| {
            AppError::datetime_error(format!("offset {offset} overflows {anchor_utc}"))
        })?;

    Ok(ScheduleWindow { anchor, derived })
}
