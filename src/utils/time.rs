//! Time utilities: parsing HH:MM and combining local dates with wall times.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Interpret `date` + `time` as wall-clock time in `tz` and return the UTC instant.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant;
/// non-existent ones (DST spring-forward gap) are rejected.
pub fn local_to_utc<Tz: TimeZone>(date: NaiveDate, time: NaiveTime, tz: &Tz) -> AppResult<DateTime<Utc>> {
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTime(format!("{} does not exist in the local timezone", naive)))
}

/// Parse an RFC3339 instant (used by `--now`).
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}
