//! Reminder scheduling derived from the notification preferences.
//! Only computes fire times; nothing here talks to the OS.

use crate::models::preferences::{NotificationPrefs, NotificationTiming};
use crate::models::{Assignment, SubType};
use chrono::{DateTime, Days, NaiveTime, TimeDelta, TimeZone, Utc};

const MORNING_HOUR: u32 = 8;
const NIGHT_HOUR: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder<'a> {
    pub assignment: &'a Assignment,
    pub fire_at: DateTime<Utc>,
}

/// When the reminder for an assignment due at `due` fires.
///
/// Returns `None` when the wall-clock target does not exist in `tz`.
pub fn reminder_time<Tz: TimeZone>(
    due: DateTime<Utc>,
    timing: NotificationTiming,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    let hour = match timing {
        NotificationTiming::OneHourBefore => return due.checked_sub_signed(TimeDelta::hours(1)),
        NotificationTiming::DayBeforeMorning => MORNING_HOUR,
        NotificationTiming::DayBeforeNight => NIGHT_HOUR,
    };

    let day_before = due
        .with_timezone(tz)
        .date_naive()
        .checked_sub_days(Days::new(1))?;
    let wall = day_before.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);

    tz.from_local_datetime(&wall)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn wants(prefs: &NotificationPrefs, sub_type: SubType) -> bool {
    if sub_type.is_assessment() {
        return prefs.assessments;
    }
    match sub_type {
        SubType::Homework => prefs.homework,
        _ => prefs.class_work,
    }
}

/// Pending reminders firing at or after `now`, earliest first.
pub fn upcoming_reminders<'a, Tz: TimeZone>(
    records: &'a [Assignment],
    prefs: &NotificationPrefs,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<Reminder<'a>> {
    if !prefs.enabled {
        return Vec::new();
    }

    let mut out: Vec<Reminder<'a>> = records
        .iter()
        .filter(|a| !a.completed && wants(prefs, a.sub_type))
        .filter_map(|a| {
            reminder_time(a.due, prefs.timing, tz).map(|fire_at| Reminder {
                assignment: a,
                fire_at,
            })
        })
        .filter(|r| r.fire_at >= now)
        .collect();

    out.sort_by_key(|r| r.fire_at);
    out
}
