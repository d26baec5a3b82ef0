mod common;
use common::{assignment, utc};

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::America::New_York;
use chrono_tz::Pacific::Apia;
use rplanner::core::reminders::{reminder_time, upcoming_reminders};
use rplanner::errors::AppError;
use rplanner::models::preferences::{NotificationPrefs, NotificationTiming};
use rplanner::utils::time::local_to_utc;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_local_time_in_spring_forward_gap_is_rejected() {
    // 2024-03-10 02:00 → 03:00 in New York
    let err = local_to_utc(ymd(2024, 3, 10), hm(2, 30), &New_York).unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));
}

#[test]
fn test_ambiguous_local_time_takes_earlier_instant() {
    // 2024-11-03 01:30 happens twice; the first one is still EDT (-04:00)
    let due = local_to_utc(ymd(2024, 11, 3), hm(1, 30), &New_York).unwrap();
    assert_eq!(due, utc(2024, 11, 3, 5, 30));
}

#[test]
fn test_local_time_around_transition_is_converted() {
    assert_eq!(
        local_to_utc(ymd(2024, 3, 10), hm(3, 30), &New_York).unwrap(),
        utc(2024, 3, 10, 7, 30)
    );
    assert_eq!(
        local_to_utc(ymd(2024, 3, 9), hm(23, 59), &New_York).unwrap(),
        utc(2024, 3, 10, 4, 59)
    );
}

#[test]
fn test_day_before_reminder_follows_dst_offset() {
    // due Monday 2024-03-11 09:00 EDT; the day before (Sunday) is already EDT
    let due = utc(2024, 3, 11, 13, 0);
    assert_eq!(
        reminder_time(due, NotificationTiming::DayBeforeMorning, &New_York),
        Some(utc(2024, 3, 10, 12, 0))
    );

    // due Sunday 2024-03-10 09:00 EDT; Saturday 20:00 is still EST
    let due = utc(2024, 3, 10, 13, 0);
    assert_eq!(
        reminder_time(due, NotificationTiming::DayBeforeNight, &New_York),
        Some(utc(2024, 3, 10, 1, 0))
    );
}

#[test]
fn test_reminder_on_skipped_day_does_not_exist() {
    // Samoa jumped from 2011-12-29 straight to 2011-12-31
    let due = local_to_utc(ymd(2011, 12, 31), hm(12, 0), &Apia).unwrap();

    assert_eq!(
        reminder_time(due, NotificationTiming::DayBeforeMorning, &Apia),
        None
    );
    assert_eq!(
        reminder_time(due, NotificationTiming::DayBeforeNight, &Apia),
        None
    );
    assert!(reminder_time(due, NotificationTiming::OneHourBefore, &Apia).is_some());
}

#[test]
fn test_upcoming_skips_reminder_in_gap() {
    let skipped = local_to_utc(ymd(2011, 12, 31), hm(12, 0), &Apia).unwrap();
    let normal = local_to_utc(ymd(2012, 1, 5), hm(12, 0), &Apia).unwrap();

    let records = vec![assignment(1, "skipped", skipped), assignment(2, "normal", normal)];
    let prefs = NotificationPrefs {
        timing: NotificationTiming::DayBeforeMorning,
        ..Default::default()
    };

    let out = upcoming_reminders(&records, &prefs, utc(2011, 12, 1, 0, 0), &Apia);

    let ids: Vec<i64> = out.iter().map(|r| r.assignment.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(
        out[0].fire_at,
        local_to_utc(ymd(2012, 1, 4), hm(8, 0), &Apia).unwrap()
    );
}
