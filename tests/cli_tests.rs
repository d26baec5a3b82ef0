mod common;
use common::{init_env, init_env_with_data, rpl, setup_test_config, setup_test_db, temp_out, with_env};

use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database_with_default_subjects() {
    let db = setup_test_db("init_creates");
    let conf = setup_test_config("init_creates");

    rpl()
        .args(with_env(&db, &conf, &["--test", "init"]))
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db).exists());

    rpl()
        .args(with_env(&db, &conf, &["subject", "list"]))
        .assert()
        .success()
        .stdout(contains("History"))
        .stdout(contains("Math"))
        .stdout(contains("Science"));
}

#[test]
fn test_add_and_list_grouped_by_subject() {
    let (db, conf) = init_env_with_data("add_and_list");

    rpl()
        .args(with_env(&db, &conf, &["list"]))
        .assert()
        .success()
        .stdout(contains("Assignments by Subject"))
        .stdout(contains("Math:"))
        .stdout(contains("Homework"))
        .stdout(contains("#1"))
        .stdout(contains("Algebra Homework"))
        .stdout(contains("Exercises 1-10"))
        .stdout(contains("Tests"))
        .stdout(contains("Biology Test"))
        .stdout(contains("(no assignments)"));
}

#[test]
fn test_list_with_period_filter() {
    let (db, conf) = init_env_with_data("list_period");

    rpl()
        .args(with_env(&db, &conf, &["list", "--period", "2024-03-15"]))
        .assert()
        .success()
        .stdout(contains("Biology Test"))
        .stdout(contains("Algebra Homework").not());

    rpl()
        .args(with_env(&db, &conf, &["list", "--period", "2024-04"]))
        .assert()
        .success()
        .stdout(contains("Biology Test").not());
}

#[test]
fn test_add_unknown_subject_fails() {
    let (db, conf) = init_env("add_unknown_subject");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["add", "Sonnet", "--subject", "Poetry", "--due", "2024-03-01"],
        ))
        .assert()
        .failure()
        .stderr(contains("Unknown subject 'Poetry'"));
}

#[test]
fn test_add_blank_name_fails() {
    let (db, conf) = init_env("add_blank_name");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["add", "   ", "--subject", "Math", "--due", "2024-03-01"],
        ))
        .assert()
        .failure()
        .stderr(contains("Name must not be empty"));
}

#[test]
fn test_add_invalid_date_fails() {
    let (db, conf) = init_env("add_invalid_date");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["add", "Lab", "--subject", "Science", "--due", "2024-02-30"],
        ))
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_calendar_month_view() {
    let (db, conf) = init_env_with_data("calendar_month");

    rpl()
        .args(with_env(&db, &conf, &["calendar", "--date", "2024-03-01"]))
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("Sun"))
        .stdout(contains("Sat"))
        .stdout(contains("Algebra Ho"))
        .stdout(contains("Biology Te"));
}

#[test]
fn test_calendar_offset_moves_back() {
    let (db, conf) = init_env_with_data("calendar_offset");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["calendar", "--date", "2024-04-15", "--offset", "-1"],
        ))
        .assert()
        .success()
        .stdout(contains("March 2024"));
}

#[test]
fn test_calendar_week_view() {
    let (db, conf) = init_env_with_data("calendar_week");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["calendar", "--week", "--date", "2024-03-13"],
        ))
        .assert()
        .success()
        .stdout(contains("Week of Mar 13, 2024"))
        .stdout(contains("Algebra Ho"))
        .stdout(contains("Biology Te"));

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["calendar", "--week", "--date", "2024-03-13", "--offset", "1"],
        ))
        .assert()
        .success()
        .stdout(contains("Week of Mar 20, 2024"))
        .stdout(contains("Biology Te").not());
}

#[test]
fn test_calendar_month_preview_overflow() {
    let (db, conf) = init_env("calendar_overflow");

    for name in ["One", "Two", "Three", "Four"] {
        rpl()
            .args(with_env(
                &db,
                &conf,
                &["add", name, "--subject", "Math", "--due", "2024-05-07"],
            ))
            .assert()
            .success();
    }

    rpl()
        .args(with_env(&db, &conf, &["calendar", "--date", "2024-05-01"]))
        .assert()
        .success()
        .stdout(contains("+2 more"));
}

#[test]
fn test_done_toggles_completion() {
    let (db, conf) = init_env_with_data("done_toggle");

    rpl()
        .args(with_env(&db, &conf, &["done", "1"]))
        .assert()
        .success()
        .stdout(contains("marked as finished"));

    rpl()
        .args(with_env(&db, &conf, &["list"]))
        .assert()
        .success()
        .stdout(contains("Algebra Homework ✓ Finished"));

    rpl()
        .args(with_env(&db, &conf, &["list", "--pending"]))
        .assert()
        .success()
        .stdout(contains("Algebra Homework").not())
        .stdout(contains("Biology Test"));

    rpl()
        .args(with_env(&db, &conf, &["done", "1"]))
        .assert()
        .success()
        .stdout(contains("marked as not finished"));
}

#[test]
fn test_done_unknown_id_fails() {
    let (db, conf) = init_env("done_unknown");

    rpl()
        .args(with_env(&db, &conf, &["done", "42"]))
        .assert()
        .failure()
        .stderr(contains("Assignment #42 not found"));
}

#[test]
fn test_edit_changes_fields() {
    let (db, conf) = init_env_with_data("edit_fields");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["edit", "2", "--name", "Cell Biology Test", "--due", "2024-03-18"],
        ))
        .assert()
        .success()
        .stdout(contains("Assignment #2 updated"));

    rpl()
        .args(with_env(&db, &conf, &["list", "--period", "2024-03-18"]))
        .assert()
        .success()
        .stdout(contains("Cell Biology Test"))
        .stdout(contains("2024-03-18 10:30"));
}

#[test]
fn test_edit_to_unknown_subject_fails() {
    let (db, conf) = init_env_with_data("edit_unknown_subject");

    rpl()
        .args(with_env(&db, &conf, &["edit", "1", "--subject", "Latin"]))
        .assert()
        .failure()
        .stderr(contains("Unknown subject"));
}

#[test]
fn test_del_with_confirmation_flag() {
    let (db, conf) = init_env_with_data("del_yes");

    rpl()
        .args(with_env(&db, &conf, &["del", "1", "--yes"]))
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rpl()
        .args(with_env(&db, &conf, &["list"]))
        .assert()
        .success()
        .stdout(contains("Algebra Homework").not());
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let (db, conf) = init_env_with_data("del_cancel");

    rpl()
        .args(with_env(&db, &conf, &["del", "1"]))
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rpl()
        .args(with_env(&db, &conf, &["list"]))
        .assert()
        .success()
        .stdout(contains("Algebra Homework"));
}

#[test]
fn test_subject_add_recolor_and_delete() {
    let (db, conf) = init_env("subject_crud");

    rpl()
        .args(with_env(&db, &conf, &["subject", "add", "Art", "--color", "magenta"]))
        .assert()
        .success()
        .stdout(contains("Subject 'Art' added (magenta)"));

    rpl()
        .args(with_env(&db, &conf, &["subject", "add", "Art", "--color", "cyan"]))
        .assert()
        .success()
        .stdout(contains("recolored from magenta to cyan"));

    rpl()
        .args(with_env(&db, &conf, &["subject", "list"]))
        .assert()
        .success()
        .stdout(contains("Art"))
        .stdout(contains("cyan"));

    rpl()
        .args(with_env(&db, &conf, &["subject", "del", "Art"]))
        .assert()
        .success()
        .stdout(contains("Subject 'Art' removed"));

    rpl()
        .args(with_env(&db, &conf, &["subject", "del", "Art"]))
        .assert()
        .failure()
        .stderr(contains("Unknown subject 'Art'"));
}

#[test]
fn test_subject_delete_keeps_assignments() {
    let (db, conf) = init_env_with_data("subject_del_orphans");

    rpl()
        .args(with_env(&db, &conf, &["subject", "del", "Science"]))
        .assert()
        .success()
        .stdout(contains("still reference 'Science'"));

    rpl()
        .args(with_env(&db, &conf, &["calendar", "--date", "2024-03-01"]))
        .assert()
        .success()
        .stdout(contains("Biology Te"));
}

#[test]
fn test_dashboard_for_given_day() {
    let (db, conf) = init_env_with_data("dashboard_day");

    rpl()
        .args(with_env(&db, &conf, &["dashboard", "--date", "2024-03-10"]))
        .assert()
        .success()
        .stdout(contains("Upcoming Assignments (Due Today, 2024-03-10)"))
        .stdout(contains("Algebra Homework"))
        .stdout(contains("Assignments Due : 1"))
        .stdout(contains("Courses         : 3"))
        .stdout(contains("Pending         : 2"))
        .stdout(contains("Completed       : 0"));

    rpl()
        .args(with_env(&db, &conf, &["dashboard", "--date", "2024-03-11"]))
        .assert()
        .success()
        .stdout(contains("No Assignments Due Today"));
}

#[test]
fn test_reminders_listing() {
    let (db, conf) = init_env_with_data("reminders_list");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["reminders", "--now", "2024-03-01T00:00:00Z"],
        ))
        .assert()
        .success()
        .stdout(contains("Reminders (1 Hour Before)"))
        .stdout(contains("Algebra Homework"))
        .stdout(contains("Biology Test"));

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["reminders", "--now", "2024-04-01T00:00:00Z"],
        ))
        .assert()
        .success()
        .stdout(contains("No upcoming reminders"));
}

#[test]
fn test_settings_persist_and_affect_reminders() {
    let (db, conf) = init_env_with_data("settings_persist");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["settings", "--notify-assessments", "off", "--timing", "day-before-night"],
        ))
        .assert()
        .success()
        .stdout(contains("Settings saved"))
        .stdout(contains("1 Day Before - Night"));

    let saved = fs::read_to_string(&conf).unwrap();
    assert!(saved.contains("assessments: false"));
    assert!(saved.contains("day-before-night"));
    // the per-run --db override must not end up in the file
    assert!(!saved.contains(&db));

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["reminders", "--now", "2024-03-01T00:00:00Z"],
        ))
        .assert()
        .success()
        .stdout(contains("Algebra Homework"))
        .stdout(contains("Biology Test").not());
}

#[test]
fn test_settings_without_flags_prints_current_values() {
    let (db, conf) = init_env("settings_print");

    rpl()
        .args(with_env(&db, &conf, &["settings"]))
        .assert()
        .success()
        .stdout(contains("month preview         : 2"))
        .stdout(contains("default due time      : 23:59"));
}

#[test]
fn test_settings_rejects_bad_due_time() {
    let (db, conf) = init_env("settings_bad_time");

    rpl()
        .args(with_env(&db, &conf, &["settings", "--due-time", "7pm"]))
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_export_csv() {
    let (db, conf) = init_env_with_data("export_csv");
    let out = temp_out("export_csv", "csv");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["export", "--format", "csv", "--file", &out, "--force"],
        ))
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,due_date,due_time,subject,sub_type,notes,completed")
    );
    assert!(content.contains("1,Algebra Homework,2024-03-10,09:00,Math,homework,Exercises 1-10,false"));
    assert!(content.contains("Biology Test"));
}

#[test]
fn test_export_json_with_range() {
    let (db, conf) = init_env_with_data("export_json");
    let out = temp_out("export_json", "json");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &[
                "export", "--format", "json", "--file", &out, "--range", "2024-03-15", "--force",
            ],
        ))
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Biology Test");
    assert_eq!(rows[0]["sub_type"], "test");
    assert_eq!(rows[0]["due_time"], "10:30");
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let (db, conf) = init_env_with_data("export_empty");
    let out = temp_out("export_empty", "csv");

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["export", "--file", &out, "--range", "2023", "--force"],
        ))
        .assert()
        .success()
        .stdout(contains("No assignments found for selected range."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let (db, conf) = init_env_with_data("export_relative");

    rpl()
        .args(with_env(&db, &conf, &["export", "--file", "out.csv"]))
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_print_shows_operations() {
    let (db, conf) = init_env_with_data("log_print");

    rpl()
        .args(with_env(&db, &conf, &["done", "2"]))
        .assert()
        .success();

    rpl()
        .args(with_env(&db, &conf, &["log", "--print"]))
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("#1"))
        .stdout(contains("Biology Test marked finished"));
}

#[test]
fn test_config_print_shows_defaults_when_missing() {
    let (db, conf) = init_env("config_print");

    rpl()
        .args(with_env(&db, &conf, &["config", "--print"]))
        .assert()
        .success()
        .stdout(contains("month_preview: 2"))
        .stdout(predicate::str::contains("default_due_time"));
}

#[test]
fn test_subject_names_are_trimmed_on_every_path() {
    let (db, conf) = init_env("subject_trim");

    rpl()
        .args(with_env(&db, &conf, &["subject", "add", " Art ", "--color", "red"]))
        .assert()
        .success()
        .stdout(contains("Subject 'Art' added (red)"));

    rpl()
        .args(with_env(
            &db,
            &conf,
            &["add", "Sketch", "--subject", " Art", "--due", "2024-03-01"],
        ))
        .assert()
        .success();

    rpl()
        .args(with_env(&db, &conf, &["subject", "del", " Art "]))
        .assert()
        .success()
        .stdout(contains("Subject 'Art' removed"))
        .stdout(contains("1 assignment(s) still reference 'Art'"));
}
