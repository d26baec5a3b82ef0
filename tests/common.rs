#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rplanner::models::{Assignment, SubType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rplanner")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config file path for a test (removed if left over from a previous run)
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplanner.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `--db` / `--config` pair followed by `args`
pub fn with_env<'a>(db: &'a str, conf: &'a str, args: &[&'a str]) -> Vec<&'a str> {
    let mut v = vec!["--db", db, "--config", conf];
    v.extend_from_slice(args);
    v
}

/// Initialize an isolated DB (default subjects Math/Science/History).
pub fn init_env(name: &str) -> (String, String) {
    let db = setup_test_db(name);
    let conf = setup_test_config(name);

    rpl()
        .args(with_env(&db, &conf, &["--test", "init"]))
        .assert()
        .success();

    (db, conf)
}

/// Add a couple of assignments useful for many tests
pub fn init_env_with_data(name: &str) -> (String, String) {
    let (db, conf) = init_env(name);

    rpl()
        .args(with_env(
            &db,
            &conf,
            &[
                "add",
                "Algebra Homework",
                "--subject",
                "Math",
                "--due",
                "2024-03-10",
                "--at",
                "09:00",
                "--type",
                "homework",
                "--notes",
                "Exercises 1-10",
            ],
        ))
        .assert()
        .success();

    rpl()
        .args(with_env(
            &db,
            &conf,
            &[
                "add",
                "Biology Test",
                "--subject",
                "Science",
                "--due",
                "2024-03-15",
                "--at",
                "10:30",
                "--type",
                "test",
            ],
        ))
        .assert()
        .success();

    (db, conf)
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Build an in-memory assignment without going through a Planner
pub fn assignment(id: i64, name: &str, due: DateTime<Utc>) -> Assignment {
    Assignment::new(id, name, due, "Math", SubType::Homework, "")
}
