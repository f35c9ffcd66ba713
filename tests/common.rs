#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rhabits::models::habit::Habit;
use rhabits::models::habit_type::HabitType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabits")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB (schema + storage version marker)
pub fn init_db(db_path: &str) {
    rhb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add one good and one bad habit
pub fn init_db_with_habits(db_path: &str) {
    init_db(db_path);

    rhb()
        .args(["--db", db_path, "habit", "add", "Run", "--tag", "sport"])
        .assert()
        .success();

    rhb()
        .args(["--db", db_path, "habit", "add", "Smoking", "--bad", "--icon", "🚬"])
        .assert()
        .success();
}

/// Habit with a fixed id, handy for hand-written records.
pub fn habit(id: &str, kind: HabitType) -> Habit {
    let mut h = Habit::new(id, kind, "*");
    h.id = id.to_string();
    h
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
