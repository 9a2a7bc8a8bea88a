#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fresh scratch directory inside the system temp dir (removed first if present).
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetrack", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Binary under test, isolated from the user's HOME and without colors.
pub fn tt(dir: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("timetrack");
    cmd.current_dir(dir).env("HOME", dir).env("NO_COLOR", "1");
    cmd
}

/// Database location argument for a test directory.
pub fn db_arg(dir: &PathBuf) -> String {
    dir.join("db").to_string_lossy().to_string()
}

/// Write `~/.timetrack/timetrack.conf` inside the test HOME.
pub fn write_config(dir: &PathBuf, yaml: &str) {
    let conf_dir = dir.join(".timetrack");
    fs::create_dir_all(&conf_dir).expect("create config dir");
    fs::write(conf_dir.join("timetrack.conf"), yaml).expect("write config");
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S")
        .expect("valid test datetime")
}

pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date")
}
