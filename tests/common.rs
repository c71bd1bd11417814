#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rstatusboard::models::StatusRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, isolated from the user's real config via `HOME`.
pub fn rsb(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rstatusboard");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RSTATUSBOARD_LOG");
    cmd
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid test datetime")
}

pub fn status(icon: &str, description: &str, start: &str, hours: u32) -> StatusRecord {
    StatusRecord::new(icon, description, dt(start), hours).expect("valid test status")
}

/// Write `content` as `status.json` inside `dir` and return its path
pub fn status_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("status.json");
    fs::write(&path, content).expect("write status file");
    path
}

pub fn empty_status_file(dir: &Path) -> PathBuf {
    status_file(dir, "{\"statuses\": []}")
}
