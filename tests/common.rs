#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

pub fn tp() -> Command {
    cargo_bin_cmd!("tripplan")
}

/// A fresh database inside its own temp dir; the dir lives as long as the returned guard.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("tripplan.sqlite");
    (dir, db_path.to_string_lossy().to_string())
}

/// `tp --db <path> --test <args…>`
pub fn tp_db(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = tp();
    cmd.args(["--db", db_path, "--test"]).args(args);
    cmd
}

/// Initialize the DB and add the three-day Paris trip (trip 1, days 1..=3).
pub fn init_with_paris(db_path: &str) {
    tp_db(db_path, &["init"]).assert().success();

    tp_db(
        db_path,
        &[
            "add",
            "Paris",
            "--budget",
            "2000.00",
            "--start",
            "2024-06-01",
            "--end",
            "2024-06-03",
        ],
    )
    .assert()
    .success();
}
