use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_with_paris, setup_test_db, tp_db};

#[test]
fn init_creates_schema() {
    let (_dir, db_path) = setup_test_db();

    tp_db(&db_path, &["init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('trips','details','log')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 3);
}

#[test]
fn add_trip_generates_one_day_per_date() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);

    tp_db(&db_path, &["trips"])
        .assert()
        .success()
        .stdout(contains("Paris"))
        .stdout(contains("$2000.00"));

    tp_db(&db_path, &["days", "1"])
        .assert()
        .success()
        .stdout(contains("Paris (3 days)"))
        .stdout(contains("06-01-2024"))
        .stdout(contains("06-02-2024"))
        .stdout(contains("06-03-2024"));
}

#[test]
fn add_accepts_configured_date_format() {
    let (_dir, db_path) = setup_test_db();
    tp_db(&db_path, &["init"]).assert().success();

    tp_db(
        &db_path,
        &["add", "Rome", "--budget", "300", "--start", "12-30-2024", "--end", "01-02-2025"],
    )
    .assert()
    .success()
    .stdout(contains("4 days"));
}

#[test]
fn paris_scenario_update_and_print() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);

    tp_db(
        &db_path,
        &[
            "update",
            "2",
            "--location",
            "Louvre area",
            "--activities",
            "Museum",
            "--restaurants",
            "Cafe X",
            "--hotel",
            "Hotel Y",
        ],
    )
    .assert()
    .success();

    tp_db(&db_path, &["print", "1"])
        .assert()
        .success()
        .stdout(contains("*Paris Trip*"))
        .stdout(contains("Overall Budget: $2000.00"))
        .stdout(contains(
            "06-02-2024: Louvre area\n\tYou have planned to Museum, eat at Cafe X, and sleep at Hotel Y.",
        ))
        .stdout(contains("06-01-2024: -"))
        .stdout(contains("06-03-2024: -"));
}

#[test]
fn partial_update_keeps_other_fields() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);

    tp_db(&db_path, &["update", "1", "--hotel", "Hotel Y", "--activities", "Walk"])
        .assert()
        .success();
    tp_db(&db_path, &["update", "1", "--hotel", "Hotel Z"])
        .assert()
        .success();

    tp_db(&db_path, &["print", "1"])
        .assert()
        .success()
        .stdout(contains("You have planned to Walk, eat at -, and sleep at Hotel Z."));
}

#[test]
fn inverted_range_is_rejected_and_nothing_is_stored() {
    let (_dir, db_path) = setup_test_db();
    tp_db(&db_path, &["init"]).assert().success();

    tp_db(
        &db_path,
        &["add", "Oops", "--budget", "1", "--start", "2024-06-03", "--end", "2024-06-01"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid date range"));

    tp_db(&db_path, &["trips"])
        .assert()
        .success()
        .stdout(contains("No trips yet"));
}

#[test]
fn bad_budget_and_bad_date_are_rejected() {
    let (_dir, db_path) = setup_test_db();
    tp_db(&db_path, &["init"]).assert().success();

    tp_db(
        &db_path,
        &["add", "X", "--budget", "lots", "--start", "2024-06-01", "--end", "2024-06-02"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid budget"));

    tp_db(
        &db_path,
        &["add", "X", "--budget", "10", "--start", "June 1", "--end", "2024-06-02"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn update_unknown_day_fails() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);

    tp_db(&db_path, &["update", "99", "--hotel", "Nowhere"])
        .assert()
        .failure()
        .stderr(contains("No day found with id 99"));
}

#[test]
fn too_long_detail_is_rejected() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);

    tp_db(
        &db_path,
        &["update", "1", "--hotel", "The Grand Hotel of Very Long Names"],
    )
    .assert()
    .failure()
    .stderr(contains("can only have 20 characters"));
}

#[test]
fn print_unknown_trip_fails() {
    let (_dir, db_path) = setup_test_db();
    tp_db(&db_path, &["init"]).assert().success();

    tp_db(&db_path, &["print", "7"])
        .assert()
        .failure()
        .stderr(contains("No trip found with id 7"));
}

#[test]
fn log_records_operations() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);
    tp_db(&db_path, &["update", "3", "--hotel", "H"]).assert().success();

    tp_db(&db_path, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("trip 1"))
        .stdout(contains("day 3"));
}

#[test]
fn db_maintenance_commands() {
    let (_dir, db_path) = setup_test_db();
    init_with_paris(&db_path);

    tp_db(&db_path, &["db", "--info", "--check", "--vacuum", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Trips:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"))
        .stdout(contains("Schema already up to date"));
}

#[test]
fn config_print_shows_effective_database() {
    let (_dir, db_path) = setup_test_db();

    tp_db(&db_path, &["config", "--print"])
        .assert()
        .success()
        .stdout(contains("date_format").and(contains(db_path.as_str())));
}

#[test]
fn relative_db_name_is_the_same_file_for_every_command() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    let run = |args: &[&str]| {
        let mut cmd = common::tp();
        cmd.env("HOME", home.path())
            .current_dir(cwd.path())
            .args(["--db", "relative.sqlite", "--test"])
            .args(args);
        cmd
    };

    let expected = home.path().join(".tripplan").join("relative.sqlite");

    run(&["init"])
        .assert()
        .success()
        .stdout(contains(expected.to_string_lossy().as_ref()));

    run(&["add", "Paris", "--budget", "10", "--start", "2024-06-01", "--end", "2024-06-02"])
        .assert()
        .success();

    assert!(!cwd.path().join("relative.sqlite").exists());

    let conn = rusqlite::Connection::open(&expected).unwrap();
    let trips: i64 = conn
        .query_row("SELECT COUNT(*) FROM trips", [], |r| r.get(0))
        .unwrap();
    assert_eq!(trips, 1);
}
