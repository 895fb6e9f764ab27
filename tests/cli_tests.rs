use chrono::Days;
use dietlog::utils::date::today;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{count_rows, dtl, setup_test_db};

fn init(db_path: &str) {
    dtl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_add_get_update_del() {
    let db_path = setup_test_db("cli_crud");
    init(&db_path);

    dtl()
        .args(["--db", &db_path, "add", "Barathi", "2024-01-10", "--breakfast", "oats"])
        .assert()
        .success()
        .stdout(contains("Created 1 record(s)"));

    dtl()
        .args(["--db", &db_path, "get", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"breakfast\": \"oats\""))
        .stdout(contains("\"name\": \"Barathi\""));

    dtl()
        .args([
            "--db",
            &db_path,
            "update",
            "1",
            "Barathi",
            "2024-01-10",
            "--breakfast",
            "eggs",
        ])
        .assert()
        .success()
        .stdout(contains("Record 1 updated"));

    dtl()
        .args(["--db", &db_path, "get", "1"])
        .assert()
        .success()
        .stdout(contains("eggs").and(contains("oats").not()));

    dtl()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("Record 1 deleted."));

    dtl()
        .args(["--db", &db_path, "get", "1"])
        .assert()
        .success()
        .stdout(contains("1 not found"));
}

#[test]
fn test_add_duplicate_fails() {
    let db_path = setup_test_db("cli_dup");
    init(&db_path);

    dtl()
        .args(["--db", &db_path, "add", "Durga", "2024-02-01", "--lunch", "rice"])
        .assert()
        .success();

    dtl()
        .args(["--db", &db_path, "add", "Durga", "2024-02-01", "--lunch", "curd"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Duplicate record"));

    assert_eq!(count_rows(&db_path), 1);
}

#[test]
fn test_add_unknown_person_fails() {
    let db_path = setup_test_db("cli_unknown");
    init(&db_path);

    dtl()
        .args(["--db", &db_path, "add", "Unknown", "2024-02-01"])
        .assert()
        .failure()
        .stderr(contains("Unknown person: Unknown"));
}

#[test]
fn test_add_batch_from_file_is_atomic() {
    let db_path = setup_test_db("cli_batch");
    init(&db_path);

    let mut bad = env::temp_dir();
    bad.push("cli_batch_bad.json");
    fs::write(
        &bad,
        r#"{"data":[{"name":"Indira","date":"2024-03-01"},{"name":"Indira","date":"2024-3-2"}]}"#,
    )
    .unwrap();

    dtl()
        .args(["--db", &db_path, "add", "--file", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Invalid date: 2024-3-2"));
    assert_eq!(count_rows(&db_path), 0);

    dtl()
        .args(["--db", &db_path, "add", "--file", "-"])
        .write_stdin(
            r#"{"data":[{"name":"Indira","date":"2024-03-01"},{"name":"Sakthi","date":"2024-03-01"}]}"#,
        )
        .assert()
        .success()
        .stdout(contains("Created 2 record(s)"));
    assert_eq!(count_rows(&db_path), 2);
}

#[test]
fn test_list_window() {
    let db_path = setup_test_db("cli_list");
    init(&db_path);

    let t = today();
    let near = (t + Days::new(1)).format("%Y-%m-%d").to_string();
    let far = (t + Days::new(10)).format("%Y-%m-%d").to_string();

    for (date, food) in [(&near, "near-food"), (&far, "far-food")] {
        dtl()
            .args(["--db", &db_path, "add", "Sakthi", date, "--dinner", food])
            .assert()
            .success();
    }

    dtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("near-food").and(contains("far-food").not()));

    dtl()
        .args(["--db", &db_path, "list", "--days", "10", "--json"])
        .assert()
        .success()
        .stdout(contains("far-food"))
        .stdout(contains("\"header\""))
        .stdout(contains("\"label\": \"Pre Breakfast\""));
}

#[test]
fn test_list_empty() {
    let db_path = setup_test_db("cli_list_empty");
    init(&db_path);

    dtl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records"));
}

#[test]
fn test_del_missing_succeeds() {
    let db_path = setup_test_db("cli_del_missing");
    init(&db_path);

    for _ in 0..2 {
        dtl()
            .args(["--db", &db_path, "del", "77"])
            .assert()
            .success();
    }
}
