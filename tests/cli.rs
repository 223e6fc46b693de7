//! CLI integration tests for syllabus admin commands.
//!
//! Each test uses an isolated temp directory for the database, ensuring tests
//! can run in parallel safely.

#![allow(deprecated)] // Command::cargo_bin deprecation only affects custom build dirs

use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

use syllabus::store::{SqliteStore, Store};

fn syllabus_cmd() -> Command {
    Command::cargo_bin("syllabus").expect("binary exists")
}

fn init(data_dir: &Path) {
    syllabus_cmd()
        .args(["admin", "init", "--data-dir"])
        .arg(data_dir)
        .assert()
        .success();
}

#[test]
fn test_admin_init_creates_database() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data_dir = temp.path().join("data");

    init(&data_dir);

    assert!(data_dir.join("syllabus.db").exists());
}

#[test]
fn test_admin_init_is_idempotent() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data_dir = temp.path().join("data");

    init(&data_dir);

    // Seed a row between the two runs; the second run must not disturb it.
    let store = SqliteStore::new(data_dir.join("syllabus.db")).unwrap();
    let course = store
        .create_course(&syllabus::types::CourseInput {
            title: "Intro to Systems".to_string(),
            url: "https://example.com/c1".to_string(),
        })
        .unwrap();
    drop(store);

    init(&data_dir);

    let store = SqliteStore::new(data_dir.join("syllabus.db")).unwrap();
    let fetched = store.get_course(course.id).unwrap().unwrap();
    assert_eq!(fetched.title, "Intro to Systems");
}

#[test]
fn test_create_user_stores_hashed_credentials() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data_dir = temp.path().join("data");

    syllabus_cmd()
        .args([
            "admin",
            "create-user",
            "--username",
            "kenneth",
            "--email",
            "Kenneth@Example.com",
            "--password",
            "hunter2",
        ])
        .args(["--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("kenneth"));

    let store = SqliteStore::new(data_dir.join("syllabus.db")).unwrap();
    let user = store.get_user_by_username("kenneth").unwrap().unwrap();
    assert_eq!(user.email, "kenneth@example.com");
    assert!(user.password.starts_with("$argon2id$"));
}

#[test]
fn test_create_user_rejects_duplicates() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data_dir = temp.path().join("data");

    let create = |username: &str, email: &str| {
        let mut cmd = syllabus_cmd();
        cmd.args([
            "admin",
            "create-user",
            "--username",
            username,
            "--email",
            email,
            "--password",
            "hunter2",
        ])
        .args(["--data-dir"])
        .arg(&data_dir);
        cmd
    };

    create("kenneth", "kenneth@example.com").assert().success();

    // Same email in different casing is still a duplicate.
    create("other", "KENNETH@example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    create("kenneth", "fresh@example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
