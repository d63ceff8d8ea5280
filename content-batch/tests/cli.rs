use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Points the binary at a port nobody listens on, so any accidental request fails fast.
fn content_batch() -> Command {
    let mut cmd = Command::cargo_bin("content-batch").expect("Binary exists");
    cmd.env("CONTENT_API_BASE_URL", "http://127.0.0.1:9")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_lists_subcommands() {
    content_batch()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create")
                .and(predicate::str::contains("purge"))
                .and(predicate::str::contains("menu")),
        );
}

#[test]
fn unknown_purge_target_is_rejected() {
    content_batch()
        .args(["purge", "widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn create_with_missing_folder_exits_cleanly() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    content_batch()
        .args(["create", "articles", "--folder"])
        .arg(&missing)
        .write_stdin("bm-1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid folder path").and(predicate::str::contains("Exiting.")));
}

#[test]
fn declining_confirmation_aborts_without_summary() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("intro.json"),
        r#"{"title": "Intro", "department": "Eng", "articleDescription": "d",
            "university": "U", "category": "c", "visibility": "public",
            "link": "l", "topic": "t", "dateadded": "2024-01-01", "duration": 3}"#,
    )
    .unwrap();
    fs::write(dir.path().join("broken.txt"), "{ nope").unwrap();

    content_batch()
        .args(["create", "articles", "--folder"])
        .arg(dir.path())
        .write_stdin("bm-1\nno\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("  - intro.json")
                .and(predicate::str::contains("broken.txt  (PAYLOAD ERROR: invalid JSON format"))
                .and(predicate::str::contains("Aborting creation process."))
                .and(predicate::str::contains("SUMMARY").not()),
        );
}

#[test]
fn unreachable_api_fails_every_item_but_still_summarises() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("UniversityofMelbourne.png"), b"png").unwrap();

    content_batch()
        .args(["create", "universities", "--folder"])
        .arg(dir.path())
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("UNIVERSITY CREATION SUMMARY:")
                .and(predicate::str::contains("Success: 0"))
                .and(predicate::str::contains("Failed: 1"))
                .and(predicate::str::contains("    - UniversityofMelbourne.png")),
        );
}

#[test]
fn menu_rejects_unknown_choice_and_quits() {
    content_batch()
        .arg("menu")
        .write_stdin("9\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("MAIN MENU")
                .and(predicate::str::contains("Invalid choice. Please try again."))
                .and(predicate::str::contains("Exiting...")),
        );
}

#[test]
fn menu_leaves_when_input_ends() {
    content_batch().arg("menu").write_stdin("").assert().success();
}
