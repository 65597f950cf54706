//! Integration tests for the `reserve` and `status` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_reserve_prints_reservation_id() {
    let env = TestEnv::new();
    env.command_as("u-1")
        .arg("reserve")
        .arg("gallery-2024/042")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn test_reserve_conflict_exit_code() {
    let env = TestEnv::new();
    env.reserve("u-1", "gallery-2024/042");

    // The second claim must fail with the conflict code and a message the
    // UI can distinguish from a generic error
    env.command_as("u-2")
        .arg("reserve")
        .arg("gallery-2024/042")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already reserved"));
}

#[test]
fn test_reserve_requires_session() {
    let env = TestEnv::new();
    env.command()
        .arg("reserve")
        .arg("p1")
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("authentication required"));
}

#[test]
fn test_reserve_blank_photo_id_rejected() {
    let env = TestEnv::new();
    env.command_as("u-1")
        .arg("reserve")
        .arg("   ")
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("photo id"));
}

#[test]
fn test_reserve_json_output() {
    let env = TestEnv::new();
    let output = env
        .command_as("u-1")
        .arg("reserve")
        .arg("p1")
        .arg("--json")
        .arg("--message")
        .arg("after the service")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["photo_id"], "p1");
    assert_eq!(value["status"], "pending");
    assert_eq!(value["user_id"], "u-1");
    assert_eq!(value["message"], "after the service");
}

#[test]
fn test_reserve_same_user_cannot_double_claim() {
    let env = TestEnv::new();
    env.reserve("u-1", "p1");

    // Even the holder cannot claim the photo again while active
    env.command_as("u-1")
        .arg("reserve")
        .arg("p1")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_status_three_dispositions() {
    let env = TestEnv::new();

    env.command_as("u-1")
        .arg("status")
        .arg("p1")
        .assert()
        .success()
        .stdout(predicate::str::contains("available"));

    env.reserve("u-1", "p1");

    env.command_as("u-1")
        .arg("status")
        .arg("p1")
        .assert()
        .success()
        .stdout(predicate::str::contains("reserved by you"));

    // Another member sees only "reserved", not who holds it
    let output = env
        .command_as("u-2")
        .arg("status")
        .arg("p1")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "reserved");
    assert!(!stdout.contains("u-1"));
}

#[test]
fn test_status_available_again_after_cancel() {
    let env = TestEnv::new();
    let id = env.reserve("u-1", "p1");

    env.command_as("u-1")
        .arg("cancel")
        .arg(id.to_string())
        .assert()
        .success();

    env.command_as("u-2")
        .arg("status")
        .arg("p1")
        .assert()
        .success()
        .stdout(predicate::str::contains("available"));
}
