//! Integration tests for the `bulk-update` command: partial success,
//! per-id failure reporting, and the admin gate.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_bulk_update_all_success() {
    let env = TestEnv::new();
    let a = env.reserve("u-1", "p1");
    let b = env.reserve("u-2", "p2");

    env.command_as_admin()
        .arg("bulk-update")
        .arg(a.to_string())
        .arg(b.to_string())
        .arg("--status")
        .arg("confirmed")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 2"));
}

#[test]
fn test_bulk_update_partial_success_exits_zero() {
    let env = TestEnv::new();
    let pending = env.reserve("u-1", "p1");
    let cancelled = env.reserve("u-2", "p2");
    env.command_as("u-2")
        .arg("cancel")
        .arg(cancelled.to_string())
        .assert()
        .success();

    // One id updates, the other is reported; the batch still exits 0
    env.command_as_admin()
        .arg("bulk-update")
        .arg(pending.to_string())
        .arg(cancelled.to_string())
        .arg("--status")
        .arg("confirmed")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 1"))
        .stdout(predicate::str::contains(format!("failed {cancelled}")))
        .stdout(predicate::str::contains("invalid transition"));
}

#[test]
fn test_bulk_update_json_report() {
    let env = TestEnv::new();
    let pending = env.reserve("u-1", "p1");

    let output = env
        .command_as_admin()
        .arg("bulk-update")
        .arg(pending.to_string())
        .arg("4040")
        .arg("--status")
        .arg("confirmed")
        .arg("--message")
        .arg("prints arrived")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["updatedCount"], 1);

    let reservations = value["reservations"].as_array().unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0]["status"], "confirmed");
    assert_eq!(reservations[0]["message"], "prints arrived");

    let failed = value["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["id"], 4040);
    assert!(failed[0]["reason"].as_str().unwrap().contains("not found"));
}

#[test]
fn test_bulk_update_requires_admin() {
    let env = TestEnv::new();
    let id = env.reserve("u-1", "p1");

    env.command_as("u-1")
        .arg("bulk-update")
        .arg(id.to_string())
        .arg("--status")
        .arg("confirmed")
        .assert()
        .failure()
        .code(3);

    // Nothing changed: the record still lists as pending
    let output = env
        .command_as_admin()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["pending"], 1);
}

#[test]
fn test_bulk_update_requires_at_least_one_id() {
    let env = TestEnv::new();
    env.command_as_admin()
        .arg("bulk-update")
        .arg("--status")
        .arg("confirmed")
        .assert()
        .failure();
}

#[test]
fn test_bulk_cancel_for_called_off_event() {
    let env = TestEnv::new();
    let a = env.reserve("u-1", "p1");
    let b = env.reserve("u-2", "p2");

    env.command_as_admin()
        .arg("bulk-update")
        .arg(a.to_string())
        .arg(b.to_string())
        .arg("--status")
        .arg("cancelled")
        .arg("--message")
        .arg("gallery withdrawn")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated 2"));

    // Both photos are claimable again
    env.command_as("u-3")
        .arg("status")
        .arg("p1")
        .assert()
        .success()
        .stdout(predicate::str::contains("available"));
}
