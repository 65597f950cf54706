//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment (temporary data directory) and
//! command builders that set up the session environment the way the
//! surrounding application would.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// The session env vars the CLI reads; cleared on every command so tests
/// never inherit a session from the outer environment.
const SESSION_VARS: [&str; 4] = [
    "PHOTOHOLD_USER_ID",
    "PHOTOHOLD_USER_NAME",
    "PHOTOHOLD_USER_EMAIL",
    "PHOTOHOLD_ADMIN",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the photohold data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("photohold-data");

        Self { temp_dir, data_dir }
    }

    /// A command with the test data directory and no session.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("photohold").unwrap();
        cmd.arg("--data-dir").arg(&self.data_dir);
        for var in SESSION_VARS {
            cmd.env_remove(var);
        }
        for var in [
            "PHOTOHOLD_DATA_DIR",
            "PHOTOHOLD_BUSY_TIMEOUT",
            "PHOTOHOLD_DISABLE_AUTOINIT",
            "PHOTOHOLD_OUTPUT_FORMAT",
            "PHOTOHOLD_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command running under the given member's session.
    pub fn command_as(&self, user_id: &str) -> Command {
        let mut cmd = self.command();
        cmd.env("PHOTOHOLD_USER_ID", user_id)
            .env("PHOTOHOLD_USER_NAME", format!("Member {user_id}"))
            .env("PHOTOHOLD_USER_EMAIL", format!("{user_id}@example.org"));
        cmd
    }

    /// A command running under an admin session.
    pub fn command_as_admin(&self) -> Command {
        let mut cmd = self.command_as("admin-1");
        cmd.env("PHOTOHOLD_ADMIN", "1");
        cmd
    }

    /// Reserve a photo as the given user and return the new reservation id.
    pub fn reserve(&self, user_id: &str, photo_id: &str) -> i64 {
        let output = self
            .command_as(user_id)
            .arg("reserve")
            .arg(photo_id)
            .output()
            .expect("failed to run reserve");
        assert!(
            output.status.success(),
            "reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .expect("reserve must print the reservation id")
    }
}
