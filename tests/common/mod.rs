#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated application home for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Script-mode CLI bound to `home` with a fixed budget seed.
pub fn script_cli(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("okozukai_cli").expect("binary built");
    cmd.env("OKOZUKAI_CLI_SCRIPT", "1")
        .env("OKOZUKAI_HOME", home)
        .env("OKOZUKAI_SEED", "42")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
