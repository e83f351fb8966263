//! # Test Harness
//!
//! Provides an isolated home directory so tests never read or write the
//! user's real `~/.config/crockford/config`. The binary runs as a child
//! process, so isolation comes from its `HOME` environment variable.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment owning a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment with an empty home directory.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        Self { home_dir }
    }

    /// Returns the path where the config file would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("crockford")
            .join("config")
    }

    /// Writes the config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Creates a `crockford` command that runs against this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("crockford").expect("binary should build");
        cmd.env("HOME", self.home_dir.path());
        cmd
    }
}

