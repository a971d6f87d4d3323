// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code, deprecated)]

//! Shared helpers for binary-level tests.
//!
//! Every test gets its own tests directory whose sources are small `sh`
//! scripts. The build command passes `build` as the first argument.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const BUILD_CMD: &str = "sh {test_name}.{src_suffix} build";
pub const RUN_CMD: &str = "sh {test_name}.{src_suffix}";

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the test source `<name>.sh`.
    pub fn script(&self, name: &str, body: &str) -> &Self {
        fs::write(self.path().join(format!("{name}.sh")), body).unwrap();
        self
    }

    /// Write the expectation file of `name` verbatim.
    pub fn expect(&self, name: &str, content: &str) -> &Self {
        fs::write(self.expected_path(name), content).unwrap();
        self
    }

    pub fn expected_path(&self, name: &str) -> PathBuf {
        self.path().join(format!(".{name}.expected"))
    }

    pub fn exists(&self, file: &str) -> bool {
        self.path().join(file).exists()
    }

    /// Names of the hidden files in the tests directory.
    pub fn hidden_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.starts_with('.'))
            .collect();
        names.sort();
        names
    }

    /// The golden binary configured for this workspace.
    pub fn golden(&self) -> Command {
        let mut cmd = Command::cargo_bin("golden").unwrap();
        cmd.env_remove("GOLDEN_LOG")
            .env("TESTS_DIR", self.path())
            .env("SRC_SUFFIX", "sh")
            .env("BUILD_CMD", BUILD_CMD)
            .env("RUN_CMD", RUN_CMD);
        cmd
    }
}

/// Expectation file content for a run phase that printed `stdout` and
/// exited 0.
pub fn run_expectation(stdout: &str) -> String {
    format!("@@ stdout\n{stdout}@@ returncode\n0\n")
}

/// Expectation file content for a build phase that printed nothing and
/// exited 0.
pub fn build_expectation() -> String {
    "@@ build_returncode\n0\n".to_string()
}
