// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration, read once and passed to every component.

use std::path::{Path, PathBuf};

use golden_record::Phase;
use thiserror::Error;

use crate::env;

/// Errors from assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{0}` environment variable not set! please provide a value and run again!")]
    Missing(&'static str),

    #[error("`TESTS_DIR` does not name a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Immutable harness settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    build_cmd: Option<String>,
    run_cmd: Option<String>,
    tests_dir: PathBuf,
    src_suffix: String,
}

impl Config {
    /// Create a config for `tests_dir` with no command templates.
    ///
    /// A leading `.` on the suffix is dropped.
    pub fn new(tests_dir: impl Into<PathBuf>, src_suffix: &str) -> Self {
        Self {
            build_cmd: None,
            run_cmd: None,
            tests_dir: tests_dir.into(),
            src_suffix: normalize_suffix(src_suffix).to_string(),
        }
    }

    /// Set the build command template
    pub fn with_build_cmd(mut self, template: impl Into<String>) -> Self {
        self.build_cmd = Some(template.into());
        self
    }

    /// Set the run command template
    pub fn with_run_cmd(mut self, template: impl Into<String>) -> Self {
        self.run_cmd = Some(template.into());
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match name {
            env::BUILD_CMD => env::build_cmd(),
            env::RUN_CMD => env::run_cmd(),
            env::TESTS_DIR => env::tests_dir(),
            env::SRC_SUFFIX => env::src_suffix(),
            _ => None,
        })
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// `TESTS_DIR` and `SRC_SUFFIX` are required here; the command templates
    /// are checked by [`Config::require`] once the subcommands are known.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let tests_dir = PathBuf::from(get(env::TESTS_DIR)?);
        let suffix = get(env::SRC_SUFFIX)?;
        if normalize_suffix(&suffix).is_empty() {
            return Err(ConfigError::Missing(env::SRC_SUFFIX));
        }

        let tests_dir = std::fs::canonicalize(&tests_dir)
            .ok()
            .filter(|dir| dir.is_dir())
            .ok_or(ConfigError::NotADirectory(tests_dir))?;

        let mut config = Self::new(tests_dir, &suffix);
        config.build_cmd = get(env::BUILD_CMD).ok();
        config.run_cmd = get(env::RUN_CMD).ok();
        Ok(config)
    }

    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    /// Source suffix without its leading `.`.
    pub fn src_suffix(&self) -> &str {
        &self.src_suffix
    }

    /// The command template that drives `phase`.
    pub fn command_template(&self, phase: Phase) -> Result<&str, ConfigError> {
        let (template, name) = match phase {
            Phase::Build => (&self.build_cmd, env::BUILD_CMD),
            Phase::Run => (&self.run_cmd, env::RUN_CMD),
        };
        template.as_deref().ok_or(ConfigError::Missing(name))
    }

    /// Check that a template exists for every phase in `phases`.
    pub fn require(&self, phases: impl IntoIterator<Item = Phase>) -> Result<(), ConfigError> {
        for phase in phases {
            self.command_template(phase)?;
        }
        Ok(())
    }
}

fn normalize_suffix(suffix: &str) -> &str {
    suffix.strip_prefix('.').unwrap_or(suffix)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
