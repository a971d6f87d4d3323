// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory expectation record.

use std::fmt;

/// Which half of a test case an expectation describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Compiling or otherwise preparing the test source.
    Build,
    /// Executing the prepared test.
    Run,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Build => "build",
            Phase::Run => "run",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of an [`Expectation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Stdin,
    Stdout,
    Stderr,
    ReturnCode,
}

/// Expected behaviour of a single phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Words appended to the command line when the phase is executed.
    pub stdin: String,
    pub stdout: String,
    pub stderr: String,
    /// `None` until the phase has been recorded at least once.
    pub returncode: Option<i32>,
}

impl Expectation {
    /// Whether a return code has ever been recorded for this phase.
    pub fn is_recorded(&self) -> bool {
        self.returncode.is_some()
    }

    /// The stdin value split into extra command-line arguments.
    ///
    /// Splits on whitespace and drops empty tokens, so a blank value
    /// contributes no arguments.
    pub fn stdin_words(&self) -> Vec<String> {
        self.stdin.split_whitespace().map(str::to_string).collect()
    }
}

/// Expected behaviour of both phases of a test case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpectationRecord {
    pub build: Expectation,
    pub run: Expectation,
}

impl ExpectationRecord {
    pub fn phase(&self, phase: Phase) -> &Expectation {
        match phase {
            Phase::Build => &self.build,
            Phase::Run => &self.run,
        }
    }

    pub fn phase_mut(&mut self, phase: Phase) -> &mut Expectation {
        match phase {
            Phase::Build => &mut self.build,
            Phase::Run => &mut self.run,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
