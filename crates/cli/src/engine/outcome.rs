// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use golden_record::StoreError;
use thiserror::Error;

use crate::exec::SpawnError;
use crate::substitute::CommandError;

/// Output stream of a test command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => f.write_str("stdout"),
            Stream::Stderr => f.write_str("stderr"),
        }
    }
}

/// A stream whose live content differs from the expectation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub stream: Stream,
    pub expected: String,
    pub actual: String,
}

/// Why a test case failed.
#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error("exited with status {returncode}")]
    NonZeroExit { returncode: i32, stderr: String },

    #[error("output does not match the recorded expectation")]
    Mismatch(Vec<Mismatch>),

    #[error("cannot save expectations: {0}")]
    Store(#[from] StoreError),
}

/// Why a test case was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// No return code recorded for the phase.
    Unrecorded,
    /// The operator did not confirm the recording.
    Declined,
    /// The operator kept the existing stdin words.
    InputKept,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Unrecorded => f.write_str("nothing recorded yet"),
            Skip::Declined => f.write_str("not recorded"),
            Skip::InputKept => f.write_str("kept the existing input"),
        }
    }
}

/// Terminal state of one test case.
#[derive(Debug)]
pub enum Outcome {
    Passed,
    Failed(Failure),
    Skipped(Skip),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Tally of the outcomes of one subcommand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Cases the subcommand was given.
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn add(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed(_) => self.failed += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
