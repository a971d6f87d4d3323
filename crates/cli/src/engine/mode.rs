// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use golden_record::{Expectation, Phase};

use super::outcome::{Mismatch, Stream};
use crate::exec::Output;

/// What a test-running subcommand does with each case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Build,
    Run,
    Record,
    RecordBuild,
}

/// Which checks a mode applies to a live result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModePolicy {
    pub checks_stdout: bool,
    pub checks_stderr: bool,
    /// Skip cases whose return code was never recorded.
    pub requires_returncode_recorded: bool,
    /// Fail before comparing output when the command exits non-zero.
    pub fails_on_nonzero_exit: bool,
    /// Ask the operator for the phase's stdin words before executing.
    pub prompts_for_stdin: bool,
}

const BUILD_POLICY: ModePolicy = ModePolicy {
    checks_stdout: true,
    checks_stderr: true,
    requires_returncode_recorded: true,
    fails_on_nonzero_exit: true,
    prompts_for_stdin: false,
};

// Run mode gates on stdout only; stderr and return code are recorded but
// never compared.
const RUN_POLICY: ModePolicy = ModePolicy {
    checks_stdout: true,
    checks_stderr: false,
    requires_returncode_recorded: false,
    fails_on_nonzero_exit: false,
    prompts_for_stdin: false,
};

const RECORD_POLICY: ModePolicy = ModePolicy {
    checks_stdout: false,
    checks_stderr: false,
    requires_returncode_recorded: false,
    fails_on_nonzero_exit: false,
    prompts_for_stdin: false,
};

const RECORD_BUILD_POLICY: ModePolicy = ModePolicy {
    prompts_for_stdin: true,
    ..RECORD_POLICY
};

impl Mode {
    /// The phase whose command and expectation this mode uses.
    pub fn phase(&self) -> Phase {
        match self {
            Mode::Build | Mode::RecordBuild => Phase::Build,
            Mode::Run | Mode::Record => Phase::Run,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Mode::Record | Mode::RecordBuild)
    }

    pub fn policy(&self) -> ModePolicy {
        match self {
            Mode::Build => BUILD_POLICY,
            Mode::Run => RUN_POLICY,
            Mode::Record => RECORD_POLICY,
            Mode::RecordBuild => RECORD_BUILD_POLICY,
        }
    }

    /// The subcommand word selecting this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Build => "build",
            Mode::Run => "run",
            Mode::Record => "record",
            Mode::RecordBuild => "record_build",
        }
    }

    /// The recording mode that fills in this mode's expectation.
    pub fn recorder(&self) -> Mode {
        match self.phase() {
            Phase::Build => Mode::RecordBuild,
            Phase::Run => Mode::Record,
        }
    }
}

impl ModePolicy {
    /// Compare `actual` against `expected` on the streams this policy checks.
    pub fn compare(&self, expected: &Expectation, actual: &Output) -> Vec<Mismatch> {
        let checks = [
            (self.checks_stdout, Stream::Stdout, &expected.stdout, &actual.stdout),
            (self.checks_stderr, Stream::Stderr, &expected.stderr, &actual.stderr),
        ];

        checks
            .into_iter()
            .filter(|(checked, _, expected, actual)| *checked && expected != actual)
            .map(|(_, stream, expected, actual)| Mismatch {
                stream,
                expected: expected.clone(),
                actual: actual.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
