// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case state machine shared by every test-running subcommand.

use golden_record::{ArtifactStore, Expectation, Phase};
use thiserror::Error;
use tracing::{debug, trace};

use super::mode::Mode;
use super::outcome::{Failure, Outcome, Skip, Summary};
use crate::config::{Config, ConfigError};
use crate::exec::{self, Output};
use crate::prompt::Prompter;
use crate::registry::TestCase;
use crate::report::Reporter;
use crate::substitute;

/// Errors that end a subcommand early.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("stopping after the first failure (test '{name}')")]
    Aborted { name: String, summary: Summary },
}

/// Drives one subcommand over a list of test cases.
pub struct Engine<'a> {
    config: &'a Config,
    store: &'a ArtifactStore,
    reporter: &'a mut dyn Reporter,
    prompter: &'a mut dyn Prompter,
    stop_on_error: bool,
}

impl<'a> Engine<'a> {
    pub fn new(
        config: &'a Config,
        store: &'a ArtifactStore,
        reporter: &'a mut dyn Reporter,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            config,
            store,
            reporter,
            prompter,
            stop_on_error: false,
        }
    }

    /// Abort at the first failed case.
    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    /// Process `cases` in order under `mode`.
    ///
    /// Recording modes update each confirmed case's record in place after it
    /// has been saved.
    pub fn run(&mut self, mode: Mode, cases: &mut [TestCase]) -> Result<Summary, EngineError> {
        let config = self.config;
        let template = config.command_template(mode.phase())?;
        let total = cases.len();
        let mut summary = Summary::new(total);

        self.reporter.begin(mode);
        for (index, case) in cases.iter_mut().enumerate() {
            self.reporter.case_started(mode, index + 1, total, &case.name);

            let outcome = if mode.is_recording() {
                self.record_case(mode, template, case)
            } else {
                self.check_case(mode, template, case)
            };
            debug!(mode = mode.as_str(), name = %case.name, ?outcome, "case finished");

            match &outcome {
                Outcome::Passed => {}
                Outcome::Failed(failure) => self.reporter.failed(failure),
                Outcome::Skipped(skip) => self.reporter.skipped(*skip),
            }
            summary.add(&outcome);

            if outcome.is_failed() && self.stop_on_error {
                return Err(EngineError::Aborted {
                    name: case.name.clone(),
                    summary,
                });
            }
        }

        self.reporter.summary(mode, &summary);
        Ok(summary)
    }

    fn check_case(&mut self, mode: Mode, template: &str, case: &TestCase) -> Outcome {
        let policy = mode.policy();
        let expected = case.record.phase(mode.phase());

        if !expected.is_recorded() {
            self.reporter.warning(&format!(
                "Test '{}' has no recorded {} return code!",
                case.name,
                mode.phase()
            ));
            self.reporter.warning(&format!(
                "Please record its expected behaviour with the '{}' subcommand!",
                mode.recorder().as_str()
            ));
            if policy.requires_returncode_recorded {
                return Outcome::Skipped(Skip::Unrecorded);
            }
        }

        let output = match self.execute(template, &case.name, expected) {
            Ok(output) => output,
            Err(failure) => return Outcome::Failed(failure),
        };

        if policy.fails_on_nonzero_exit && output.returncode != 0 {
            return Outcome::Failed(Failure::NonZeroExit {
                returncode: output.returncode,
                stderr: output.stderr,
            });
        }

        let mismatches = policy.compare(expected, &output);
        if !mismatches.is_empty() {
            return Outcome::Failed(Failure::Mismatch(mismatches));
        }

        self.reporter.passed(&output);
        Outcome::Passed
    }

    fn record_case(&mut self, mode: Mode, template: &str, case: &mut TestCase) -> Outcome {
        let phase = mode.phase();
        let mut pending = case.record.phase(phase).clone();

        if mode.policy().prompts_for_stdin {
            match self.ask_stdin(phase, &pending.stdin) {
                Ok(stdin) => pending.stdin = stdin,
                Err(skip) => return Outcome::Skipped(skip),
            }
        }

        let output = match self.execute(template, &case.name, &pending) {
            Ok(output) => output,
            Err(failure) => return Outcome::Failed(failure),
        };
        self.reporter.live_output(&output);

        let question = match phase {
            Phase::Build => "Record this as the expected build behaviour? [y/N]",
            Phase::Run => "Record this as the expected behaviour? [y/N]",
        };
        if !self.prompter.confirm(question) {
            return Outcome::Skipped(Skip::Declined);
        }

        pending.stdout = output.stdout;
        pending.stderr = output.stderr;
        pending.returncode = Some(output.returncode);

        let mut record = case.record.clone();
        *record.phase_mut(phase) = pending;
        if let Err(e) = self.store.save(&case.name, &record) {
            return Outcome::Failed(Failure::Store(e));
        }

        case.record = record;
        self.reporter.recorded(&case.name);
        Outcome::Passed
    }

    /// Settle the stdin words for `phase` with the operator.
    fn ask_stdin(&mut self, phase: Phase, current: &str) -> Result<String, Skip> {
        let label = match phase {
            Phase::Build => "build_stdin",
            Phase::Run => "stdin",
        };

        if !current.is_empty() {
            self.reporter
                .info(&format!("Test already has {} '{}'", label, current));
            let question = format!("Do you want to change {}? [y/N]", label);
            if !self.prompter.confirm(&question) {
                return Err(Skip::InputKept);
            }
        }

        let question = format!("What is the {} passed? (blank for none)", label);
        self.prompter.ask(&question).ok_or(Skip::Declined)
    }

    fn execute(
        &mut self,
        template: &str,
        name: &str,
        expectation: &Expectation,
    ) -> Result<Output, Failure> {
        let argv = substitute::resolve(template, name, self.config.src_suffix())?;
        let extra = expectation.stdin_words();

        let mut shown = argv.clone();
        shown.extend(extra.iter().cloned());
        self.reporter.command(&shown);
        trace!(?shown, "spawning");

        Ok(exec::execute(&argv, &extra, self.config.tests_dir())?)
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
