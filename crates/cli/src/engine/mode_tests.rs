// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    build = { Mode::Build, Phase::Build, false },
    run = { Mode::Run, Phase::Run, false },
    record = { Mode::Record, Phase::Run, true },
    record_build = { Mode::RecordBuild, Phase::Build, true },
)]
fn test_mode_phase(mode: Mode, phase: Phase, recording: bool) {
    assert_eq!(mode.phase(), phase);
    assert_eq!(mode.is_recording(), recording);
}

#[test]
fn test_build_policy_is_strict() {
    let policy = Mode::Build.policy();
    assert!(policy.checks_stdout);
    assert!(policy.checks_stderr);
    assert!(policy.requires_returncode_recorded);
    assert!(policy.fails_on_nonzero_exit);
}

#[test]
fn test_run_policy_gates_stdout_only() {
    let policy = Mode::Run.policy();
    assert!(policy.checks_stdout);
    assert!(!policy.checks_stderr);
    assert!(!policy.requires_returncode_recorded);
    assert!(!policy.fails_on_nonzero_exit);
}

#[test]
fn test_only_record_build_prompts_for_stdin() {
    assert!(Mode::RecordBuild.policy().prompts_for_stdin);
    assert!(!Mode::Record.policy().prompts_for_stdin);
    assert!(!Mode::Build.policy().prompts_for_stdin);
}

#[test]
fn test_recorder_of_each_phase() {
    assert_eq!(Mode::Build.recorder(), Mode::RecordBuild);
    assert_eq!(Mode::Run.recorder(), Mode::Record);
}

fn expected(stdout: &str, stderr: &str) -> Expectation {
    Expectation {
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        returncode: Some(0),
        ..Expectation::default()
    }
}

fn actual(stdout: &str, stderr: &str) -> Output {
    Output {
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        returncode: 0,
    }
}

#[test]
fn test_compare_equal_streams() {
    let policy = Mode::Build.policy();
    assert!(policy
        .compare(&expected("5\n", "w\n"), &actual("5\n", "w\n"))
        .is_empty());
}

#[test]
fn test_compare_reports_each_checked_stream() {
    let policy = Mode::Build.policy();
    let mismatches = policy.compare(&expected("5\n", ""), &actual("6\n", "oops\n"));
    assert_eq!(
        mismatches,
        vec![
            Mismatch {
                stream: Stream::Stdout,
                expected: "5\n".to_string(),
                actual: "6\n".to_string(),
            },
            Mismatch {
                stream: Stream::Stderr,
                expected: String::new(),
                actual: "oops\n".to_string(),
            },
        ]
    );
}

#[test]
fn test_compare_ignores_stderr_in_run_mode() {
    let policy = Mode::Run.policy();
    assert!(policy
        .compare(&expected("5\n", ""), &actual("5\n", "noise\n"))
        .is_empty());
}

#[test]
fn test_compare_is_exact() {
    let policy = Mode::Run.policy();
    assert_eq!(
        policy
            .compare(&expected("5\n", ""), &actual("5", ""))
            .len(),
        1
    );
}
