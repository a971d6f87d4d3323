// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing progress and results.

use std::io::{self, IsTerminal, Stdout, Write};

use crate::engine::{Failure, Mode, Skip, Summary};
use crate::exec::Output;
use crate::output_diagnostic::{paint, Color};
use crate::registry::TestCase;
use crate::substitute;

/// Receives every event the engine wants the operator to see.
pub trait Reporter {
    /// A subcommand is starting.
    fn begin(&mut self, mode: Mode);
    /// Case `position` of `total` (1-based) is starting.
    fn case_started(&mut self, mode: Mode, position: usize, total: usize, name: &str);
    /// The command about to be executed.
    fn command(&mut self, argv: &[String]);
    /// Extra context only shown in verbose mode.
    fn detail(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    /// Fresh output shown before asking whether to record it.
    fn live_output(&mut self, output: &Output);
    fn passed(&mut self, output: &Output);
    fn recorded(&mut self, name: &str);
    fn failed(&mut self, failure: &Failure);
    fn skipped(&mut self, skip: Skip);
    fn summary(&mut self, mode: Mode, summary: &Summary);
    /// Every discovered case with what has been recorded for it.
    fn list(&mut self, cases: &[TestCase]);
}

/// Line-oriented reporter for a terminal or any other writer.
pub struct TerminalReporter<W> {
    out: W,
    color: bool,
    verbose: bool,
}

impl TerminalReporter<Stdout> {
    /// Reporter on stdout, colored when stdout is a terminal.
    pub fn stdout(verbose: bool) -> Self {
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        Self::new(stdout, color, verbose)
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W, color: bool, verbose: bool) -> Self {
        Self {
            out,
            color,
            verbose,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn tagged(&mut self, tag: &str, color: Color, message: &str) {
        let tag = paint(tag, color, self.color);
        let _ = if message.is_empty() {
            writeln!(self.out, "{}", tag)
        } else {
            writeln!(self.out, "{} {}", tag, message)
        };
    }

    fn block(&mut self, label: &str, text: &str) {
        let _ = writeln!(self.out, "{}:", label);
        let _ = writeln!(self.out, ">>>{}<<<", text);
    }

    fn output(&mut self, output: &Output) {
        self.block("stdout", &output.stdout);
        self.block("stderr", &output.stderr);
        let _ = writeln!(self.out, "returncode: {}", output.returncode);
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn begin(&mut self, mode: Mode) {
        let _ = writeln!(self.out, "----- [{}] -----", mode.as_str().to_uppercase());
    }

    fn case_started(&mut self, _mode: Mode, position: usize, total: usize, name: &str) {
        let _ = writeln!(self.out, "+ [{}/{}] {}", position, total, name);
    }

    fn command(&mut self, argv: &[String]) {
        if self.verbose {
            self.tagged("[CMD]", Color::Dim, &substitute::display(argv));
        }
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            self.tagged("[INFO]", Color::Dim, message);
        }
    }

    fn info(&mut self, message: &str) {
        self.tagged("[INFO]", Color::Dim, message);
    }

    fn warning(&mut self, message: &str) {
        self.tagged("[WARNING]", Color::Yellow, message);
    }

    fn live_output(&mut self, output: &Output) {
        self.output(output);
    }

    fn passed(&mut self, output: &Output) {
        self.tagged("[PASS]", Color::Green, "");
        if self.verbose {
            self.output(output);
        }
    }

    fn recorded(&mut self, name: &str) {
        self.tagged("[PASS]", Color::Green, &format!("recorded '{}'", name));
    }

    fn failed(&mut self, failure: &Failure) {
        match failure {
            Failure::Mismatch(mismatches) => {
                for mismatch in mismatches {
                    let message = format!("{} does not match", mismatch.stream);
                    self.tagged("[FAILED]", Color::Red, &message);
                    self.block("Expected", &mismatch.expected);
                    self.block("But got", &mismatch.actual);
                }
            }
            Failure::NonZeroExit { stderr, .. } => {
                self.tagged("[FAILED]", Color::Red, &failure.to_string());
                if !stderr.is_empty() {
                    self.block("stderr", stderr);
                }
            }
            other => self.tagged("[FAILED]", Color::Red, &other.to_string()),
        }
    }

    fn skipped(&mut self, skip: Skip) {
        self.tagged("[SKIP]", Color::Cyan, &skip.to_string());
    }

    fn summary(&mut self, mode: Mode, summary: &Summary) {
        let verb = if mode.is_recording() {
            "recorded"
        } else {
            "passed"
        };
        let _ = writeln!(
            self.out,
            "{}: {} {}, {} failed, {} skipped, {} total",
            mode.as_str(),
            summary.passed,
            verb,
            summary.failed,
            summary.skipped,
            summary.total
        );
    }

    fn list(&mut self, cases: &[TestCase]) {
        let width = cases.iter().map(|case| case.name.len()).max().unwrap_or(0);
        let status = |recorded: bool| if recorded { "recorded" } else { "unrecorded" };

        for case in cases {
            let _ = writeln!(
                self.out,
                "{:<width$}  build: {:<10}  run: {}",
                case.name,
                status(case.record.build.is_recorded()),
                status(case.record.run.is_recorded()),
                width = width
            );
        }
        if cases.is_empty() {
            let _ = writeln!(self.out, "No tests found.");
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
