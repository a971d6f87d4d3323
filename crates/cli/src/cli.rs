// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use golden_record::Phase;

use crate::engine::Mode;

/// A subcommand word. Several may be chained in one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Subcommand {
    /// Print the help page
    Help,
    /// Build every test and compare against the recorded build
    Build,
    /// Run every test and compare against the recorded output
    Run,
    /// Record the run behaviour of every test
    Record,
    /// Record the build behaviour of every test
    #[value(name = "record_build")]
    RecordBuild,
    /// List the discovered tests
    List,
}

impl Subcommand {
    /// The engine mode driving this subcommand, if it runs tests.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Subcommand::Build => Some(Mode::Build),
            Subcommand::Run => Some(Mode::Run),
            Subcommand::Record => Some(Mode::Record),
            Subcommand::RecordBuild => Some(Mode::RecordBuild),
            Subcommand::Help | Subcommand::List => None,
        }
    }
}

/// Golden test harness
#[derive(Parser, Debug, Clone)]
#[command(
    name = "golden",
    about = "Golden-file test harness",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Subcommands to run, in order
    #[arg(value_enum, value_name = "SUBCMD")]
    pub subcommands: Vec<Subcommand>,

    /// Print help and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Echo commands and captured output, even for passing tests
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Stop on the first failing test
    #[arg(short = 'x', long = "stop-on-error")]
    pub stop_on_error: bool,

    /// Only process the named test
    #[arg(short = 't', long = "test", value_name = "NAME")]
    pub test: Option<String>,
}

impl Cli {
    /// Whether help was requested by flag or subcommand.
    pub fn wants_help(&self) -> bool {
        self.help || self.subcommands.contains(&Subcommand::Help)
    }

    /// Engine modes in command-line order.
    pub fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        self.subcommands.iter().filter_map(Subcommand::mode)
    }

    /// Phases whose command template the requested subcommands need.
    pub fn required_phases(&self) -> Vec<Phase> {
        let mut phases = Vec::new();
        for phase in self.modes().map(|mode| mode.phase()) {
            if !phases.contains(&phase) {
                phases.push(phase);
            }
        }
        phases
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
