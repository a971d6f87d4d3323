// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden test harness binary entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use golden::cli::{Cli, Subcommand};
use golden::config::Config;
use golden::engine::Engine;
use golden::env;
use golden::help::{render_main_help, USAGE};
use golden::output_diagnostic::{print_error, print_warning};
use golden::prompt::LinePrompter;
use golden::registry::Registry;
use golden::report::{Reporter, TerminalReporter};
use golden_record::ArtifactStore;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if cli.wants_help() {
        print!("{}", render_main_help());
        return ExitCode::SUCCESS;
    }

    if cli.subcommands.is_empty() {
        print_error("please provide at least one subcommand!");
        eprintln!("Usage: {}\n", USAGE);
        eprint!("{}", render_main_help());
        return ExitCode::FAILURE;
    }

    init_tracing();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            print_error(e);
            ExitCode::FAILURE
        }
    }
}

/// Run every subcommand in order. Returns whether no case failed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = Config::from_env()?;
    config.require(cli.required_phases())?;

    let mut reporter = TerminalReporter::stdout(cli.verbose);
    reporter.detail(&format!("Tests directory: {}", config.tests_dir().display()));

    let store = ArtifactStore::new(config.tests_dir());
    let mut registry = Registry::discover_only(
        config.tests_dir(),
        config.src_suffix(),
        &store,
        cli.test.as_deref(),
    )?;

    let mut prompter = LinePrompter::stdio();
    let mut success = true;

    for subcommand in &cli.subcommands {
        let Some(mode) = subcommand.mode() else {
            if *subcommand == Subcommand::List {
                reporter.list(registry.cases());
            }
            continue;
        };

        let summary = Engine::new(&config, &store, &mut reporter, &mut prompter)
            .with_stop_on_error(cli.stop_on_error)
            .run(mode, registry.cases_mut())?;
        success &= summary.is_success();
    }

    Ok(success)
}

fn init_tracing() {
    let filter = match env::log_filter() {
        Some(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            print_warning(format_args!("ignoring invalid {}: {}", env::GOLDEN_LOG, e));
            EnvFilter::new("warn")
        }),
        None => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
