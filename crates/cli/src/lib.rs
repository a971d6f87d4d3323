// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test harness.
//!
//! Builds and runs a directory of test programs, compares what they print
//! against expectations recorded earlier, and re-records those expectations
//! on request. Expectation storage lives in the `golden-record` crate.

pub mod cli;
pub mod config;
pub mod engine;
pub mod env;
pub mod exec;
pub mod help;
pub mod output_diagnostic;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod substitute;
