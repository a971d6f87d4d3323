// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison and recording engine.
//!
//! This module provides:
//! - [`Mode`] and [`ModePolicy`] - What each subcommand checks
//! - [`Outcome`] and [`Summary`] - Per-case results and their tally
//! - [`Engine`] - Drives one subcommand over a list of test cases

mod core;
mod mode;
mod outcome;

pub use core::{Engine, EngineError};
pub use mode::{Mode, ModePolicy};
pub use outcome::{Failure, Mismatch, Outcome, Skip, Stream, Summary};
