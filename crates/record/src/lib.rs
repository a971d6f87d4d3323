// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expectation records for golden tests.
//!
//! A record holds the expected stdin, stdout, stderr and return code of the
//! build and run phases of one test case. [`ArtifactStore`] maps a test name
//! to a single sectioned file next to the test sources and keeps it in sync.

pub mod format;
mod legacy;
mod record;
mod store;

pub use format::{FormatError, Section};
pub use record::{Expectation, ExpectationRecord, Field, Phase};
pub use store::{ArtifactStore, StoreError};
