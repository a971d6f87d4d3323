// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by golden are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `BUILD_CMD` — Command template for the build phase.
pub fn build_cmd() -> Option<String> {
    var_non_empty(names::BUILD_CMD)
}

/// `RUN_CMD` — Command template for the run phase.
pub fn run_cmd() -> Option<String> {
    var_non_empty(names::RUN_CMD)
}

/// `TESTS_DIR` — Directory holding the test sources and their expectations.
pub fn tests_dir() -> Option<String> {
    var_non_empty(names::TESTS_DIR)
}

/// `SRC_SUFFIX` — File suffix identifying test sources.
pub fn src_suffix() -> Option<String> {
    var_non_empty(names::SRC_SUFFIX)
}

/// `GOLDEN_LOG` — Filter directive for internal diagnostics.
pub fn log_filter() -> Option<String> {
    var_non_empty(names::GOLDEN_LOG)
}

/// Look up any of the variables above by name.
///
/// Empty values read as unset.
pub fn var_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
