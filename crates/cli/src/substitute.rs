// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command template placeholders and tokenization.

use thiserror::Error;

/// Placeholder replaced by the test name.
pub const TEST_NAME: &str = "{test_name}";
/// Placeholder replaced by the source suffix.
pub const SRC_SUFFIX: &str = "{src_suffix}";

/// Errors from turning a template into an argument vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("cannot split command line: {0}")]
    Tokenize(String),

    #[error("command line is empty")]
    Empty,
}

/// Replace every placeholder in `template`.
///
/// Replacement happens in a single left-to-right pass, so placeholder text
/// inside a test name is left alone.
pub fn substitute(template: &str, test_name: &str, src_suffix: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(TEST_NAME) {
            out.push_str(test_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(SRC_SUFFIX) {
            out.push_str(src_suffix);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Substitute placeholders and split the result with shell quoting rules.
pub fn resolve(
    template: &str,
    test_name: &str,
    src_suffix: &str,
) -> Result<Vec<String>, CommandError> {
    let line = substitute(template, test_name, src_suffix);
    let argv = shlex::split(&line).ok_or_else(|| CommandError::Tokenize(line.clone()))?;
    if argv.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(argv)
}

/// Join an argument vector back into a line a shell would split the same way.
pub fn display(argv: &[String]) -> String {
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
