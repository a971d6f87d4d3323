// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reader for the older one-file-per-field layout.
//!
//! Test directories recorded before the sectioned format hold up to eight
//! files per test, `.<name>.<suffix>.expected`. They are read in place and
//! replaced by the sectioned file on the next save.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::format::{FormatError, Section};
use crate::record::{ExpectationRecord, Field, Phase};
use crate::store::StoreError;

/// The legacy stand-in for the unset return code.
const UNSET_CODE: &str = "-1";

fn suffix(section: Section) -> &'static str {
    match (section.phase, section.field) {
        (Phase::Run, Field::Stdin) => "in",
        (Phase::Run, Field::Stdout) => "out",
        (Phase::Run, Field::Stderr) => "err",
        (Phase::Run, Field::ReturnCode) => "code",
        (Phase::Build, Field::Stdin) => "build.in",
        (Phase::Build, Field::Stdout) => "build.out",
        (Phase::Build, Field::Stderr) => "build.err",
        (Phase::Build, Field::ReturnCode) => "build.code",
    }
}

pub(crate) fn path(dir: &Path, name: &str, section: Section) -> PathBuf {
    dir.join(format!(".{}.{}.expected", name, suffix(section)))
}

/// Whether `name` has a set of per-field files.
///
/// Both return code files must exist, as the older layout always wrote every
/// field. Nothing counts when one of the per-field names is the sectioned
/// file of a test in `siblings`.
pub(crate) fn exists(dir: &Path, name: &str, siblings: &[String]) -> bool {
    let claimed = Section::ALL.into_iter().any(|section| {
        let field_name = format!("{}.{}", name, suffix(section));
        siblings.iter().any(|sibling| *sibling == field_name)
    });
    if claimed {
        return false;
    }

    Section::ALL
        .into_iter()
        .filter(|section| section.field == Field::ReturnCode)
        .all(|section| path(dir, name, section).is_file())
}

/// Assemble a record from whichever per-field files exist.
pub(crate) fn load(dir: &Path, name: &str) -> Result<ExpectationRecord, StoreError> {
    let mut record = ExpectationRecord::default();

    for section in Section::ALL {
        let path = path(dir, name, section);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let expectation = record.phase_mut(section.phase);
        match section.field {
            Field::Stdin => expectation.stdin = content,
            Field::Stdout => expectation.stdout = content,
            Field::Stderr => expectation.stderr = content,
            Field::ReturnCode => {
                expectation.returncode = parse_code(section, &content)
                    .map_err(|source| StoreError::Format { path, source })?;
            }
        }
    }

    debug!(name, "loaded legacy per-field expectations");
    Ok(record)
}

fn parse_code(section: Section, content: &str) -> Result<Option<i32>, FormatError> {
    let value = content.trim();
    if value.is_empty() || value == UNSET_CODE {
        return Ok(None);
    }
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| FormatError::InvalidReturnCode {
            line: 1,
            section: section.name(),
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "legacy_tests.rs"]
mod tests;
