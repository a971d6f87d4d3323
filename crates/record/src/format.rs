// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sectioned text format for expectation records.
//!
//! A record file is a sequence of sections:
//!
//! ```text
//! @@ stdin
//! @@ stdout
//! 5
//! @@ stderr
//! @@ returncode
//! 0
//! @@ build_stdin
//! @@ build_stdout noeol
//! compiled
//! @@ build_stderr
//! @@ build_returncode
//! ```
//!
//! Text sections hold their value one line per content line. A `noeol` flag
//! on the header marks a value without a trailing newline. Content lines
//! that would look like a header (or start with the escape character) are
//! prefixed with `\`. Return code sections hold one integer, or nothing
//! when the phase was never recorded.
//!
//! Parsing runs in two passes: [`tokenize`] splits the source into raw
//! sections, then [`parse`] checks every section against the fixed schema
//! before a single field of the record is assigned.

use thiserror::Error;

use crate::record::{ExpectationRecord, Field, Phase};

/// Prefix of a section header line.
pub const HEADER_PREFIX: &str = "@@";

const NOEOL_FLAG: &str = "noeol";
const ESCAPE: char = '\\';

/// A named section of the record file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Section {
    pub phase: Phase,
    pub field: Field,
}

impl Section {
    const fn new(phase: Phase, field: Field) -> Self {
        Self { phase, field }
    }

    /// Every known section, in the order they are written.
    pub const ALL: [Section; 8] = [
        Section::new(Phase::Run, Field::Stdin),
        Section::new(Phase::Run, Field::Stdout),
        Section::new(Phase::Run, Field::Stderr),
        Section::new(Phase::Run, Field::ReturnCode),
        Section::new(Phase::Build, Field::Stdin),
        Section::new(Phase::Build, Field::Stdout),
        Section::new(Phase::Build, Field::Stderr),
        Section::new(Phase::Build, Field::ReturnCode),
    ];

    pub fn name(&self) -> &'static str {
        match (self.phase, self.field) {
            (Phase::Run, Field::Stdin) => "stdin",
            (Phase::Run, Field::Stdout) => "stdout",
            (Phase::Run, Field::Stderr) => "stderr",
            (Phase::Run, Field::ReturnCode) => "returncode",
            (Phase::Build, Field::Stdin) => "build_stdin",
            (Phase::Build, Field::Stdout) => "build_stdout",
            (Phase::Build, Field::Stderr) => "build_stderr",
            (Phase::Build, Field::ReturnCode) => "build_returncode",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Sections whose name mentions `returncode` hold an integer.
    pub fn is_integer(&self) -> bool {
        self.name().contains("returncode")
    }
}

/// Errors from parsing a record file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: unknown section '{name}'")]
    UnknownSection { line: usize, name: String },

    #[error("line {line}: section '{name}' appears more than once")]
    DuplicateSection { line: usize, name: String },

    #[error("line {line}: malformed section header '{text}'")]
    MalformedHeader { line: usize, text: String },

    #[error("line {line}: content outside of any section")]
    ContentOutsideSection { line: usize },

    #[error("line {line}: '{section}' is not an integer: '{value}'")]
    InvalidReturnCode {
        line: usize,
        section: &'static str,
        value: String,
    },

    #[error("line {line}: '{section}' holds more than one value")]
    TooManyLines { line: usize, section: &'static str },
}

/// A section as it appears in the source, before schema checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    /// 1-based line number of the header.
    pub line: usize,
    pub name: &'a str,
    pub noeol: bool,
    /// Content lines with escapes removed, without their newlines.
    pub lines: Vec<&'a str>,
}

/// First pass: split the source into `(section, lines)` groups.
///
/// Only `\n` separates lines; a `\r` stays part of the content.
pub fn tokenize(source: &str) -> Result<Vec<RawSection<'_>>, FormatError> {
    let mut sections: Vec<RawSection<'_>> = Vec::new();

    for (idx, raw) in source.split_inclusive('\n').enumerate() {
        let line = idx + 1;
        let text = raw.strip_suffix('\n').unwrap_or(raw);

        if let Some(rest) = text.strip_prefix(HEADER_PREFIX) {
            let (name, noeol) = parse_header(rest).ok_or_else(|| FormatError::MalformedHeader {
                line,
                text: text.to_string(),
            })?;
            sections.push(RawSection {
                line,
                name,
                noeol,
                lines: Vec::new(),
            });
            continue;
        }

        match sections.last_mut() {
            Some(section) => section.lines.push(text.strip_prefix(ESCAPE).unwrap_or(text)),
            None if text.trim().is_empty() => {}
            None => return Err(FormatError::ContentOutsideSection { line }),
        }
    }

    Ok(sections)
}

fn parse_header(rest: &str) -> Option<(&str, bool)> {
    let mut words = rest.split_whitespace();
    let name = words.next()?;
    let noeol = match words.next() {
        None => false,
        Some(NOEOL_FLAG) => true,
        Some(_) => return None,
    };
    match words.next() {
        None => Some((name, noeol)),
        Some(_) => None,
    }
}

enum Value {
    Text(String),
    Code(Option<i32>),
}

/// Parse a record file.
///
/// Sections missing from the source keep their empty/unset default.
pub fn parse(source: &str) -> Result<ExpectationRecord, FormatError> {
    let raw = tokenize(source)?;

    // Second pass: validate and convert everything before mutating the record.
    let mut values: Vec<(Section, Value)> = Vec::with_capacity(raw.len());
    for raw_section in &raw {
        let section =
            Section::from_name(raw_section.name).ok_or_else(|| FormatError::UnknownSection {
                line: raw_section.line,
                name: raw_section.name.to_string(),
            })?;
        if values.iter().any(|(seen, _)| *seen == section) {
            return Err(FormatError::DuplicateSection {
                line: raw_section.line,
                name: raw_section.name.to_string(),
            });
        }

        let value = if section.is_integer() {
            Value::Code(parse_code(section, raw_section)?)
        } else {
            Value::Text(join_lines(raw_section))
        };
        values.push((section, value));
    }

    let mut record = ExpectationRecord::default();
    for (section, value) in values {
        let expectation = record.phase_mut(section.phase);
        match (section.field, value) {
            (Field::Stdin, Value::Text(text)) => expectation.stdin = text,
            (Field::Stdout, Value::Text(text)) => expectation.stdout = text,
            (Field::Stderr, Value::Text(text)) => expectation.stderr = text,
            (Field::ReturnCode, Value::Code(code)) => expectation.returncode = code,
            // `is_integer` decides the value kind from the same section
            _ => {}
        }
    }
    Ok(record)
}

fn join_lines(section: &RawSection<'_>) -> String {
    let mut text = String::new();
    for line in &section.lines {
        text.push_str(line);
        text.push('\n');
    }
    if section.noeol {
        text.pop();
    }
    text
}

fn parse_code(section: Section, raw: &RawSection<'_>) -> Result<Option<i32>, FormatError> {
    let mut values = raw
        .lines
        .iter()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    let Some((offset, value)) = values.next() else {
        return Ok(None);
    };
    if let Some((extra, _)) = values.next() {
        return Err(FormatError::TooManyLines {
            line: raw.line + extra + 1,
            section: section.name(),
        });
    }

    let value = value.trim();
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| FormatError::InvalidReturnCode {
            line: raw.line + offset + 1,
            section: section.name(),
            value: value.to_string(),
        })
}

/// Serialize a record. [`parse`] of the result yields an equal record.
pub fn render(record: &ExpectationRecord) -> String {
    let mut out = String::new();

    for section in Section::ALL {
        let expectation = record.phase(section.phase);
        let text = match section.field {
            Field::Stdin => &expectation.stdin,
            Field::Stdout => &expectation.stdout,
            Field::Stderr => &expectation.stderr,
            Field::ReturnCode => {
                out.push_str(&format!("{} {}\n", HEADER_PREFIX, section.name()));
                if let Some(code) = expectation.returncode {
                    out.push_str(&format!("{}\n", code));
                }
                continue;
            }
        };
        render_text(&mut out, section, text);
    }

    out
}

fn render_text(out: &mut String, section: Section, text: &str) {
    if text.is_empty() {
        out.push_str(&format!("{} {}\n", HEADER_PREFIX, section.name()));
        return;
    }

    let body = match text.strip_suffix('\n') {
        Some(body) => {
            out.push_str(&format!("{} {}\n", HEADER_PREFIX, section.name()));
            body
        }
        None => {
            out.push_str(&format!(
                "{} {} {}\n",
                HEADER_PREFIX,
                section.name(),
                NOEOL_FLAG
            ));
            text
        }
    };

    for line in body.split('\n') {
        if line.starts_with(HEADER_PREFIX) || line.starts_with(ESCAPE) {
            out.push(ESCAPE);
        }
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
