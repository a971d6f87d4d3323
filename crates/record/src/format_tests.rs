// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::record::Expectation;
use proptest::prelude::*;
use rstest::rstest;

const EMPTY_RENDERED: &str = "\
@@ stdin
@@ stdout
@@ stderr
@@ returncode
@@ build_stdin
@@ build_stdout
@@ build_stderr
@@ build_returncode
";

fn sample() -> ExpectationRecord {
    ExpectationRecord {
        build: Expectation {
            stdin: "-O2".to_string(),
            stdout: String::new(),
            stderr: "warning: unused\n".to_string(),
            returncode: Some(0),
        },
        run: Expectation {
            stdin: "3 4".to_string(),
            stdout: "5\n".to_string(),
            stderr: String::new(),
            returncode: Some(1),
        },
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn render_empty_record_writes_every_header() {
    assert_eq!(render(&ExpectationRecord::default()), EMPTY_RENDERED);
}

#[test]
fn render_sample_record() {
    let expected = "\
@@ stdin noeol
3 4
@@ stdout
5
@@ stderr
@@ returncode
1
@@ build_stdin noeol
-O2
@@ build_stdout
@@ build_stderr
warning: unused
@@ build_returncode
0
";
    assert_eq!(render(&sample()), expected);
}

#[test]
fn render_escapes_header_lookalikes() {
    let mut record = ExpectationRecord::default();
    record.run.stdout = "@@ stdout\n\\n\nplain\n".to_string();

    let rendered = render(&record);
    assert!(rendered.contains("@@ stdout\n\\@@ stdout\n\\\\n\nplain\n@@ stderr\n"));
    assert_eq!(parse(&rendered).unwrap(), record);
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_empty_source_is_default() {
    assert_eq!(parse("").unwrap(), ExpectationRecord::default());
}

#[test]
fn parse_missing_sections_keep_defaults() {
    let record = parse("@@ stdout\n5\n").unwrap();
    assert_eq!(record.run.stdout, "5\n");
    assert_eq!(record.run.returncode, None);
    assert_eq!(record.build, Expectation::default());
}

#[test]
fn parse_joins_lines_with_trailing_newline() {
    let record = parse("@@ build_stderr\nfirst\n\nthird\n").unwrap();
    assert_eq!(record.build.stderr, "first\n\nthird\n");
}

#[test]
fn parse_noeol_drops_final_newline() {
    let record = parse("@@ stdin noeol\n1 2\n").unwrap();
    assert_eq!(record.run.stdin, "1 2");
}

#[test]
fn parse_keeps_carriage_returns() {
    let record = parse("@@ stdout\nline\r\n").unwrap();
    assert_eq!(record.run.stdout, "line\r\n");
}

#[test]
fn parse_accepts_last_line_without_newline() {
    let record = parse("@@ returncode\n3").unwrap();
    assert_eq!(record.run.returncode, Some(3));
}

#[test]
fn parse_ignores_blank_lines_before_first_section() {
    let record = parse("\n  \n@@ returncode\n0\n").unwrap();
    assert_eq!(record.run.returncode, Some(0));
}

#[rstest]
#[case("@@ returncode\n", None)]
#[case("@@ returncode\n\n", None)]
#[case("@@ returncode\n0\n", Some(0))]
#[case("@@ returncode\n -1 \n", Some(-1))]
#[case("@@ returncode\n139\n", Some(139))]
fn parse_returncode(#[case] source: &str, #[case] expected: Option<i32>) {
    assert_eq!(parse(source).unwrap().run.returncode, expected);
}

#[test]
fn unset_and_zero_render_differently() {
    let mut zero = ExpectationRecord::default();
    zero.build.returncode = Some(0);

    assert_ne!(render(&zero), render(&ExpectationRecord::default()));
    assert_eq!(parse(&render(&zero)).unwrap().build.returncode, Some(0));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_section_is_rejected() {
    let err = parse("@@ stdout\nok\n@@ stdot\n").unwrap_err();
    assert_eq!(
        err,
        FormatError::UnknownSection {
            line: 3,
            name: "stdot".to_string()
        }
    );
}

#[test]
fn non_integer_returncode_is_rejected() {
    let err = parse("@@ stdout\n@@ build_returncode\nzero\n").unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidReturnCode {
            line: 3,
            section: "build_returncode",
            value: "zero".to_string()
        }
    );
}

#[test]
fn second_returncode_value_is_rejected() {
    let err = parse("@@ returncode\n0\n1\n").unwrap_err();
    assert_eq!(
        err,
        FormatError::TooManyLines {
            line: 3,
            section: "returncode"
        }
    );
}

#[test]
fn duplicate_section_is_rejected() {
    let err = parse("@@ stdout\na\n@@ stdout\nb\n").unwrap_err();
    assert!(matches!(err, FormatError::DuplicateSection { line: 3, .. }));
}

#[test]
fn content_before_first_section_is_rejected() {
    let err = parse("stray\n@@ stdout\n").unwrap_err();
    assert_eq!(err, FormatError::ContentOutsideSection { line: 1 });
}

#[rstest]
#[case("@@")]
#[case("@@ stdout eol")]
#[case("@@ stdout noeol extra")]
fn malformed_header_is_rejected(#[case] header: &str) {
    let err = parse(&format!("{header}\n")).unwrap_err();
    assert!(matches!(err, FormatError::MalformedHeader { line: 1, .. }));
}

#[test]
fn error_message_names_the_line() {
    let err = parse("@@ nope\n").unwrap_err();
    assert_eq!(err.to_string(), "line 1: unknown section 'nope'");
}

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn tokenize_groups_lines_by_section() {
    let raw = tokenize("@@ stdout\na\n\\@@ b\n@@ stderr noeol\nc\n").unwrap();
    assert_eq!(
        raw,
        vec![
            RawSection {
                line: 1,
                name: "stdout",
                noeol: false,
                lines: vec!["a", "@@ b"],
            },
            RawSection {
                line: 4,
                name: "stderr",
                noeol: true,
                lines: vec!["c"],
            },
        ]
    );
}

#[test]
fn tokenize_accepts_unknown_names() {
    // Schema checks belong to `parse`.
    let raw = tokenize("@@ whatever\n").unwrap();
    assert_eq!(raw[0].name, "whatever");
}

#[test]
fn section_names_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_name(section.name()), Some(section));
    }
    assert_eq!(Section::from_name("build.out"), None);
}

#[test]
fn only_returncode_sections_are_integers() {
    let integers: Vec<_> = Section::ALL
        .into_iter()
        .filter(Section::is_integer)
        .map(|s| s.name())
        .collect();
    assert_eq!(integers, ["returncode", "build_returncode"]);
}

// =============================================================================
// Property tests
// =============================================================================

fn arb_expectation() -> impl Strategy<Value = Expectation> {
    (
        any::<String>(),
        any::<String>(),
        any::<String>(),
        proptest::option::of(any::<i32>()),
    )
        .prop_map(|(stdin, stdout, stderr, returncode)| Expectation {
            stdin,
            stdout,
            stderr,
            returncode,
        })
}

fn arb_line_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("@@ stdout".to_string()),
            Just("\\".to_string()),
            Just("".to_string()),
            Just("\r".to_string()),
            "[a-z ]{0,8}",
        ],
        0..6,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(build in arb_expectation(), run in arb_expectation()) {
        let record = ExpectationRecord { build, run };
        prop_assert_eq!(parse(&render(&record)).unwrap(), record);
    }

    #[test]
    fn header_lookalikes_round_trip(stdout in arb_line_text(), stderr in arb_line_text()) {
        let mut record = ExpectationRecord::default();
        record.build.stdout = stdout;
        record.build.stderr = stderr;
        prop_assert_eq!(parse(&render(&record)).unwrap(), record);
    }
}
