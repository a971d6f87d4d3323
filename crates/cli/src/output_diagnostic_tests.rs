#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "something went wrong", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: something went wrong\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "something went wrong", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[31mError: something went wrong\x1b[0m\n");
}

#[test]
fn warning_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "invalid GOLDEN_LOG", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Warning: invalid GOLDEN_LOG\n");
}

#[test]
fn warning_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "invalid GOLDEN_LOG", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[33mWarning: invalid GOLDEN_LOG\x1b[0m\n");
}

#[test]
fn error_with_format_args() {
    let mut buf = Vec::new();
    write_error(&mut buf, format_args!("unknown test '{}'", "foo"), false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: unknown test 'foo'\n");
}

#[test]
fn paint_disabled_returns_text_unchanged() {
    assert_eq!(paint("[PASS]", Color::Green, false), "[PASS]");
}

#[test]
fn paint_enabled_wraps_in_escape_codes() {
    assert_eq!(paint("[PASS]", Color::Green, true), "\x1b[32m[PASS]\x1b[0m");
    assert_eq!(paint("[CMD]", Color::Dim, true), "\x1b[2m[CMD]\x1b[0m");
}
