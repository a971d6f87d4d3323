// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help page rendering.
//!
//! clap's built-in help is disabled because `-h` and `-V` carry golden's
//! own meanings; the page is laid out here instead.

// =============================================================================
// Data structures
// =============================================================================

/// A complete help page specification.
pub struct HelpSpec {
    /// Usage line (e.g., "golden <subcmd>... [flags]")
    pub usage: &'static str,
    /// Description text (may be multi-line)
    pub description: &'static str,
    /// Ordered sections (Subcommands, Flags, Environment)
    pub sections: Vec<HelpSection>,
    /// Optional trailing paragraph
    pub after_text: Option<&'static str>,
}

/// A section within a help page (e.g., "Flags:").
pub struct HelpSection {
    /// Section header (e.g., "Flags")
    pub title: &'static str,
    /// Items in this section
    pub items: Vec<HelpItem>,
}

/// A name/description pair with aligned description.
pub struct HelpItem {
    /// Left-hand side (e.g., "-t <name>" or "record_build")
    pub flags: &'static str,
    /// Description text
    pub description: &'static str,
}

const fn item(flags: &'static str, description: &'static str) -> HelpItem {
    HelpItem { flags, description }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a help page to a string.
///
/// Calculates alignment column automatically based on the longest entry
/// across all sections: `desc_col = 2 + max(flags.len()) + 2`.
///
/// When `wrap_width` is specified, descriptions wrap at that total line width.
/// When `None`, descriptions are output on a single line (no wrapping).
pub fn render_help(spec: &HelpSpec, wrap_width: Option<usize>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Usage: {}\n", spec.usage));

    if !spec.description.is_empty() {
        out.push('\n');
        out.push_str(spec.description);
        out.push('\n');
    }

    let desc_col = calc_desc_col(&spec.sections);

    for section in &spec.sections {
        out.push('\n');
        out.push_str(section.title);
        out.push_str(":\n");

        for item in &section.items {
            render_entry(&mut out, item.flags, item.description, desc_col, wrap_width);
        }
    }

    if let Some(text) = spec.after_text {
        out.push('\n');
        match wrap_width {
            Some(width) => {
                for line in wrap_text(text, width) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
            None => {
                out.push_str(text);
                out.push('\n');
            }
        }
    }

    out
}

/// Calculate the description column from all sections' entries.
fn calc_desc_col(sections: &[HelpSection]) -> usize {
    let max_flags_len = sections
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|item| item.flags.len())
        .max()
        .unwrap_or(0);

    // 2 spaces indent + flags + 2 spaces padding
    2 + max_flags_len + 2
}

/// Render a single entry with alignment and optional wrapping.
fn render_entry(
    out: &mut String,
    flags: &str,
    description: &str,
    desc_col: usize,
    wrap_width: Option<usize>,
) {
    let flags_width = 2 + flags.len();

    if description.is_empty() {
        out.push_str(&format!("  {}\n", flags));
        return;
    }

    let lines = match wrap_width {
        Some(width) => wrap_text(description, width.saturating_sub(desc_col)),
        None => vec![description.to_string()],
    };

    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            let padding = desc_col.saturating_sub(flags_width);
            out.push_str(&format!("  {}{}{}\n", flags, " ".repeat(padding), line));
        } else {
            out.push_str(&format!("{}{}\n", " ".repeat(desc_col), line));
        }
    }
}

/// Wrap text at word boundaries to fit within `max_width` characters.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.len() < max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() < max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// =============================================================================
// Help page
// =============================================================================

/// Usage line printed alongside argument errors.
pub const USAGE: &str = "golden <subcmd>... [flags]";

/// Render the `golden help` / `golden -h` page.
pub fn render_main_help() -> String {
    let spec = HelpSpec {
        usage: USAGE,
        description: "Build and run golden tests, comparing their output against recorded\nexpectations.",
        sections: vec![
            HelpSection {
                title: "Subcommands",
                items: vec![
                    item("help", "Prints this help message."),
                    item("build", "Builds all the tests."),
                    item("run", "Runs all the tests."),
                    item("record", "Records the expected behaviour of all the tests."),
                    item(
                        "record_build",
                        "Records the expected build behaviour of all the tests.",
                    ),
                    item("list", "Lists the tests and what has been recorded for them."),
                ],
            },
            HelpSection {
                title: "Flags",
                items: vec![
                    item("-h", "Same as the help subcommand."),
                    item("-V", "Verbose output."),
                    item("-x", "Stop on first error."),
                    item("-t <name>", "Only process the test called <name>."),
                ],
            },
            HelpSection {
                title: "Environment",
                items: vec![
                    item("BUILD_CMD", "Command run for each test by `build` and `record_build`."),
                    item("RUN_CMD", "Command run for each test by `run` and `record`."),
                    item("TESTS_DIR", "Directory holding the test sources."),
                    item("SRC_SUFFIX", "Suffix of the test source files."),
                    item("GOLDEN_LOG", "Filter for internal diagnostics (e.g. `golden=debug`)."),
                ],
            },
        ],
        after_text: Some(
            "In BUILD_CMD and RUN_CMD, {test_name} is replaced by the name of the test and {src_suffix} by the source suffix without its leading dot.",
        ),
    };
    render_help(&spec, Some(80))
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
