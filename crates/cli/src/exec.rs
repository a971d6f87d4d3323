// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with captured output.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

/// Captured result of one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    /// Exit status, or the negated signal number when killed by a signal.
    pub returncode: i32,
}

/// The command could not be started.
#[derive(Debug, Error)]
#[error("failed to run `{program}`: {source}")]
pub struct SpawnError {
    pub program: String,
    #[source]
    pub source: std::io::Error,
}

/// Run `argv` followed by `extra_args` in `cwd` and wait for it to finish.
///
/// The child gets no stdin. Output that is not valid UTF-8 is decoded
/// lossily. A relative program path containing a `/` is looked up from
/// `cwd`.
pub fn execute(argv: &[String], extra_args: &[String], cwd: &Path) -> Result<Output, SpawnError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(SpawnError {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
        });
    };

    let output = Command::new(program_path(program, cwd))
        .args(args)
        .args(extra_args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| SpawnError {
            program: program.clone(),
            source,
        })?;

    let returncode = exit_code(output.status);
    debug!(program = %program, returncode, "command finished");

    Ok(Output {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        returncode,
    })
}

fn program_path(program: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && program.contains('/') {
        cwd.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
