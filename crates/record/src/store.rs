// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk store with one expectation file per test case.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::format::{self, FormatError};
use crate::legacy;
use crate::record::ExpectationRecord;

/// Errors from reading or writing an expectation file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed expectation file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Expectation files kept in the test directory, keyed by test name.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file holding the record of `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{}.expected", name))
    }

    /// Load the record of `name`.
    ///
    /// A test without any stored expectations gets an empty file created for
    /// it and an empty record back. Per-field files from the older layout are
    /// read when no sectioned file exists yet.
    pub fn load(&self, name: &str) -> Result<ExpectationRecord, StoreError> {
        self.load_among(name, &[])
    }

    /// Load the record of `name`, one of the tests in `names`.
    ///
    /// The sectioned file of another test in `names` is never taken for a
    /// per-field file of `name`.
    pub fn load_among(
        &self,
        name: &str,
        names: &[String],
    ) -> Result<ExpectationRecord, StoreError> {
        let path = self.path_for(name);

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let record =
                    format::parse(&content).map_err(|source| StoreError::Format { path, source })?;
                debug!(name, "loaded expectations");
                Ok(record)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if legacy::exists(&self.dir, name, names) {
                    return legacy::load(&self.dir, name);
                }
                // Never truncates: a file that appeared meanwhile is kept.
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|source| StoreError::Io {
                        path: path.clone(),
                        source,
                    })?;
                debug!(name, path = %path.display(), "created empty expectations");
                Ok(ExpectationRecord::default())
            }
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Replace the stored record of `name`.
    ///
    /// The new content is written to a temporary file in the same directory
    /// and renamed over the old one, so readers see either record in full.
    pub fn save(&self, name: &str, record: &ExpectationRecord) -> Result<(), StoreError> {
        let path = self.path_for(name);
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        tmp.write_all(format::render(record).as_bytes())
            .map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;

        debug!(name, path = %path.display(), "saved expectations");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
