// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test discovery.
//!
//! A test case is any entry of the tests directory whose name ends in the
//! source suffix. Cases keep the sorted order of their file names.

use std::path::Path;

use golden_record::{ArtifactStore, ExpectationRecord, StoreError};
use thiserror::Error;
use tracing::debug;

/// Errors from building the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot read tests directory {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no test named '{0}' was found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One discovered test and its expectations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub record: ExpectationRecord,
}

/// Every test case in the tests directory.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Discover every test in `dir` and load its expectations.
    pub fn discover(
        dir: &Path,
        src_suffix: &str,
        store: &ArtifactStore,
    ) -> Result<Self, RegistryError> {
        Self::discover_only(dir, src_suffix, store, None)
    }

    /// Discover tests, keeping only `only` when given.
    ///
    /// An unknown name is reported before any expectation is loaded, so no
    /// expectation file is created for it.
    pub fn discover_only(
        dir: &Path,
        src_suffix: &str,
        store: &ArtifactStore,
        only: Option<&str>,
    ) -> Result<Self, RegistryError> {
        let all = scan(dir, src_suffix)?;
        let mut names = all.clone();
        if let Some(name) = only {
            names = keep_only(names, name, |n| n.as_str())?;
        }

        let cases = names
            .into_iter()
            .map(|name| {
                let record = store.load_among(&name, &all)?;
                Ok(TestCase { name, record })
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        debug!(count = cases.len(), "discovered tests");
        Ok(Self { cases })
    }

    /// Build a registry from already loaded cases.
    pub fn from_cases(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// Narrow the registry to the single case called `name`.
    pub fn restrict(self, name: &str) -> Result<Self, RegistryError> {
        let cases = keep_only(self.cases, name, |case| case.name.as_str())?;
        Ok(Self { cases })
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases
    }
}

/// Names of the tests in `dir`, in sorted file-name order.
///
/// Hidden entries are skipped; they hold the expectation files.
pub fn scan(dir: &Path, src_suffix: &str) -> Result<Vec<String>, RegistryError> {
    let io_err = |source| RegistryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        match entry.file_name().into_string() {
            Ok(name) => files.push(name),
            Err(name) => debug!(?name, "skipping non UTF-8 file name"),
        }
    }
    files.sort();

    let ending = format!(".{}", src_suffix);
    let mut names: Vec<String> = Vec::new();
    for file in &files {
        if file.starts_with('.') {
            continue;
        }
        let Some(base) = file.strip_suffix(&ending) else {
            continue;
        };
        if !base.is_empty() && !names.iter().any(|n| n == base) {
            names.push(base.to_string());
        }
    }
    Ok(names)
}

fn keep_only<T>(
    items: Vec<T>,
    name: &str,
    key: impl Fn(&T) -> &str,
) -> Result<Vec<T>, RegistryError> {
    let kept: Vec<T> = items.into_iter().filter(|item| key(item) == name).collect();
    if kept.is_empty() {
        return Err(RegistryError::NotFound(name.to_string()));
    }
    Ok(kept)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
