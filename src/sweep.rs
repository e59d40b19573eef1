//! Full-repository spec sweep
//!
//! When a helper file changed, every test in the repository is
//! potentially impacted. This module walks the `tests/` tree and
//! yields matching spec files one at a time, so the sweep can start
//! reporting before the whole tree has been listed.
//!
//! The walk disables the standard ignore filters (the sweep visits
//! everything under `tests/`, hidden or not) and sorts entries by
//! file name so the output order is reproducible across platforms.

use crate::error::{Error, Result};
use crate::test_detection::is_sweep_candidate;
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};

/// Lazy, pull-based iterator over `*.spec.ts` files under a test
/// directory. Finite, restartable by constructing a new walk.
pub struct SpecFileWalk {
    root: PathBuf,
    inner: Walk,
}

impl SpecFileWalk {
    /// Start a walk at the given tests directory.
    ///
    /// A missing directory is fatal: the escalation contract promises
    /// a full enumeration, and there is nothing to enumerate.
    pub fn new(tests_dir: &Path) -> Result<Self> {
        if !tests_dir.is_dir() {
            return Err(Error::TestsDirMissing {
                path: tests_dir.to_path_buf(),
            });
        }
        let inner = WalkBuilder::new(tests_dir)
            .standard_filters(false)
            .sort_by_file_name(std::ffi::OsStr::cmp)
            .build();
        Ok(Self {
            root: tests_dir.to_path_buf(),
            inner,
        })
    }

    /// Attach the most precise path we have to a walk failure: the
    /// failing entry's own path when the error carries one, the walk
    /// root otherwise.
    fn walk_error(&self, err: ignore::Error) -> Error {
        let path = match &err {
            ignore::Error::WithPath { path, .. } => path.clone(),
            _ => self.root.clone(),
        };
        Error::Walk { path, source: err }
    }
}

impl Iterator for SpecFileWalk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(self.walk_error(err))),
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if is_sweep_candidate(&name) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
