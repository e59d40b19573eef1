// Run configuration for tia.
// Populated once from the CLI; the pipeline never reads process
// arguments itself.

use std::path::{Path, PathBuf};

/// Directory searched during the full-sweep escalation, relative to
/// the repository root.
pub const TESTS_DIR: &str = "tests";

/// One analysis run: a commit reference and the repository it lives in.
#[derive(Debug, Clone)]
pub struct Config {
    /// Commit reference (hash, branch name, HEAD~n, ...).
    pub commit: String,
    /// Repository root path.
    pub repo: PathBuf,
}

impl Config {
    pub fn new(commit: impl Into<String>, repo: impl Into<PathBuf>) -> Self {
        Self {
            commit: commit.into(),
            repo: repo.into(),
        }
    }

    /// Root of the test tree walked when a helper file changed.
    pub fn tests_dir(&self) -> PathBuf {
        self.repo.join(TESTS_DIR)
    }

    /// Absolute location of a path extracted from the patch.
    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        self.repo.join(Path::new(rel_path))
    }
}
