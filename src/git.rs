//! Diff fetching
//!
//! Runs `git show <commit>` with the working directory set to the
//! repository root and returns the full patch text (commit metadata
//! plus unified diff). The subprocess blocks the whole run; no
//! timeout is enforced.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Fetch the full textual patch for one commit.
///
/// A failed spawn (git not installed) or a non-zero exit (unknown
/// commit, not a repository) is an execution error carrying git's
/// stderr; no recovery is possible offline.
pub fn show(repo_root: &Path, commit: &str) -> Result<String> {
    let output = Command::new("git")
        .arg("show")
        .arg(commit)
        .current_dir(repo_root)
        .output()
        .map_err(Error::GitSpawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::GitShow {
            commit: commit.to_string(),
            stderr,
        });
    }

    String::from_utf8(output.stdout).map_err(|_| Error::GitOutput {
        commit: commit.to_string(),
    })
}
