use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced at the process boundary.
///
/// Exit codes: usage errors exit 1 before any of these exist; git
/// execution failures exit 2; file-system failures exit 3.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to run git")]
    GitSpawn(#[source] io::Error),

    #[error("git show failed for commit '{commit}': {stderr}")]
    GitShow { commit: String, stderr: String },

    #[error("git produced non-UTF-8 output for commit '{commit}'")]
    GitOutput { commit: String },

    #[error("read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("tests directory not found at {}", path.display())]
    TestsDirMissing { path: PathBuf },

    #[error("walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("write report")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::GitSpawn(_) | Error::GitShow { .. } | Error::GitOutput { .. } => 2,
            Error::FileAccess { .. }
            | Error::TestsDirMissing { .. }
            | Error::Walk { .. }
            | Error::Write(_) => 3,
        }
    }
}
