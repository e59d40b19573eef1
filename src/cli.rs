use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// One-line usage string printed on argument errors.
pub const USAGE: &str = "Usage: tia --commit <reference> --repo <path>";

#[derive(Parser)]
#[command(
    name = "tia",
    version,
    about = "Report tests added, removed, or impacted by a commit",
    after_help = r#"Examples:
  tia --commit HEAD --repo .
  tia --commit 3f2a91c --repo ../service
"#
)]
pub struct Args {
    /// Commit reference to analyze (hash, branch, HEAD~n, ...).
    #[arg(long)]
    pub commit: String,
    /// Path to the repository root.
    #[arg(long)]
    pub repo: PathBuf,
}

impl Args {
    pub fn into_config(self) -> Config {
        Config {
            commit: self.commit,
            repo: self.repo,
        }
    }
}
