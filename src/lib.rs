//! Test impact analysis for a single commit
//!
//! One synchronous pass, no persistent state:
//!
//! 1. `git` fetches the full patch for the commit.
//! 2. `patch` extracts the changed file paths.
//! 3. `test_detection` finds `test("name", ...)` markers in patch
//!    lines and file contents.
//! 4. `classify` turns those into ADDED / REMOVED / MODIFIED records
//!    and decides whether a helper change escalates to a full sweep.
//! 5. `report` prints the result; `sweep` lazily enumerates every
//!    spec file under `tests/` when the escalation triggers.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod patch;
pub mod report;
pub mod sweep;
pub mod test_detection;

use crate::classify::{FileReader, FsReader, Impact, ImpactRecord};
use crate::config::Config;
use crate::error::Result;
use crate::report::Reporter;
use crate::sweep::SpecFileWalk;
use std::io::Write;

/// Run the whole pipeline for one commit and write the report.
///
/// Deterministic: the same (patch, file-system snapshot) pair always
/// produces identical output bytes.
pub fn run(config: &Config, out: impl Write) -> Result<()> {
    let patch = git::show(&config.repo, &config.commit)?;
    run_on_patch(config, &patch, &FsReader, out)
}

/// Pipeline stages after the git fetch; split out so tests can supply
/// a patch and a file reader directly.
pub fn run_on_patch(
    config: &Config,
    patch: &str,
    reader: &dyn FileReader,
    out: impl Write,
) -> Result<()> {
    let changed_files = patch::changed_files(patch);
    let classification = classify::classify(patch, &changed_files, config, reader)?;

    let mut reporter = Reporter::new(out);
    reporter.banner()?;
    for record in &classification.records {
        reporter.record(record)?;
    }

    if classification.helper_changed {
        reporter.sweep_banner()?;
        for entry in SpecFileWalk::new(&config.tests_dir())? {
            let path = entry?;
            // A file vanishing between walk and read is tolerated.
            let Some(text) = reader.read(&path)? else {
                continue;
            };
            for name in test_detection::test_names(&text) {
                reporter.record(&ImpactRecord::new(Impact::Modified, name))?;
            }
        }
    }

    Ok(())
}
