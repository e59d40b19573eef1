//! Change-set extraction
//!
//! Pulls the file paths touched by a commit out of the raw patch
//! text. Only the `diff --git a/<old> b/<new>` header lines matter;
//! hunks, renames, and mode lines are never interpreted.

use regex::Regex;
use std::sync::OnceLock;

static DIFF_HEADER: OnceLock<Regex> = OnceLock::new();

fn diff_header() -> &'static Regex {
    DIFF_HEADER.get_or_init(|| {
        Regex::new(r"(?m)^diff --git a/(.+?) b/(.+)$").expect("diff header pattern")
    })
}

/// List every file path touched by the patch.
///
/// Emits the new-path side of each header in order of appearance.
/// Duplicates are kept if a header recurs (it normally does not per
/// file). An empty patch yields an empty list, which is valid.
pub fn changed_files(patch: &str) -> Vec<String> {
    diff_header()
        .captures_iter(patch)
        .map(|caps| caps[2].to_string())
        .collect()
}
