//! Test marker and spec file detection
//!
//! This module provides the textual conventions the rest of the tool
//! is built on: the `test("name", ...)` declaration marker and the
//! `.spec.` file-naming convention.
//!
//! The marker scan is deliberately format-agnostic. It matches the
//! literal marker text in any input, whether a single diff line or a
//! whole file, and does not care about the surrounding syntax. A
//! marker inside a comment or a string literal is a true match; this
//! is an accepted false-positive risk of the textual approach, and
//! callers needing accuracy must pre-filter their inputs.

use regex::Regex;
use std::sync::OnceLock;

/// Path substring marking a file as a direct test-specification file.
pub const SPEC_MARKER: &str = ".spec.";

/// File suffix collected during the full-sweep escalation.
pub const SPEC_SUFFIX: &str = ".spec.ts";

static TEST_MARKER: OnceLock<Regex> = OnceLock::new();

fn test_marker() -> &'static Regex {
    // Opening and closing quote are each any of the three recognized
    // quote characters; the name is the shortest run between them.
    TEST_MARKER.get_or_init(|| Regex::new(r#"test\(["'`](.+?)["'`]"#).expect("test marker pattern"))
}

/// Extract all test names declared in the given text.
///
/// Matches are non-overlapping, left to right, in input order. Text
/// with no marker yields an empty list.
pub fn test_names(text: &str) -> Vec<String> {
    test_marker()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Whether a changed path names a direct test-specification file.
pub fn is_spec_file(path: &str) -> bool {
    path.contains(SPEC_MARKER)
}

/// Whether a file name matches the full-sweep collection convention.
pub fn is_sweep_candidate(file_name: &str) -> bool {
    file_name.ends_with(SPEC_SUFFIX)
}
