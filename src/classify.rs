//! Impact classification
//!
//! Combines the patch text, the change-set, and the current file
//! contents into an ordered list of impact records.
//!
//! ## Algorithm
//!
//! 1. Every patch line starting with `+` that carries a test marker
//!    contributes an ADDED name; `-` lines contribute REMOVED names.
//!    The `+++`/`---` file headers also start with those characters
//!    but carry no marker, so they fall out without a special case.
//! 2. Every changed path matching the `.spec.` convention is read in
//!    its current (post-commit) form; each name found that is not
//!    already ADDED or REMOVED is MODIFIED. A test whose surrounding
//!    code changed while its name survived the commit lands here.
//! 3. If any changed path is not a spec file, a helper changed and
//!    every test in the repository is potentially impacted; the
//!    caller runs the full sweep in addition to the direct records.
//!
//! There is no deduplication beyond the ADDED/REMOVED membership
//! check; the sweep may re-announce names already reported.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::test_detection::{is_spec_file, test_names};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// How a test name relates to the analyzed commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Added => write!(f, "ADDED"),
            Impact::Removed => write!(f, "REMOVED"),
            Impact::Modified => write!(f, "MODIFIED"),
        }
    }
}

/// One classified test name. No identity beyond the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactRecord {
    pub impact: Impact,
    pub test: String,
}

impl ImpactRecord {
    pub fn new(impact: Impact, test: impl Into<String>) -> Self {
        Self {
            impact,
            test: test.into(),
        }
    }
}

/// Direct classification result. `helper_changed` tells the caller
/// to run the full-repository sweep after printing `records`.
#[derive(Debug, Default)]
pub struct Classification {
    pub records: Vec<ImpactRecord>,
    pub helper_changed: bool,
}

/// Read access to the post-commit file tree.
///
/// `Ok(None)` means the file does not exist (a deleted spec file
/// contributes no names); any other failure is fatal.
pub trait FileReader {
    fn read(&self, path: &Path) -> Result<Option<String>>;
}

/// Reads from the working tree on disk.
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::FileAccess {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Classify every test name touched by the commit.
///
/// Output order: ADDED records in patch order, then REMOVED, then
/// MODIFIED in changed-file order.
pub fn classify(
    patch: &str,
    changed_files: &[String],
    config: &Config,
    reader: &dyn FileReader,
) -> Result<Classification> {
    let mut added: Vec<String> = Vec::new();
    let mut removed: Vec<String> = Vec::new();

    for line in patch.lines() {
        // One name per diff line: a line declares at most one test.
        if let Some(rest) = line.strip_prefix('+') {
            if let Some(name) = test_names(rest).into_iter().next() {
                added.push(name);
            }
        } else if let Some(rest) = line.strip_prefix('-') {
            if let Some(name) = test_names(rest).into_iter().next() {
                removed.push(name);
            }
        }
    }

    let mut modified: Vec<String> = Vec::new();
    for path in changed_files.iter().filter(|path| is_spec_file(path)) {
        let abs = config.resolve(path);
        let Some(text) = reader.read(&abs)? else {
            continue;
        };
        for name in test_names(&text) {
            if !added.contains(&name) && !removed.contains(&name) {
                modified.push(name);
            }
        }
    }

    let helper_changed = changed_files.iter().any(|path| !is_spec_file(path));

    let mut records = Vec::with_capacity(added.len() + removed.len() + modified.len());
    records.extend(added.into_iter().map(|t| ImpactRecord::new(Impact::Added, t)));
    records.extend(removed.into_iter().map(|t| ImpactRecord::new(Impact::Removed, t)));
    records.extend(modified.into_iter().map(|t| ImpactRecord::new(Impact::Modified, t)));

    Ok(Classification {
        records,
        helper_changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory file tree for classifier tests.
    struct MapReader(HashMap<PathBuf, String>);

    impl MapReader {
        fn new(files: &[(&str, &str)]) -> Self {
            Self(
                files
                    .iter()
                    .map(|(path, text)| (PathBuf::from(path), text.to_string()))
                    .collect(),
            )
        }
    }

    impl FileReader for MapReader {
        fn read(&self, path: &Path) -> Result<Option<String>> {
            Ok(self.0.get(path).cloned())
        }
    }

    fn config() -> Config {
        Config::new("HEAD", "/repo")
    }

    fn names(classification: &Classification, impact: Impact) -> Vec<&str> {
        classification
            .records
            .iter()
            .filter(|r| r.impact == impact)
            .map(|r| r.test.as_str())
            .collect()
    }

    #[test]
    fn added_and_removed_come_from_patch_lines() {
        let patch = "\
+  test(\"alpha\", () => {})
-  test('beta', fn)
 context line with test(\"ignored\") marker
";
        let result = classify(patch, &[], &config(), &MapReader::new(&[])).unwrap();

        assert_eq!(names(&result, Impact::Added), vec!["alpha"]);
        assert_eq!(names(&result, Impact::Removed), vec!["beta"]);
        assert!(!result.helper_changed);
    }

    #[test]
    fn file_header_lines_carry_no_marker() {
        let patch = "\
--- a/tests/a.spec.ts
+++ b/tests/a.spec.ts
";
        let result = classify(patch, &[], &config(), &MapReader::new(&[])).unwrap();
        assert!(result.records.is_empty());
    }

    #[test]
    fn surviving_names_in_changed_spec_files_are_modified() {
        let reader = MapReader::new(&[(
            "/repo/src/math.spec.ts",
            "test(\"gamma\", () => {})\ntest(\"delta\", () => {})\n",
        )]);
        let patch = "+  test(\"delta\", () => {})\n";
        let files = vec!["src/math.spec.ts".to_string()];

        let result = classify(patch, &files, &config(), &reader).unwrap();

        // delta was added this commit; only gamma survived unchanged-by-name.
        assert_eq!(names(&result, Impact::Added), vec!["delta"]);
        assert_eq!(names(&result, Impact::Modified), vec!["gamma"]);
    }

    #[test]
    fn removed_names_are_not_double_reported_as_modified() {
        let reader = MapReader::new(&[("/repo/a.spec.ts", "test(\"kept\", fn)\n")]);
        let patch = "-test(\"kept\", fn)\n";
        let files = vec!["a.spec.ts".to_string()];

        let result = classify(patch, &files, &config(), &reader).unwrap();

        assert_eq!(names(&result, Impact::Removed), vec!["kept"]);
        assert!(names(&result, Impact::Modified).is_empty());
    }

    #[test]
    fn deleted_spec_file_contributes_nothing() {
        let patch = "diff --git a/gone.spec.ts b/gone.spec.ts\n";
        let files = vec!["gone.spec.ts".to_string()];

        let result = classify(patch, &files, &config(), &MapReader::new(&[])).unwrap();

        assert!(result.records.is_empty());
        assert!(!result.helper_changed);
    }

    #[test]
    fn non_spec_change_sets_the_helper_flag() {
        let files = vec!["src/utils.ts".to_string()];
        let result = classify("", &files, &config(), &MapReader::new(&[])).unwrap();
        assert!(result.helper_changed);
    }

    #[test]
    fn spec_only_change_does_not_escalate() {
        let files = vec!["tests/a.spec.ts".to_string(), "src/b.spec.ts".to_string()];
        let result = classify("", &files, &config(), &MapReader::new(&[])).unwrap();
        assert!(!result.helper_changed);
    }

    #[test]
    fn output_order_is_added_then_removed_then_modified() {
        let reader = MapReader::new(&[("/repo/a.spec.ts", "test(\"m\", fn)\n")]);
        let patch = "\
-test(\"r\", fn)
+test(\"a\", fn)
";
        let files = vec!["a.spec.ts".to_string()];

        let result = classify(patch, &files, &config(), &reader).unwrap();

        let order: Vec<(Impact, &str)> = result
            .records
            .iter()
            .map(|r| (r.impact, r.test.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Impact::Added, "a"),
                (Impact::Removed, "r"),
                (Impact::Modified, "m"),
            ]
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let reader = MapReader::new(&[("/repo/a.spec.ts", "test(\"x\", fn)\n")]);
        let patch = "+test(\"y\", fn)\n";
        let files = vec!["a.spec.ts".to_string(), "src/helper.ts".to_string()];

        let first = classify(patch, &files, &config(), &reader).unwrap();
        let second = classify(patch, &files, &config(), &reader).unwrap();

        assert_eq!(first.records, second.records);
        assert_eq!(first.helper_changed, second.helper_changed);
    }

    #[test]
    fn fs_reader_treats_missing_files_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.spec.ts");
        assert!(FsReader.read(&missing).unwrap().is_none());

        let present = dir.path().join("present.spec.ts");
        std::fs::write(&present, "test(\"here\", fn)").unwrap();
        let text = FsReader.read(&present).unwrap().unwrap();
        assert_eq!(test_names(&text), vec!["here"]);
    }
}
