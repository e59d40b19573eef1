//! Report output
//!
//! Line-oriented, human-readable text. Writing to a generic
//! `io::Write` keeps the format testable against a byte buffer.

use crate::classify::ImpactRecord;
use crate::error::{Error, Result};
use std::io::Write;

const BANNER: &str = "=== IMPACT REPORT ===";
const SWEEP_BANNER: &str = "HELPER FILE CHANGED — marking all tests as impacted:";

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Report header, printed exactly once per run.
    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.out, "\n{BANNER}\n").map_err(Error::Write)
    }

    /// Secondary banner preceding the full-sweep section.
    pub fn sweep_banner(&mut self) -> Result<()> {
        writeln!(self.out, "\n{SWEEP_BANNER}\n").map_err(Error::Write)
    }

    /// One `<CLASSIFICATION>: <test name>` line.
    pub fn record(&mut self, record: &ImpactRecord) -> Result<()> {
        writeln!(self.out, "{}: {}", record.impact, record.test).map_err(Error::Write)
    }
}
