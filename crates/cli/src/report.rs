// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report: per-group outcomes, the final summary table and the JSON
//! report written to the output path.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use utk_suite::{Target, TestGroup, TestSuite, Verdict};

use crate::style::{Painter, Style};

/// Console bytes kept on an errored group.
pub const CONSOLE_TAIL_BYTES: usize = 64 * 1024;

const REPORT_RULE: &str =
    "#==============================================================================#";

/// Outcome of a single group
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupStatus {
    /// Suite ran and every test passed
    Passed,
    /// Suite ran with failing tests
    Failed { failures: u32 },
    /// Suite could not be built, run or parsed
    Error { reason: String },
}

/// A group with its outcome and, when it ran, its parsed suite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupOutcome {
    pub name: String,
    pub flags: Vec<String>,
    pub outcome: GroupStatus,
    pub suite: Option<TestSuite>,
    /// Tail of the test-run console, kept when the group errored
    pub console: Option<String>,
}

impl GroupOutcome {
    pub fn from_verdict(group: &TestGroup, suite: TestSuite, verdict: &Verdict) -> Self {
        let outcome = if verdict.passed() {
            GroupStatus::Passed
        } else {
            GroupStatus::Failed {
                failures: verdict.failure_count(),
            }
        };
        Self {
            name: group.name.clone(),
            flags: group.flags.clone(),
            outcome,
            suite: Some(suite),
            console: None,
        }
    }

    pub fn error(group: &TestGroup, reason: impl Into<String>) -> Self {
        Self {
            name: group.name.clone(),
            flags: group.flags.clone(),
            outcome: GroupStatus::Error {
                reason: reason.into(),
            },
            suite: None,
            console: None,
        }
    }

    /// Attach the test-run console, keeping at most its last
    /// [`CONSOLE_TAIL_BYTES`] bytes.
    pub fn with_console(mut self, console: &str) -> Self {
        self.console = Some(console_tail(console).to_string());
        self
    }

    pub fn passed(&self) -> bool {
        self.outcome == GroupStatus::Passed
    }
}

/// Report for one validator run
#[derive(Clone, Debug)]
pub struct RunReport {
    target: Target,
    groups: Vec<GroupOutcome>,
}

/// Serialized form of [`RunReport`].
#[derive(Serialize)]
struct ReportDocument<'a> {
    target: Target,
    total: usize,
    success: usize,
    errors: usize,
    groups: &'a [GroupOutcome],
}

impl RunReport {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            groups: Vec::new(),
        }
    }

    pub fn add(&mut self, outcome: GroupOutcome) {
        self.groups.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.groups.len()
    }

    pub fn success_count(&self) -> usize {
        self.groups.iter().filter(|g| g.passed()).count()
    }

    /// Groups that failed or could not run.
    pub fn error_count(&self) -> usize {
        self.total() - self.success_count()
    }

    pub fn all_passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Write the final summary table.
    pub fn render<W: Write>(&self, out: &mut W, painter: &Painter) -> io::Result<()> {
        let blue = |text: String| painter.paint(&[Style::OkBlue, Style::Bold], text);

        writeln!(out, "{}", blue(format!("\n\n{}", REPORT_RULE)))?;
        writeln!(out, "{}", blue(format!("| {:<76} |", "FINAL REPORT")))?;
        writeln!(out, "{}", blue(REPORT_RULE.to_string()))?;
        writeln!(out, "{}", blue(format!("| Total:  {:<68} |", self.total())))?;
        writeln!(
            out,
            "{}",
            blue(format!("| Success: {:<67} |", self.success_count()))
        )?;
        writeln!(
            out,
            "{}",
            blue(format!("| Errors: {:<68} |", self.error_count()))
        )?;
        writeln!(out, "{}", blue(REPORT_RULE.to_string()))
    }

    /// Deterministic JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(&ReportDocument {
            target: self.target,
            total: self.total(),
            success: self.success_count(),
            errors: self.error_count(),
            groups: &self.groups,
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Write the JSON report, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(to_io_error)?;
        ensure_parent_exists(path)?;
        std::fs::write(path, json)
    }
}

fn console_tail(console: &str) -> &str {
    if console.len() <= CONSOLE_TAIL_BYTES {
        return console;
    }
    let mut start = console.len() - CONSOLE_TAIL_BYTES;
    while !console.is_char_boundary(start) {
        start += 1;
    }
    &console[start..]
}

/// Map an error to std::io::Error with InvalidData kind.
fn to_io_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

/// Ensure a file's parent directory exists, creating it and ancestors if needed.
fn ensure_parent_exists(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
