// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite validation and rendering.

use std::io::{self, Write};

use tracing::warn;
use utk_suite::{TestSuite, Verdict};

use crate::style::{Painter, Style};

const SUITE_RULE: &str = "#--------------------------------------------------#";
const GROUP_RULE: &str = "#--------------------------------------------------------------------------------#";

/// Check `suite`, render it to `out` and return the verdict.
///
/// Declared counters that disagree with the reported items are logged; they
/// never turn a failing suite into a passing one.
pub fn validate_suite<W: Write>(
    out: &mut W,
    painter: &Painter,
    suite: &TestSuite,
) -> io::Result<Verdict> {
    for issue in suite.inconsistencies() {
        warn!(suite = %suite.name, "{}", issue);
    }

    let verdict = suite.verdict();
    render_suite(out, painter, suite, &verdict)?;
    Ok(verdict)
}

/// Write the suite summary table, one line per test, and the result line.
pub fn render_suite<W: Write>(
    out: &mut W,
    painter: &Painter,
    suite: &TestSuite,
    verdict: &Verdict,
) -> io::Result<()> {
    let cyan = |text: String| painter.paint(&[Style::OkCyan], text);

    writeln!(out, "{}", cyan(SUITE_RULE.to_string()))?;
    writeln!(out, "{}", cyan(format!("| Version: {:<40}|", suite.version)))?;
    writeln!(out, "{}", cyan(format!("| Testname: {:<39}|", suite.name)))?;
    writeln!(out, "{}", cyan(SUITE_RULE.to_string()))?;
    writeln!(
        out,
        "{}",
        cyan("| N# of tests    | N# of success  | N# of failures |".to_string())
    )?;
    writeln!(
        out,
        "{}",
        cyan("|--------------------------------------------------#".to_string())
    )?;
    writeln!(
        out,
        "{}",
        cyan(format!(
            "| {:>14} | {:>14} | {:>14} |",
            suite.number_of_tests, suite.success, suite.failures
        ))
    )?;
    writeln!(out, "{}", cyan(SUITE_RULE.to_string()))?;

    for (id, item) in &suite.tests {
        let outcome = if item.passed() {
            painter.paint(&[Style::OkGreen, Style::Bold], "PASS")
        } else {
            painter.paint(&[Style::Fail, Style::Bold], "FAIL")
        };
        writeln!(out, "===> Test {}", id)?;
        writeln!(
            out,
            "    > Outcome: {} | Expected: 0x{:X} -- Result: 0x{:X} | Type: {}",
            outcome, item.expected, item.result, item.type_tag
        )?;
    }

    writeln!(out)?;
    let result_line = if verdict.passed() {
        painter.paint(
            &[Style::OkGreen, Style::Bold],
            format!("==== {} RESULT: PASS ====", suite.name),
        )
    } else {
        painter.paint(
            &[Style::Fail, Style::Bold],
            format!("==== {} RESULT: FAIL ====", suite.name),
        )
    };
    writeln!(out, "{}", result_line)?;
    writeln!(out, "\n{}\n", GROUP_RULE)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
