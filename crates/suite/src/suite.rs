// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Testing section emitted by the kernel test framework.
//!
//! Once a suite has run, the kernel prints a JSON document between two marker
//! lines on its console. Everything outside the markers (boot logs, build
//! noise) is ignored.

use crate::error::SuiteError;
use crate::type_tag::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SECTION_START: &str = "#-------- TESTING SECTION START --------#";
pub const SECTION_END: &str = "#-------- TESTING SECTION END --------#";

/// Results of one suite run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Test framework version
    pub version: String,
    /// Suite name, as set in the test list
    pub name: String,
    pub number_of_tests: u32,
    pub failures: u32,
    pub success: u32,
    /// Test items keyed by test id
    #[serde(rename = "test_suite")]
    pub tests: BTreeMap<u32, TestItem>,
}

/// A single assertion recorded by the kernel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestItem {
    #[serde(deserialize_with = "raw_bits::deserialize")]
    pub result: u64,
    #[serde(deserialize_with = "raw_bits::deserialize")]
    pub expected: u64,
    /// Zero when the assertion failed
    pub status: i64,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

impl TestItem {
    pub fn passed(&self) -> bool {
        self.status != 0
    }
}

/// Outcome of checking a suite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Ids of items whose status reports a failure
    pub failing: Vec<u32>,
    /// Failure count declared by the kernel
    pub declared_failures: u32,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.failing.is_empty() && self.declared_failures == 0
    }

    /// Number of failures to report, never below what the kernel declared.
    pub fn failure_count(&self) -> u32 {
        let counted = u32::try_from(self.failing.len()).unwrap_or(u32::MAX);
        counted.max(self.declared_failures)
    }
}

impl TestSuite {
    /// Extract the testing section from raw console output and parse it.
    pub fn parse(output: &str) -> Result<Self, SuiteError> {
        let body = extract_section(output)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            failing: self
                .tests
                .iter()
                .filter(|(_, item)| !item.passed())
                .map(|(id, _)| *id)
                .collect(),
            declared_failures: self.failures,
        }
    }

    /// Describe every declared counter that disagrees with the item list.
    pub fn inconsistencies(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let items = self.tests.len();
        let passed = self.tests.values().filter(|item| item.passed()).count();

        if self.number_of_tests as usize != items {
            issues.push(format!(
                "number_of_tests is {} but {} test items were reported",
                self.number_of_tests, items
            ));
        }
        if self.success as usize != passed {
            issues.push(format!(
                "success is {} but {} test items passed",
                self.success, passed
            ));
        }
        if self.failures as usize != items - passed {
            issues.push(format!(
                "failures is {} but {} test items failed",
                self.failures,
                items - passed
            ));
        }
        issues
    }
}

/// Return the lines strictly between the first start marker and the next end
/// marker, joined with newlines. A missing end marker takes the rest of the
/// output.
pub fn extract_section(output: &str) -> Result<String, SuiteError> {
    let mut lines = output.lines();
    if !lines.any(|line| line == SECTION_START) {
        return Err(SuiteError::MissingSection);
    }

    let mut body = String::new();
    for line in lines.take_while(|line| *line != SECTION_END) {
        body.push_str(line);
        body.push('\n');
    }
    Ok(body)
}

/// The kernel prints 64-bit values with a signed conversion, so negative
/// numbers stand for their two's complement bit pattern.
mod raw_bits {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Unsigned(u64),
        Signed(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Unsigned(value) => value,
            Raw::Signed(value) => value as u64,
        })
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
