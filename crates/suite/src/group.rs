// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test group file format.
//!
//! A group file is a JSON array of groups. Each group names a suite and lists
//! the flag stems to enable for it:
//!
//! ```json
//! [
//!     { "name": "Interrupt Suite", "group": ["INTERRUPT"] },
//!     { "name": "Panic Suite", "group": ["PANIC", "KICKSTART"] }
//! ]
//! ```

use crate::error::SuiteError;
use serde::{Deserialize, Serialize};

/// A named set of tests built and run together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestGroup {
    /// Suite name, written into the test list as `TEST_FRAMEWORK_TEST_NAME`
    pub name: String,

    /// Flag stems; stem `X` enables `TEST_X_ENABLED`
    #[serde(rename = "group")]
    pub flags: Vec<String>,
}

impl TestGroup {
    pub fn new(name: impl Into<String>, flags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            flags,
        }
    }

    /// Names of the C defines this group enables, in order.
    pub fn enable_defines(&self) -> impl Iterator<Item = String> + '_ {
        self.flags.iter().map(|flag| format!("TEST_{}_ENABLED", flag))
    }

    fn validate(&self) -> Result<(), SuiteError> {
        if self
            .name
            .chars()
            .any(|c| matches!(c, '"' | '\\' | '\n' | '\r'))
        {
            return Err(SuiteError::InvalidGroupName(self.name.clone()));
        }

        for flag in &self.flags {
            let valid =
                !flag.is_empty() && flag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(SuiteError::InvalidFlag {
                    group: self.name.clone(),
                    flag: flag.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate the content of a group file.
pub fn parse_groups(content: &str) -> Result<Vec<TestGroup>, SuiteError> {
    let groups: Vec<TestGroup> = serde_json::from_str(content)?;
    for group in &groups {
        group.validate()?;
    }
    Ok(groups)
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
