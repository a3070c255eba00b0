// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Supported build targets.

use crate::error::SuiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CPU architecture the kernel tests are built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "x86_i386")]
    X86I386,
}

impl Target {
    /// Every supported target, in allow-list order.
    pub const ALL: [Target; 2] = [Target::X86_64, Target::X86I386];

    /// Identifier passed to the build system as `target=<id>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Target::X86_64 => "x86_64",
            Target::X86I386 => "x86_i386",
        }
    }

    /// Comma separated list of supported identifiers, for diagnostics.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Target {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SuiteError::UnsupportedTarget {
                given: s.to_string(),
                supported: Self::supported_list(),
            })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
