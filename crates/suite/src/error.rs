// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while interpreting validator inputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Unknown target {given}, only {supported} are supported")]
    UnsupportedTarget { given: String, supported: String },

    #[error("Unknown value type tag: {0}")]
    UnknownTypeTag(u8),

    #[error("Invalid test flag '{flag}' in group '{group}': only letters, digits and '_' are allowed")]
    InvalidFlag { group: String, flag: String },

    #[error("Invalid group name '{0}': quotes, backslashes and line breaks are not allowed")]
    InvalidGroupName(String),

    #[error("Testing section start marker not found in output")]
    MissingSection,

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
