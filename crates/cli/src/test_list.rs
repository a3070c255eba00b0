// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test list header rewriting.
//!
//! The kernel selects which tests to compile from `#define TEST_<X>_ENABLED`
//! lines in a C header, and names the suite with `TEST_FRAMEWORK_TEST_NAME`.
//! Before each group is built, the enable block is replaced by the group's
//! flags and the name is set to the group name.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use utk_suite::TestGroup;

/// Matches an enable flag define.
static ENABLE_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*#\s*define\s+TEST_\w+_ENABLED\b").expect("enable flag regex is invalid")
});

/// Matches the suite name define.
static TEST_NAME: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*#\s*define\s+TEST_FRAMEWORK_TEST_NAME\b").expect("test name regex is invalid")
});

/// Comment banner that precedes the enable block.
pub const FLAGS_BANNER: &str = " * TESTING ENABLE FLAGS";

#[derive(Debug, Error)]
pub enum TestListError {
    #[error("cannot find the position to edit the tests list '{0}'")]
    NoInsertionPoint(PathBuf),

    #[error("Failed to read test list '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write test list '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of rewriting a test list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Whether a `TEST_FRAMEWORK_TEST_NAME` define was found and replaced
    pub name_updated: bool,
    /// Number of enable lines removed
    pub removed: usize,
}

/// Rewrite header `content` for `group`.
///
/// Returns `None` when the header has neither an enable line nor the
/// [`FLAGS_BANNER`] comment.
pub fn rewrite_test_list(content: &str, group: &TestGroup) -> Option<Rewrite> {
    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };

    let mut out: Vec<String> = Vec::new();
    let mut insert_at = None;
    let mut banner_at = None;
    let mut name_updated = false;
    let mut removed = 0;

    for line in content.split_inclusive('\n') {
        if !name_updated && TEST_NAME.is_match(line) {
            out.push(format!(
                "#define TEST_FRAMEWORK_TEST_NAME \"{}\"{}",
                group.name,
                line_ending(line)
            ));
            name_updated = true;
            continue;
        }

        if ENABLE_FLAG.is_match(line) {
            insert_at.get_or_insert(out.len());
            removed += 1;
            continue;
        }

        if banner_at.is_none() && line.contains(FLAGS_BANNER) {
            banner_at = Some(out.len());
        }
        out.push(line.to_string());
    }

    // Without any enable line, the block goes after the banner and its
    // closing comment line.
    let insert_at = insert_at.or_else(|| banner_at.map(|at| (at + 2).min(out.len())))?;

    if insert_at == out.len() {
        if let Some(last) = out.last_mut() {
            if !last.ends_with('\n') {
                last.push_str(newline);
            }
        }
    }

    let flags = group
        .enable_defines()
        .map(|define| format!("#define {} 1{}", define, newline));
    out.splice(insert_at..insert_at, flags);

    Some(Rewrite {
        content: out.concat(),
        name_updated,
        removed,
    })
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// The test list header on disk.
#[derive(Clone, Debug)]
pub struct TestListFile {
    path: PathBuf,
}

impl TestListFile {
    /// Check that the header is readable and editable.
    pub fn open(path: &Path) -> Result<Self, TestListError> {
        let file = Self {
            path: path.to_path_buf(),
        };
        let content = file.read()?;
        let probe = TestGroup::new("", Vec::new());
        if rewrite_test_list(&content, &probe).is_none() {
            return Err(TestListError::NoInsertionPoint(file.path));
        }
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the header in place for `group`.
    pub fn apply(&self, group: &TestGroup) -> Result<Rewrite, TestListError> {
        let content = self.read()?;
        let rewrite = rewrite_test_list(&content, group)
            .ok_or_else(|| TestListError::NoInsertionPoint(self.path.clone()))?;
        std::fs::write(&self.path, &rewrite.content).map_err(|source| TestListError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(rewrite)
    }

    fn read(&self) -> Result<String, TestListError> {
        std::fs::read_to_string(&self.path).map_err(|source| TestListError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "test_list_tests.rs"]
mod tests;
