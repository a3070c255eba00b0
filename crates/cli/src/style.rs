// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal styling for validator output.
//!
//! Rendering code never writes escape codes directly: it asks a [`Painter`]
//! to style text, and a disabled painter returns the text unchanged.

use std::fmt::Display;

#[cfg(test)]
use regex::Regex;
#[cfg(test)]
use std::sync::LazyLock;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Matches ANSI SGR escape sequences.
#[cfg(test)]
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)m").expect("ANSI regex pattern is invalid")
});

/// Palette used by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    OkBlue,
    OkCyan,
    OkGreen,
    Warning,
    Fail,
    Bold,
}

impl Style {
    pub fn code(self) -> &'static str {
        match self {
            Style::OkBlue => "\x1b[94m",
            Style::OkCyan => "\x1b[96m",
            Style::OkGreen => "\x1b[92m",
            Style::Warning => "\x1b[93m",
            Style::Fail => "\x1b[91m",
            Style::Bold => "\x1b[1m",
        }
    }
}

/// Applies styles when enabled, passes text through otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A painter that never emits escape codes.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Style `text`, resetting attributes afterwards.
    pub fn paint(&self, styles: &[Style], text: impl Display) -> String {
        if !self.enabled || styles.is_empty() {
            return text.to_string();
        }
        let mut out: String = styles.iter().map(|s| s.code()).collect();
        out.push_str(&text.to_string());
        out.push_str(RESET);
        out
    }
}

/// Strip all ANSI escape sequences, returning plain text.
#[cfg(test)]
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").to_string()
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
