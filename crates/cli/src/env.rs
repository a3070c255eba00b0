// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The command line carries only the four positionals, so every tunable is an
//! environment variable.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// Default log filter when `UTK_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `UTK_LOG`: tracing filter directives (e.g. `debug`, `utk_validator=info`).
pub fn log_filter() -> String {
    std::env::var(names::UTK_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// `NO_COLOR`: any non-empty value disables automatic colors.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some_and(|v| !v.is_empty())
}

/// `UTK_MAKE`: build program, optionally with leading arguments.
pub fn make_command() -> Option<String> {
    non_blank(names::UTK_MAKE)
}

/// `UTK_BUILD_DIR`: directory the build program runs in.
pub fn build_dir() -> Option<PathBuf> {
    non_blank(names::UTK_BUILD_DIR).map(PathBuf::from)
}

/// `UTK_STEP_TIMEOUT`: raw per-step timeout in seconds.
pub fn step_timeout() -> Option<String> {
    non_blank(names::UTK_STEP_TIMEOUT)
}

/// `UTK_COLOR`: raw `auto`, `always` or `never`.
pub fn color() -> Option<String> {
    non_blank(names::UTK_COLOR)
}

fn non_blank(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
