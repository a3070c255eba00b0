// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.
//!
//! The positional contract is fixed: exactly four arguments, and no flags.
//! Any other count is reported with the short usage line and exit code 1.
//! Words that look like flags (`--help`, `-x86`) are positionals like any
//! other, so a four-word invocation always reaches target validation.

use std::ffi::OsString;
use std::iter;
use std::path::PathBuf;

use clap::Parser;

/// Program name used when argv is empty.
pub const DEFAULT_PROGRAM: &str = "utk-validator";

/// Number of positional arguments the validator takes.
pub const POSITIONAL_COUNT: usize = 4;

/// UTK test validator
#[derive(Parser, Debug, Clone)]
#[command(
    name = "utk-validator",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Build target (x86_64 or x86_i386)
    #[arg(value_name = "target", allow_hyphen_values = true)]
    pub target: OsString,

    /// JSON file listing the test groups to run
    #[arg(value_name = "test_group_file", allow_hyphen_values = true)]
    pub test_group_file: PathBuf,

    /// C header holding the test enable flags, rewritten for every group
    #[arg(value_name = "test_list", allow_hyphen_values = true)]
    pub test_list: PathBuf,

    /// Path of the JSON report to write
    #[arg(value_name = "test_file_output", allow_hyphen_values = true)]
    pub test_file_output: PathBuf,
}

/// Result of interpreting the command line.
#[derive(Debug)]
pub enum Invocation {
    /// Exactly four positionals; proceed with target validation.
    Run(Box<Cli>),
    /// Wrong argument count.
    Usage {
        program: String,
        /// Parser message when the count was right but parsing still failed
        detail: Option<String>,
    },
}

/// The short usage line printed on argument count errors.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} target test_group_file test_list test_file_output",
        program
    )
}

/// Interpret argv (program name first).
pub fn parse_args<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let program = argv
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
    let positionals: Vec<OsString> = argv.collect();

    if positionals.len() != POSITIONAL_COUNT {
        return Invocation::Usage {
            program,
            detail: None,
        };
    }

    // Everything after `--` is positional, including a literal `--`.
    let words = iter::once(OsString::from(&program))
        .chain(iter::once(OsString::from("--")))
        .chain(positionals);

    match Cli::try_parse_from(words) {
        Ok(cli) => Invocation::Run(Box::new(cli)),
        Err(err) => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            Invocation::Usage {
                program,
                detail: Some(first.trim_start_matches("error: ").to_string()),
            }
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
