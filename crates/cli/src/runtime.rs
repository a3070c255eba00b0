// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The validation pipeline.
//!
//! `run` parses arguments, validates the target, loads the inputs, then for
//! every group rewrites the test list, builds and runs the kernel, and
//! validates the testing section. Preconditions fail fast; a group that
//! cannot be built or parsed is recorded and the run moves on.

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};
use utk_suite::{parse_groups, SuiteError, TestGroup, TestSuite};

use crate::cli::{parse_args, usage, Invocation};
use crate::config::{resolve_color, ColorChoice, ConfigError, EnvSettings, ValidatorConfig};
use crate::output_diagnostic::{print_error, print_warning};
use crate::report::{GroupOutcome, RunReport};
use crate::runner::{BuildRunner, MakeRunner};
use crate::style::{Painter, Style};
use crate::test_list::{TestListError, TestListFile};
use crate::validate::validate_suite;

/// Process exit codes
pub mod exit_codes {
    /// Every group passed
    pub const SUCCESS: i32 = 0;
    /// Wrong argument count or invalid option
    pub const USAGE: i32 = 1;
    /// Target not in the allow-list
    pub const UNSUPPORTED_TARGET: i32 = 2;
    /// An input could not be read, a `UTK_*` setting is invalid, or the
    /// report could not be written
    pub const INPUT_ERROR: i32 = 3;
    /// At least one group failed or could not run
    pub const GROUP_FAILURES: i32 = 4;
}

const BANNER_RULE: &str = "#--------------------------------------------------#";
const GROUP_RULE: &str =
    "#==============================================================================#";

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read test group file '{path}': {source}")]
    GroupFileRead { path: PathBuf, source: io::Error },

    #[error("Invalid test group file '{path}': {source}")]
    GroupFileFormat { path: PathBuf, source: SuiteError },

    #[error(transparent)]
    TestList(#[from] TestListError),

    #[error("Failed to write report '{path}': {source}")]
    ReportWrite { path: PathBuf, source: io::Error },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Config(ConfigError::UnsupportedTarget(_)) => exit_codes::UNSUPPORTED_TARGET,
            _ => exit_codes::INPUT_ERROR,
        }
    }
}

/// Runs every group of a validated configuration.
pub struct Validator<R> {
    config: ValidatorConfig,
    runner: R,
    painter: Painter,
}

impl<R: BuildRunner> Validator<R> {
    pub fn new(config: ValidatorConfig, runner: R) -> Self {
        let painter = Painter::new(config.color);
        Self {
            config,
            runner,
            painter,
        }
    }

    /// Run all groups, print the final table and write the report.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunReport, RunError> {
        let groups = self.load_groups()?;
        let test_list = TestListFile::open(&self.config.test_list)?;
        info!(
            arch = %self.config.target,
            groups = groups.len(),
            "starting validation"
        );

        let mut report = RunReport::new(self.config.target);
        for group in &groups {
            let outcome = self.run_group(out, &test_list, group).await?;
            info!(group = %outcome.name, status = ?outcome.outcome, "group finished");
            report.add(outcome);
        }

        report.render(out, &self.painter)?;
        report
            .write_to(&self.config.output)
            .map_err(|source| RunError::ReportWrite {
                path: self.config.output.clone(),
                source,
            })?;
        Ok(report)
    }

    fn load_groups(&self) -> Result<Vec<TestGroup>, RunError> {
        let path = &self.config.group_file;
        let content = std::fs::read_to_string(path).map_err(|source| RunError::GroupFileRead {
            path: path.clone(),
            source,
        })?;
        parse_groups(&content).map_err(|source| RunError::GroupFileFormat {
            path: path.clone(),
            source,
        })
    }

    async fn run_group<W: Write>(
        &self,
        out: &mut W,
        test_list: &TestListFile,
        group: &TestGroup,
    ) -> Result<GroupOutcome, RunError> {
        self.render_group_header(out, group)?;

        // The header is shared by every group, so a failed rewrite ends the run.
        let rewrite = test_list.apply(group)?;
        debug!(removed = rewrite.removed, "test list rewritten");
        if !rewrite.name_updated {
            print_warning(format_args!(
                "TEST_FRAMEWORK_TEST_NAME not found in '{}', suite name left unchanged",
                test_list.path().display()
            ));
        }

        let console = match self.runner.run_group(self.config.target).await {
            Ok(console) => console,
            Err(e) => return self.group_error(out, group, e.to_string(), e.console()),
        };

        let suite = match TestSuite::parse(&console) {
            Ok(suite) => suite,
            Err(e) => return self.group_error(out, group, e.to_string(), Some(console.as_str())),
        };
        if suite.name != group.name {
            warn!(
                group = %group.name,
                suite = %suite.name,
                "suite name differs from group name"
            );
        }

        let verdict = validate_suite(out, &self.painter, &suite)?;
        Ok(GroupOutcome::from_verdict(group, suite, &verdict))
    }

    fn render_group_header<W: Write>(&self, out: &mut W, group: &TestGroup) -> io::Result<()> {
        let blue = |text: String| self.painter.paint(&[Style::OkBlue], text);
        writeln!(out, "{}", blue(format!("\n{}", GROUP_RULE)))?;
        writeln!(out, "{}", blue(format!(" > Executing Group {}", group.name)))?;
        writeln!(out, "{}", blue(format!(" > Flags: {}", group.flags.join(", "))))?;
        writeln!(out, "{}", blue(format!(" > Target {}", self.config.target)))?;
        writeln!(out, "{}", blue(format!("{}\n", GROUP_RULE)))
    }

    fn group_error<W: Write>(
        &self,
        out: &mut W,
        group: &TestGroup,
        reason: String,
        console: Option<&str>,
    ) -> Result<GroupOutcome, RunError> {
        warn!(group = %group.name, "{}", reason);
        writeln!(
            out,
            "{}",
            self.painter
                .paint(&[Style::Fail, Style::Bold], format!(" > Error: {}", reason))
        )?;
        let outcome = GroupOutcome::error(group, reason);
        Ok(match console {
            Some(console) => outcome.with_console(console),
            None => outcome,
        })
    }
}

/// Write the startup banner.
pub fn write_banner<W: Write>(out: &mut W, painter: &Painter) -> io::Result<()> {
    let styles = [Style::OkCyan, Style::Bold];
    writeln!(out, "{}", painter.paint(&styles, BANNER_RULE))?;
    writeln!(
        out,
        "{}",
        painter.paint(&styles, format!("| {:<48} |", "UTK Test Suite"))
    )?;
    writeln!(out, "{}", painter.paint(&styles, BANNER_RULE))
}

/// Run the validator against the real build system, printing to stdout.
pub async fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let env = EnvSettings::from_env();
    run_with(argv, &env, &mut stdout, is_terminal, |config| {
        MakeRunner::new(config.make.clone())
    })
    .await
}

/// Run the validator with injected settings and build runner.
///
/// Returns the process exit code (see [`exit_codes`]).
pub async fn run_with<I, T, W, R, F>(
    argv: I,
    env: &EnvSettings,
    out: &mut W,
    is_terminal: bool,
    make_runner: F,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
    R: BuildRunner,
    F: FnOnce(&ValidatorConfig) -> R,
{
    // An invalid UTK_COLOR is reported after argument checks.
    let banner_painter = Painter::new(resolve_color(
        env.color_choice().unwrap_or(ColorChoice::Auto),
        is_terminal,
        env.no_color,
    ));
    // Stdout writes below are best effort; a closed stdout still gets the exit code.
    let _ = write_banner(out, &banner_painter);

    let cli = match parse_args(argv) {
        Invocation::Run(cli) => cli,
        Invocation::Usage { program, detail } => {
            if let Some(detail) = detail {
                print_error(detail);
            }
            let _ = writeln!(out, "{}", usage(&program));
            return exit_codes::USAGE;
        }
    };

    let config = match ValidatorConfig::from_cli(*cli, env, is_terminal) {
        Ok(config) => config,
        Err(e) => {
            let err = RunError::from(e);
            print_error(&err);
            return err.exit_code();
        }
    };

    let runner = make_runner(&config);
    let validator = Validator::new(config, runner);
    let code = match validator.run(out).await {
        Ok(report) if report.all_passed() => exit_codes::SUCCESS,
        Ok(_) => exit_codes::GROUP_FAILURES,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    };
    let _ = out.flush();
    code
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
