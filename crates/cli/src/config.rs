// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved run configuration.
//!
//! Built once from the parsed positionals and the `UTK_*` environment;
//! nothing downstream reads argv or the environment again.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;
use utk_suite::{SuiteError, Target};

use crate::cli::Cli;
use crate::env::{UTK_COLOR, UTK_STEP_TIMEOUT};

/// Default build program.
pub const DEFAULT_MAKE: &str = "make";

/// Default per-step build timeout in seconds.
pub const DEFAULT_STEP_TIMEOUT_SECS: u64 = 900;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnsupportedTarget(#[from] SuiteError),

    #[error("Invalid {name} value '{value}': {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// When to color standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Raw settings taken from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub make: Option<String>,
    pub build_dir: Option<PathBuf>,
    pub step_timeout: Option<String>,
    pub color: Option<String>,
    pub no_color: bool,
}

impl EnvSettings {
    pub fn from_env() -> Self {
        Self {
            make: crate::env::make_command(),
            build_dir: crate::env::build_dir(),
            step_timeout: crate::env::step_timeout(),
            color: crate::env::color(),
            no_color: crate::env::no_color(),
        }
    }

    pub fn color_choice(&self) -> Result<ColorChoice, ConfigError> {
        match &self.color {
            None => Ok(ColorChoice::Auto),
            Some(value) => {
                ColorChoice::from_str(value, true).map_err(|reason| ConfigError::InvalidSetting {
                    name: UTK_COLOR,
                    value: value.clone(),
                    reason,
                })
            }
        }
    }

    pub fn step_timeout(&self) -> Result<Duration, ConfigError> {
        let Some(value) = &self.step_timeout else {
            return Ok(Duration::from_secs(DEFAULT_STEP_TIMEOUT_SECS));
        };
        let invalid = |reason: String| ConfigError::InvalidSetting {
            name: UTK_STEP_TIMEOUT,
            value: value.clone(),
            reason,
        };
        match value.parse::<u64>() {
            Ok(0) => Err(invalid("expected a positive number of seconds".to_string())),
            Ok(secs) => Ok(Duration::from_secs(secs)),
            Err(e) => Err(invalid(e.to_string())),
        }
    }
}

/// How build steps are executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MakeSettings {
    /// Build program
    pub program: String,
    /// Arguments placed before each step's own arguments
    pub leading_args: Vec<String>,
    /// Working directory of every step
    pub build_dir: PathBuf,
    /// Per-step timeout
    pub step_timeout: Duration,
}

impl MakeSettings {
    /// Split a command such as `"make -j4"` into program and leading args.
    ///
    /// A blank command falls back to `make`.
    pub fn from_command(command: &str, build_dir: PathBuf, step_timeout: Duration) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_else(|| DEFAULT_MAKE.to_string());
        Self {
            program,
            leading_args: words.collect(),
            build_dir,
            step_timeout,
        }
    }
}

/// Everything a validation run needs.
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    pub target: Target,
    pub group_file: PathBuf,
    pub test_list: PathBuf,
    pub output: PathBuf,
    pub make: MakeSettings,
    /// Whether standard output is colored
    pub color: bool,
}

impl ValidatorConfig {
    /// Validate the target, then resolve the environment settings.
    ///
    /// Fails before any file is touched. An unsupported target is reported
    /// ahead of any invalid setting.
    pub fn from_cli(
        cli: Cli,
        env: &EnvSettings,
        stdout_is_terminal: bool,
    ) -> Result<Self, ConfigError> {
        let target: Target = cli.target.to_string_lossy().parse()?;
        let step_timeout = env.step_timeout()?;
        let color = resolve_color(env.color_choice()?, stdout_is_terminal, env.no_color);
        let build_dir = env.build_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            target,
            make: MakeSettings::from_command(
                env.make.as_deref().unwrap_or(DEFAULT_MAKE),
                build_dir,
                step_timeout,
            ),
            group_file: cli.test_group_file,
            test_list: cli.test_list,
            output: cli.test_file_output,
            color,
        })
    }
}

/// Decide whether to emit colors on standard output.
pub fn resolve_color(choice: ColorChoice, is_terminal: bool, no_color: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal && !no_color,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
