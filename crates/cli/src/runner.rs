// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build and run execution.
//!
//! A group is exercised by cleaning the kernel tree, building it with tests
//! enabled, and booting it in test mode. The console output of the last step
//! holds the testing section.

use std::fmt;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;
use utk_suite::Target;

use crate::config::MakeSettings;

/// One step of a group run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStep {
    Clean,
    Build,
    TestRun,
}

impl BuildStep {
    pub const ALL: [BuildStep; 3] = [BuildStep::Clean, BuildStep::Build, BuildStep::TestRun];

    /// Arguments passed to the build program for this step.
    pub fn args(self, target: Target) -> Vec<String> {
        match self {
            BuildStep::Clean => vec!["clean".to_string()],
            BuildStep::Build => vec![format!("target={}", target), "TESTS=TRUE".to_string()],
            BuildStep::TestRun => vec![format!("target={}", target), "qemu-test-mode".to_string()],
        }
    }

    /// Whether the step's standard output is kept.
    fn captures_output(self) -> bool {
        matches!(self, BuildStep::TestRun)
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::Clean => write!(f, "clean"),
            BuildStep::Build => write!(f, "build"),
            BuildStep::TestRun => write!(f, "test run"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to spawn '{program}' for {step} step: {message}")]
    Spawn {
        program: String,
        step: BuildStep,
        message: String,
    },

    #[error("{step} step timed out after {}s", .timeout.as_secs())]
    Timeout { step: BuildStep, timeout: Duration },

    #[error("{step} step failed (exit code: {code:?})")]
    Failed {
        step: BuildStep,
        code: Option<i32>,
        /// Captured stdout of a failed test run
        console: Option<String>,
    },

    #[error("{step} step I/O error: {message}")]
    Io { step: BuildStep, message: String },
}

impl BuildError {
    /// Console output captured before the failure, if any.
    pub fn console(&self) -> Option<&str> {
        match self {
            BuildError::Failed { console, .. } => console.as_deref(),
            _ => None,
        }
    }
}

/// Builds and runs the tests currently selected in the test list.
#[async_trait]
pub trait BuildRunner: Send + Sync {
    /// Return the console output of the test run.
    async fn run_group(&self, target: Target) -> Result<String, BuildError>;
}

/// Runs the steps through the kernel's make-based build.
#[derive(Clone, Debug)]
pub struct MakeRunner {
    settings: MakeSettings,
}

impl MakeRunner {
    pub fn new(settings: MakeSettings) -> Self {
        Self { settings }
    }

    /// Run a single step, returning its captured stdout (empty when the step
    /// does not capture).
    pub async fn step(&self, step: BuildStep, target: Target) -> Result<Vec<u8>, BuildError> {
        let args = step.args(target);
        debug!(
            program = %self.settings.program,
            args = ?args,
            dir = %self.settings.build_dir.display(),
            "running {} step",
            step
        );

        let stdout = if step.captures_output() {
            Stdio::piped()
        } else {
            Stdio::null()
        };

        let child = Command::new(&self.settings.program)
            .args(&self.settings.leading_args)
            .args(&args)
            .current_dir(&self.settings.build_dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .kill_on_drop(true) // Ensure the build is killed if we give up on it
            .spawn()
            .map_err(|e| BuildError::Spawn {
                program: self.settings.program.clone(),
                step,
                message: e.to_string(),
            })?;

        let timeout = self.settings.step_timeout;
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| BuildError::Io {
                step,
                message: e.to_string(),
            })?,
            Err(_) => return Err(BuildError::Timeout { step, timeout }),
        };

        if !output.status.success() {
            return Err(BuildError::Failed {
                step,
                code: output.status.code(),
                console: step
                    .captures_output()
                    .then(|| String::from_utf8_lossy(&output.stdout).into_owned()),
            });
        }
        Ok(output.stdout)
    }
}

#[async_trait]
impl BuildRunner for MakeRunner {
    async fn run_group(&self, target: Target) -> Result<String, BuildError> {
        let mut captured = Vec::new();
        for step in BuildStep::ALL {
            captured = self.step(step, target).await?;
        }
        Ok(String::from_utf8_lossy(&captured).into_owned())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
