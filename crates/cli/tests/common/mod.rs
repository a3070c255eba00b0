// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for end-to-end validator tests.
//!
//! A [`Workspace`] holds a group file, a test list header and a fake build
//! program in a temporary directory. The fake program answers the three make
//! invocations the validator issues; for the test run it prints a testing
//! section for the suite currently named in the test list. Suites whose name
//! contains `Failing` report one failed test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const TEST_LIST: &str = "\
#ifndef __TEST_FRAMEWORK_TEST_LIST_H_
#define __TEST_FRAMEWORK_TEST_LIST_H_

/*************************************************
 * TESTING ENABLE FLAGS
 ************************************************/
#define TEST_INTERRUPT_ENABLED 0
#define TEST_PANIC_ENABLED 0

/** @brief Current test name */
#define TEST_FRAMEWORK_TEST_NAME \"None\"

#endif
";

const FAKE_MAKE: &str = r##"echo "$*" >> calls.log
case "$*" in
  *TESTS=TRUE*)
    case "$(cat @LIST@)" in *BuildBreak*) exit 2 ;; esac
    ;;
  *qemu-test-mode*)
    name=$(sed -n 's/^#define TEST_FRAMEWORK_TEST_NAME "\(.*\)"$/\1/p' @LIST@)
    status=1
    failures=0
    case "$name" in *Failing*) status=0; failures=1 ;; esac
    echo "SeaBIOS booting"
    echo "#-------- TESTING SECTION START --------#"
    printf '{"version": "0.5", "name": "%s", "number_of_tests": 1, "failures": %s, "success": %s, "test_suite": {"0": {"result": 1, "expected": 1, "status": %s, "type": 2}}}\n' "$name" "$failures" "$status" "$status"
    echo "#-------- TESTING SECTION END --------#"
    ;;
esac
"##;

pub fn validator_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_utk-validator"))
}

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(groups: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("groups.json"), groups).unwrap();
        std::fs::write(dir.path().join("test_list.h"), TEST_LIST).unwrap();
        let script = FAKE_MAKE.replace("@LIST@", &dir.path().join("test_list.h").display().to_string());
        std::fs::write(dir.path().join("fake-make.sh"), script).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn report_path(&self) -> PathBuf {
        self.path("results/report.json")
    }

    /// Positional arguments for `target`.
    pub fn args(&self, target: &str) -> Vec<String> {
        vec![
            target.to_string(),
            self.path("groups.json").display().to_string(),
            self.path("test_list.h").display().to_string(),
            self.report_path().display().to_string(),
        ]
    }

    /// Environment that points the validator at the fake build program.
    pub fn env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("UTK_MAKE", format!("sh {}", self.path("fake-make.sh").display())),
            ("UTK_BUILD_DIR", self.dir.path().display().to_string()),
            ("UTK_STEP_TIMEOUT", "30".to_string()),
        ]
    }

    pub fn command(&self, target: &str) -> Command {
        let mut cmd = Command::new(validator_bin());
        cmd.args(self.args(target)).envs(self.env()).env_remove("UTK_COLOR");
        cmd
    }

    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.path("calls.log"))
    }

    pub fn report(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.report_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
