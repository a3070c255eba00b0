// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! UTK test suite validator
//!
//! Drives the UTK kernel test framework from CI. For every test group in a
//! JSON group file the validator rewrites the framework's test list header,
//! rebuilds the kernel with tests enabled, boots it under QEMU and checks the
//! JSON results the kernel prints between the testing section markers.
//!
//! ```text
//! utk-validator <target> <test_group_file> <test_list> <test_file_output>
//! ```
//!
//! The process exits with one of [`runtime::exit_codes`]; the per-group
//! outcome is written as JSON to `test_file_output`.

pub mod cli;
pub mod config;
pub mod env;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod report;
pub mod runner;
pub mod runtime;
#[doc(hidden)]
pub mod style;
pub mod test_list;
pub mod validate;
