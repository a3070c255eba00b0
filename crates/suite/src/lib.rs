// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test group and test suite model for the UTK test validator.
//!
//! This crate holds the pure data side of validation: the closed sets of
//! build targets and value type tags, the test-group file format, and the
//! testing section the kernel prints once a suite has run.

mod error;
mod group;
mod suite;
mod target;
mod type_tag;

pub use error::SuiteError;
pub use group::{parse_groups, TestGroup};
pub use suite::{extract_section, TestItem, TestSuite, Verdict, SECTION_END, SECTION_START};
pub use target::Target;
pub use type_tag::TypeTag;
