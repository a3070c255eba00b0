// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use proptest::prelude::*;

const SECTION: &str = r#"#-------- TESTING SECTION START --------#
{
	"version": "0.5",
	"name": "Interrupt Suite",
	"number_of_tests": 3,
	"failures": 1,
	"success": 2,
	"test_suite": {
		"24": {
			"result": 10,
			"expected": 10,
			"status": 1,
			"type": 7
		},
		"3": {
			"result": -1,
			"expected": 0,
			"status": 0,
			"type": 6
		},
		"2": {
			"result": 255,
			"expected": 255,
			"status": 1,
			"type": 10
		}
	}
}
#-------- TESTING SECTION END --------#
"#;

fn wrapped(prefix: &str, suffix: &str) -> String {
    format!("{}{}{}", prefix, SECTION, suffix)
}

#[test]
fn test_parse_section_with_boot_noise() {
    let output = wrapped(
        "SeaBIOS (version 1.16)\nBooting from ROM...\n[INIT] Kickstart\n",
        "QEMU: Terminated\n",
    );
    let suite = TestSuite::parse(&output).unwrap();

    assert_eq!(suite.version, "0.5");
    assert_eq!(suite.name, "Interrupt Suite");
    assert_eq!(suite.number_of_tests, 3);
    assert_eq!(suite.tests.len(), 3);
}

#[test]
fn test_items_ordered_by_numeric_id() {
    let suite = TestSuite::parse(SECTION).unwrap();
    let ids: Vec<u32> = suite.tests.keys().copied().collect();
    assert_eq!(ids, vec![2, 3, 24]);
}

#[test]
fn test_negative_values_keep_bit_pattern() {
    let suite = TestSuite::parse(SECTION).unwrap();
    let item = &suite.tests[&3];
    assert_eq!(item.result, u64::MAX);
    assert_eq!(item.type_tag, TypeTag::DWord);
    assert!(!item.passed());
}

#[test]
fn test_verdict_reports_failing_ids() {
    let suite = TestSuite::parse(SECTION).unwrap();
    let verdict = suite.verdict();
    assert_eq!(verdict.failing, vec![3]);
    assert_eq!(verdict.declared_failures, 1);
    assert!(!verdict.passed());
    assert_eq!(verdict.failure_count(), 1);
}

#[test]
fn test_declared_failures_fail_verdict_even_without_failing_items() {
    let verdict = Verdict {
        failing: vec![],
        declared_failures: 2,
    };
    assert!(!verdict.passed());
    assert_eq!(verdict.failure_count(), 2);
}

#[test]
fn test_consistent_counters_have_no_issues() {
    let suite = TestSuite::parse(SECTION).unwrap();
    assert!(suite.inconsistencies().is_empty());
}

#[test]
fn test_inconsistent_counters_reported() {
    let mut suite = TestSuite::parse(SECTION).unwrap();
    suite.number_of_tests = 5;
    suite.failures = 0;
    let issues = suite.inconsistencies();
    assert_eq!(issues.len(), 2);
    assert!(issues[0].contains("number_of_tests is 5"));
    assert!(issues[1].contains("failures is 0"));
}

#[test]
fn test_missing_start_marker() {
    let result = TestSuite::parse("kernel panic\n");
    assert!(matches!(result, Err(SuiteError::MissingSection)));
}

#[test]
fn test_missing_end_marker_takes_rest_of_output() {
    let output = SECTION.replace(SECTION_END, "");
    let suite = TestSuite::parse(&output).unwrap();
    assert_eq!(suite.tests.len(), 3);
}

#[test]
fn test_truncated_section_is_json_error() {
    let cut = SECTION.find("\"test_suite\"").unwrap();
    let output = format!("{}\n{}\n", &SECTION[..cut], SECTION_END);
    assert!(matches!(TestSuite::parse(&output), Err(SuiteError::Json(_))));
}

#[test]
fn test_crlf_console_output() {
    let output = SECTION.replace('\n', "\r\n");
    let suite = TestSuite::parse(&output).unwrap();
    assert_eq!(suite.name, "Interrupt Suite");
}

#[test]
fn test_only_first_section_is_used() {
    let second = SECTION.replace("Interrupt Suite", "Second Suite");
    let output = format!("{}{}", SECTION, second);
    assert_eq!(TestSuite::parse(&output).unwrap().name, "Interrupt Suite");
}

#[test]
fn test_serialized_ids_are_strings() {
    let suite = TestSuite::parse(SECTION).unwrap();
    let value = serde_json::to_value(&suite).unwrap();
    assert!(value["test_suite"]["24"].is_object());
    assert_eq!(value["test_suite"]["3"]["result"], u64::MAX);
}

proptest! {
    #[test]
    fn prop_noise_outside_markers_is_ignored(
        before in proptest::collection::vec("[a-zA-Z0-9 \\[\\]:.]{0,40}", 0..8),
        after in proptest::collection::vec("[a-zA-Z0-9 \\[\\]:.{}]{0,40}", 0..8),
    ) {
        let mut prefix = before.join("\n");
        if !prefix.is_empty() {
            prefix.push('\n');
        }
        let output = wrapped(&prefix, &after.join("\n"));
        let expected = TestSuite::parse(SECTION).unwrap();
        prop_assert_eq!(TestSuite::parse(&output).unwrap(), expected);
    }
}
