// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::style::strip_ansi;
use serde_json::json;

fn suite(failures: u32, items: serde_json::Value) -> TestSuite {
    let count = items.as_object().map(|m| m.len()).unwrap_or(0) as u32;
    serde_json::from_value(json!({
        "version": "0.5",
        "name": "Panic Suite",
        "number_of_tests": count,
        "failures": failures,
        "success": count - failures,
        "test_suite": items,
    }))
    .unwrap()
}

fn render(suite: &TestSuite, painter: Painter) -> (String, Verdict) {
    let mut buf = Vec::new();
    let verdict = validate_suite(&mut buf, &painter, suite).unwrap();
    (String::from_utf8(buf).unwrap(), verdict)
}

#[test]
fn test_passing_suite_table() {
    let suite = suite(
        0,
        json!({
            "1": { "result": 255, "expected": 255, "status": 1, "type": 1 },
            "0": { "result": 0, "expected": 0, "status": 1, "type": 10 },
        }),
    );
    let (text, verdict) = render(&suite, Painter::plain());

    assert!(verdict.passed());
    let expected = "\
#--------------------------------------------------#
| Version: 0.5                                     |
| Testname: Panic Suite                            |
#--------------------------------------------------#
| N# of tests    | N# of success  | N# of failures |
|--------------------------------------------------#
|              2 |              2 |              0 |
#--------------------------------------------------#
===> Test 0
    > Outcome: PASS | Expected: 0x0 -- Result: 0x0 | Type: RCODE
===> Test 1
    > Outcome: PASS | Expected: 0xFF -- Result: 0xFF | Type: UBYTE

==== Panic Suite RESULT: PASS ====
";
    assert!(text.starts_with(expected), "output:\n{}", text);
}

#[test]
fn test_failing_item_marks_suite_failed() {
    let suite = suite(
        1,
        json!({
            "7": { "result": -1, "expected": 4096, "status": 0, "type": 6 },
        }),
    );
    let (text, verdict) = render(&suite, Painter::plain());

    assert!(!verdict.passed());
    assert_eq!(verdict.failing, vec![7]);
    assert!(text.contains(
        "    > Outcome: FAIL | Expected: 0x1000 -- Result: 0xFFFFFFFFFFFFFFFF | Type: DWORD"
    ));
    assert!(text.contains("==== Panic Suite RESULT: FAIL ===="));
}

#[test]
fn test_undeclared_failure_still_fails() {
    let mut suite = suite(
        0,
        json!({
            "3": { "result": 1, "expected": 2, "status": 0, "type": 4 },
        }),
    );
    suite.success = 1;
    let (text, verdict) = render(&suite, Painter::plain());

    assert!(!verdict.passed());
    assert!(text.contains("RESULT: FAIL"));
}

#[test]
fn test_colored_output_strips_to_plain() {
    let suite = suite(
        0,
        json!({
            "2": { "result": 3, "expected": 3, "status": 1, "type": 8 },
        }),
    );
    let (plain, _) = render(&suite, Painter::plain());
    let (colored, _) = render(&suite, Painter::new(true));

    assert_ne!(plain, colored);
    assert!(colored.contains("\x1b[92m\x1b[1mPASS\x1b[0m"));
    assert_eq!(strip_ansi(&colored), plain);
}
