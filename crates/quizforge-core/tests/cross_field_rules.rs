// crates/quizforge-core/tests/cross_field_rules.rs
// ============================================================================
// Module: Cross-Field Rule Tests
// Description: Variant-level rules spanning two or more fields.
// Purpose: Validate min/max ordering, correct-in-range, at-least-one-correct,
//          and media-required behavior including fallback values.
// ============================================================================

//! Tests for the cross-field rules.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use quizforge_core::FieldPath;
use quizforge_core::RuleId;
use quizforge_core::SchemaEngine;
use quizforge_core::ValidationReport;
use serde_json::Value;
use serde_json::json;

fn validate(payload: &Value) -> ValidationReport {
    let engine = SchemaEngine::with_defaults().unwrap();
    let question = engine.normalize(payload).unwrap();
    engine.validate(&question)
}

fn paths(report: &ValidationReport) -> Vec<String> {
    report.violations().iter().map(|violation| violation.path.render()).collect()
}

fn rules(report: &ValidationReport) -> Vec<RuleId> {
    report.violations().iter().map(|violation| violation.rule).collect()
}

#[test]
fn valid_range_question_passes() {
    let report = validate(&json!({
        "kind": "range",
        "prompt": "How tall is the tower, in meters?",
        "min": 0,
        "max": 500,
        "correct": 330,
    }));
    assert!(report.valid(), "unexpected violations: {:?}", report.violations());
}

#[test]
fn inverted_range_reports_on_min_max_and_correct() {
    let report = validate(&json!({
        "kind": "range",
        "prompt": "Pick a value",
        "min": 101,
        "max": 100,
        "correct": 50,
    }));
    assert_eq!(report.len(), 3);
    assert_eq!(paths(&report), vec!["min", "max", "correct"]);
    assert_eq!(
        rules(&report),
        vec![RuleId::MinMaxOrder, RuleId::MinMaxOrder, RuleId::CorrectInRange]
    );
}

#[test]
fn correct_on_the_boundary_is_in_range() {
    let report = validate(&json!({
        "kind": "range",
        "prompt": "Pick a value",
        "min": 10,
        "max": 20,
        "correct": 10,
    }));
    assert!(report.valid());
}

#[test]
fn correct_outside_the_range_reports_on_correct_only() {
    let report = validate(&json!({
        "kind": "range",
        "prompt": "Pick a value",
        "min": 10,
        "max": 20,
        "correct": 21,
    }));
    assert_eq!(paths(&report), vec!["correct"]);
    assert_eq!(rules(&report), vec![RuleId::CorrectInRange]);
}

#[test]
fn out_of_domain_min_compounds_with_cross_rules() {
    // Field bounds, ordering, and range failures all collect; min's two
    // violations group adjacently under its path.
    let report = validate(&json!({
        "kind": "range",
        "prompt": "Pick a value",
        "min": 20_000,
        "max": 100,
        "correct": 50,
    }));
    assert_eq!(paths(&report), vec!["min", "min", "max", "correct"]);
    assert_eq!(
        rules(&report),
        vec![
            RuleId::MaxValue,
            RuleId::MinMaxOrder,
            RuleId::MinMaxOrder,
            RuleId::CorrectInRange,
        ]
    );
}

#[test]
fn unparsable_min_falls_back_to_the_domain_floor() {
    // With min treated as the domain floor, ordering and range both hold;
    // only the scalar parse failure surfaces.
    let report = validate(&json!({
        "kind": "range",
        "prompt": "Pick a value",
        "min": "abc",
        "max": 100,
        "correct": 50,
    }));
    assert_eq!(paths(&report), vec!["min"]);
    assert_eq!(rules(&report), vec![RuleId::Numeric]);
}

#[test]
fn choice_list_requires_at_least_one_correct_answer() {
    let report = validate(&json!({
        "kind": "multiChoice",
        "prompt": "Capital of France?",
        "options": [
            {"value": "Paris"},
            {"value": "Lyon"},
        ],
    }));
    assert_eq!(paths(&report), vec!["answers"]);
    assert_eq!(rules(&report), vec![RuleId::AtLeastOneCorrectAnswer]);
}

#[test]
fn flagging_one_option_correct_satisfies_the_rule() {
    let report = validate(&json!({
        "kind": "multiChoice",
        "prompt": "Capital of France?",
        "options": [
            {"value": "Paris", "correct": true},
            {"value": "Lyon"},
        ],
    }));
    assert!(report.valid(), "unexpected violations: {:?}", report.violations());
}

#[test]
fn correct_flag_outside_the_required_prefix_does_not_count() {
    // Only the committed prefix participates; a flag stranded on an empty
    // trailing slot is invisible to the rule.
    let report = validate(&json!({
        "kind": "multiChoice",
        "prompt": "Capital of France?",
        "options": [
            {"value": "Paris"},
            {"value": "Lyon"},
            {"correct": true},
        ],
    }));
    let rule_path = FieldPath::field("answers");
    assert_eq!(report.at_path(&rule_path).count(), 1);
}

#[test]
fn pin_question_requires_media() {
    let report = validate(&json!({
        "kind": "pin",
        "prompt": "Where is the landmark?",
        "x": 40,
        "y": 60,
    }));
    assert_eq!(paths(&report), vec!["media"]);
    assert_eq!(rules(&report), vec![RuleId::MediaRequired]);
}

#[test]
fn whitespace_media_fails_both_url_and_presence() {
    let report = validate(&json!({
        "kind": "pin",
        "prompt": "Where is the landmark?",
        "media": "   ",
        "x": 40,
        "y": 60,
    }));
    assert_eq!(paths(&report), vec!["media", "media"]);
    assert_eq!(rules(&report), vec![RuleId::Url, RuleId::MediaRequired]);
}

#[test]
fn pin_with_media_passes() {
    let report = validate(&json!({
        "kind": "pin",
        "prompt": "Where is the landmark?",
        "media": "https://cdn.example.com/map.png",
        "x": 40,
        "y": 60,
    }));
    assert!(report.valid(), "unexpected violations: {:?}", report.violations());
}

#[test]
fn repeated_validation_yields_identical_reports() {
    let engine = SchemaEngine::with_defaults().unwrap();
    let payload = json!({
        "kind": "range",
        "prompt": "Pick a value",
        "min": 20_000,
        "max": 100,
        "correct": 50,
    });
    let question = engine.normalize(&payload).unwrap();
    let first = engine.validate(&question);
    let second = engine.validate(&question);
    assert_eq!(first, second);
}
