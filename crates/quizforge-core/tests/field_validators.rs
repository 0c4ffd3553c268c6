// crates/quizforge-core/tests/field_validators.rs
// ============================================================================
// Module: Field Validator Tests
// Description: Per-field predicate behavior over single scalar values.
// Purpose: Validate presence, length, pattern, numeric, value-set, and URL
//          checks including the missing/empty distinction.
// ============================================================================

//! Tests for the pure per-field validators.

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

use quizforge_core::BoolField;
use quizforge_core::FieldConstraint;
use quizforge_core::FieldPath;
use quizforge_core::MessageCatalog;
use quizforge_core::NumericDomain;
use quizforge_core::NumericField;
use quizforge_core::PatternConstraint;
use quizforge_core::RuleId;
use quizforge_core::TextBounds;
use quizforge_core::Violation;
use quizforge_core::runtime::field::FieldValue;
use quizforge_core::runtime::field::check_field;
use quizforge_core::runtime::field::format_limit;

fn run(value: FieldValue<'_>, constraints: &[FieldConstraint]) -> Vec<Violation> {
    let catalog = MessageCatalog::english();
    let mut out = Vec::new();
    check_field(value, constraints, &FieldPath::field("field"), &catalog, &mut out);
    out
}

fn rules(violations: &[Violation]) -> Vec<RuleId> {
    violations.iter().map(|violation| violation.rule).collect()
}

#[test]
fn missing_optional_field_passes() {
    let out = run(FieldValue::Text(None), &[FieldConstraint::Length(TextBounds::new(1, 10))]);
    assert!(out.is_empty());
}

#[test]
fn missing_required_field_fails_required_and_nothing_else() {
    let out = run(
        FieldValue::Text(None),
        &[FieldConstraint::Required, FieldConstraint::Length(TextBounds::new(1, 10))],
    );
    assert_eq!(rules(&out), vec![RuleId::Required]);
}

#[test]
fn empty_string_is_present_not_missing() {
    let out = run(
        FieldValue::Text(Some("")),
        &[FieldConstraint::Required, FieldConstraint::Length(TextBounds::new(1, 10))],
    );
    assert_eq!(rules(&out), vec![RuleId::MinLength]);
}

#[test]
fn length_bounds_report_each_side() {
    let bounds = TextBounds::new(3, 5);
    let short = run(FieldValue::Text(Some("ab")), &[FieldConstraint::Length(bounds)]);
    assert_eq!(rules(&short), vec![RuleId::MinLength]);

    let long = run(FieldValue::Text(Some("abcdef")), &[FieldConstraint::Length(bounds)]);
    assert_eq!(rules(&long), vec![RuleId::MaxLength]);

    let fits = run(FieldValue::Text(Some("abcd")), &[FieldConstraint::Length(bounds)]);
    assert!(fits.is_empty());
}

#[test]
fn length_counts_characters_not_bytes() {
    let bounds = TextBounds::new(1, 4);
    let out = run(FieldValue::Text(Some("café")), &[FieldConstraint::Length(bounds)]);
    assert!(out.is_empty());
}

#[test]
fn pattern_rejects_unsupported_characters() {
    let pattern = PatternConstraint::compile(r"^[\p{L}\p{N} ]+$").unwrap();
    let out = run(FieldValue::Text(Some("Par-is!")), &[FieldConstraint::Pattern(pattern.clone())]);
    assert_eq!(rules(&out), vec![RuleId::Pattern]);

    let ok = run(FieldValue::Text(Some("Paris 75")), &[FieldConstraint::Pattern(pattern)]);
    assert!(ok.is_empty());
}

#[test]
fn unparsable_numeric_fails_numeric_and_skips_bounds() {
    let field = NumericField::Unparsed("abc".to_owned());
    let out = run(
        FieldValue::Number(&field),
        &[
            FieldConstraint::Required,
            FieldConstraint::Numeric,
            FieldConstraint::Bounds(NumericDomain::new(0.0, 10.0)),
        ],
    );
    assert_eq!(rules(&out), vec![RuleId::Numeric]);
}

#[test]
fn numeric_bounds_report_each_side() {
    let domain = NumericDomain::new(0.0, 100.0);
    let low = NumericField::Value(-1.0);
    let out = run(FieldValue::Number(&low), &[FieldConstraint::Bounds(domain)]);
    assert_eq!(rules(&out), vec![RuleId::MinValue]);

    let high = NumericField::Value(101.0);
    let out = run(FieldValue::Number(&high), &[FieldConstraint::Bounds(domain)]);
    assert_eq!(rules(&out), vec![RuleId::MaxValue]);

    let edge = NumericField::Value(100.0);
    let out = run(FieldValue::Number(&edge), &[FieldConstraint::Bounds(domain)]);
    assert!(out.is_empty());
}

#[test]
fn one_of_requires_exact_membership() {
    let allowed = vec![5.0, 10.0, 20.0];
    let member = NumericField::Value(10.0);
    let out = run(FieldValue::Number(&member), &[FieldConstraint::OneOf(allowed.clone())]);
    assert!(out.is_empty());

    let outsider = NumericField::Value(11.0);
    let out = run(FieldValue::Number(&outsider), &[FieldConstraint::OneOf(allowed.clone())]);
    assert_eq!(rules(&out), vec![RuleId::OneOf]);

    let unparsed = NumericField::Unparsed("soon".to_owned());
    let out = run(FieldValue::Number(&unparsed), &[FieldConstraint::OneOf(allowed)]);
    assert_eq!(rules(&out), vec![RuleId::OneOf]);
}

#[test]
fn missing_one_of_field_passes_without_required() {
    let out = run(
        FieldValue::Number(&NumericField::Missing),
        &[FieldConstraint::OneOf(vec![5.0, 10.0])],
    );
    assert!(out.is_empty());
}

#[test]
fn unparsable_boolean_reports_one_of() {
    let field = BoolField::Unparsed("maybe".to_owned());
    let out = run(FieldValue::Toggle(&field), &[FieldConstraint::Boolean]);
    assert_eq!(rules(&out), vec![RuleId::OneOf]);

    let parsed = BoolField::Value(false);
    let out = run(FieldValue::Toggle(&parsed), &[FieldConstraint::Boolean]);
    assert!(out.is_empty());
}

#[test]
fn url_accepts_absolute_http_and_https_only() {
    let ok = run(
        FieldValue::Text(Some("https://cdn.example.com/a.png")),
        &[FieldConstraint::Url],
    );
    assert!(ok.is_empty());

    for bad in ["ftp://example.com/a.png", "not a url", "/relative/path", "javascript:alert(1)"] {
        let out = run(FieldValue::Text(Some(bad)), &[FieldConstraint::Url]);
        assert_eq!(rules(&out), vec![RuleId::Url], "expected url failure for {bad}");
    }
}

#[test]
fn violations_collect_in_constraint_declaration_order() {
    let pattern = PatternConstraint::compile(r"^[a-z]+$").unwrap();
    let out = run(
        FieldValue::Text(Some("A")),
        &[
            FieldConstraint::Required,
            FieldConstraint::Length(TextBounds::new(2, 10)),
            FieldConstraint::Pattern(pattern),
        ],
    );
    assert_eq!(rules(&out), vec![RuleId::MinLength, RuleId::Pattern]);
}

#[test]
fn limit_formatting_drops_trailing_zero() {
    assert_eq!(format_limit(100.0), "100");
    assert_eq!(format_limit(-10_000.0), "-10000");
    assert_eq!(format_limit(0.5), "0.5");
}

#[test]
fn messages_render_from_the_catalog_templates() {
    let out = run(
        FieldValue::Text(Some("")),
        &[FieldConstraint::Length(TextBounds::new(1, 10))],
    );
    assert_eq!(out[0].message, "is too short (minimum 1)");
}
