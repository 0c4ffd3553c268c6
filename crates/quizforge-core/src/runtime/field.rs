// crates/quizforge-core/src/runtime/field.rs
// ============================================================================
// Module: Quizforge Field Validators
// Description: Pure per-field predicates over single scalar values.
// Purpose: Evaluate one field against its ordered constraint list.
// Dependencies: crate::core, regex, url
// ============================================================================

//! ## Overview
//! Field validators are pure predicates: one field value, one constraint,
//! pass or fail. They never touch sibling fields. Constraints are declared
//! in data-driven tables owned by the variant registry and evaluated in
//! declaration order; all failures are collected, never short-circuited.
//!
//! ## Edge Cases
//! - A missing value on an optional field always passes.
//! - A missing value on a required field fails `required` and nothing else.
//! - An empty string is present, not missing: with `minLength = 1` it fails
//!   `minLength`, never `required`.
//! - A present-but-unparsable numeric fails `numeric` and skips its bounds
//!   checks; there is no number to compare.

// ============================================================================
// SECTION: Imports
// ============================================================================

use regex::Regex;
use url::Url;

use crate::core::catalog::MessageCatalog;
use crate::core::limits::NumericDomain;
use crate::core::limits::TextBounds;
use crate::core::path::FieldPath;
use crate::core::question::BoolField;
use crate::core::question::NumericField;
use crate::core::rule::RuleId;
use crate::core::rule::Violation;

// ============================================================================
// SECTION: Field Views
// ============================================================================

/// A borrowed view of one field value, shaped for validation.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// A text field; `None` means missing.
    Text(Option<&'a str>),
    /// A numeric field, possibly unparsed.
    Number(&'a NumericField),
    /// A boolean field, possibly unparsed.
    Toggle(&'a BoolField),
}

impl FieldValue<'_> {
    /// Returns true when the field was absent on the wire.
    #[must_use]
    const fn is_missing(&self) -> bool {
        match self {
            Self::Text(value) => value.is_none(),
            Self::Number(value) => value.is_missing(),
            Self::Toggle(value) => value.is_missing(),
        }
    }
}

// ============================================================================
// SECTION: Constraints
// ============================================================================

/// A pattern constraint holding its pre-compiled matcher.
///
/// # Invariants
/// - Compilation happens once at registry build time, never per validation.
#[derive(Debug, Clone)]
pub struct PatternConstraint {
    /// The pattern source, kept for diagnostics.
    source: String,
    /// The compiled matcher.
    regex: Regex,
}

impl PatternConstraint {
    /// Compiles a pattern constraint.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] when the pattern does not compile.
    pub fn compile(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true when `text` matches the pattern.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// One declarative constraint over a single field.
///
/// # Invariants
/// - Constraints apply to the field view shapes they declare; mismatched
///   shapes pass (the registry never declares a mismatch).
#[derive(Debug, Clone)]
pub enum FieldConstraint {
    /// The field must be present.
    Required,
    /// Character-count bounds for a text field.
    Length(TextBounds),
    /// Pattern match for a text field.
    Pattern(PatternConstraint),
    /// The field must parse as a finite number.
    Numeric,
    /// Numeric domain bounds; skipped when the value is unparsable.
    Bounds(NumericDomain),
    /// Membership in a fixed numeric value set; reports `oneOf`.
    OneOf(Vec<f64>),
    /// The field must parse as a boolean; violations report `oneOf`.
    Boolean,
    /// The field must be a well-formed absolute http(s) URL.
    Url,
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Formats a numeric limit for messages, dropping a trailing `.0`.
#[must_use]
pub fn format_limit(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Fractionless values below 2^53 convert exactly."
        )]
        let whole = value as i64;
        whole.to_string()
    } else {
        value.to_string()
    }
}

/// Evaluates one field against its ordered constraint list.
///
/// Violations are appended to `out` in constraint-declaration order.
pub fn check_field(
    value: FieldValue<'_>,
    constraints: &[FieldConstraint],
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    if value.is_missing() {
        let required = constraints.iter().any(|constraint| matches!(constraint, FieldConstraint::Required));
        if required {
            out.push(Violation::new(
                path.clone(),
                RuleId::Required,
                catalog.render(RuleId::Required, &[]),
            ));
        }
        return;
    }

    for constraint in constraints {
        check_constraint(value, constraint, path, catalog, out);
    }
}

/// Evaluates a single constraint against a present field value.
fn check_constraint(
    value: FieldValue<'_>,
    constraint: &FieldConstraint,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    match constraint {
        FieldConstraint::Required => {}
        FieldConstraint::Length(bounds) => check_length(value, *bounds, path, catalog, out),
        FieldConstraint::Pattern(pattern) => check_pattern(value, pattern, path, catalog, out),
        FieldConstraint::Numeric => check_numeric(value, path, catalog, out),
        FieldConstraint::Bounds(domain) => check_bounds(value, *domain, path, catalog, out),
        FieldConstraint::OneOf(allowed) => check_one_of(value, allowed, path, catalog, out),
        FieldConstraint::Boolean => check_boolean(value, path, catalog, out),
        FieldConstraint::Url => check_url(value, path, catalog, out),
    }
}

/// Checks character-count bounds on a text value.
fn check_length(
    value: FieldValue<'_>,
    bounds: TextBounds,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Text(Some(text)) = value else {
        return;
    };
    let length = text.chars().count();
    if length < bounds.min_chars {
        out.push(Violation::new(
            path.clone(),
            RuleId::MinLength,
            catalog.render(RuleId::MinLength, &[("min", bounds.min_chars.to_string())]),
        ));
    }
    if length > bounds.max_chars {
        out.push(Violation::new(
            path.clone(),
            RuleId::MaxLength,
            catalog.render(RuleId::MaxLength, &[("max", bounds.max_chars.to_string())]),
        ));
    }
}

/// Checks a pattern match on a text value.
fn check_pattern(
    value: FieldValue<'_>,
    pattern: &PatternConstraint,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Text(Some(text)) = value else {
        return;
    };
    if !pattern.is_match(text) {
        out.push(Violation::new(
            path.clone(),
            RuleId::Pattern,
            catalog.render(RuleId::Pattern, &[]),
        ));
    }
}

/// Checks that a numeric field parsed as a finite number.
fn check_numeric(
    value: FieldValue<'_>,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Number(field) = value else {
        return;
    };
    if matches!(field, NumericField::Unparsed(_)) {
        out.push(Violation::new(
            path.clone(),
            RuleId::Numeric,
            catalog.render(RuleId::Numeric, &[]),
        ));
    }
}

/// Checks numeric domain bounds on a parsed numeric value.
fn check_bounds(
    value: FieldValue<'_>,
    domain: NumericDomain,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Number(field) = value else {
        return;
    };
    let Some(parsed) = field.value() else {
        return;
    };
    if parsed < domain.min {
        out.push(Violation::new(
            path.clone(),
            RuleId::MinValue,
            catalog.render(RuleId::MinValue, &[("min", format_limit(domain.min))]),
        ));
    }
    if parsed > domain.max {
        out.push(Violation::new(
            path.clone(),
            RuleId::MaxValue,
            catalog.render(RuleId::MaxValue, &[("max", format_limit(domain.max))]),
        ));
    }
}

/// Checks membership in a fixed numeric value set.
fn check_one_of(
    value: FieldValue<'_>,
    allowed: &[f64],
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Number(field) = value else {
        return;
    };
    let member = field
        .value()
        .is_some_and(|parsed| allowed.iter().any(|candidate| candidate.total_cmp(&parsed).is_eq()));
    if !member {
        out.push(Violation::new(
            path.clone(),
            RuleId::OneOf,
            catalog.render(RuleId::OneOf, &[]),
        ));
    }
}

/// Checks that a boolean field parsed as a boolean.
fn check_boolean(
    value: FieldValue<'_>,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Toggle(field) = value else {
        return;
    };
    if matches!(field, BoolField::Unparsed(_)) {
        out.push(Violation::new(
            path.clone(),
            RuleId::OneOf,
            catalog.render(RuleId::OneOf, &[]),
        ));
    }
}

/// Checks that a text value is a well-formed absolute http(s) URL.
fn check_url(
    value: FieldValue<'_>,
    path: &FieldPath,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let FieldValue::Text(Some(text)) = value else {
        return;
    };
    let well_formed = Url::parse(text).is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
    if !well_formed {
        out.push(Violation::new(
            path.clone(),
            RuleId::Url,
            catalog.render(RuleId::Url, &[]),
        ));
    }
}
