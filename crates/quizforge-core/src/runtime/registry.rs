// crates/quizforge-core/src/runtime/registry.rs
// ============================================================================
// Module: Quizforge Variant Registry
// Description: Per-kind field tables, arity bounds, and cross-field rules.
// Purpose: Map each discriminant to its variant schema, built once.
// Dependencies: crate::core, crate::runtime::{crossfield, field}, thiserror
// ============================================================================

//! ## Overview
//! The registry is the data-driven replacement for decorator-attached
//! validation: each variant declares an ordered field table, optional list
//! limits, and an ordered cross-field rule list. The registry is closed and
//! built exactly once from the injected [`SchemaLimits`]; unknown tags are a
//! hard error for the dispatcher, never a soft validation outcome.
//!
//! ## Invariants
//! - One schema per [`QuestionKind`]; lookup by kind is total.
//! - Pattern constraints compile at build time, never per validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::limits::SchemaLimits;
use crate::core::limits::SlotBounds;
use crate::core::question::QuestionKind;
use crate::runtime::crossfield::CrossRule;
use crate::runtime::field::FieldConstraint;
use crate::runtime::field::PatternConstraint;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default pattern for typed answers: letters, digits, and spaces.
const TYPE_ANSWER_PATTERN: &str = r"^[\p{L}\p{N} ]+$";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry construction failure.
///
/// # Invariants
/// - Only raised at engine build time, never during validation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A declared pattern constraint did not compile.
    #[error("pattern for `{field}` did not compile: {source}")]
    InvalidPattern {
        /// The field the pattern belongs to.
        field: &'static str,
        /// The compile error.
        #[source]
        source: regex::Error,
    },
}

/// An unrecognized discriminant tag.
///
/// # Invariants
/// - Distinct from validation outcomes so callers can reject the request
///   outright.
#[derive(Debug, Error)]
#[error("unknown question kind `{tag}`")]
pub struct UnknownKindError {
    /// The tag that failed to parse.
    pub tag: String,
}

// ============================================================================
// SECTION: Schema Tables
// ============================================================================

/// One scalar field and its ordered constraint list.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Wire field name; also the path segment for violations.
    pub name: &'static str,
    /// Ordered constraints, evaluated in declaration order.
    pub constraints: Vec<FieldConstraint>,
}

/// The dynamic-arity list field of a variant, if it has one.
#[derive(Debug, Clone)]
pub struct ListSpec {
    /// Wire field name; per-slot violation paths start here.
    pub field: &'static str,
    /// Path segment used by list-level rules (the API's historical name).
    pub rule_path: &'static str,
    /// Required-prefix bounds and capacity.
    pub bounds: SlotBounds,
    /// Ordered constraints applied to each required slot's value.
    pub value_constraints: Vec<FieldConstraint>,
    /// True when slots carry correctness flags.
    pub flagged: bool,
}

/// The complete schema for one question variant.
#[derive(Debug, Clone)]
pub struct VariantSchema {
    /// The variant discriminant.
    pub kind: QuestionKind,
    /// Ordered scalar fields (common first, then variant-specific).
    pub fields: Vec<FieldSpec>,
    /// The variant's dynamic-arity list, if any.
    pub list: Option<ListSpec>,
    /// Ordered cross-field rules.
    pub rules: Vec<CrossRule>,
}

impl VariantSchema {
    /// Returns true when `name` is a declared scalar or list field.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
            || self.list.as_ref().is_some_and(|list| list.field == name)
    }
}

// ============================================================================
// SECTION: Variant Registry
// ============================================================================

/// Closed map from question kind to variant schema.
///
/// # Invariants
/// - Built exactly once per engine; immutable afterwards.
/// - Lookup by kind is total and panic-free.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    /// Schema for `MultiChoice`.
    multi_choice: VariantSchema,
    /// Schema for `TrueFalse`.
    true_false: VariantSchema,
    /// Schema for `Range`.
    range: VariantSchema,
    /// Schema for `TypeAnswer`.
    type_answer: VariantSchema,
    /// Schema for `Pin`.
    pin: VariantSchema,
    /// Schema for `Puzzle`.
    puzzle: VariantSchema,
}

impl VariantRegistry {
    /// Builds the registry from a limit table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a declared pattern does not compile.
    pub fn build(limits: &SchemaLimits) -> Result<Self, RegistryError> {
        let answer_pattern =
            PatternConstraint::compile(TYPE_ANSWER_PATTERN).map_err(|source| {
                RegistryError::InvalidPattern {
                    field: "answers",
                    source,
                }
            })?;

        let multi_choice = VariantSchema {
            kind: QuestionKind::MultiChoice,
            fields: with_common(
                limits,
                vec![FieldSpec {
                    name: "multiSelect",
                    constraints: vec![FieldConstraint::Boolean],
                }],
            ),
            list: Some(ListSpec {
                field: "options",
                rule_path: "answers",
                bounds: limits.multi_choice.slots,
                value_constraints: vec![
                    FieldConstraint::Required,
                    FieldConstraint::Length(limits.multi_choice.value),
                ],
                flagged: true,
            }),
            rules: vec![CrossRule::AtLeastOneCorrect],
        };

        let true_false = VariantSchema {
            kind: QuestionKind::TrueFalse,
            fields: with_common(
                limits,
                vec![FieldSpec {
                    name: "answer",
                    constraints: vec![FieldConstraint::Required, FieldConstraint::Boolean],
                }],
            ),
            list: None,
            rules: Vec::new(),
        };

        let range = VariantSchema {
            kind: QuestionKind::Range,
            fields: with_common(
                limits,
                vec![
                    range_field("min", limits),
                    range_field("max", limits),
                    range_field("correct", limits),
                ],
            ),
            list: None,
            rules: vec![CrossRule::MinMaxOrder, CrossRule::CorrectInRange],
        };

        let type_answer = VariantSchema {
            kind: QuestionKind::TypeAnswer,
            fields: with_common(limits, Vec::new()),
            list: Some(ListSpec {
                field: "answers",
                rule_path: "answers",
                bounds: limits.type_answer.slots,
                value_constraints: vec![
                    FieldConstraint::Required,
                    FieldConstraint::Length(limits.type_answer.value),
                    FieldConstraint::Pattern(answer_pattern),
                ],
                flagged: false,
            }),
            rules: Vec::new(),
        };

        let pin = VariantSchema {
            kind: QuestionKind::Pin,
            fields: with_common(
                limits,
                vec![pin_field("x", limits), pin_field("y", limits)],
            ),
            list: None,
            rules: vec![CrossRule::MediaRequired],
        };

        let puzzle = VariantSchema {
            kind: QuestionKind::Puzzle,
            fields: with_common(limits, Vec::new()),
            list: Some(ListSpec {
                field: "values",
                rule_path: "values",
                bounds: limits.puzzle.slots,
                value_constraints: vec![
                    FieldConstraint::Required,
                    FieldConstraint::Length(limits.puzzle.value),
                ],
                flagged: false,
            }),
            rules: Vec::new(),
        };

        Ok(Self {
            multi_choice,
            true_false,
            range,
            type_answer,
            pin,
            puzzle,
        })
    }

    /// Returns the schema for a question kind.
    #[must_use]
    pub const fn schema(&self, kind: QuestionKind) -> &VariantSchema {
        match kind {
            QuestionKind::MultiChoice => &self.multi_choice,
            QuestionKind::TrueFalse => &self.true_false,
            QuestionKind::Range => &self.range,
            QuestionKind::TypeAnswer => &self.type_answer,
            QuestionKind::Pin => &self.pin,
            QuestionKind::Puzzle => &self.puzzle,
        }
    }

    /// Resolves a wire tag to its variant schema.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownKindError`] for tags outside the closed set.
    pub fn lookup(&self, tag: &str) -> Result<&VariantSchema, UnknownKindError> {
        QuestionKind::parse(tag).map(|kind| self.schema(kind)).ok_or_else(|| UnknownKindError {
            tag: tag.to_owned(),
        })
    }
}

// ============================================================================
// SECTION: Table Builders
// ============================================================================

/// Prepends the common field table to a variant's own fields.
fn with_common(limits: &SchemaLimits, variant_fields: Vec<FieldSpec>) -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec {
            name: "prompt",
            constraints: vec![FieldConstraint::Required, FieldConstraint::Length(limits.prompt)],
        },
        FieldSpec {
            name: "media",
            constraints: vec![FieldConstraint::Url],
        },
        FieldSpec {
            name: "durationSeconds",
            constraints: vec![FieldConstraint::OneOf(limits.choice.duration_seconds.clone())],
        },
        FieldSpec {
            name: "points",
            constraints: vec![FieldConstraint::OneOf(limits.choice.points.clone())],
        },
    ];
    fields.extend(variant_fields);
    fields
}

/// Builds a required numeric field bounded to the `Range` domain.
fn range_field(name: &'static str, limits: &SchemaLimits) -> FieldSpec {
    FieldSpec {
        name,
        constraints: vec![
            FieldConstraint::Required,
            FieldConstraint::Numeric,
            FieldConstraint::Bounds(limits.range_domain),
        ],
    }
}

/// Builds a required numeric field bounded to the `Pin` coordinate domain.
fn pin_field(name: &'static str, limits: &SchemaLimits) -> FieldSpec {
    FieldSpec {
        name,
        constraints: vec![
            FieldConstraint::Required,
            FieldConstraint::Numeric,
            FieldConstraint::Bounds(limits.pin_domain),
        ],
    }
}
