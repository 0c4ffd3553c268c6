// crates/quizforge-core/src/runtime/evaluate.rs
// ============================================================================
// Module: Quizforge Schema Engine
// Description: The evaluation façade and the result aggregator.
// Purpose: Own the limit tables, catalog, and registry; run the full
//          pipeline and merge outcomes into one ordered report.
// Dependencies: crate::core, crate::runtime, serde_json
// ============================================================================

//! ## Overview
//! [`SchemaEngine`] owns the immutable tables built at startup and exposes
//! the whole pipeline: normalize, validate, or both (`check`). Evaluation is
//! synchronous, side-effect free, and retains no reference to caller state,
//! so one engine can be shared behind an `Arc` by arbitrarily many
//! concurrent callers.
//!
//! ## Invariants
//! - Aggregation is deterministic: violations group by path in
//!   first-appearance order with declaration order preserved within a path,
//!   and repeated evaluation of the same value yields identical reports.
//! - Draft validation prefixes per-question paths with `questions.N`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::catalog::MessageCatalog;
use crate::core::limits::SchemaLimits;
use crate::core::path::FieldPath;
use crate::core::question::Question;
use crate::core::question::QuizDraft;
use crate::core::rule::RuleId;
use crate::core::rule::ValidationReport;
use crate::core::rule::Violation;
use crate::core::slots::Slot;
use crate::core::slots::TextSlot;
use crate::runtime::crossfield::run_cross_rules;
use crate::runtime::field::FieldConstraint;
use crate::runtime::field::FieldValue;
use crate::runtime::field::check_field;
use crate::runtime::normalize::NormalizeError;
use crate::runtime::normalize::normalize_draft;
use crate::runtime::normalize::normalize_question;
use crate::runtime::registry::ListSpec;
use crate::runtime::registry::RegistryError;
use crate::runtime::registry::VariantRegistry;

// ============================================================================
// SECTION: Schema Engine
// ============================================================================

/// The question schema validation engine.
///
/// # Invariants
/// - All tables are immutable after construction; the engine is `Send +
///   Sync` by construction.
#[derive(Debug, Clone)]
pub struct SchemaEngine {
    /// Scalar constraint tables.
    limits: SchemaLimits,
    /// Message catalog for the active locale.
    catalog: MessageCatalog,
    /// Closed per-variant schema tables, built once from `limits`.
    registry: VariantRegistry,
}

impl SchemaEngine {
    /// Builds an engine from a limit table and a message catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a declared pattern does not compile.
    pub fn new(limits: SchemaLimits, catalog: MessageCatalog) -> Result<Self, RegistryError> {
        let registry = VariantRegistry::build(&limits)?;
        Ok(Self {
            limits,
            catalog,
            registry,
        })
    }

    /// Builds an engine with compiled-in default limits and the English
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a declared pattern does not compile.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        Self::new(SchemaLimits::default(), MessageCatalog::english())
    }

    /// Returns the engine's limit table.
    #[must_use]
    pub const fn limits(&self) -> &SchemaLimits {
        &self.limits
    }

    /// Returns the engine's message catalog.
    #[must_use]
    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Returns the engine's variant registry.
    #[must_use]
    pub const fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    /// Normalizes a wire payload into a typed question.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] for structurally uninterpretable payloads.
    pub fn normalize(&self, payload: &Value) -> Result<Question, NormalizeError> {
        normalize_question(&self.registry, payload)
    }

    /// Normalizes a wire payload into a quiz draft.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] for structurally uninterpretable payloads.
    pub fn normalize_draft(&self, payload: &Value) -> Result<QuizDraft, NormalizeError> {
        normalize_draft(&self.registry, payload)
    }

    /// Validates a typed question and returns the ordered report.
    #[must_use]
    pub fn validate(&self, question: &Question) -> ValidationReport {
        let schema = self.registry.schema(question.kind());

        let mut field_outcomes = Vec::new();
        for field in &schema.fields {
            if let Some(view) = field_view(question, field.name) {
                check_field(
                    view,
                    &field.constraints,
                    &FieldPath::field(field.name),
                    &self.catalog,
                    &mut field_outcomes,
                );
            }
        }
        if let Some(list) = &schema.list {
            self.check_list(question, list, &mut field_outcomes);
        }

        let mut cross_outcomes = Vec::new();
        run_cross_rules(schema, question, &self.limits, &self.catalog, &mut cross_outcomes);

        aggregate(field_outcomes, cross_outcomes)
    }

    /// Validates a quiz draft: draft-level fields plus every question, with
    /// per-question paths prefixed by `questions.N`.
    #[must_use]
    pub fn validate_draft(&self, draft: &QuizDraft) -> ValidationReport {
        let mut outcomes = Vec::new();

        check_field(
            FieldValue::Text(draft.title.as_deref()),
            &[FieldConstraint::Required, FieldConstraint::Length(self.limits.title)],
            &FieldPath::field("title"),
            &self.catalog,
            &mut outcomes,
        );

        let count = draft.questions.len();
        let bounds = self.limits.question_count;
        if count < bounds.min_questions {
            outcomes.push(Violation::new(
                FieldPath::field("questions"),
                RuleId::MinLength,
                self.catalog
                    .render(RuleId::MinLength, &[("min", bounds.min_questions.to_string())]),
            ));
        }
        if count > bounds.max_questions {
            outcomes.push(Violation::new(
                FieldPath::field("questions"),
                RuleId::MaxLength,
                self.catalog
                    .render(RuleId::MaxLength, &[("max", bounds.max_questions.to_string())]),
            ));
        }

        for (index, question) in draft.questions.iter().enumerate() {
            let prefix = FieldPath::field("questions").item(index);
            for violation in self.validate(question) {
                outcomes.push(Violation {
                    path: violation.path.prefixed(&prefix),
                    rule: violation.rule,
                    message: violation.message,
                });
            }
        }

        aggregate(outcomes, Vec::new())
    }

    /// Normalizes and validates a question payload in one call.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] for structurally uninterpretable payloads.
    pub fn check(&self, payload: &Value) -> Result<(Question, ValidationReport), NormalizeError> {
        let question = self.normalize(payload)?;
        let report = self.validate(&question);
        Ok((question, report))
    }

    /// Normalizes and validates a draft payload in one call.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] for structurally uninterpretable payloads.
    pub fn check_draft(
        &self,
        payload: &Value,
    ) -> Result<(QuizDraft, ValidationReport), NormalizeError> {
        let draft = self.normalize_draft(payload)?;
        let report = self.validate_draft(&draft);
        Ok((draft, report))
    }

    /// Validates the committed slots of a variant's list field.
    fn check_list(&self, question: &Question, list: &ListSpec, out: &mut Vec<Violation>) {
        match question {
            Question::MultiChoice(payload) => {
                let resolution = payload.options.commit();
                for (index, slot) in resolution.committed.iter().enumerate() {
                    let path = FieldPath::field(list.field).slot(index).child("value");
                    let value = filled_text(slot.value.as_deref(), slot.is_filled());
                    check_field(
                        FieldValue::Text(value),
                        &list.value_constraints,
                        &path,
                        &self.catalog,
                        out,
                    );
                }
            }
            Question::TypeAnswer(payload) => {
                self.check_text_slots(&payload.answers.commit().committed, list, out);
            }
            Question::Puzzle(payload) => {
                self.check_text_slots(&payload.values.commit().committed, list, out);
            }
            Question::TrueFalse(_) | Question::Range(_) | Question::Pin(_) => {}
        }
    }

    /// Validates committed plain-text slots (`answers`, `values`).
    fn check_text_slots(
        &self,
        committed: &[TextSlot],
        list: &ListSpec,
        out: &mut Vec<Violation>,
    ) {
        for (index, slot) in committed.iter().enumerate() {
            let path = FieldPath::field(list.field).slot(index);
            let value = filled_text(slot.value.as_deref(), slot.is_filled());
            check_field(FieldValue::Text(value), &list.value_constraints, &path, &self.catalog, out);
        }
    }
}

/// Maps an unfilled slot to a missing value so `required` fires for
/// whitespace-only entries inside the required prefix.
const fn filled_text(value: Option<&str>, filled: bool) -> Option<&str> {
    if filled { value } else { None }
}

// ============================================================================
// SECTION: Field Views
// ============================================================================

/// Resolves a registry field name to its value within a typed question.
fn field_view<'a>(question: &'a Question, name: &str) -> Option<FieldValue<'a>> {
    let base = question.base();
    match name {
        "prompt" => Some(FieldValue::Text(base.prompt.as_deref())),
        "media" => Some(FieldValue::Text(base.media.as_deref())),
        "durationSeconds" => Some(FieldValue::Number(&base.duration_seconds)),
        "points" => Some(FieldValue::Number(&base.points)),
        _ => variant_field_view(question, name),
    }
}

/// Resolves a variant-specific field name to its value.
fn variant_field_view<'a>(question: &'a Question, name: &str) -> Option<FieldValue<'a>> {
    match question {
        Question::MultiChoice(payload) => {
            (name == "multiSelect").then_some(FieldValue::Toggle(&payload.multi_select))
        }
        Question::TrueFalse(payload) => {
            (name == "answer").then_some(FieldValue::Toggle(&payload.answer))
        }
        Question::Range(payload) => match name {
            "min" => Some(FieldValue::Number(&payload.min)),
            "max" => Some(FieldValue::Number(&payload.max)),
            "correct" => Some(FieldValue::Number(&payload.correct)),
            _ => None,
        },
        Question::Pin(payload) => match name {
            "x" => Some(FieldValue::Number(&payload.x)),
            "y" => Some(FieldValue::Number(&payload.y)),
            _ => None,
        },
        Question::TypeAnswer(_) | Question::Puzzle(_) => None,
    }
}

// ============================================================================
// SECTION: Result Aggregation
// ============================================================================

/// Merges field and cross-field outcomes into one ordered report.
///
/// Violations group by path in first-appearance order; within a path,
/// declaration order is preserved. The merge is a pure function of its
/// inputs, so repeated calls are byte-identical.
#[must_use]
pub fn aggregate(
    field_outcomes: Vec<Violation>,
    cross_outcomes: Vec<Violation>,
) -> ValidationReport {
    let mut combined = field_outcomes;
    combined.extend(cross_outcomes);

    let mut order: Vec<&FieldPath> = Vec::new();
    for violation in &combined {
        if !order.contains(&&violation.path) {
            order.push(&violation.path);
        }
    }

    let mut grouped = Vec::with_capacity(combined.len());
    for path in order {
        for violation in &combined {
            if &violation.path == path {
                grouped.push(violation.clone());
            }
        }
    }
    ValidationReport::new(grouped)
}
