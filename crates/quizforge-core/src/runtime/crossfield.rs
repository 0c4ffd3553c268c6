// crates/quizforge-core/src/runtime/crossfield.rs
// ============================================================================
// Module: Quizforge Cross-Field Rules
// Description: Rules spanning two or more fields of the same variant.
// Purpose: Evaluate variant-level invariants over resolved field values.
// Dependencies: crate::core, crate::runtime::registry
// ============================================================================

//! ## Overview
//! Cross-field rules run after the per-field validators and are independent
//! of them: a field that already failed its own scalar check still
//! participates here. When a numeric field is missing or unparsable, rules
//! use the field's declared domain minimum as its value, so an out-of-domain
//! `min` can simultaneously produce a bounds failure on `min`, an ordering
//! failure on `min` and `max`, and a range failure on `correct`.
//!
//! ## Invariants
//! - Rules never short-circuit; every rule runs and every outcome is
//!   collected.
//! - `minMaxOrder` reports symmetrically on both `min` and `max`;
//!   `correctInRange` reports on `correct` only.
//! - `atLeastOneCorrectAnswer` attaches to the list's own rule path, never
//!   to an individual option.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::MessageCatalog;
use crate::core::limits::SchemaLimits;
use crate::core::path::FieldPath;
use crate::core::question::Question;
use crate::core::rule::RuleId;
use crate::core::rule::Violation;
use crate::runtime::registry::VariantSchema;

// ============================================================================
// SECTION: Rule Set
// ============================================================================

/// Closed set of cross-field rules, declared per variant by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossRule {
    /// At least one committed option must be flagged correct.
    AtLeastOneCorrect,
    /// The range minimum must not exceed the maximum.
    MinMaxOrder,
    /// The correct value must lie within `[min, max]`.
    CorrectInRange,
    /// The variant requires media to be present.
    MediaRequired,
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Runs a variant's declared cross-field rules in declaration order.
pub fn run_cross_rules(
    schema: &VariantSchema,
    question: &Question,
    limits: &SchemaLimits,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    for rule in &schema.rules {
        match rule {
            CrossRule::AtLeastOneCorrect => at_least_one_correct(schema, question, catalog, out),
            CrossRule::MinMaxOrder => min_max_order(question, limits, catalog, out),
            CrossRule::CorrectInRange => correct_in_range(question, limits, catalog, out),
            CrossRule::MediaRequired => media_required(question, catalog, out),
        }
    }
}

/// Fails on the list's rule path unless a committed slot is flagged correct.
fn at_least_one_correct(
    schema: &VariantSchema,
    question: &Question,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let Question::MultiChoice(payload) = question else {
        return;
    };
    let Some(list) = &schema.list else {
        return;
    };
    let resolution = payload.options.commit();
    if !resolution.committed.iter().any(|slot| slot.correct) {
        out.push(Violation::new(
            FieldPath::field(list.rule_path),
            RuleId::AtLeastOneCorrectAnswer,
            catalog.render(RuleId::AtLeastOneCorrectAnswer, &[]),
        ));
    }
}

/// Fails symmetrically on `min` and `max` when the minimum exceeds the
/// maximum.
fn min_max_order(
    question: &Question,
    limits: &SchemaLimits,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let Question::Range(payload) = question else {
        return;
    };
    let floor = limits.range_domain.min;
    let min = payload.min.value_or(floor);
    let max = payload.max.value_or(floor);
    if min > max {
        let message = catalog.render(RuleId::MinMaxOrder, &[]);
        out.push(Violation::new(FieldPath::field("min"), RuleId::MinMaxOrder, message.clone()));
        out.push(Violation::new(FieldPath::field("max"), RuleId::MinMaxOrder, message));
    }
}

/// Fails on `correct` only, when it falls outside `[min, max]`.
fn correct_in_range(
    question: &Question,
    limits: &SchemaLimits,
    catalog: &MessageCatalog,
    out: &mut Vec<Violation>,
) {
    let Question::Range(payload) = question else {
        return;
    };
    let floor = limits.range_domain.min;
    let min = payload.min.value_or(floor);
    let max = payload.max.value_or(floor);
    let correct = payload.correct.value_or(floor);
    if correct < min || correct > max {
        out.push(Violation::new(
            FieldPath::field("correct"),
            RuleId::CorrectInRange,
            catalog.render(RuleId::CorrectInRange, &[]),
        ));
    }
}

/// Fails on `media` when the variant requires media and none is present.
fn media_required(question: &Question, catalog: &MessageCatalog, out: &mut Vec<Violation>) {
    let present = question.base().media.as_deref().is_some_and(|media| !media.trim().is_empty());
    if !present {
        out.push(Violation::new(
            FieldPath::field("media"),
            RuleId::MediaRequired,
            catalog.render(RuleId::MediaRequired, &[]),
        ));
    }
}
