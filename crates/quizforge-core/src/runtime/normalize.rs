// crates/quizforge-core/src/runtime/normalize.rs
// ============================================================================
// Module: Quizforge Dispatcher and Normalizer
// Description: Turns untyped wire payloads into typed questions and drafts.
// Purpose: Select the variant by discriminant and coerce scalars, keeping
//          structural errors disjoint from validation outcomes.
// Dependencies: crate::core, crate::runtime::registry, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The normalizer is the only constructor of [`Question`] values. It assumes
//! nothing about the wire beyond "a JSON object with a `kind` discriminant"
//! (`type` is accepted as an input alias; serialization always emits
//! `kind`). Coercion is scalar-only: numeric strings become numbers,
//! `"true"`/`"false"` become booleans, and everything else keeps its
//! unparsed shape for the field validators to report. Fields are never
//! silently dropped or invented; an undeclared field is a structural error.
//!
//! ## Error Classes
//! Structural problems (payload not a map, missing or unknown discriminant,
//! undeclared field, malformed container) are fatal [`NormalizeError`]s and
//! never appear in a validation report. Missing declared fields normalize to
//! their empty state and surface through validation, so a half-filled
//! authoring draft always normalizes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::limits::SlotBounds;
use crate::core::question::BoolField;
use crate::core::question::MultiChoiceQuestion;
use crate::core::question::NumericField;
use crate::core::question::PinQuestion;
use crate::core::question::PuzzleQuestion;
use crate::core::question::Question;
use crate::core::question::QuestionBase;
use crate::core::question::QuestionKind;
use crate::core::question::QuizDraft;
use crate::core::question::RangeQuestion;
use crate::core::question::TrueFalseQuestion;
use crate::core::question::TypeAnswerQuestion;
use crate::core::slots::ChoiceSlot;
use crate::core::slots::SlotList;
use crate::core::slots::TextSlot;
use crate::runtime::registry::VariantRegistry;
use crate::runtime::registry::VariantSchema;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Structural normalization failure, disjoint from validation outcomes.
///
/// # Invariants
/// - Raised only for payloads the schema cannot interpret at all; content
///   mistakes surface as validation outcomes instead.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The payload was not a JSON object.
    #[error("payload must be a JSON object")]
    NotAnObject,
    /// The payload carried no `kind` (or `type`) discriminant.
    #[error("payload is missing the `kind` discriminant")]
    MissingKind,
    /// The discriminant tag is outside the closed variant set.
    #[error("unknown question kind `{tag}`")]
    UnknownKind {
        /// The unrecognized tag.
        tag: String,
    },
    /// A field not declared by the selected variant was present.
    #[error("unexpected field `{field}`")]
    UnexpectedField {
        /// The undeclared field name.
        field: String,
    },
    /// A field held a container or other shape the schema cannot interpret.
    #[error("field `{field}` has an unsupported shape")]
    InvalidShape {
        /// The offending field (slot paths use bracket form).
        field: String,
    },
    /// A list field carried more entries than its fixed capacity.
    #[error("field `{field}` exceeds its capacity of {capacity}")]
    TooManyEntries {
        /// The list field name.
        field: String,
        /// The fixed slot capacity.
        capacity: usize,
    },
    /// A draft entry failed to normalize.
    #[error("question {index}: {source}")]
    QuestionEntry {
        /// Zero-based index of the failing question.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<NormalizeError>,
    },
}

// ============================================================================
// SECTION: Question Normalization
// ============================================================================

/// Normalizes a wire payload into a typed question.
///
/// # Errors
///
/// Returns [`NormalizeError`] when the payload is structurally
/// uninterpretable; authoring mistakes normalize successfully and surface
/// through validation instead.
pub fn normalize_question(
    registry: &VariantRegistry,
    payload: &Value,
) -> Result<Question, NormalizeError> {
    let map = payload.as_object().ok_or(NormalizeError::NotAnObject)?;
    let tag = discriminant(map)?;
    let schema =
        registry.lookup(tag).map_err(|error| NormalizeError::UnknownKind { tag: error.tag })?;
    reject_undeclared(map, schema)?;

    let base = normalize_base(map)?;
    match schema.kind {
        QuestionKind::MultiChoice => {
            let bounds = list_bounds(schema);
            Ok(Question::MultiChoice(MultiChoiceQuestion {
                base,
                options: choice_list(map, "options", bounds)?,
                multi_select: bool_field(map, "multiSelect")?,
            }))
        }
        QuestionKind::TrueFalse => Ok(Question::TrueFalse(TrueFalseQuestion {
            base,
            answer: bool_field(map, "answer")?,
        })),
        QuestionKind::Range => Ok(Question::Range(RangeQuestion {
            base,
            min: number_field(map, "min")?,
            max: number_field(map, "max")?,
            correct: number_field(map, "correct")?,
        })),
        QuestionKind::TypeAnswer => {
            let bounds = list_bounds(schema);
            Ok(Question::TypeAnswer(TypeAnswerQuestion {
                base,
                answers: text_list(map, "answers", bounds)?,
            }))
        }
        QuestionKind::Pin => Ok(Question::Pin(PinQuestion {
            base,
            x: number_field(map, "x")?,
            y: number_field(map, "y")?,
        })),
        QuestionKind::Puzzle => {
            let bounds = list_bounds(schema);
            Ok(Question::Puzzle(PuzzleQuestion {
                base,
                values: text_list(map, "values", bounds)?,
            }))
        }
    }
}

/// Normalizes a wire payload into a quiz draft.
///
/// # Errors
///
/// Returns [`NormalizeError`] when the draft container or any question entry
/// is structurally uninterpretable; entry errors carry the question index.
pub fn normalize_draft(
    registry: &VariantRegistry,
    payload: &Value,
) -> Result<QuizDraft, NormalizeError> {
    let map = payload.as_object().ok_or(NormalizeError::NotAnObject)?;
    for key in map.keys() {
        if key != "title" && key != "questions" {
            return Err(NormalizeError::UnexpectedField { field: key.clone() });
        }
    }

    let title = text_field(map, "title")?;
    let questions = match map.get("questions") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => {
            let mut questions = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                let question =
                    normalize_question(registry, entry).map_err(|source| {
                        NormalizeError::QuestionEntry {
                            index,
                            source: Box::new(source),
                        }
                    })?;
                questions.push(question);
            }
            questions
        }
        Some(_) => {
            return Err(NormalizeError::InvalidShape {
                field: "questions".to_owned(),
            });
        }
    };

    Ok(QuizDraft { title, questions })
}

// ============================================================================
// SECTION: Discriminant Handling
// ============================================================================

/// Extracts the discriminant tag, preferring `kind` over its `type` alias.
fn discriminant(map: &Map<String, Value>) -> Result<&str, NormalizeError> {
    let value = map.get("kind").or_else(|| map.get("type")).ok_or(NormalizeError::MissingKind)?;
    value.as_str().ok_or_else(|| NormalizeError::InvalidShape {
        field: "kind".to_owned(),
    })
}

/// Rejects any field the selected variant does not declare.
fn reject_undeclared(
    map: &Map<String, Value>,
    schema: &VariantSchema,
) -> Result<(), NormalizeError> {
    for key in map.keys() {
        if key == "kind" || key == "type" || schema.declares(key) {
            continue;
        }
        return Err(NormalizeError::UnexpectedField { field: key.clone() });
    }
    Ok(())
}

/// Returns the list bounds of a variant that declares a list field.
///
/// Variants without a list never reach this helper; the empty default keeps
/// the path panic-free regardless.
fn list_bounds(schema: &VariantSchema) -> SlotBounds {
    schema.list.as_ref().map_or(SlotBounds::new(0, 0), |list| list.bounds)
}

// ============================================================================
// SECTION: Scalar Coercion
// ============================================================================

/// Normalizes the common fields shared by every variant.
fn normalize_base(map: &Map<String, Value>) -> Result<QuestionBase, NormalizeError> {
    Ok(QuestionBase {
        prompt: text_field(map, "prompt")?,
        media: text_field(map, "media")?,
        duration_seconds: number_field(map, "durationSeconds")?,
        points: number_field(map, "points")?,
    })
}

/// Coerces a scalar wire value into text. Numbers and booleans render to
/// their canonical string form; containers are structural errors.
fn coerce_text(field: &str, value: &Value) -> Result<Option<String>, NormalizeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err(NormalizeError::InvalidShape {
            field: field.to_owned(),
        }),
    }
}

/// Coerces a scalar wire value into a numeric field. Numeric strings parse
/// to numbers; anything else present keeps its unparsed shape.
fn coerce_number(field: &str, value: &Value) -> Result<NumericField, NormalizeError> {
    match value {
        Value::Null => Ok(NumericField::Missing),
        Value::Number(number) => {
            Ok(number.as_f64().filter(|parsed| parsed.is_finite()).map_or_else(
                || NumericField::Unparsed(number.to_string()),
                NumericField::Value,
            ))
        }
        Value::String(text) => {
            Ok(text.trim().parse::<f64>().ok().filter(|parsed| parsed.is_finite()).map_or_else(
                || NumericField::Unparsed(text.clone()),
                NumericField::Value,
            ))
        }
        Value::Bool(flag) => Ok(NumericField::Unparsed(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err(NormalizeError::InvalidShape {
            field: field.to_owned(),
        }),
    }
}

/// Coerces a scalar wire value into a boolean field. The strings `"true"`
/// and `"false"` parse to booleans; anything else present keeps its
/// unparsed shape.
fn coerce_bool(field: &str, value: &Value) -> Result<BoolField, NormalizeError> {
    match value {
        Value::Null => Ok(BoolField::Missing),
        Value::Bool(flag) => Ok(BoolField::Value(*flag)),
        Value::String(text) => Ok(match text.trim() {
            "true" => BoolField::Value(true),
            "false" => BoolField::Value(false),
            _ => BoolField::Unparsed(text.clone()),
        }),
        Value::Number(number) => Ok(BoolField::Unparsed(number.to_string())),
        Value::Array(_) | Value::Object(_) => Err(NormalizeError::InvalidShape {
            field: field.to_owned(),
        }),
    }
}

/// Reads an optional text field from the payload map.
fn text_field(map: &Map<String, Value>, field: &str) -> Result<Option<String>, NormalizeError> {
    map.get(field).map_or(Ok(None), |value| coerce_text(field, value))
}

/// Reads an optional numeric field from the payload map.
fn number_field(map: &Map<String, Value>, field: &str) -> Result<NumericField, NormalizeError> {
    map.get(field).map_or(Ok(NumericField::Missing), |value| coerce_number(field, value))
}

/// Reads an optional boolean field from the payload map.
fn bool_field(map: &Map<String, Value>, field: &str) -> Result<BoolField, NormalizeError> {
    map.get(field).map_or(Ok(BoolField::Missing), |value| coerce_bool(field, value))
}

// ============================================================================
// SECTION: List Coercion
// ============================================================================

/// Reads the raw entries of a list field, enforcing the capacity cap.
fn list_entries<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    bounds: SlotBounds,
) -> Result<&'a [Value], NormalizeError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(entries)) => {
            if entries.len() > bounds.max_slots {
                return Err(NormalizeError::TooManyEntries {
                    field: field.to_owned(),
                    capacity: bounds.max_slots,
                });
            }
            Ok(entries)
        }
        Some(_) => Err(NormalizeError::InvalidShape {
            field: field.to_owned(),
        }),
    }
}

/// Normalizes a plain text list (`answers`, `values`).
fn text_list(
    map: &Map<String, Value>,
    field: &str,
    bounds: SlotBounds,
) -> Result<SlotList<TextSlot>, NormalizeError> {
    let entries = list_entries(map, field, bounds)?;
    let mut slots = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let slot_field = format!("{field}[{index}]");
        slots.push(TextSlot {
            value: coerce_text(&slot_field, entry)?,
        });
    }
    Ok(SlotList::from_slots(slots, bounds))
}

/// Normalizes an option list with correctness flags (`options`).
fn choice_list(
    map: &Map<String, Value>,
    field: &str,
    bounds: SlotBounds,
) -> Result<SlotList<ChoiceSlot>, NormalizeError> {
    let entries = list_entries(map, field, bounds)?;
    let mut slots = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        slots.push(choice_slot(field, index, entry)?);
    }
    Ok(SlotList::from_slots(slots, bounds))
}

/// Normalizes one option slot from its wire object.
fn choice_slot(field: &str, index: usize, entry: &Value) -> Result<ChoiceSlot, NormalizeError> {
    match entry {
        Value::Null => Ok(ChoiceSlot::default()),
        Value::Object(slot_map) => {
            for key in slot_map.keys() {
                if key != "value" && key != "correct" {
                    return Err(NormalizeError::UnexpectedField {
                        field: format!("{field}[{index}].{key}"),
                    });
                }
            }
            let value_field = format!("{field}[{index}].value");
            let value = slot_map
                .get("value")
                .map_or(Ok(None), |value| coerce_text(&value_field, value))?;
            let correct = match slot_map.get("correct") {
                None | Some(Value::Null) => false,
                Some(Value::Bool(flag)) => *flag,
                Some(Value::String(text)) => match text.trim() {
                    "true" => true,
                    "false" => false,
                    _ => {
                        return Err(NormalizeError::InvalidShape {
                            field: format!("{field}[{index}].correct"),
                        });
                    }
                },
                Some(_) => {
                    return Err(NormalizeError::InvalidShape {
                        field: format!("{field}[{index}].correct"),
                    });
                }
            };
            Ok(ChoiceSlot { value, correct })
        }
        _ => Err(NormalizeError::InvalidShape {
            field: format!("{field}[{index}]"),
        }),
    }
}
