// crates/quizforge-core/src/core/question.rs
// ============================================================================
// Module: Quizforge Question Model
// Description: The closed tagged union of question variants and the draft.
// Purpose: Give every wire payload exactly one fully-typed shape.
// Dependencies: crate::core::{limits, slots}, serde
// ============================================================================

//! ## Overview
//! A [`Question`] is a tagged union: the `kind` discriminant selects exactly
//! one payload shape from a fixed, closed set of variants. A question is a
//! value, not an entity; it is constructed by the normalizer, mutated only
//! through explicit field operations, and re-validated after every mutation.
//! Scalar fields that must be numeric or boolean keep their unparsed wire
//! text when coercion fails, so field validators can report the problem
//! instead of the normalizer silently dropping content.
//!
//! ## Invariants
//! - The variant set is closed; every match over [`QuestionKind`] or
//!   [`Question`] is exhaustive with no fallback branch.
//! - Serialization always emits the `kind` spelling of the discriminant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

use crate::core::slots::ChoiceSlot;
use crate::core::slots::SlotList;
use crate::core::slots::TextSlot;

// ============================================================================
// SECTION: Question Kinds
// ============================================================================

/// Closed set of question kind discriminants.
///
/// # Invariants
/// - Wire tags are camelCase and stable for serialization and contract
///   matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Multiple-choice question with per-option correctness flags.
    MultiChoice,
    /// True/false question.
    TrueFalse,
    /// Numeric range question with min/max/correct.
    Range,
    /// Free-text question with a list of accepted answers.
    TypeAnswer,
    /// Pin-on-media question with percent coordinates.
    Pin,
    /// Ordering question whose committed slot order is the answer.
    Puzzle,
}

impl QuestionKind {
    /// Ordered list of every question kind.
    ///
    /// # Invariants
    /// - Ordering matches declaration order and is stable for registries.
    pub const ALL: &'static [Self] = &[
        Self::MultiChoice,
        Self::TrueFalse,
        Self::Range,
        Self::TypeAnswer,
        Self::Pin,
        Self::Puzzle,
    ];

    /// Returns the stable camelCase wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultiChoice => "multiChoice",
            Self::TrueFalse => "trueFalse",
            Self::Range => "range",
            Self::TypeAnswer => "typeAnswer",
            Self::Pin => "pin",
            Self::Puzzle => "puzzle",
        }
    }

    /// Parses a wire tag into a kind. Unknown tags return `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Scalar Field Wrappers
// ============================================================================

/// A numeric field that preserves unparsable wire text.
///
/// # Invariants
/// - `Value` is always finite; non-finite parses stay `Unparsed`.
/// - Serialization round-trips each state (`Missing` as null, `Unparsed`
///   as the original string, `Value` as a number).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericField {
    /// The field was absent or null on the wire.
    #[default]
    Missing,
    /// The field was present but did not parse as a finite number.
    Unparsed(String),
    /// The parsed numeric value.
    Value(f64),
}

impl NumericField {
    /// Returns the parsed value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Missing | Self::Unparsed(_) => None,
        }
    }

    /// Returns the parsed value, or `fallback` when missing or unparsable.
    ///
    /// Cross-field rules use the declared domain minimum as the fallback so
    /// they always evaluate, even over half-parsed drafts.
    #[must_use]
    pub const fn value_or(&self, fallback: f64) -> f64 {
        match self {
            Self::Value(value) => *value,
            Self::Missing | Self::Unparsed(_) => fallback,
        }
    }

    /// Returns true when the field was absent on the wire.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl Serialize for NumericField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Unparsed(text) => serializer.serialize_str(text),
            Self::Value(value) => serializer.serialize_f64(*value),
        }
    }
}

/// A boolean field that preserves unparsable wire text.
///
/// # Invariants
/// - Serialization round-trips each state (`Missing` as null, `Unparsed`
///   as the original string, `Value` as a boolean).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BoolField {
    /// The field was absent or null on the wire.
    #[default]
    Missing,
    /// The field was present but did not parse as a boolean.
    Unparsed(String),
    /// The parsed boolean value.
    Value(bool),
}

impl BoolField {
    /// Returns the parsed value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<bool> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Missing | Self::Unparsed(_) => None,
        }
    }

    /// Returns true when the field was absent on the wire.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<bool> for BoolField {
    fn from(value: bool) -> Self {
        Self::Value(value)
    }
}

impl Serialize for BoolField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Unparsed(text) => serializer.serialize_str(text),
            Self::Value(value) => serializer.serialize_bool(*value),
        }
    }
}

// ============================================================================
// SECTION: Common Fields
// ============================================================================

/// Fields common to every question variant.
///
/// # Invariants
/// - `prompt` is required by rule; `media` is optional except where a
///   cross-field rule (`Pin`) demands it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBase {
    /// Question prompt text.
    pub prompt: Option<String>,
    /// Optional media URL shown with the question.
    pub media: Option<String>,
    /// Question duration in seconds, from the configured value set.
    pub duration_seconds: NumericField,
    /// Points awarded, from the configured value set.
    pub points: NumericField,
}

// ============================================================================
// SECTION: Variant Payloads
// ============================================================================

/// `MultiChoice` payload: an option list with correctness flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceQuestion {
    /// Common fields.
    #[serde(flatten)]
    pub base: QuestionBase,
    /// Option slots with per-slot correctness flags.
    pub options: SlotList<ChoiceSlot>,
    /// True when more than one option may be selected.
    pub multi_select: BoolField,
}

/// `TrueFalse` payload: a single boolean answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseQuestion {
    /// Common fields.
    #[serde(flatten)]
    pub base: QuestionBase,
    /// The correct answer; required by rule.
    pub answer: BoolField,
}

/// `Range` payload: min/max bounds and the correct value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuestion {
    /// Common fields.
    #[serde(flatten)]
    pub base: QuestionBase,
    /// Lower bound of the accepted range.
    pub min: NumericField,
    /// Upper bound of the accepted range.
    pub max: NumericField,
    /// The correct value; must lie within `[min, max]`.
    pub correct: NumericField,
}

/// `TypeAnswer` payload: a list of accepted answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAnswerQuestion {
    /// Common fields.
    #[serde(flatten)]
    pub base: QuestionBase,
    /// Accepted answer slots.
    pub answers: SlotList<TextSlot>,
}

/// `Pin` payload: percent coordinates into the media.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinQuestion {
    /// Common fields. Media presence is enforced by cross-field rule.
    #[serde(flatten)]
    pub base: QuestionBase,
    /// Horizontal coordinate, percent of media width.
    pub x: NumericField,
    /// Vertical coordinate, percent of media height.
    pub y: NumericField,
}

/// `Puzzle` payload: ordered values whose committed order is the answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleQuestion {
    /// Common fields.
    #[serde(flatten)]
    pub base: QuestionBase,
    /// Ordered value slots.
    pub values: SlotList<TextSlot>,
}

// ============================================================================
// SECTION: Question
// ============================================================================

/// A fully-typed question: exactly one variant, selected by `kind`.
///
/// # Invariants
/// - Never partially one variant and partially another; the payload's field
///   set is exactly the variant's declared fields plus the common fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Question {
    /// Multiple-choice question.
    MultiChoice(MultiChoiceQuestion),
    /// True/false question.
    TrueFalse(TrueFalseQuestion),
    /// Numeric range question.
    Range(RangeQuestion),
    /// Free-text question.
    TypeAnswer(TypeAnswerQuestion),
    /// Pin-on-media question.
    Pin(PinQuestion),
    /// Ordering question.
    Puzzle(PuzzleQuestion),
}

impl Question {
    /// Returns the discriminant of this question.
    #[must_use]
    pub const fn kind(&self) -> QuestionKind {
        match self {
            Self::MultiChoice(_) => QuestionKind::MultiChoice,
            Self::TrueFalse(_) => QuestionKind::TrueFalse,
            Self::Range(_) => QuestionKind::Range,
            Self::TypeAnswer(_) => QuestionKind::TypeAnswer,
            Self::Pin(_) => QuestionKind::Pin,
            Self::Puzzle(_) => QuestionKind::Puzzle,
        }
    }

    /// Returns the common fields of this question.
    #[must_use]
    pub const fn base(&self) -> &QuestionBase {
        match self {
            Self::MultiChoice(question) => &question.base,
            Self::TrueFalse(question) => &question.base,
            Self::Range(question) => &question.base,
            Self::TypeAnswer(question) => &question.base,
            Self::Pin(question) => &question.base,
            Self::Puzzle(question) => &question.base,
        }
    }

    /// Returns the common fields of this question, mutably.
    pub const fn base_mut(&mut self) -> &mut QuestionBase {
        match self {
            Self::MultiChoice(question) => &mut question.base,
            Self::TrueFalse(question) => &mut question.base,
            Self::Range(question) => &mut question.base,
            Self::TypeAnswer(question) => &mut question.base,
            Self::Pin(question) => &mut question.base,
            Self::Puzzle(question) => &mut question.base,
        }
    }
}

// ============================================================================
// SECTION: Quiz Draft
// ============================================================================

/// An in-progress quiz: a title plus an ordered list of questions.
///
/// # Invariants
/// - Draft-level violations use paths `title` and `questions`; per-question
///   violations are prefixed with `questions.N`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    /// Quiz title; required by rule.
    pub title: Option<String>,
    /// Ordered questions.
    pub questions: Vec<Question>,
}
