// crates/quizforge-core/src/core/limits.rs
// ============================================================================
// Module: Quizforge Schema Limits
// Description: Scalar constraint tables for every question kind.
// Purpose: Supply lengths, numeric domains, value sets, and slot bounds as
//          immutable configuration to the validation engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! All numeric domains, text length bounds, slot-list capacities, and
//! duration/points value sets live in [`SchemaLimits`]. The engine treats the
//! table as immutable input; embedders may override it through
//! `quizforge-config` or construct it directly. Compiled-in defaults match
//! the hosted platform.
//!
//! ## Invariants
//! - Limits are plain data; validating that an override is itself sane is
//!   the configuration layer's job, not the engine's.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Scalar Bounds
// ============================================================================

/// Inclusive character-count bounds for a text field.
///
/// # Invariants
/// - `min_chars <= max_chars` (enforced by the configuration layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextBounds {
    /// Minimum number of characters (inclusive).
    pub min_chars: usize,
    /// Maximum number of characters (inclusive).
    pub max_chars: usize,
}

impl TextBounds {
    /// Creates text bounds from inclusive character counts.
    #[must_use]
    pub const fn new(min_chars: usize, max_chars: usize) -> Self {
        Self { min_chars, max_chars }
    }
}

/// Inclusive numeric domain for a numeric field.
///
/// # Invariants
/// - `min <= max` and both finite (enforced by the configuration layer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumericDomain {
    /// Domain minimum (inclusive).
    pub min: f64,
    /// Domain maximum (inclusive).
    pub max: f64,
}

impl NumericDomain {
    /// Creates a numeric domain from inclusive endpoints.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true when `value` lies within the domain.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive bounds on a slot list's required prefix.
///
/// # Invariants
/// - `min_slots <= max_slots` (enforced by the configuration layer).
/// - `max_slots` is the fixed editing capacity of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotBounds {
    /// Minimum required prefix length.
    pub min_slots: usize,
    /// Fixed slot capacity and maximum required prefix length.
    pub max_slots: usize,
}

impl SlotBounds {
    /// Creates slot bounds from a minimum prefix and a fixed capacity.
    #[must_use]
    pub const fn new(min_slots: usize, max_slots: usize) -> Self {
        Self { min_slots, max_slots }
    }
}

/// Inclusive bounds on the number of questions in a draft.
///
/// # Invariants
/// - `min_questions <= max_questions` (enforced by the configuration layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountBounds {
    /// Minimum number of questions (inclusive).
    pub min_questions: usize,
    /// Maximum number of questions (inclusive).
    pub max_questions: usize,
}

/// Allowed value sets for the common duration and points fields.
///
/// # Invariants
/// - Sets are non-empty, finite, and ordered for presentation (enforced by
///   the configuration layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceSets {
    /// Allowed question durations, in seconds.
    pub duration_seconds: Vec<f64>,
    /// Allowed point awards.
    pub points: Vec<f64>,
}

/// Limits for one dynamic-arity list field.
///
/// # Invariants
/// - `value` bounds apply to each filled slot independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListLimits {
    /// Required-prefix bounds and capacity.
    pub slots: SlotBounds,
    /// Character bounds for each slot value.
    pub value: TextBounds,
}

// ============================================================================
// SECTION: Schema Limits
// ============================================================================

/// Complete scalar constraint table for the question schema.
///
/// # Invariants
/// - Treated as immutable once handed to the engine; the engine builds its
///   variant registry from it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaLimits {
    /// Bounds for the question prompt.
    #[serde(default = "default_prompt")]
    pub prompt: TextBounds,
    /// Bounds for the quiz draft title.
    #[serde(default = "default_title")]
    pub title: TextBounds,
    /// Bounds on the number of questions in a draft.
    #[serde(default = "default_question_count")]
    pub question_count: CountBounds,
    /// Allowed duration and points value sets.
    #[serde(default = "default_choice_sets")]
    pub choice: ChoiceSets,
    /// Numeric domain for `Range` min/max/correct.
    #[serde(default = "default_range_domain")]
    pub range_domain: NumericDomain,
    /// Numeric domain for `Pin` x/y percent coordinates.
    #[serde(default = "default_pin_domain")]
    pub pin_domain: NumericDomain,
    /// Limits for the `MultiChoice` option list.
    #[serde(default = "default_multi_choice")]
    pub multi_choice: ListLimits,
    /// Limits for the `TypeAnswer` accepted-answer list.
    #[serde(default = "default_type_answer")]
    pub type_answer: ListLimits,
    /// Limits for the `Puzzle` ordered-value list.
    #[serde(default = "default_puzzle")]
    pub puzzle: ListLimits,
}

/// Default prompt bounds (1..=120 characters).
const fn default_prompt() -> TextBounds {
    TextBounds::new(1, 120)
}

/// Default title bounds (1..=95 characters).
const fn default_title() -> TextBounds {
    TextBounds::new(1, 95)
}

/// Default question count bounds (1..=100 questions).
const fn default_question_count() -> CountBounds {
    CountBounds {
        min_questions: 1,
        max_questions: 100,
    }
}

/// Default duration and points value sets.
fn default_choice_sets() -> ChoiceSets {
    ChoiceSets {
        duration_seconds: vec![5.0, 10.0, 20.0, 30.0, 45.0, 60.0, 90.0, 120.0, 180.0, 240.0],
        points: vec![0.0, 500.0, 1000.0, 1500.0, 2000.0],
    }
}

/// Default `Range` numeric domain ([-10000, 10000]).
const fn default_range_domain() -> NumericDomain {
    NumericDomain::new(-10_000.0, 10_000.0)
}

/// Default `Pin` percent-coordinate domain ([0, 100]).
const fn default_pin_domain() -> NumericDomain {
    NumericDomain::new(0.0, 100.0)
}

/// Default `MultiChoice` list limits (2..=6 slots, 1..=120 chars).
const fn default_multi_choice() -> ListLimits {
    ListLimits {
        slots: SlotBounds::new(2, 6),
        value: TextBounds::new(1, 120),
    }
}

/// Default `TypeAnswer` list limits (1..=4 slots, 1..=20 chars).
const fn default_type_answer() -> ListLimits {
    ListLimits {
        slots: SlotBounds::new(1, 4),
        value: TextBounds::new(1, 20),
    }
}

/// Default `Puzzle` list limits (2..=6 slots, 1..=60 chars).
const fn default_puzzle() -> ListLimits {
    ListLimits {
        slots: SlotBounds::new(2, 6),
        value: TextBounds::new(1, 60),
    }
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            title: default_title(),
            question_count: default_question_count(),
            choice: default_choice_sets(),
            range_domain: default_range_domain(),
            pin_domain: default_pin_domain(),
            multi_choice: default_multi_choice(),
            type_answer: default_type_answer(),
            puzzle: default_puzzle(),
        }
    }
}
