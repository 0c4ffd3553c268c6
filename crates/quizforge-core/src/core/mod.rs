// crates/quizforge-core/src/core/mod.rs
// ============================================================================
// Module: Quizforge Core Types
// Description: Canonical data model for the question schema engine.
// Purpose: Re-export paths, rules, limits, catalogs, slots, and questions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The core module holds the canonical data model: field paths, rule
//! identifiers and reports, scalar constraint tables, message catalogs,
//! slot lists, and the question tagged union. Evaluation logic lives in
//! [`crate::runtime`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod limits;
pub mod path;
pub mod question;
pub mod rule;
pub mod slots;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use catalog::MessageCatalog;
pub use limits::ChoiceSets;
pub use limits::CountBounds;
pub use limits::ListLimits;
pub use limits::NumericDomain;
pub use limits::SchemaLimits;
pub use limits::SlotBounds;
pub use limits::TextBounds;
pub use path::FieldPath;
pub use path::PathSegment;
pub use question::BoolField;
pub use question::MultiChoiceQuestion;
pub use question::NumericField;
pub use question::PinQuestion;
pub use question::PuzzleQuestion;
pub use question::Question;
pub use question::QuestionBase;
pub use question::QuestionKind;
pub use question::QuizDraft;
pub use question::RangeQuestion;
pub use question::TrueFalseQuestion;
pub use question::TypeAnswerQuestion;
pub use rule::RuleId;
pub use rule::ValidationReport;
pub use rule::Violation;
pub use slots::ChoiceSlot;
pub use slots::Slot;
pub use slots::SlotList;
pub use slots::TextSlot;
