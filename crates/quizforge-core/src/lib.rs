// crates/quizforge-core/src/lib.rs
// ============================================================================
// Module: Quizforge Core
// Description: Question schema validation engine for quiz authoring and APIs.
// Purpose: Provide one typed variant model and one rule pipeline shared by
//          the authoring UI and the request-validation layer.
// Dependencies: regex, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Quizforge Core takes an untyped wire-format question payload, determines
//! which of the closed set of question kinds it represents, builds a
//! fully-typed variant, and validates it against per-field and cross-field
//! rules, including list fields whose required length is derived from which
//! trailing slots are filled. The same engine serves form state in the
//! authoring UI and request bodies on the API, so the two surfaces can never
//! drift.
//!
//! ## Error Classes
//! Structural problems ([`NormalizeError`]) are fatal to a normalize call
//! and never mix with validation outcomes; validation outcomes
//! ([`ValidationReport`]) are data, fully collected with no
//! short-circuiting. The caller decides what "invalid" means for its
//! context.
//!
//! ## Concurrency
//! Evaluation is synchronous, pure, and free of shared mutable state; a
//! [`SchemaEngine`] owns only immutable tables after startup and may be
//! shared behind an `Arc` by arbitrarily many concurrent callers.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use core::BoolField;
pub use core::ChoiceSets;
pub use core::ChoiceSlot;
pub use core::CountBounds;
pub use core::FieldPath;
pub use core::ListLimits;
pub use core::MessageCatalog;
pub use core::MultiChoiceQuestion;
pub use core::NumericDomain;
pub use core::NumericField;
pub use core::PathSegment;
pub use core::PinQuestion;
pub use core::PuzzleQuestion;
pub use core::Question;
pub use core::QuestionBase;
pub use core::QuestionKind;
pub use core::QuizDraft;
pub use core::RangeQuestion;
pub use core::RuleId;
pub use core::SchemaLimits;
pub use core::Slot;
pub use core::SlotBounds;
pub use core::SlotList;
pub use core::TextBounds;
pub use core::TextSlot;
pub use core::TrueFalseQuestion;
pub use core::TypeAnswerQuestion;
pub use core::ValidationReport;
pub use core::Violation;
pub use runtime::ArityResolution;
pub use runtime::CrossRule;
pub use runtime::FieldConstraint;
pub use runtime::FieldValue;
pub use runtime::NormalizeError;
pub use runtime::PatternConstraint;
pub use runtime::RegistryError;
pub use runtime::SchemaEngine;
pub use runtime::UnknownKindError;
pub use runtime::VariantRegistry;
pub use runtime::VariantSchema;
