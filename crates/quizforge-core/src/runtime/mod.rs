// crates/quizforge-core/src/runtime/mod.rs
// ============================================================================
// Module: Quizforge Runtime
// Description: Evaluation pipeline over the canonical question model.
// Purpose: Re-export validators, resolver, rules, registry, normalizer,
//          and the schema engine.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime module holds the evaluation pipeline: pure field validators,
//! the dynamic-arity resolver, cross-field rules, the variant registry, the
//! dispatcher/normalizer, and the [`evaluate::SchemaEngine`] façade that
//! ties them together.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod arity;
pub mod crossfield;
pub mod evaluate;
pub mod field;
pub mod normalize;
pub mod registry;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use arity::ArityResolution;
pub use arity::resolve;
pub use crossfield::CrossRule;
pub use crossfield::run_cross_rules;
pub use evaluate::SchemaEngine;
pub use evaluate::aggregate;
pub use field::FieldConstraint;
pub use field::FieldValue;
pub use field::PatternConstraint;
pub use field::check_field;
pub use normalize::NormalizeError;
pub use normalize::normalize_draft;
pub use normalize::normalize_question;
pub use registry::FieldSpec;
pub use registry::ListSpec;
pub use registry::RegistryError;
pub use registry::UnknownKindError;
pub use registry::VariantRegistry;
pub use registry::VariantSchema;
