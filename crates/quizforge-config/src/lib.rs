// crates/quizforge-config/src/lib.rs
// ============================================================================
// Module: Quizforge Config
// Description: Embedder-facing settings loader for the schema engine.
// Purpose: Resolve, parse, and strictly validate limit and catalog overrides.
// Dependencies: quizforge-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Quizforge Config turns an optional TOML file into a validated
//! [`EngineSettings`] bundle: the schema limit table plus per-locale message
//! catalogs. Resolution order is explicit path, then the `QUIZFORGE_CONFIG`
//! environment variable, then compiled-in defaults. Loading is fail-closed:
//! unknown sections, unknown locales, oversized files, and limits outside
//! their documented bounds all abort with a [`ConfigError`]. The core engine
//! never reads files itself; embedders hand it the finished bundle.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod error;
mod settings;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::ConfigError;
pub use settings::CONFIG_ENV_VAR;
pub use settings::EngineSettings;
pub use settings::MAX_CONFIG_BYTES;
pub use settings::SUPPORTED_LOCALES;
