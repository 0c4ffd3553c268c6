// crates/quizforge-config/src/error.rs
// ============================================================================
// Module: Quizforge Config Errors
// Description: Fail-closed error type for settings loading and validation.
// Purpose: Keep every configuration failure fatal and descriptive.
// Dependencies: quizforge-core, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration loading is fail-closed: any I/O problem, parse failure,
//! oversized file, unknown locale, or limit outside its documented bounds
//! aborts with a [`ConfigError`]. The engine never starts on a partially
//! valid configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use quizforge_core::RegistryError;
use thiserror::Error;

// ============================================================================
// SECTION: Config Error
// ============================================================================

/// Settings loading or validation failure.
///
/// # Invariants
/// - Every variant is fatal; there are no recoverable configuration states.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The settings file exceeded the size cap.
    #[error("config file {path} is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        /// The oversized file.
        path: PathBuf,
        /// Actual file size in bytes.
        size: u64,
        /// Maximum permitted size in bytes.
        limit: u64,
    },
    /// The settings text was not valid TOML for the settings schema.
    #[error("failed to parse config: {source}")]
    Parse {
        /// The underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },
    /// A catalog section named a locale outside the supported set.
    #[error("unknown locale `{locale}` in catalog overrides")]
    UnknownLocale {
        /// The unsupported locale label.
        locale: String,
    },
    /// A limit override violated its documented bounds.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// Description of the violated bound.
        message: String,
    },
    /// The validated settings still failed to build an engine.
    #[error("engine build failed: {source}")]
    Engine {
        /// The underlying registry error.
        #[source]
        source: RegistryError,
    },
}

impl ConfigError {
    /// Creates a [`ConfigError::Invalid`] from a bound description.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
