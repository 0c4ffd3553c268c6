// crates/quizforge-config/src/settings.rs
// ============================================================================
// Module: Quizforge Engine Settings
// Description: Limit-table and catalog overrides with strict validation.
// Purpose: Load embedder configuration from TOML and hand the engine an
//          already-validated settings bundle.
// Dependencies: quizforge-core, serde, toml
// ============================================================================

//! ## Overview
//! [`EngineSettings`] bundles the schema limit table and the per-locale
//! message catalogs. Settings resolve from an explicit path, the
//! `QUIZFORGE_CONFIG` environment variable, or compiled-in defaults, in that
//! order. Every override is validated against its documented bounds before
//! the bundle is handed out; the core engine never reads files itself.
//!
//! ## Invariants
//! - Validation is fail-closed: any out-of-bounds override aborts loading.
//! - The English catalog is always present; other locales merge their
//!   overrides over the English defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use quizforge_core::ListLimits;
use quizforge_core::MessageCatalog;
use quizforge_core::RuleId;
use quizforge_core::SchemaEngine;
use quizforge_core::SchemaLimits;
use serde::Deserialize;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "QUIZFORGE_CONFIG";

/// Maximum settings file size in bytes (1 MiB).
pub const MAX_CONFIG_BYTES: u64 = 1024 * 1024;

/// Locales a catalog section may name.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ca"];

/// Upper bound on any configured slot capacity.
const MAX_SLOT_CAPACITY: usize = 12;

/// Upper bound on any configured text length.
const MAX_TEXT_CHARS: usize = 10_000;

/// Upper bound on the configured question count maximum.
const MAX_QUESTIONS: usize = 1_000;

/// Shared fallback catalog for locale lookups.
static ENGLISH_CATALOG: MessageCatalog = MessageCatalog::english();

// ============================================================================
// SECTION: Raw File Shape
// ============================================================================

/// The TOML file shape before validation.
///
/// # Invariants
/// - Unknown sections, fields, and rule identifiers are parse errors.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct RawSettings {
    /// Limit-table overrides; omitted tables keep their defaults.
    limits: SchemaLimits,
    /// Per-locale message template overrides keyed by rule identifier.
    catalogs: BTreeMap<String, BTreeMap<RuleId, String>>,
}

// ============================================================================
// SECTION: Engine Settings
// ============================================================================

/// Validated settings bundle: limits plus per-locale catalogs.
///
/// # Invariants
/// - Always validated before construction completes; embedders never see a
///   partially valid bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// The schema limit table the engine is built from.
    pub limits: SchemaLimits,
    /// Per-locale catalogs; `en` is always present.
    catalogs: BTreeMap<String, MessageCatalog>,
}

impl EngineSettings {
    /// Returns the compiled-in default settings.
    #[must_use]
    pub fn defaults() -> Self {
        let mut catalogs = BTreeMap::new();
        catalogs.insert("en".to_owned(), MessageCatalog::english());
        Self {
            limits: SchemaLimits::default(),
            catalogs,
        }
    }

    /// Loads settings from `path`, the `QUIZFORGE_CONFIG` environment
    /// variable, or defaults, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the
    /// size cap, fails to parse, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path.map(Path::to_path_buf).or_else(resolve_env_path);
        match resolved {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::defaults()),
        }
    }

    /// Loads settings from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the
    /// size cap, fails to parse, or fails validation.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: MAX_CONFIG_BYTES,
            });
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings = toml::from_str(text).map_err(|source| ConfigError::Parse {
            source: Box::new(source),
        })?;

        let mut catalogs = BTreeMap::new();
        catalogs.insert("en".to_owned(), MessageCatalog::english());
        for (locale, overrides) in raw.catalogs {
            if !SUPPORTED_LOCALES.contains(&locale.as_str()) {
                return Err(ConfigError::UnknownLocale { locale });
            }
            catalogs.insert(locale, MessageCatalog::with_overrides(overrides));
        }

        let settings = Self {
            limits: raw.limits,
            catalogs,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates every limit against its documented bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first violated bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_limits(&self.limits)
    }

    /// Returns the catalog for a locale, falling back to English.
    #[must_use]
    pub fn catalog(&self, locale: &str) -> &MessageCatalog {
        self.catalogs
            .get(locale)
            .or_else(|| self.catalogs.get("en"))
            .unwrap_or(&ENGLISH_CATALOG)
    }

    /// Returns the configured locales in deterministic order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// Builds a [`SchemaEngine`] for a locale from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Engine`] when the registry fails to build.
    pub fn engine(&self, locale: &str) -> Result<SchemaEngine, ConfigError> {
        SchemaEngine::new(self.limits.clone(), self.catalog(locale).clone())
            .map_err(|source| ConfigError::Engine { source })
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Resolves the settings path from the environment, ignoring empty values.
fn resolve_env_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()).map(PathBuf::from)
}

// ============================================================================
// SECTION: Limit Validation
// ============================================================================

/// Validates the full limit table, bounds on bounds included.
fn validate_limits(limits: &SchemaLimits) -> Result<(), ConfigError> {
    validate_text_bounds("prompt", limits.prompt.min_chars, limits.prompt.max_chars)?;
    validate_text_bounds("title", limits.title.min_chars, limits.title.max_chars)?;

    let counts = limits.question_count;
    if counts.min_questions == 0 {
        return Err(ConfigError::invalid("question_count.min_questions must be greater than zero"));
    }
    if counts.min_questions > counts.max_questions {
        return Err(ConfigError::invalid(
            "question_count.min_questions must not exceed question_count.max_questions",
        ));
    }
    if counts.max_questions > MAX_QUESTIONS {
        return Err(ConfigError::invalid(format!(
            "question_count.max_questions must not exceed {MAX_QUESTIONS}"
        )));
    }

    validate_value_set("choice.duration_seconds", &limits.choice.duration_seconds, false)?;
    validate_value_set("choice.points", &limits.choice.points, true)?;

    validate_domain("range_domain", limits.range_domain.min, limits.range_domain.max)?;
    validate_domain("pin_domain", limits.pin_domain.min, limits.pin_domain.max)?;

    validate_list("multi_choice", &limits.multi_choice)?;
    validate_list("type_answer", &limits.type_answer)?;
    validate_list("puzzle", &limits.puzzle)?;

    Ok(())
}

/// Validates one text bound pair.
fn validate_text_bounds(name: &str, min_chars: usize, max_chars: usize) -> Result<(), ConfigError> {
    if min_chars == 0 {
        return Err(ConfigError::invalid(format!("{name}.min_chars must be greater than zero")));
    }
    if min_chars > max_chars {
        return Err(ConfigError::invalid(format!(
            "{name}.min_chars must not exceed {name}.max_chars"
        )));
    }
    if max_chars > MAX_TEXT_CHARS {
        return Err(ConfigError::invalid(format!(
            "{name}.max_chars must not exceed {MAX_TEXT_CHARS}"
        )));
    }
    Ok(())
}

/// Validates one numeric domain.
fn validate_domain(name: &str, min: f64, max: f64) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::invalid(format!("{name} endpoints must be finite")));
    }
    if min > max {
        return Err(ConfigError::invalid(format!("{name}.min must not exceed {name}.max")));
    }
    Ok(())
}

/// Validates one duration/points value set.
fn validate_value_set(name: &str, values: &[f64], allow_zero: bool) -> Result<(), ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::invalid(format!("{name} must not be empty")));
    }
    for value in values {
        if !value.is_finite() {
            return Err(ConfigError::invalid(format!("{name} entries must be finite")));
        }
        if *value < 0.0 || (!allow_zero && *value == 0.0) {
            return Err(ConfigError::invalid(format!("{name} entries must be positive")));
        }
    }
    Ok(())
}

/// Validates one list limit table.
fn validate_list(name: &str, list: &ListLimits) -> Result<(), ConfigError> {
    if list.slots.min_slots == 0 {
        return Err(ConfigError::invalid(format!("{name}.slots.min_slots must be greater than zero")));
    }
    if list.slots.min_slots > list.slots.max_slots {
        return Err(ConfigError::invalid(format!(
            "{name}.slots.min_slots must not exceed {name}.slots.max_slots"
        )));
    }
    if list.slots.max_slots > MAX_SLOT_CAPACITY {
        return Err(ConfigError::invalid(format!(
            "{name}.slots.max_slots must not exceed {MAX_SLOT_CAPACITY}"
        )));
    }
    validate_text_bounds(&format!("{name}.value"), list.value.min_chars, list.value.max_chars)
}
