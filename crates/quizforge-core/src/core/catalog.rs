// crates/quizforge-core/src/core/catalog.rs
// ============================================================================
// Module: Quizforge Message Catalog
// Description: Rule-identifier to message-template tables.
// Purpose: Centralize user-facing validation strings behind an injected,
//          locale-capable catalog.
// Dependencies: crate::core::rule, serde
// ============================================================================

//! ## Overview
//! Validation messages are rendered from an injected [`MessageCatalog`]
//! rather than a global table, so multiple catalogs (one per locale) can
//! coexist in one process. Templates use `{placeholder}` substitution with
//! deterministic argument order. The compiled-in English catalog is the
//! fallback for any missing override.
//!
//! ## Invariants
//! - A catalog always resolves every [`RuleId`]; overrides merge over the
//!   English defaults at construction time.
//! - Catalogs are read-only after construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::rule::RuleId;

// ============================================================================
// SECTION: Default Templates
// ============================================================================

/// Returns the compiled-in English template for a rule.
const fn english_template(rule: RuleId) -> &'static str {
    match rule {
        RuleId::Required => "is required",
        RuleId::MinLength => "is too short (minimum {min})",
        RuleId::MaxLength => "is too long (maximum {max})",
        RuleId::Pattern => "contains unsupported characters",
        RuleId::Numeric => "must be a number",
        RuleId::MinValue => "must be at least {min}",
        RuleId::MaxValue => "must be at most {max}",
        RuleId::OneOf => "must be one of the allowed values",
        RuleId::Url => "must be a valid http(s) URL",
        RuleId::MinMaxOrder => "minimum must not exceed maximum",
        RuleId::CorrectInRange => "correct value must lie between minimum and maximum",
        RuleId::AtLeastOneCorrectAnswer => "at least one answer must be marked correct",
        RuleId::MediaRequired => "media is required for this question kind",
    }
}

// ============================================================================
// SECTION: Message Catalog
// ============================================================================

/// Rule-identifier to message-template table.
///
/// # Invariants
/// - Lookup is total: every rule resolves to a template.
/// - Iteration order is deterministic (`BTreeMap`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    /// Template overrides; rules absent here fall back to English.
    templates: BTreeMap<RuleId, String>,
}

impl MessageCatalog {
    /// Returns the compiled-in English catalog.
    #[must_use]
    pub const fn english() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Creates a catalog from per-rule template overrides.
    ///
    /// Rules absent from `overrides` fall back to the English defaults.
    #[must_use]
    pub fn with_overrides(overrides: BTreeMap<RuleId, String>) -> Self {
        Self { templates: overrides }
    }

    /// Returns the template for a rule.
    #[must_use]
    pub fn template(&self, rule: RuleId) -> &str {
        self.templates.get(&rule).map_or_else(|| english_template(rule), String::as_str)
    }

    /// Renders the template for a rule, substituting `{key}` placeholders.
    ///
    /// Unknown placeholders are left in place; substitution order follows
    /// `args` for determinism.
    #[must_use]
    pub fn render(&self, rule: RuleId, args: &[(&str, String)]) -> String {
        let mut message = self.template(rule).to_owned();
        for (key, value) in args {
            let placeholder = format!("{{{key}}}");
            message = message.replace(&placeholder, value);
        }
        message
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}
