// crates/quizforge-core/src/core/rule.rs
// ============================================================================
// Module: Quizforge Rules and Reports
// Description: Rule identifiers, violations, and the ordered validation report.
// Purpose: Define the stable wire vocabulary for validation outcomes.
// Dependencies: crate::core::path, serde
// ============================================================================

//! ## Overview
//! Every validation outcome carries a [`RuleId`] with a stable camelCase wire
//! name, the [`FieldPath`] it applies to, and a rendered message. Outcomes
//! are collected into a [`ValidationReport`]: an ordered, path-grouped list
//! that both the API error formatter and the form renderer consume verbatim.
//!
//! ## Invariants
//! - The rule vocabulary is closed; adding a rule is a compile-time-visible
//!   change at every match site.
//! - Reports are data, never errors: an invalid question still evaluates
//!   fully and returns every applicable violation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::path::FieldPath;

// ============================================================================
// SECTION: Rule Identifiers
// ============================================================================

/// Closed set of validation rule identifiers.
///
/// # Invariants
/// - Wire names are camelCase and stable for serialization and contract
///   matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RuleId {
    /// A required field is missing.
    Required,
    /// A string value is shorter than its minimum length.
    MinLength,
    /// A string value exceeds its maximum length.
    MaxLength,
    /// A string value does not match its declared pattern.
    Pattern,
    /// A value that must be numeric could not be parsed as a number.
    Numeric,
    /// A numeric value is below its domain minimum.
    MinValue,
    /// A numeric value is above its domain maximum.
    MaxValue,
    /// A value is not a member of its declared value set.
    OneOf,
    /// A value is not a well-formed http(s) URL.
    Url,
    /// The range minimum exceeds the range maximum.
    MinMaxOrder,
    /// The correct answer lies outside the min/max range.
    CorrectInRange,
    /// No option in a flagged list is marked correct.
    AtLeastOneCorrectAnswer,
    /// A question kind that requires media has none.
    MediaRequired,
}

impl RuleId {
    /// Returns the stable camelCase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::Numeric => "numeric",
            Self::MinValue => "minValue",
            Self::MaxValue => "maxValue",
            Self::OneOf => "oneOf",
            Self::Url => "url",
            Self::MinMaxOrder => "minMaxOrder",
            Self::CorrectInRange => "correctInRange",
            Self::AtLeastOneCorrectAnswer => "atLeastOneCorrectAnswer",
            Self::MediaRequired => "mediaRequired",
        }
    }

    /// Ordered list of every rule identifier.
    ///
    /// # Invariants
    /// - Ordering matches declaration order and is stable for catalogs.
    pub const ALL: &'static [Self] = &[
        Self::Required,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::Numeric,
        Self::MinValue,
        Self::MaxValue,
        Self::OneOf,
        Self::Url,
        Self::MinMaxOrder,
        Self::CorrectInRange,
        Self::AtLeastOneCorrectAnswer,
        Self::MediaRequired,
    ];
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Violations
// ============================================================================

/// One validation outcome: a rule failed at a path.
///
/// # Invariants
/// - `message` is fully rendered from the active catalog; consumers never
///   re-derive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Address of the offending field within the question or draft.
    pub path: FieldPath,
    /// The rule that failed.
    pub rule: RuleId,
    /// Human-readable message rendered from the message catalog.
    pub message: String,
}

impl Violation {
    /// Creates a violation from its parts.
    #[must_use]
    pub fn new(path: FieldPath, rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            path,
            rule,
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Validation Report
// ============================================================================

/// Ordered, path-grouped list of validation outcomes.
///
/// # Invariants
/// - Violations sharing a path are adjacent, in first-appearance order.
/// - Within a path, rule-declaration order is preserved.
/// - Serializes as a plain JSON array of violations.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    /// Ordered violations.
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Creates a report from an already-ordered violation list.
    #[must_use]
    pub const fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns true when no rule failed.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the ordered violation list.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true when the report carries no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates over the violations recorded at a specific path.
    pub fn at_path<'a>(&'a self, path: &'a FieldPath) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |violation| &violation.path == path)
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
