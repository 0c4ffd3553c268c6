// crates/quizforge-core/src/core/path.rs
// ============================================================================
// Module: Quizforge Field Paths
// Description: Dot/bracket-addressed pointers into question values.
// Purpose: Give every validation outcome a stable, renderable address.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`FieldPath`] identifies where in a question (or quiz draft) a
//! validation outcome applies. Paths are sequences of segments; named fields
//! render dot-separated (`min`, `questions.0.max`), option-slot indices
//! render bracket-style (`options[2].value`). The two styles match the two
//! wire surfaces consuming the reports (API error formatter and form
//! renderer); the path type owns rendering so consumers never re-derive it.
//!
//! ## Invariants
//! - Rendering is deterministic: equal paths render to equal strings.
//! - Paths serialize as their rendered string form on the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Path Segments
// ============================================================================

/// One step of a field path.
///
/// # Invariants
/// - `Field` names are non-empty wire field names.
/// - `Item` renders dot-style (`questions.0`); `Slot` renders bracket-style
///   (`options[2]`). The distinction is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field (`min`, `prompt`, `questions`).
    Field(String),
    /// A dot-rendered list index (question position within a draft).
    Item(usize),
    /// A bracket-rendered list index (option-slot position).
    Slot(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => name.fmt(f),
            Self::Item(index) => index.fmt(f),
            Self::Slot(index) => write!(f, "[{index}]"),
        }
    }
}

// ============================================================================
// SECTION: Field Path
// ============================================================================

/// A dot/bracket-addressed pointer into a question or draft value.
///
/// # Invariants
/// - Segment order is outermost-first.
/// - An empty path is never emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    /// Ordered segments, outermost first.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates a path rooted at a named field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns this path extended by a named child field.
    #[must_use]
    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Returns this path extended by a dot-rendered list index.
    #[must_use]
    pub fn item(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Item(index));
        self
    }

    /// Returns this path extended by a bracket-rendered slot index.
    #[must_use]
    pub fn slot(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Slot(index));
        self
    }

    /// Returns a copy of `self` with `prefix` prepended.
    #[must_use]
    pub fn prefixed(&self, prefix: &Self) -> Self {
        let mut segments = Vec::with_capacity(prefix.segments.len() + self.segments.len());
        segments.extend(prefix.segments.iter().cloned());
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns the ordered segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Renders the path into its canonical wire string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            let needs_dot = position > 0 && !matches!(segment, PathSegment::Slot(_));
            if needs_dot {
                f.write_str(".")?;
            }
            segment.fmt(f)?;
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        Self::field(value)
    }
}
