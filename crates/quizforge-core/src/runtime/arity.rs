// crates/quizforge-core/src/runtime/arity.rs
// ============================================================================
// Module: Quizforge Arity Resolver
// Description: Derives the required prefix length of dynamic-arity lists.
// Purpose: Make the required/optional boundary a pure function of slot state.
// Dependencies: crate::core::{limits, slots}, serde
// ============================================================================

//! ## Overview
//! The required prefix length of a slot list is derived, never stored:
//! `R = max(min, lastFilledIndex + 1)`, clamped to `[min, max]`. Typing into
//! a trailing slot extends the requirement; clearing it removes the
//! requirement again. The resolver is a pure function so the authoring form
//! and the server-side normalizer share one boundary computation.
//!
//! ## Invariants
//! - `min <= required_prefix_len <= max` for every slot arrangement.
//! - Resolving an already-committed list is a fixed point.
//! - Reordering slots recomputes the boundary from the new arrangement.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde::ser::SerializeSeq;

use crate::core::limits::SlotBounds;
use crate::core::slots::Slot;
use crate::core::slots::SlotList;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Outcome of resolving a slot list: the derived boundary and the committed
/// (truncated) slots.
///
/// # Invariants
/// - `committed.len() == required_prefix_len` whenever the input holds at
///   least `required_prefix_len` slots.
#[derive(Debug, Clone, PartialEq)]
pub struct ArityResolution<S> {
    /// Derived required prefix length, within the configured bounds.
    pub required_prefix_len: usize,
    /// The slots truncated to the required prefix.
    pub committed: Vec<S>,
}

/// Resolves the required prefix length for a slot arrangement.
///
/// Scans the first `bounds.max_slots` slots from the back for the first
/// filled slot at index `i`; if none is found the boundary is
/// `bounds.min_slots`, otherwise `max(bounds.min_slots, i + 1)`. Slots
/// beyond capacity are ignored entirely, so a filled out-of-capacity slot
/// can never inflate a boundary its own truncation would then shrink.
#[must_use]
pub fn resolve<S: Slot>(slots: &[S], bounds: SlotBounds) -> ArityResolution<S> {
    let in_capacity = &slots[.. slots.len().min(bounds.max_slots)];
    let last_filled = in_capacity.iter().rposition(Slot::is_filled);
    let required = last_filled.map_or(bounds.min_slots, |index| bounds.min_slots.max(index + 1));
    let required = required.min(bounds.max_slots);
    let committed = in_capacity.iter().take(required).cloned().collect();
    ArityResolution {
        required_prefix_len: required,
        committed,
    }
}

// ============================================================================
// SECTION: Slot List Commit
// ============================================================================

impl<S: Slot> SlotList<S> {
    /// Resolves this list's required prefix and returns the committed form.
    ///
    /// The editing buffer is untouched; only the emitted value is truncated.
    #[must_use]
    pub fn commit(&self) -> ArityResolution<S> {
        resolve(self.slots(), self.bounds())
    }
}

// ============================================================================
// SECTION: Wire Form
// ============================================================================

/// Slot lists serialize as their committed form: the wire carries exactly
/// the required prefix, never the trailing editing slots.
impl<S: Slot + Serialize> Serialize for SlotList<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        let resolution = self.commit();
        let mut seq = serializer.serialize_seq(Some(resolution.committed.len()))?;
        for slot in &resolution.committed {
            seq.serialize_element(slot)?;
        }
        seq.end()
    }
}
