// crates/quizforge-core/src/core/slots.rs
// ============================================================================
// Module: Quizforge Slot Lists
// Description: Fixed-capacity editing buffers for dynamic-arity list fields.
// Purpose: Hold option/answer/value slots with explicit mutation operations.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Option lists (`MultiChoice` options, `TypeAnswer` accepted answers,
//! `Puzzle` ordered values) are fixed-capacity sequences of slots. The
//! editing buffer always holds the full capacity so an author can keep
//! typing into slot `k + 1` after filling slot `k`; the committed form
//! emitted to validation and storage is the truncated prefix computed by
//! the arity resolver in [`crate::runtime::arity`].
//!
//! ## Invariants
//! - A slot list always holds exactly `bounds.max_slots` slots.
//! - Whitespace-only slot values count as empty.
//! - Mutations never resize the buffer; `swap` reorders whole slots.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::limits::SlotBounds;

// ============================================================================
// SECTION: Slot Trait
// ============================================================================

/// Empty-likeness for slot values.
///
/// # Invariants
/// - `is_filled` must be a pure function of the slot value.
pub trait Slot: Clone + Default {
    /// Returns true when the slot holds a non-empty value.
    fn is_filled(&self) -> bool;
}

/// Returns true when a slot value string is non-empty after trimming.
fn text_filled(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

// ============================================================================
// SECTION: Slot Values
// ============================================================================

/// A plain text slot (`TypeAnswer` answers, `Puzzle` values).
///
/// # Invariants
/// - Whitespace-only values are treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSlot {
    /// Slot value, absent when the slot is empty.
    pub value: Option<String>,
}

impl TextSlot {
    /// Creates a filled text slot.
    #[must_use]
    pub fn filled(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl Slot for TextSlot {
    fn is_filled(&self) -> bool {
        text_filled(self.value.as_deref())
    }
}

impl Serialize for TextSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

/// An option slot carrying a correctness flag (`MultiChoice` options).
///
/// # Invariants
/// - Whitespace-only values are treated as empty.
/// - The correctness flag is independent of the value; clearing the value
///   does not clear the flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChoiceSlot {
    /// Slot value, absent when the slot is empty.
    pub value: Option<String>,
    /// True when this option is marked correct.
    pub correct: bool,
}

impl ChoiceSlot {
    /// Creates a filled option slot.
    #[must_use]
    pub fn filled(value: impl Into<String>, correct: bool) -> Self {
        Self {
            value: Some(value.into()),
            correct,
        }
    }
}

impl Slot for ChoiceSlot {
    fn is_filled(&self) -> bool {
        text_filled(self.value.as_deref())
    }
}

// ============================================================================
// SECTION: Slot List
// ============================================================================

/// Fixed-capacity editing buffer for a dynamic-arity list field.
///
/// # Invariants
/// - `slots.len() == bounds.max_slots` at all times.
/// - The required prefix length is derived on commit, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotList<S> {
    /// The full editing buffer, one entry per slot.
    slots: Vec<S>,
    /// Required-prefix bounds and capacity.
    bounds: SlotBounds,
}

impl<S: Slot> SlotList<S> {
    /// Creates an empty slot list at full capacity.
    #[must_use]
    pub fn new(bounds: SlotBounds) -> Self {
        Self {
            slots: (0 .. bounds.max_slots).map(|_| S::default()).collect(),
            bounds,
        }
    }

    /// Creates a slot list from wire slots, padding to capacity.
    ///
    /// Slots beyond `bounds.max_slots` are never accepted by the
    /// normalizer, so `slots` is at most capacity-long here.
    #[must_use]
    pub fn from_slots(mut slots: Vec<S>, bounds: SlotBounds) -> Self {
        slots.truncate(bounds.max_slots);
        while slots.len() < bounds.max_slots {
            slots.push(S::default());
        }
        Self { slots, bounds }
    }

    /// Returns the full editing buffer.
    #[must_use]
    pub fn slots(&self) -> &[S] {
        &self.slots
    }

    /// Returns the required-prefix bounds.
    #[must_use]
    pub const fn bounds(&self) -> SlotBounds {
        self.bounds
    }

    /// Returns the slot at `index`, if within capacity.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.slots.get(index)
    }

    /// Swaps two whole slots, including any correctness flags.
    ///
    /// Out-of-capacity indices are ignored. The required prefix length is
    /// recomputed from the new arrangement on the next commit.
    pub fn swap(&mut self, left: usize, right: usize) {
        if left < self.slots.len() && right < self.slots.len() {
            self.slots.swap(left, right);
        }
    }

    /// Replaces the slot at `index`. Out-of-capacity indices are ignored.
    pub fn replace(&mut self, index: usize, slot: S) {
        if let Some(entry) = self.slots.get_mut(index) {
            *entry = slot;
        }
    }
}

impl SlotList<TextSlot> {
    /// Sets the text of a slot. Out-of-capacity indices are ignored.
    pub fn set_text(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.value = Some(value.into());
        }
    }

    /// Clears the text of a slot. Out-of-capacity indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.value = None;
        }
    }
}

impl SlotList<ChoiceSlot> {
    /// Sets the text of an option slot. Out-of-capacity indices are ignored.
    pub fn set_text(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.value = Some(value.into());
        }
    }

    /// Clears the text of an option slot, leaving its flag untouched.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.value = None;
        }
    }

    /// Sets the correctness flag of an option slot.
    pub fn set_correct(&mut self, index: usize, correct: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.correct = correct;
        }
    }
}
