// crates/quizforge-core/tests/proptest_arity.rs
// ============================================================================
// Module: Arity Resolver Property-Based Tests
// Description: Property tests for required-prefix derivation.
// Purpose: Check boundary invariants and idempotence across arbitrary
//          slot arrangements.
// ============================================================================

//! Property-based tests for the dynamic-arity resolver.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use quizforge_core::Slot;
use quizforge_core::SlotBounds;
use quizforge_core::SlotList;
use quizforge_core::TextSlot;
use quizforge_core::runtime::arity::resolve;

fn slot_strategy() -> impl Strategy<Value = TextSlot> {
    prop_oneof![
        Just(TextSlot::default()),
        Just(TextSlot::filled("value")),
        Just(TextSlot::filled("   ")),
        Just(TextSlot::filled("")),
    ]
}

fn bounds_strategy() -> impl Strategy<Value = SlotBounds> {
    (1_usize ..= 6, 0_usize ..= 5)
        .prop_map(|(min, extra)| SlotBounds::new(min, min + extra))
}

proptest! {
    #[test]
    fn boundary_stays_within_bounds(
        bounds in bounds_strategy(),
        slots in prop::collection::vec(slot_strategy(), 0 ..= 12),
    ) {
        let resolution = resolve(&slots, bounds);
        prop_assert!(resolution.required_prefix_len >= bounds.min_slots);
        prop_assert!(resolution.required_prefix_len <= bounds.max_slots);
    }

    #[test]
    fn boundary_matches_the_last_filled_slot_in_capacity(
        bounds in bounds_strategy(),
        slots in prop::collection::vec(slot_strategy(), 0 ..= 12),
    ) {
        // Slots past capacity never exist in a well-formed buffer, so the
        // boundary derives from the in-capacity arrangement alone.
        let resolution = resolve(&slots, bounds);
        let expected = slots
            .iter()
            .take(bounds.max_slots)
            .rposition(|slot| slot.is_filled())
            .map_or(bounds.min_slots, |index| bounds.min_slots.max(index + 1))
            .min(bounds.max_slots);
        prop_assert_eq!(resolution.required_prefix_len, expected);
    }

    #[test]
    fn resolution_is_idempotent(
        bounds in bounds_strategy(),
        slots in prop::collection::vec(slot_strategy(), 0 ..= 12),
    ) {
        let first = resolve(&slots, bounds);
        let second = resolve(&first.committed, bounds);
        prop_assert_eq!(first.required_prefix_len, second.required_prefix_len);
        prop_assert_eq!(first.committed, second.committed);
    }

    #[test]
    fn committed_slots_are_a_prefix_of_the_buffer(
        bounds in bounds_strategy(),
        slots in prop::collection::vec(slot_strategy(), 0 ..= 12),
    ) {
        let resolution = resolve(&slots, bounds);
        prop_assert!(resolution.committed.len() <= resolution.required_prefix_len);
        for (committed, original) in resolution.committed.iter().zip(&slots) {
            prop_assert_eq!(committed, original);
        }
    }

    #[test]
    fn list_commit_agrees_with_the_standalone_resolver(
        bounds in bounds_strategy(),
        slots in prop::collection::vec(slot_strategy(), 0 ..= 6),
    ) {
        let list = SlotList::from_slots(slots, bounds);
        let from_list = list.commit();
        let from_buffer = resolve(list.slots(), bounds);
        prop_assert_eq!(from_list.required_prefix_len, from_buffer.required_prefix_len);
        prop_assert_eq!(from_list.committed, from_buffer.committed);
    }

    #[test]
    fn whitespace_and_empty_slots_are_interchangeable(
        bounds in bounds_strategy(),
        pattern in prop::collection::vec(any::<bool>(), 0 ..= 6),
    ) {
        let blanks: Vec<TextSlot> = pattern
            .iter()
            .map(|filled| if *filled { TextSlot::filled("value") } else { TextSlot::default() })
            .collect();
        let whitespace: Vec<TextSlot> = pattern
            .iter()
            .map(|filled| if *filled { TextSlot::filled("value") } else { TextSlot::filled("  ") })
            .collect();
        prop_assert_eq!(
            resolve(&blanks, bounds).required_prefix_len,
            resolve(&whitespace, bounds).required_prefix_len
        );
    }
}
