// crates/quizforge-core/tests/arity_resolver.rs
// ============================================================================
// Module: Arity Resolver Tests
// Description: Required-prefix derivation for dynamic-arity slot lists.
// Purpose: Validate boundary derivation, trimming, reordering, and
//          idempotence across fill arrangements.
// ============================================================================

//! Tests for the dynamic-arity list resolver and slot-list commit.

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

use quizforge_core::ChoiceSlot;
use quizforge_core::Slot;
use quizforge_core::SlotBounds;
use quizforge_core::SlotList;
use quizforge_core::TextSlot;
use quizforge_core::runtime::arity::resolve;

/// Six-slot list with a required prefix of at least two.
const OPTION_BOUNDS: SlotBounds = SlotBounds::new(2, 6);

#[test]
fn empty_list_resolves_to_minimum() {
    let list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    let resolution = list.commit();
    assert_eq!(resolution.required_prefix_len, 2);
    assert_eq!(resolution.committed.len(), 2);
}

#[test]
fn filling_a_trailing_slot_extends_the_requirement() {
    let mut list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(0, "alpha");
    list.set_text(2, "gamma");
    let resolution = list.commit();
    assert_eq!(resolution.required_prefix_len, 3);
    assert!(!resolution.committed[1].is_filled());
}

#[test]
fn clearing_the_trailing_slot_removes_the_requirement() {
    let mut list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(0, "alpha");
    list.set_text(2, "gamma");
    list.clear(2);
    assert_eq!(list.commit().required_prefix_len, 2);
}

#[test]
fn back_to_front_fill_matches_front_to_back() {
    let mut forward: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    forward.set_text(0, "a");
    forward.set_text(1, "b");
    forward.set_text(2, "c");

    let mut backward: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    backward.set_text(2, "c");
    backward.set_text(1, "b");
    backward.set_text(0, "a");

    assert_eq!(forward.commit(), backward.commit());
}

#[test]
fn whitespace_only_values_count_as_empty() {
    let mut list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(0, "alpha");
    list.set_text(4, "   ");
    assert_eq!(list.commit().required_prefix_len, 2);
}

#[test]
fn swapping_slots_recomputes_the_boundary() {
    let mut list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(0, "alpha");
    list.set_text(5, "omega");
    assert_eq!(list.commit().required_prefix_len, 6);

    list.swap(5, 1);
    assert_eq!(list.commit().required_prefix_len, 2);
}

#[test]
fn swap_carries_correctness_flags_with_the_slot() {
    let mut list: SlotList<ChoiceSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(0, "right");
    list.set_correct(0, true);
    list.set_text(1, "wrong");
    list.swap(0, 1);

    let resolution = list.commit();
    assert_eq!(resolution.committed[0].value.as_deref(), Some("wrong"));
    assert!(!resolution.committed[0].correct);
    assert_eq!(resolution.committed[1].value.as_deref(), Some("right"));
    assert!(resolution.committed[1].correct);
}

#[test]
fn resolving_a_committed_list_is_a_fixed_point() {
    let mut list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(0, "a");
    list.set_text(3, "d");

    let first = list.commit();
    let second = resolve(&first.committed, OPTION_BOUNDS);
    assert_eq!(first.required_prefix_len, second.required_prefix_len);
    assert_eq!(first.committed, second.committed);
}

#[test]
fn boundary_never_leaves_the_configured_bounds() {
    let bounds = SlotBounds::new(1, 4);
    let mut list: SlotList<TextSlot> = SlotList::new(bounds);
    assert_eq!(list.commit().required_prefix_len, 1);

    for index in 0 .. 4 {
        list.set_text(index, "x");
    }
    assert_eq!(list.commit().required_prefix_len, 4);
}

#[test]
fn out_of_capacity_mutations_are_ignored() {
    let mut list: SlotList<TextSlot> = SlotList::new(OPTION_BOUNDS);
    list.set_text(9, "ghost");
    list.swap(0, 9);
    assert_eq!(list.commit().required_prefix_len, 2);
}

#[test]
fn filled_slots_beyond_capacity_never_move_the_boundary() {
    let bounds = SlotBounds::new(1, 3);
    let slots = vec![
        TextSlot::default(),
        TextSlot::default(),
        TextSlot::filled("   "),
        TextSlot::filled("value"),
    ];
    let first = resolve(&slots, bounds);
    assert_eq!(first.required_prefix_len, 1);

    let second = resolve(&first.committed, bounds);
    assert_eq!(second.required_prefix_len, first.required_prefix_len);
    assert_eq!(second.committed, first.committed);
}
