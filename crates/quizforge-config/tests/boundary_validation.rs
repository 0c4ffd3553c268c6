//! Boundary validation tests for quizforge-config.
// crates/quizforge-config/tests/boundary_validation.rs
// =============================================================================
// Module: Boundary Validation Tests
// Description: Tests for the bounds every limit override must respect.
// Purpose: Ensure out-of-bounds overrides are rejected and edges accepted.
// =============================================================================

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

use quizforge_config::ConfigError;
use quizforge_config::EngineSettings;

type TestResult = Result<(), String>;

/// Assert that a validation result is an error containing a specific substring.
fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(()) => Err("expected invalid settings".to_string()),
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn compiled_in_defaults_validate() -> TestResult {
    let settings = EngineSettings::defaults();
    settings.validate().map_err(|err| err.to_string())?;
    Ok(())
}

// ============================================================================
// SECTION: Text Bounds
// ============================================================================

#[test]
fn prompt_min_chars_at_zero_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.prompt.min_chars = 0;
    assert_invalid(settings.validate(), "prompt.min_chars must be greater than zero")?;
    Ok(())
}

#[test]
fn prompt_min_over_max_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.prompt.min_chars = 50;
    settings.limits.prompt.max_chars = 10;
    assert_invalid(settings.validate(), "prompt.min_chars must not exceed prompt.max_chars")?;
    Ok(())
}

#[test]
fn prompt_max_chars_at_cap_accepted() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.prompt.max_chars = 10_000;
    settings.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn prompt_max_chars_over_cap_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.prompt.max_chars = 10_001;
    assert_invalid(settings.validate(), "prompt.max_chars must not exceed 10000")?;
    Ok(())
}

#[test]
fn title_min_chars_at_zero_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.title.min_chars = 0;
    assert_invalid(settings.validate(), "title.min_chars must be greater than zero")?;
    Ok(())
}

// ============================================================================
// SECTION: Question Count
// ============================================================================

#[test]
fn question_count_min_at_zero_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.question_count.min_questions = 0;
    assert_invalid(
        settings.validate(),
        "question_count.min_questions must be greater than zero",
    )?;
    Ok(())
}

#[test]
fn question_count_min_over_max_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.question_count.min_questions = 101;
    assert_invalid(
        settings.validate(),
        "question_count.min_questions must not exceed question_count.max_questions",
    )?;
    Ok(())
}

#[test]
fn question_count_max_at_cap_accepted() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.question_count.max_questions = 1_000;
    settings.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn question_count_max_over_cap_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.question_count.max_questions = 1_001;
    assert_invalid(settings.validate(), "question_count.max_questions must not exceed 1000")?;
    Ok(())
}

// ============================================================================
// SECTION: Value Sets
// ============================================================================

#[test]
fn empty_duration_set_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.choice.duration_seconds.clear();
    assert_invalid(settings.validate(), "choice.duration_seconds must not be empty")?;
    Ok(())
}

#[test]
fn zero_duration_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.choice.duration_seconds.push(0.0);
    assert_invalid(settings.validate(), "choice.duration_seconds entries must be positive")?;
    Ok(())
}

#[test]
fn non_finite_duration_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.choice.duration_seconds.push(f64::INFINITY);
    assert_invalid(settings.validate(), "choice.duration_seconds entries must be finite")?;
    Ok(())
}

#[test]
fn zero_points_accepted() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.choice.points = vec![0.0, 1_000.0];
    settings.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn negative_points_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.choice.points.push(-500.0);
    assert_invalid(settings.validate(), "choice.points entries must be positive")?;
    Ok(())
}

// ============================================================================
// SECTION: Numeric Domains
// ============================================================================

#[test]
fn inverted_range_domain_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.range_domain.min = 1.0;
    settings.limits.range_domain.max = -1.0;
    assert_invalid(settings.validate(), "range_domain.min must not exceed range_domain.max")?;
    Ok(())
}

#[test]
fn non_finite_range_domain_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.range_domain.min = f64::NAN;
    assert_invalid(settings.validate(), "range_domain endpoints must be finite")?;
    Ok(())
}

#[test]
fn inverted_pin_domain_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.pin_domain.min = 101.0;
    assert_invalid(settings.validate(), "pin_domain.min must not exceed pin_domain.max")?;
    Ok(())
}

// ============================================================================
// SECTION: Slot Lists
// ============================================================================

#[test]
fn zero_min_slots_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.multi_choice.slots.min_slots = 0;
    assert_invalid(settings.validate(), "multi_choice.slots.min_slots must be greater than zero")?;
    Ok(())
}

#[test]
fn min_slots_over_max_slots_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.type_answer.slots.min_slots = 5;
    assert_invalid(
        settings.validate(),
        "type_answer.slots.min_slots must not exceed type_answer.slots.max_slots",
    )?;
    Ok(())
}

#[test]
fn slot_capacity_at_cap_accepted() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.puzzle.slots.max_slots = 12;
    settings.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn slot_capacity_over_cap_rejected() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.puzzle.slots.max_slots = 13;
    assert_invalid(settings.validate(), "puzzle.slots.max_slots must not exceed 12")?;
    Ok(())
}

#[test]
fn slot_value_bounds_are_validated() -> TestResult {
    let mut settings = EngineSettings::defaults();
    settings.limits.multi_choice.value.min_chars = 0;
    assert_invalid(settings.validate(), "multi_choice.value.min_chars must be greater than zero")?;
    Ok(())
}
