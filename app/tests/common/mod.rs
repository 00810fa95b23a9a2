//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for calculator backend integration tests.

use app_lib::{commands, create_app_state, AppState, DisplayData};

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with empty state.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Create a harness with an operand already banked against an operation.
    pub fn with_pending_operation(previous: &str, operation: &str) -> Self {
        let harness = Self::new();
        harness.type_number(previous);
        harness.press_operation(operation);
        harness
    }

    // ========================================================================
    // HELPER METHODS FOR DRIVING THE CALCULATOR
    // ========================================================================

    /// Press a single digit (or decimal point) key.
    pub fn press_digit(&self, digit: &str) -> DisplayData {
        commands::add_digit(&self.state, digit).unwrap()
    }

    /// Type a whole number one digit at a time.
    pub fn type_number(&self, number: &str) -> DisplayData {
        let mut display = self.display();
        for c in number.chars() {
            display = self.press_digit(&c.to_string());
        }
        display
    }

    /// Press an operation key.
    pub fn press_operation(&self, operation: &str) -> DisplayData {
        commands::choose_operation(&self.state, operation).unwrap()
    }

    /// Press the AC key.
    pub fn press_clear(&self) -> DisplayData {
        commands::clear(&self.state)
    }

    /// Press the DEL key.
    pub fn press_delete(&self) -> DisplayData {
        commands::delete_digit(&self.state)
    }

    /// Press the = key.
    pub fn press_evaluate(&self) -> DisplayData {
        commands::evaluate(&self.state)
    }

    /// Get the current display without dispatching anything.
    pub fn display(&self) -> DisplayData {
        commands::get_display(&self.state)
    }

    /// Get the raw (unformatted) current operand from state.
    pub fn raw_current(&self) -> Option<String> {
        self.state.calculator.lock().unwrap().current_operand.clone()
    }

    /// Get the overwrite flag from state.
    pub fn overwrite(&self) -> bool {
        self.state.calculator.lock().unwrap().overwrite
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert the formatted current operand shown on the display.
pub fn assert_current(harness: &TestHarness, expected: &str) {
    let display = harness.display();
    assert_eq!(
        display.current_operand.as_deref(),
        Some(expected),
        "current operand expected '{}' but display was {:?}",
        expected,
        display
    );
}

/// Assert that no current operand is shown.
pub fn assert_no_current(harness: &TestHarness) {
    let display = harness.display();
    assert_eq!(
        display.current_operand, None,
        "expected no current operand but display was {:?}",
        display
    );
}

/// Assert the banked operand and pending operation shown on the display.
pub fn assert_pending(harness: &TestHarness, previous: &str, operation: &str) {
    let display = harness.display();
    assert_eq!(
        display.previous_operand.as_deref(),
        Some(previous),
        "previous operand expected '{}' but display was {:?}",
        previous,
        display
    );
    assert_eq!(
        display.operation.as_deref(),
        Some(operation),
        "operation expected '{}' but display was {:?}",
        operation,
        display
    );
}

/// Assert that nothing is banked (no previous operand, no operation).
pub fn assert_nothing_pending(harness: &TestHarness) {
    let display = harness.display();
    assert_eq!(
        display.previous_operand, None,
        "expected no previous operand but display was {:?}",
        display
    );
    assert_eq!(
        display.operation, None,
        "expected no operation but display was {:?}",
        display
    );
}
