//! FILENAME: core/engine/src/state.rs
//! PURPOSE: Defines the fundamental data structures for the calculator state.
//! CONTEXT: This file contains the `CalculatorState` struct and `Operation` enum.
//! Operands are kept as the digit strings the user typed, not parsed numbers;
//! parsing happens only at evaluation time. A `None` field means "cleared",
//! which is exactly how an absent operand renders: as nothing.

use serde::{Deserialize, Serialize};

/// The four operations a pending calculation can apply between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Returns the display symbol for this operation.
    /// Multiply and divide use the keypad glyphs, not the ASCII operators.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

/// The single state record driving the calculator.
///
/// `current_operand` is the number being entered (or the last result),
/// `previous_operand` is the number banked by choosing an operation, and
/// `operation` is the pending operation between them. An empty string is a
/// valid *present* operand: it is what a failed evaluation stores, distinct
/// from a cleared (`None`) field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_operand: Option<String>,
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// Set after an evaluation: the next digit replaces the shown result
    /// instead of appending to it.
    pub overwrite: bool,
}

impl CalculatorState {
    /// Creates the empty state: nothing entered, nothing pending.
    pub fn new() -> Self {
        CalculatorState {
            current_operand: None,
            previous_operand: None,
            operation: None,
            overwrite: false,
        }
    }

    /// Returns true when every field is cleared.
    pub fn is_empty(&self) -> bool {
        self.current_operand.is_none()
            && self.previous_operand.is_none()
            && self.operation.is_none()
            && !self.overwrite
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = CalculatorState::new();
        assert!(state.is_empty());
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_empty_string_operand_is_not_cleared() {
        let state = CalculatorState {
            current_operand: Some(String::new()),
            ..CalculatorState::new()
        };
        assert!(!state.is_empty());
    }

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }
}
