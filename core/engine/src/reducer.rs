//! FILENAME: core/engine/src/reducer.rs
//! PURPOSE: The calculation state machine: maps (state, action) to the next state.
//! CONTEXT: Every transition is a total pure function. Presses that make no
//! sense in the current state (evaluating with a missing operand, choosing an
//! operation before any digits) return the input state unchanged rather than
//! erroring, so the caller never has to handle a failure.

use crate::action::Action;
use crate::evaluate::evaluate;
use crate::state::{CalculatorState, Operation};

/// Applies one dispatched action to the state, returning the next state.
/// The input state is never mutated.
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::new(),
        Action::Evaluate => evaluate_pending(state),
        Action::DeleteDigit => delete_digit(state),
    }
}

/// Appends a digit (or the decimal point) to the current operand.
fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    // Right after an evaluation the shown result is replaced, not extended.
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");

    // A lone zero never grows into "00".
    if digit == '0' && current == "0" {
        return state.clone();
    }

    // At most one decimal point per operand.
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(format!("{}{}", current, digit)),
        ..state.clone()
    }
}

/// Banks the current operand and records the operation to apply next.
fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    // Nothing entered at all: there is nothing to operate on.
    if state.current_operand.is_none() && state.previous_operand.is_none() {
        return state.clone();
    }

    // An operation is already pending and no new digits have been entered:
    // the press just swaps the pending operation.
    if state.current_operand.is_none() {
        return CalculatorState {
            operation: Some(operation),
            ..state.clone()
        };
    }

    // First operation of a calculation: move the entry to the previous slot.
    if state.previous_operand.is_none() {
        return CalculatorState {
            operation: Some(operation),
            previous_operand: state.current_operand.clone(),
            current_operand: None,
            ..state.clone()
        };
    }

    // Chaining: fold the pending pair into the previous operand so the
    // display always shows at most one banked value.
    CalculatorState {
        previous_operand: Some(evaluate(state)),
        current_operand: None,
        operation: Some(operation),
        overwrite: state.overwrite,
    }
}

/// Collapses previous operand, operation and current operand into a result.
fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(evaluate(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

/// Removes the last entered character from the current operand.
fn delete_digit(state: &CalculatorState) -> CalculatorState {
    // A result is dismissed whole, not trimmed character by character.
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let current = match state.current_operand.as_deref() {
        Some(operand) => operand,
        None => return state.clone(),
    };

    if current.chars().count() == 1 {
        return CalculatorState {
            current_operand: None,
            ..state.clone()
        };
    }

    let mut shortened = current.to_string();
    shortened.pop();
    CalculatorState {
        current_operand: Some(shortened),
        ..state.clone()
    }
}
