#[cfg(test)]
use super::*;
use engine::{Action, CalculatorState, Operation};

#[test]
fn test_convert_action_digits() {
    for digit in ["0", "5", "9", "."] {
        let request = ActionRequest::AddDigit {
            digit: digit.to_string(),
        };
        let action = convert_action(&request).unwrap();
        assert_eq!(action, Action::AddDigit(digit.chars().next().unwrap()));
    }
}

#[test]
fn test_convert_action_rejects_bad_digits() {
    for digit in ["", "12", "x", "七", ".."] {
        let request = ActionRequest::AddDigit {
            digit: digit.to_string(),
        };
        assert!(convert_action(&request).is_err(), "accepted '{}'", digit);
    }
}

#[test]
fn test_convert_action_operations() {
    let cases = [
        ("+", Operation::Add),
        ("-", Operation::Subtract),
        ("×", Operation::Multiply),
        ("÷", Operation::Divide),
    ];
    for (symbol, expected) in cases {
        let request = ActionRequest::ChooseOperation {
            operation: symbol.to_string(),
        };
        assert_eq!(
            convert_action(&request).unwrap(),
            Action::ChooseOperation(expected)
        );
    }
}

#[test]
fn test_convert_action_operation_aliases() {
    // The ASCII forms a keyboard produces map onto the display symbols.
    let request = ActionRequest::ChooseOperation {
        operation: "*".to_string(),
    };
    assert_eq!(
        convert_action(&request).unwrap(),
        Action::ChooseOperation(Operation::Multiply)
    );

    let request = ActionRequest::ChooseOperation {
        operation: "/".to_string(),
    };
    assert_eq!(
        convert_action(&request).unwrap(),
        Action::ChooseOperation(Operation::Divide)
    );
}

#[test]
fn test_convert_action_rejects_bad_operations() {
    for symbol in ["", "%", "plus", "++"] {
        let request = ActionRequest::ChooseOperation {
            operation: symbol.to_string(),
        };
        assert!(convert_action(&request).is_err(), "accepted '{}'", symbol);
    }
}

#[test]
fn test_convert_action_unit_requests() {
    assert_eq!(convert_action(&ActionRequest::Clear).unwrap(), Action::Clear);
    assert_eq!(
        convert_action(&ActionRequest::Evaluate).unwrap(),
        Action::Evaluate
    );
    assert_eq!(
        convert_action(&ActionRequest::DeleteDigit).unwrap(),
        Action::DeleteDigit
    );
}

#[test]
fn test_render_display_empty_state() {
    let display = render_display(&CalculatorState::new());
    assert_eq!(display.previous_operand, None);
    assert_eq!(display.operation, None);
    assert_eq!(display.current_operand, None);
}

#[test]
fn test_render_display_formats_operands() {
    let state = CalculatorState {
        current_operand: Some("1234.5".to_string()),
        previous_operand: Some("1000000".to_string()),
        operation: Some(Operation::Multiply),
        overwrite: false,
    };
    let display = render_display(&state);
    assert_eq!(display.previous_operand.as_deref(), Some("1,000,000"));
    assert_eq!(display.operation.as_deref(), Some("×"));
    assert_eq!(display.current_operand.as_deref(), Some("1,234.5"));
}

#[test]
fn test_render_display_empty_string_operand_shows_zero() {
    // A failed evaluation leaves an empty-string operand; it displays as "0".
    let state = CalculatorState {
        current_operand: Some(String::new()),
        previous_operand: None,
        operation: None,
        overwrite: true,
    };
    let display = render_display(&state);
    assert_eq!(display.current_operand.as_deref(), Some("0"));
}

#[test]
fn test_create_app_state_starts_empty() {
    let state = create_app_state();
    let calculator = state.calculator.lock().unwrap();
    assert_eq!(*calculator, CalculatorState::new());
}
