//! FILENAME: app/src/keypad.rs
// PURPOSE: The calculator button grid as data.
// CONTEXT: The view renders these keys in order into a fixed-width grid and
// dispatches each key's action verbatim. No input logic lives in the view.

use crate::api_types::ActionRequest;
use serde::{Deserialize, Serialize};

/// Number of columns in the button grid.
pub const GRID_COLUMNS: u32 = 4;

/// One key of the calculator keypad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeypadKey {
    pub label: String,
    /// Number of grid columns this key spans (1 = normal, 2 = wide)
    #[serde(default = "default_span")]
    pub col_span: u32,
    pub action: ActionRequest,
}

fn default_span() -> u32 {
    1
}

/// The full keypad in render order.
///
/// Rows of the rendered grid: AC DEL ÷ / 1 2 3 × / 4 5 6 + / 7 8 9 - /
/// . 0 =, with AC and = spanning two columns. 18 keys, 20 grid cells.
pub fn keypad_layout() -> Vec<KeypadKey> {
    vec![
        wide_key("AC", ActionRequest::Clear),
        plain_key("DEL", ActionRequest::DeleteDigit),
        operation_key("÷"),
        digit_key("1"),
        digit_key("2"),
        digit_key("3"),
        operation_key("×"),
        digit_key("4"),
        digit_key("5"),
        digit_key("6"),
        operation_key("+"),
        digit_key("7"),
        digit_key("8"),
        digit_key("9"),
        operation_key("-"),
        digit_key("."),
        digit_key("0"),
        wide_key("=", ActionRequest::Evaluate),
    ]
}

fn digit_key(label: &str) -> KeypadKey {
    plain_key(
        label,
        ActionRequest::AddDigit {
            digit: label.to_string(),
        },
    )
}

fn operation_key(label: &str) -> KeypadKey {
    plain_key(
        label,
        ActionRequest::ChooseOperation {
            operation: label.to_string(),
        },
    )
}

fn plain_key(label: &str, action: ActionRequest) -> KeypadKey {
    KeypadKey {
        label: label.to_string(),
        col_span: 1,
        action,
    }
}

fn wide_key(label: &str, action: ActionRequest) -> KeypadKey {
    KeypadKey {
        label: label.to_string(),
        col_span: 2,
        action,
    }
}
