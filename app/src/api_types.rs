//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for view API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use engine::{Action, Operation};
use serde::{Deserialize, Serialize};

/// An action submitted by the view.
///
/// The wire form is adjacently tagged: `{"type": "add_digit", "payload":
/// {"digit": "7"}}`; actions without a payload are just `{"type": "clear"}`.
/// Payload contents are untrusted strings and are validated by
/// [`convert_action`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ActionRequest {
    AddDigit { digit: String },
    ChooseOperation { operation: String },
    Clear,
    Evaluate,
    DeleteDigit,
}

/// Display state returned to the view after every dispatch.
///
/// Operands are already formatted for display; the view renders them
/// verbatim. Absent fields are omitted from the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_operand: Option<String>,
    /// Pending operation symbol ("+", "-", "×" or "÷")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_operand: Option<String>,
}

/// Convert a view request into an engine action.
///
/// This is the only place the request payloads are validated: a digit must
/// be a single character in 0-9 or ".", an operation must be one of the
/// four symbols ("*" and "/" are accepted as aliases for "×" and "÷").
/// Everything past this boundary is a closed, well-formed [`Action`].
pub fn convert_action(request: &ActionRequest) -> Result<Action, String> {
    match request {
        ActionRequest::AddDigit { digit } => {
            let mut chars = digit.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() || c == '.' => Ok(Action::AddDigit(c)),
                _ => Err(format!("Invalid digit '{}'", digit)),
            }
        }
        ActionRequest::ChooseOperation { operation } => {
            let op = match operation.as_str() {
                "+" => Operation::Add,
                "-" => Operation::Subtract,
                "×" | "*" => Operation::Multiply,
                "÷" | "/" => Operation::Divide,
                _ => return Err(format!("Invalid operation '{}'", operation)),
            };
            Ok(Action::ChooseOperation(op))
        }
        ActionRequest::Clear => Ok(Action::Clear),
        ActionRequest::Evaluate => Ok(Action::Evaluate),
        ActionRequest::DeleteDigit => Ok(Action::DeleteDigit),
    }
}
