//! FILENAME: app/src/commands.rs
// PURPOSE: Command handlers for calculator actions.
// CONTEXT: These commands are called from the view. Every state change goes
// through a single transition on the shared state, and every command returns
// the refreshed display.

use crate::api_types::{convert_action, ActionRequest, DisplayData};
use crate::{render_display, AppState};
use crate::{log_enter, log_enter_info, log_exit, log_exit_info, log_warn};
use engine::{transition, Action};

// ============================================================================
// DISPATCH
// ============================================================================

/// Dispatch a view request against the shared state.
///
/// This is the generic entry point; the per-action commands below wrap it.
/// Invalid payloads are rejected before the state is touched, so the state
/// only ever holds the closed action set.
pub fn dispatch(state: &AppState, request: ActionRequest) -> Result<DisplayData, String> {
    match convert_action(&request) {
        Ok(action) => Ok(apply(state, action)),
        Err(err) => {
            log_warn!("CMD", "rejected action: {}", err);
            Err(err)
        }
    }
}

/// Dispatch a JSON-serialized request (the wire form of the view boundary).
pub fn dispatch_json(state: &AppState, request_json: &str) -> Result<DisplayData, String> {
    log_enter_info!("CMD", "dispatch_json", "request={}", request_json);

    let request: ActionRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid action request: {}", e))?;
    let display = dispatch(state, request)?;

    log_exit_info!("CMD", "dispatch_json", "current={:?}", display.current_operand);
    Ok(display)
}

/// Apply a converted action and render the resulting state.
fn apply(state: &AppState, action: Action) -> DisplayData {
    let mut calculator = state.calculator.lock().unwrap();
    *calculator = transition(&calculator, action);
    render_display(&calculator)
}

// ============================================================================
// PER-ACTION COMMANDS
// ============================================================================

/// Append a digit (or decimal point) to the current operand.
pub fn add_digit(state: &AppState, digit: &str) -> Result<DisplayData, String> {
    log_enter_info!("CMD", "add_digit", "digit={}", digit);

    let display = dispatch(
        state,
        ActionRequest::AddDigit {
            digit: digit.to_string(),
        },
    )?;

    log_exit_info!("CMD", "add_digit", "current={:?}", display.current_operand);
    Ok(display)
}

/// Select the operation to apply between the previous and current operands.
pub fn choose_operation(state: &AppState, operation: &str) -> Result<DisplayData, String> {
    log_enter_info!("CMD", "choose_operation", "operation={}", operation);

    let display = dispatch(
        state,
        ActionRequest::ChooseOperation {
            operation: operation.to_string(),
        },
    )?;

    log_exit_info!("CMD", "choose_operation", "pending={:?}", display.operation);
    Ok(display)
}

/// Reset the calculator to its initial empty state.
pub fn clear(state: &AppState) -> DisplayData {
    log_enter_info!("CMD", "clear");
    let display = apply(state, Action::Clear);
    log_exit_info!("CMD", "clear");
    display
}

/// Remove the last entered digit.
pub fn delete_digit(state: &AppState) -> DisplayData {
    log_enter_info!("CMD", "delete_digit");
    let display = apply(state, Action::DeleteDigit);
    log_exit_info!("CMD", "delete_digit", "current={:?}", display.current_operand);
    display
}

/// Collapse the pending calculation into a result.
pub fn evaluate(state: &AppState) -> DisplayData {
    log_enter_info!("CMD", "evaluate");
    let display = apply(state, Action::Evaluate);
    log_exit_info!("CMD", "evaluate", "current={:?}", display.current_operand);
    display
}

/// Render the current display without dispatching anything.
pub fn get_display(state: &AppState) -> DisplayData {
    log_enter!("CMD", "get_display");

    let calculator = state.calculator.lock().unwrap();
    let display = render_display(&calculator);

    log_exit!("CMD", "get_display", "current={:?}", display.current_operand);
    display
}
