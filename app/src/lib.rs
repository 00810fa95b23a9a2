//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (view bridge).
// CONTEXT: Owns the shared calculator state and the display rendering that
// every command returns to the view.

use engine::{format_operand, CalculatorState};
use std::sync::Mutex;

pub mod api_types;
pub mod commands;
pub mod keypad;
pub mod logging;

pub use api_types::{convert_action, ActionRequest, DisplayData};
pub use keypad::{keypad_layout, KeypadKey, GRID_COLUMNS};
pub use logging::{init_log_file, next_seq, write_log};

#[cfg(test)]
mod tests;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Shared application state handed to every command.
pub struct AppState {
    pub calculator: Mutex<CalculatorState>,
}

pub fn create_app_state() -> AppState {
    log_info!("SYS", "Creating AppState");
    AppState {
        calculator: Mutex::new(CalculatorState::new()),
    }
}

// ============================================================================
// DISPLAY RENDERING
// ============================================================================

/// Render the display form of a calculator state.
///
/// Both operands pass through the thousands-separator formatter and the
/// pending operation renders as its symbol. Each field is None when the
/// underlying state slot is empty, so the view shows nothing there.
pub fn render_display(state: &CalculatorState) -> DisplayData {
    DisplayData {
        previous_operand: format_operand(state.previous_operand.as_deref()),
        operation: state.operation.map(|op| op.symbol().to_string()),
        current_operand: format_operand(state.current_operand.as_deref()),
    }
}
