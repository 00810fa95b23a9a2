//! FILENAME: core/engine/src/action.rs
//! PURPOSE: The closed set of actions a view can dispatch at the calculator.
//! CONTEXT: Every button press maps to exactly one of these actions. The
//! reducer is total over all of them, so dispatching never fails; a press
//! that makes no sense in the current state simply leaves it unchanged.

use crate::state::Operation;
use serde::{Deserialize, Serialize};

/// One user interaction with the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// A digit key (`0`-`9`) or the decimal point was pressed.
    /// The keypad only produces those characters; the reducer itself does
    /// not re-validate, it appends whatever character arrives.
    AddDigit(char),
    /// An operation key was pressed.
    ChooseOperation(Operation),
    /// AC: reset everything to the empty state.
    Clear,
    /// `=`: collapse previous operand, operation and current operand into
    /// a single result.
    Evaluate,
    /// DEL: remove the last entered character.
    DeleteDigit,
}
