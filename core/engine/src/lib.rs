//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod action;
pub mod evaluate;
pub mod number_format;
pub mod reducer;
pub mod state;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use evaluate::{evaluate, parse_float_prefix};
pub use number_format::format_operand;
pub use reducer::transition;
pub use state::{CalculatorState, Operation};
