//! FILENAME: core/engine/src/evaluate.rs
//! PURPOSE: Evaluates the pending calculation into a result string.
//! CONTEXT: Operands live as user-typed strings until this module parses
//! them. Parsing is deliberately permissive (longest valid numeric prefix,
//! trailing junk ignored) and failure is not an error: an unparseable
//! operand makes the whole evaluation come back as an empty string, which
//! the display simply renders as nothing. Division by zero is not
//! special-cased either; ±infinity and NaN flow through as ordinary f64
//! values and render in the runtime's string form ("inf", "NaN").

use crate::state::{CalculatorState, Operation};

/// Parses the longest valid floating-point prefix of `text`.
///
/// Leading whitespace is skipped, then an optional sign, then either a
/// decimal literal (digits, at most one dot, an exponent only when it is
/// well formed) or one of the keyword forms `f64` itself prints and parses
/// (`inf`, `infinity`, `nan`, case-insensitive). Everything after the prefix
/// is ignored, so `"12.5abc"` parses as 12.5. Returns `None` when no valid
/// prefix exists at all; a literal NaN prefix parses as `Some(NaN)` and is
/// rejected by the evaluator's own numeric check.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos = 1;
    }

    // Keyword forms: results of earlier evaluations ("inf", "NaN") must
    // re-parse so chained operations behave like fresh input. Compared on
    // bytes so a multi-byte character after the sign cannot split a slice.
    for keyword in ["infinity", "inf", "nan"] {
        let end = pos + keyword.len();
        if bytes.len() >= end && bytes[pos..end].eq_ignore_ascii_case(keyword.as_bytes()) {
            return trimmed[..end].parse::<f64>().ok();
        }
    }

    let mut mantissa_digits = 0;
    let mut seen_dot = false;
    while pos < bytes.len() {
        match bytes[pos] {
            b'0'..=b'9' => {
                mantissa_digits += 1;
                pos += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                pos += 1;
            }
            _ => break,
        }
    }

    // A bare sign or dot is not a number.
    if mantissa_digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows the marker;
    // "1e" and "1e+" fall back to the mantissa alone.
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_pos += 1;
        }
        let exp_digits_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_digits_start {
            pos = exp_pos;
        }
    }

    trimmed[..pos].parse::<f64>().ok()
}

/// Computes the pending calculation of `state` as a result string.
///
/// Returns the empty string when either operand is absent or does not parse
/// to a (non-NaN) number, or when no operation is pending. The result is the
/// runtime's string form of the f64 value, which is what the reducer stores
/// back as the new current operand.
pub fn evaluate(state: &CalculatorState) -> String {
    let previous = state.previous_operand.as_deref().and_then(parse_float_prefix);
    let current = state.current_operand.as_deref().and_then(parse_float_prefix);

    let (previous, current) = match (previous, current) {
        (Some(p), Some(c)) if !p.is_nan() && !c.is_nan() => (p, c),
        _ => return String::new(),
    };

    let operation = match state.operation {
        Some(operation) => operation,
        None => return String::new(),
    };

    let computation = match operation {
        Operation::Add => previous + current,
        Operation::Subtract => previous - current,
        Operation::Divide => previous / current,
        Operation::Multiply => previous * current,
    };

    computation.to_string()
}
