//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Formats operand strings for display with digit grouping.
//! CONTEXT: The display shows operands exactly as typed except for
//! thousands separators in the integer part (en-US convention: comma
//! groups, literal dot). Only the integer part is grouped; whatever follows
//! the decimal point is reattached untouched so a half-typed fraction like
//! "1234.0" never gets rounded or rewritten.

/// Formats an operand string for display.
///
/// An absent operand renders as nothing. Otherwise the operand is split at
/// its decimal point, the integer part is grouped with comma separators,
/// and the fractional part (if any) is reattached verbatim. An empty
/// integer part displays as "0", so ".5" shows as "0.5" and a failed
/// evaluation's empty-string operand shows as "0". Integer parts that are
/// not plain signed digit strings (the runtime float forms "inf" and "NaN"
/// a division can produce) pass through ungrouped.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;

    let (integer_part, fraction) = match operand.find('.') {
        Some(dot) => (&operand[..dot], Some(&operand[dot + 1..])),
        None => (operand, None),
    };

    let grouped = match group_digits(integer_part) {
        Some(grouped) => grouped,
        None => return Some(operand.to_string()),
    };

    match fraction {
        Some(fraction) => Some(format!("{}.{}", grouped, fraction)),
        None => Some(grouped),
    }
}

/// Adds comma thousands separators to a signed digit string.
/// Returns None when the input contains anything but a sign and digits.
fn group_digits(integer_part: &str) -> Option<String> {
    let negative = integer_part.starts_with('-');
    let digits = if negative {
        &integer_part[1..]
    } else {
        integer_part
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if digits.is_empty() {
        let zero = if negative { "-0" } else { "0" };
        return Some(zero.to_string());
    }

    let mut result = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    Some(result)
}
