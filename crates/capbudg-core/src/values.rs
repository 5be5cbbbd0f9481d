use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::CellValue;

/// Best-effort conversion of a cell to a float for summation.
///
/// Handles formats like:
/// - `Int(10)` -> 10.0
/// - `"3.14"` -> 3.14
/// - `"15%"` -> 0.15
/// - `"5.5 %"` -> 0.055
/// - `"1_000"` -> 1000.0
/// - `"Direct"`, `"%"`, empty -> None
///
/// Never fails: anything that is not a number yields `None`, which
/// callers treat as "skip this cell".
pub fn coerce_to_float(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Empty => None,
        CellValue::Int(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f),
        CellValue::Text(s) => parse_numeric_text(s),
    }
}

fn parse_numeric_text(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.ends_with('%') {
        let number = strip_digit_separators(s.trim_matches('%').trim())?;
        return number.parse::<f64>().ok().map(|v| v / 100.0);
    }
    strip_digit_separators(s)?.parse::<f64>().ok()
}

/// Drop `_` digit separators, so "1_000" reads as "1000". Each separator
/// must sit between two ASCII digits, otherwise the text is not a number.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut digits = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let between_digits = before.is_some_and(|b| b.is_ascii_digit())
            && after.is_some_and(|b| b.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }
    Some(digits)
}

/// Render a numeric rate as a percent display string, e.g. 0.1234 -> "12.34%".
///
/// Text and empty cells pass through unchanged.
pub fn percent_display(value: CellValue) -> CellValue {
    match value {
        CellValue::Int(i) => CellValue::Text(format!("{:.2}%", i as f64 * 100.0)),
        CellValue::Float(f) => CellValue::Text(format!("{:.2}%", f * 100.0)),
        other => other,
    }
}

/// Round to 2 decimal places, half-to-even on the exact binary value.
pub fn round_cents(total: f64) -> f64 {
    match Decimal::from_f64_retain(total) {
        Some(d) => d
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
            .to_string()
            .parse::<f64>()
            .unwrap_or(total),
        None => (total * 100.0).round() / 100.0,
    }
}
