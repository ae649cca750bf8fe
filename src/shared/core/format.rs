// Display formatting for the numbers the insights views expose.
//
// Purpose
// - Give every surface the same rendering: quantities with up to 2 fraction digits,
//   money with exactly 2, percentages with 1 and an explicit sign.
//
// Boundaries
// - Formatting only. Rounding here never feeds back into the engine.

use rust_decimal::{Decimal, RoundingStrategy};

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn with_separators(magnitude: Decimal) -> String {
    let text = magnitude.to_string();
    match text.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{fraction}", group_thousands(int_part)),
        None => group_thousands(&text),
    }
}

/// Up to 2 fraction digits, trailing zeros trimmed: `12345.5` renders as `12,345.5`.
pub fn format_number(value: Decimal) -> String {
    let rounded = round(value, 2).normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}", with_separators(rounded.abs()))
}

/// Dollar amount with exactly 2 fraction digits: `-3.5` renders as `-$3.50`.
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round(value, 2);
    rounded.rescale(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", with_separators(rounded.abs()))
}

/// One fraction digit, `+` for growth: `4.25` renders as `+4.3%`.
pub fn format_percentage(value: Decimal) -> String {
    let mut rounded = round(value, 1);
    rounded.rescale(1);
    if rounded.is_zero() {
        return "0.0%".to_string();
    }
    if rounded.is_sign_positive() {
        format!("+{rounded}%")
    } else {
        format!("{rounded}%")
    }
}
