use super::OrderItem;
use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9 ]+").unwrap());

/// Drop everything except ASCII digits and spaces, then parse.
///
/// Returns 0 whenever the remainder is not a valid integer (empty, contains
/// a space, overflows). OCR noise must never abort an extraction, so this
/// is the only numeric parse used for subtotal and total lines.
pub fn digits_or_zero(raw: &str) -> i64 {
    NON_DIGIT_RE.replace_all(raw, "").parse().unwrap_or(0)
}

/// Value of the last whitespace-separated token, e.g. `Rp.90.000` → 90000.
pub fn trailing_amount(line: &str) -> i64 {
    line.split_whitespace()
        .next_back()
        .map(digits_or_zero)
        .unwrap_or(0)
}

/// Split an item line into quantity, name and price.
///
/// Expects a line that already passed `is_item_line`. Fields that fail to
/// parse become 0; the item itself is always produced.
pub fn parse_item_line(line: &str) -> OrderItem {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let qty = tokens
        .first()
        .and_then(|t| t.replace('x', "").parse::<u32>().ok())
        .unwrap_or(0);

    // "25.000" → 25000; anything left that is not a plain number is 0
    let subtotal = tokens
        .last()
        .and_then(|t| t.replace('.', "").parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .unwrap_or(0);

    let name = tokens
        .get(1..tokens.len().saturating_sub(1))
        .map(|middle| middle.join(" "))
        .unwrap_or_default();

    OrderItem { name, qty, subtotal }
}
