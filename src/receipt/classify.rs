// Line predicates for the order-summary region.

/// Case-insensitive substring that opens the region we interpret.
const REGION_MARKER: &str = "order summary";

/// Rupiah marker printed on both the subtotal and the total line.
const CURRENCY_MARKER: &str = "rp";

pub fn is_region_marker(line: &str) -> bool {
    line.to_lowercase().contains(REGION_MARKER)
}

/// Lines of two characters or fewer are never classified.
pub fn is_candidate(line: &str) -> bool {
    line.chars().count() > 2
}

/// Item lines are printed as `<qty>x <name...> <price>`, e.g.
/// `2x Fried Rice 25.000`. The check is purely positional: the second
/// character is a literal `x` and the last character is a digit.
/// Anything else (leading spaces, `10x ...`, `2X ...`) is not an item.
pub fn is_item_line(line: &str) -> bool {
    line.chars().nth(1) == Some('x') && line.chars().next_back().is_some_and(|c| c.is_ascii_digit())
}

/// Also true for subtotal lines; callers rely on ordering to tell them apart.
pub fn mentions_total(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("total") && lower.contains(CURRENCY_MARKER)
}

pub fn mentions_subtotal(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("subtotal") && lower.contains(CURRENCY_MARKER)
}
