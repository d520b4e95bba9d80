// src/receipt/mod.rs

mod classify;
mod extract;
mod interpreter;

pub use interpreter::Interpreter;

use serde::Deserialize;
use serde::Serialize;

/// A single purchased line on the receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub qty: u32,
    /// Line price in minor units, thousands separators already stripped.
    pub subtotal: i64,
}

/// Everything we can reconstruct from one receipt transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub food_subtotal: i64,
    pub total: i64,
    /// `total - food_subtotal`: negative is a discount, positive a surcharge.
    pub discount_or_fee: i64,
}

impl Order {
    /// Sum of the item prices, for comparing against the printed subtotal.
    pub fn items_sum(&self) -> i64 {
        self.items.iter().map(|item| item.subtotal).sum()
    }
}

/// Interpret an ordered sequence of OCR lines.
pub fn interpret<I, S>(lines: I) -> Order
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut interpreter = Interpreter::new();
    for line in lines {
        interpreter.feed(line.as_ref());
    }
    interpreter.finish()
}

/// Interpret a raw OCR transcript, one receipt line per text line.
pub fn interpret_text(text: &str) -> Order {
    interpret(text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)))
}
