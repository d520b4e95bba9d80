use super::classify::{
    is_candidate, is_item_line, is_region_marker, mentions_subtotal, mentions_total,
};
use super::extract::{parse_item_line, trailing_amount};
use super::Order;
use tracing::{debug, info};

/// Forward-only scan state for one transcript.
///
/// Feed lines in transcript order, then call [`Interpreter::finish`].
/// Each instance owns its state, so independent transcripts can be
/// interpreted on separate threads without coordination.
#[derive(Debug, Default)]
pub struct Interpreter {
    in_region: bool,
    subtotal_found: bool,
    total_found: bool,
    order: Order,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) {
        if !self.in_region && is_region_marker(line) {
            info!("Order summary found");
            self.in_region = true;
        }

        if !self.in_region || !is_candidate(line) {
            return;
        }

        if is_item_line(line) {
            let item = parse_item_line(line);
            debug!(name = %item.name, qty = item.qty, subtotal = item.subtotal, "Item found");
            self.order.items.push(item);
        }

        // Total is checked before subtotal so the subtotal line itself can
        // never be taken as the total.
        if self.subtotal_found && !self.total_found && mentions_total(line) {
            self.order.total = trailing_amount(line);
            self.total_found = true;
            info!(total = self.order.total, "Total found");
        }

        if !self.subtotal_found && mentions_subtotal(line) {
            self.order.food_subtotal = trailing_amount(line);
            self.subtotal_found = true;
            info!(food_subtotal = self.order.food_subtotal, "Subtotal found");
        }
    }

    pub fn finish(self) -> Order {
        let mut order = self.order;
        order.discount_or_fee = order.total - order.food_subtotal;

        debug!(
            region = self.in_region,
            items = order.items.len(),
            items_sum = order.items_sum(),
            food_subtotal = order.food_subtotal,
            total = order.total,
            discount_or_fee = order.discount_or_fee,
            "Interpretation complete"
        );
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_line_by_line() {
        let mut interp = Interpreter::new();
        interp.feed("Order Summary");
        interp.feed("1x Es Jeruk 8.000");
        interp.feed("Subtotal Rp 8.000");
        interp.feed("Total Rp 10.000");
        let order = interp.finish();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.food_subtotal, 8000);
        assert_eq!(order.total, 10000);
        assert_eq!(order.discount_or_fee, 2000);
    }

    #[test]
    fn test_lines_before_marker_are_noise() {
        let mut interp = Interpreter::new();
        interp.feed("2x Fried Rice 25.000");
        interp.feed("Subtotal Rp 50.000");
        interp.feed("order summary");
        interp.feed("Total Rp 45.000");
        let order = interp.finish();

        assert!(order.items.is_empty());
        assert_eq!(order.food_subtotal, 0);
        assert_eq!(order.total, 0);
    }

    #[test]
    fn test_marker_line_is_a_candidate() {
        let mut interp = Interpreter::new();
        interp.feed("Order Summary Subtotal Rp 12.000");
        let order = interp.finish();
        assert_eq!(order.food_subtotal, 12000);
        assert_eq!(order.total, 0);
    }

    #[test]
    fn test_region_never_closes() {
        let mut interp = Interpreter::new();
        interp.feed("Order Summary");
        interp.feed("Thank you!");
        interp.feed("");
        interp.feed("4x Kerupuk 4.000");
        let order = interp.finish();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].qty, 4);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Interpreter::new();
        let mut b = Interpreter::new();
        a.feed("Order Summary");
        b.feed("1x Tahu 3.000");
        a.feed("1x Tahu 3.000");

        assert_eq!(a.finish().items.len(), 1);
        assert!(b.finish().items.is_empty());
    }

    #[test]
    fn test_empty_finish() {
        assert_eq!(Interpreter::new().finish(), Order::default());
    }
}
