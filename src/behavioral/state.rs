//! State: an object changes behaviour when its internal state changes, by
//! swapping the state object it delegates to.

use std::mem;

use crate::output;

// ============================================================================
// Example: State Pattern - Order Lifecycle
// ============================================================================

/// Each state consumes itself and hands back the next one.
pub trait OrderState {
    fn handle(self: Box<Self>) -> (Box<dyn OrderState>, String);
    fn name(&self) -> &'static str;
}

pub struct NewOrder;

impl OrderState for NewOrder {
    fn handle(self: Box<Self>) -> (Box<dyn OrderState>, String) {
        (
            Box::new(ShippedOrder),
            "Order is new. Processing the order.".to_string(),
        )
    }

    fn name(&self) -> &'static str {
        "new"
    }
}

pub struct ShippedOrder;

impl OrderState for ShippedOrder {
    fn handle(self: Box<Self>) -> (Box<dyn OrderState>, String) {
        (
            Box::new(DeliveredOrder),
            "Order has been shipped. Waiting for delivery.".to_string(),
        )
    }

    fn name(&self) -> &'static str {
        "shipped"
    }
}

/// Terminal: processing again keeps the order delivered.
pub struct DeliveredOrder;

impl OrderState for DeliveredOrder {
    fn handle(self: Box<Self>) -> (Box<dyn OrderState>, String) {
        (
            self,
            "Order has been delivered. Thank you for your purchase!".to_string(),
        )
    }

    fn name(&self) -> &'static str {
        "delivered"
    }
}

pub struct Order {
    state: Box<dyn OrderState>,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            state: Box::new(NewOrder),
        }
    }
}

impl Order {
    pub fn process(&mut self) -> String {
        // `NewOrder` only holds the slot while the current state runs
        let state = mem::replace(&mut self.state, Box::new(NewOrder));
        let (next, message) = state.handle();
        self.state = next;
        message
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }
}

pub fn order_process_example() -> Vec<String> {
    let mut order = Order::default();
    let mut lines = vec!["Processing the order:".to_string()];
    for _ in 0..3 {
        lines.push(order.process());
    }
    lines
}

pub fn run() {
    output::title("Pattern: State");

    output::section("Order Process");
    output::lines(order_process_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_transitions() {
        let mut order = Order::default();
        assert_eq!(order.state_name(), "new");

        assert_eq!(order.process(), "Order is new. Processing the order.");
        assert_eq!(order.state_name(), "shipped");

        order.process();
        assert_eq!(order.state_name(), "delivered");
    }

    #[test]
    fn test_delivered_is_terminal() {
        let mut order = Order::default();
        for _ in 0..5 {
            order.process();
        }
        assert_eq!(order.state_name(), "delivered");
        assert_eq!(
            order.process(),
            "Order has been delivered. Thank you for your purchase!"
        );
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            order_process_example(),
            vec![
                "Processing the order:",
                "Order is new. Processing the order.",
                "Order has been shipped. Waiting for delivery.",
                "Order has been delivered. Thank you for your purchase!",
            ]
        );
    }

    #[test]
    fn test_every_step_lands_in_a_named_state() {
        let mut order = Order::default();
        let mut names = vec![order.state_name()];
        for _ in 0..4 {
            assert!(!order.process().is_empty());
            names.push(order.state_name());
        }
        assert_eq!(names, ["new", "shipped", "delivered", "delivered", "delivered"]);
    }
}
