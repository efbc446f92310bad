//! Chain of Responsibility: pass a request along a chain until one handler
//! deals with it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::output;

// ============================================================================
// Example: Chain of Responsibility - Who Eats What
// ============================================================================

/// The shared "next handler" slot. Links are `Rc` so a client can enter the
/// chain at any handler it still holds.
#[derive(Default)]
pub struct Link {
    next: RefCell<Option<Rc<dyn Handler>>>,
}

pub trait Handler {
    fn link(&self) -> &Link;

    /// This handler's own decision; `None` passes the request on.
    fn try_handle(&self, request: &str) -> Option<String>;

    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        *self.link().next.borrow_mut() = Some(Rc::clone(&next));
        next
    }

    fn handle(&self, request: &str) -> Option<String> {
        self.try_handle(request).or_else(|| {
            self.link()
                .next
                .borrow()
                .as_ref()
                .and_then(|next| next.handle(request))
        })
    }
}

#[derive(Default)]
pub struct MonkeyHandler {
    link: Link,
}

impl Handler for MonkeyHandler {
    fn link(&self) -> &Link {
        &self.link
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "Banana").then(|| format!("Monkey: I'll eat the {request}."))
    }
}

#[derive(Default)]
pub struct SquirrelHandler {
    link: Link,
}

impl Handler for SquirrelHandler {
    fn link(&self) -> &Link {
        &self.link
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "Nut").then(|| format!("Squirrel: I'll eat the {request}."))
    }
}

#[derive(Default)]
pub struct DogHandler {
    link: Link,
}

impl Handler for DogHandler {
    fn link(&self) -> &Link {
        &self.link
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "MeatBall").then(|| format!("Dog: I'll eat the {request}."))
    }
}

pub fn offer_food(handler: &dyn Handler) -> Vec<String> {
    let mut lines = Vec::new();
    for food in ["Nut", "Banana", "Cup of coffee"] {
        lines.push(format!("Client: Who wants a {food}?"));
        match handler.handle(food) {
            Some(result) => lines.push(format!("  {result}")),
            None => lines.push(format!("  {food} was left untouched.")),
        }
    }
    lines
}

pub fn concept_example() -> Vec<String> {
    let monkey: Rc<dyn Handler> = Rc::new(MonkeyHandler::default());
    let squirrel: Rc<dyn Handler> = Rc::new(SquirrelHandler::default());
    let dog: Rc<dyn Handler> = Rc::new(DogHandler::default());

    monkey.set_next(Rc::clone(&squirrel)).set_next(dog);

    let mut lines = vec!["Chain: Monkey > Squirrel > Dog".to_string(), String::new()];
    lines.extend(offer_food(monkey.as_ref()));
    lines.push(String::new());
    lines.push("Subchain: Squirrel > Dog".to_string());
    lines.push(String::new());
    lines.extend(offer_food(squirrel.as_ref()));
    lines
}

// ============================================================================
// Example: Customer Support Escalation
// ============================================================================

pub trait SupportHandler {
    fn handle_request(&self, issue: &str, log: &mut Vec<String>);
}

/// Passes the issue on, or reports that support has run out.
fn escalate(next: &Option<Box<dyn SupportHandler>>, issue: &str, log: &mut Vec<String>) {
    match next {
        Some(handler) => handler.handle_request(issue, log),
        None => log.push("SupportHandler: No further support available.".to_string()),
    }
}

pub struct BasicSupportHandler {
    next: Option<Box<dyn SupportHandler>>,
}

impl BasicSupportHandler {
    pub fn new(next: Option<Box<dyn SupportHandler>>) -> Self {
        Self { next }
    }
}

impl SupportHandler for BasicSupportHandler {
    fn handle_request(&self, issue: &str, log: &mut Vec<String>) {
        if issue == "password_reset" {
            log.push("BasicSupportHandler: Resolved the issue (Password reset).".to_string());
        } else {
            log.push("BasicSupportHandler: Escalating the issue to the next level.".to_string());
            escalate(&self.next, issue, log);
        }
    }
}

pub struct TechnicalSupportHandler {
    next: Option<Box<dyn SupportHandler>>,
}

impl TechnicalSupportHandler {
    pub fn new(next: Option<Box<dyn SupportHandler>>) -> Self {
        Self { next }
    }
}

impl SupportHandler for TechnicalSupportHandler {
    fn handle_request(&self, issue: &str, log: &mut Vec<String>) {
        if issue == "software_bug" {
            log.push("TechnicalSupportHandler: Resolved the issue (Software bug fix).".to_string());
        } else {
            log.push(
                "TechnicalSupportHandler: Escalating the issue to the next level.".to_string(),
            );
            escalate(&self.next, issue, log);
        }
    }
}

/// End of the line: never escalates further.
pub struct ManagerSupportHandler;

impl SupportHandler for ManagerSupportHandler {
    fn handle_request(&self, issue: &str, log: &mut Vec<String>) {
        if issue == "billing_issue" {
            log.push("ManagerSupportHandler: Resolved the issue (Billing issue).".to_string());
        } else {
            log.push(
                "ManagerSupportHandler: Unable to resolve the issue. Please contact higher management."
                    .to_string(),
            );
        }
    }
}

pub fn support_chain() -> BasicSupportHandler {
    BasicSupportHandler::new(Some(Box::new(TechnicalSupportHandler::new(Some(
        Box::new(ManagerSupportHandler),
    )))))
}

pub fn support_example() -> Vec<String> {
    let chain = support_chain();
    let cases = [
        ("Password reset request", "password_reset"),
        ("Software bug report", "software_bug"),
        ("Billing issue", "billing_issue"),
        ("Unknown issue", "unknown_issue"),
    ];

    let mut lines = Vec::new();
    for (i, (title, issue)) in cases.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("Case {}: {title}:", i + 1));
        chain.handle_request(issue, &mut lines);
    }
    lines
}

// ============================================================================
// Example: Order Validation
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Order {
    pub items: Vec<String>,
    pub payment_method: String,
    pub shipping_address: String,
}

pub trait OrderHandler {
    fn next(&self) -> Option<&dyn OrderHandler>;

    /// `Err` carries the handler's complaint.
    fn check(&self, order: &Order) -> Result<(), String>;

    fn handle(&self, order: &Order) -> Result<(), String> {
        self.check(order)?;
        match self.next() {
            Some(next) => next.handle(order),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct ItemsInOrderHandler {
    next: Option<Box<dyn OrderHandler>>,
}

impl ItemsInOrderHandler {
    pub fn link_with(mut self, next: Box<dyn OrderHandler>) -> Self {
        self.next = Some(next);
        self
    }
}

impl OrderHandler for ItemsInOrderHandler {
    fn next(&self) -> Option<&dyn OrderHandler> {
        self.next.as_deref()
    }

    fn check(&self, order: &Order) -> Result<(), String> {
        if order.items.is_empty() {
            return Err("ItemsInOrderHandler: The order must contain at least one item.".to_string());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct PaymentHandler {
    next: Option<Box<dyn OrderHandler>>,
}

impl PaymentHandler {
    const VALID_METHODS: [&'static str; 2] = ["credit_card", "paypal"];

    pub fn link_with(mut self, next: Box<dyn OrderHandler>) -> Self {
        self.next = Some(next);
        self
    }
}

impl OrderHandler for PaymentHandler {
    fn next(&self) -> Option<&dyn OrderHandler> {
        self.next.as_deref()
    }

    fn check(&self, order: &Order) -> Result<(), String> {
        if !Self::VALID_METHODS.contains(&order.payment_method.as_str()) {
            return Err("PaymentHandler: Invalid payment method.".to_string());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ShippingAddressHandler;

impl OrderHandler for ShippingAddressHandler {
    fn next(&self) -> Option<&dyn OrderHandler> {
        None
    }

    fn check(&self, order: &Order) -> Result<(), String> {
        if order.shipping_address.trim().is_empty() {
            return Err("ShippingAddressHandler: Shipping address is required.".to_string());
        }
        Ok(())
    }
}

pub fn order_validation_chain() -> ItemsInOrderHandler {
    ItemsInOrderHandler::default()
        .link_with(Box::new(PaymentHandler::default().link_with(Box::new(ShippingAddressHandler))))
}

pub fn validate_order(order: &Order) -> Vec<String> {
    match order_validation_chain().handle(order) {
        Ok(()) => vec!["Order is valid. Processing...".to_string()],
        Err(reason) => vec![reason, "Order validation failed.".to_string()],
    }
}

pub fn order_validation_example() -> Vec<String> {
    let orders = [
        Order {
            items: vec![],
            payment_method: "credit_card".to_string(),
            shipping_address: "123 Elm Street".to_string(),
        },
        Order {
            items: vec!["item1".to_string(), "item2".to_string()],
            payment_method: "bitcoin".to_string(),
            shipping_address: "123 Elm Street".to_string(),
        },
        Order {
            items: vec!["item1".to_string()],
            payment_method: "paypal".to_string(),
            shipping_address: "456 Maple Avenue".to_string(),
        },
    ];

    let mut lines = Vec::new();
    for (i, order) in orders.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(validate_order(order));
    }
    lines
}

pub fn run() {
    output::title("Pattern: Chain of Responsibility");

    output::section("Chain of Responsibility (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Customer Support");
    output::lines(support_example());
    println!();

    output::section("Order Validation");
    output::lines(order_validation_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_chain() {
        let lines = concept_example();
        assert_eq!(lines[2], "Client: Who wants a Nut?");
        assert_eq!(lines[3], "  Squirrel: I'll eat the Nut.");
        assert_eq!(lines[5], "  Monkey: I'll eat the Banana.");
        assert_eq!(lines[7], "  Cup of coffee was left untouched.");
    }

    #[test]
    fn test_subchain_skips_monkey() {
        let squirrel: Rc<dyn Handler> = Rc::new(SquirrelHandler::default());
        squirrel.set_next(Rc::new(DogHandler::default()));

        assert_eq!(squirrel.handle("Banana"), None);
        assert_eq!(squirrel.handle("MeatBall").as_deref(), Some("Dog: I'll eat the MeatBall."));
    }

    #[test]
    fn test_support_escalation() {
        let chain = support_chain();

        let mut log = Vec::new();
        chain.handle_request("software_bug", &mut log);
        assert_eq!(
            log,
            vec![
                "BasicSupportHandler: Escalating the issue to the next level.",
                "TechnicalSupportHandler: Resolved the issue (Software bug fix).",
            ]
        );

        let mut log = Vec::new();
        chain.handle_request("unknown_issue", &mut log);
        assert_eq!(log.len(), 3);
        assert!(log[2].starts_with("ManagerSupportHandler: Unable to resolve"));
    }

    #[test]
    fn test_support_without_next_runs_out() {
        let mut log = Vec::new();
        BasicSupportHandler::new(None).handle_request("billing_issue", &mut log);
        assert_eq!(log[1], "SupportHandler: No further support available.");
    }

    #[test]
    fn test_order_validation_outcomes() {
        assert_eq!(
            order_validation_example(),
            vec![
                "ItemsInOrderHandler: The order must contain at least one item.",
                "Order validation failed.",
                "",
                "PaymentHandler: Invalid payment method.",
                "Order validation failed.",
                "",
                "Order is valid. Processing...",
            ]
        );
    }

    #[test]
    fn test_missing_address() {
        let order = Order {
            items: vec!["x".to_string()],
            payment_method: "credit_card".to_string(),
            shipping_address: String::new(),
        };
        assert_eq!(
            validate_order(&order)[0],
            "ShippingAddressHandler: Shipping address is required."
        );
    }
}
