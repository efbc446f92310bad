//! Strategy: a family of interchangeable algorithms behind one trait, picked
//! at runtime by the context that uses them.

use crate::error::{PatternError, Result};
use crate::output;

// ============================================================================
// Example: Strategy Pattern - Sorting
// ============================================================================

pub trait SortStrategy {
    fn do_algorithm(&self, data: &[&str]) -> Vec<String>;
}

pub struct AscendingSort;

impl SortStrategy for AscendingSort {
    fn do_algorithm(&self, data: &[&str]) -> Vec<String> {
        let mut sorted: Vec<String> = data.iter().map(|s| s.to_string()).collect();
        sorted.sort();
        sorted
    }
}

pub struct DescendingSort;

impl SortStrategy for DescendingSort {
    fn do_algorithm(&self, data: &[&str]) -> Vec<String> {
        let mut sorted: Vec<String> = data.iter().map(|s| s.to_string()).collect();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted
    }
}

pub struct Context {
    strategy: Box<dyn SortStrategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    pub fn do_some_business_logic(&self) -> Vec<String> {
        let result = self.strategy.do_algorithm(&["a", "b", "c", "d", "e"]);
        vec![
            "Context: Sorting data using the strategy (not sure how it'll do it)".to_string(),
            result.join(","),
        ]
    }
}

pub fn concept_example() -> Vec<String> {
    let mut context = Context::new(Box::new(AscendingSort));
    let mut lines = vec!["Client: Strategy is set to normal sorting.".to_string()];
    lines.extend(context.do_some_business_logic());

    lines.push(String::new());
    lines.push("Client: Strategy is set to reverse sorting.".to_string());
    context.set_strategy(Box::new(DescendingSort));
    lines.extend(context.do_some_business_logic());
    lines
}

// ============================================================================
// Example: Notification Channels
// ============================================================================

pub trait NotificationMethod {
    fn send_notification(&self, recipient: &str, message: &str) -> String;
}

pub struct EmailNotification;

impl NotificationMethod for EmailNotification {
    fn send_notification(&self, recipient: &str, message: &str) -> String {
        format!("Sending Email to {recipient}: {message}")
    }
}

pub struct SmsNotification;

impl NotificationMethod for SmsNotification {
    fn send_notification(&self, recipient: &str, message: &str) -> String {
        format!("Sending SMS to {recipient}: {message}")
    }
}

pub struct PushNotification;

impl NotificationMethod for PushNotification {
    fn send_notification(&self, recipient: &str, message: &str) -> String {
        format!("Sending Push Notification to {recipient}: {message}")
    }
}

#[derive(Default)]
pub struct NotificationService {
    method: Option<Box<dyn NotificationMethod>>,
}

impl NotificationService {
    pub fn set_notification_method(&mut self, method: Box<dyn NotificationMethod>) {
        self.method = Some(method);
    }

    pub fn send(&self, recipient: &str, message: &str) -> Result<String> {
        let method = self.method.as_ref().ok_or(PatternError::NoStrategy)?;
        Ok(method.send_notification(recipient, message))
    }
}

pub fn notification_example() -> Result<Vec<String>> {
    let mut service = NotificationService::default();
    let mut lines = vec!["Client: Setting up the Notification Service.".to_string()];

    if let Err(e) = service.send("nobody", "ping") {
        lines.push(format!("Client: Sending before choosing a method fails: {e}"));
    }

    lines.push("Client: Choosing Email Notification.".to_string());
    service.set_notification_method(Box::new(EmailNotification));
    lines.push(service.send("john.doe@example.com", "Your order has been shipped!")?);

    lines.push("Client: Switching to SMS Notification.".to_string());
    service.set_notification_method(Box::new(SmsNotification));
    lines.push(service.send("+1234567890", "Your package is out for delivery.")?);

    lines.push("Client: Switching to Push Notification.".to_string());
    service.set_notification_method(Box::new(PushNotification));
    lines.push(service.send("DeviceID123", "You have a new message!")?);
    Ok(lines)
}

// ============================================================================
// Example: Payment Methods
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrder {
    pub id: u32,
    pub email: String,
    pub product: String,
    pub total: f64,
}

pub trait PaymentMethod {
    fn label(&self) -> &'static str;

    fn pay(&self, order: &PaymentOrder) -> Vec<String> {
        vec![
            format!("Processing {} Payment for Order #{}:", self.label(), order.id),
            format!("    Customer Email: {}", order.email),
            format!("    Product: {}", order.product),
            format!("    Total: ${:.2}", order.total),
            "    Payment Status: SUCCESS".to_string(),
        ]
    }
}

pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &'static str {
        "Credit Card"
    }
}

pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn label(&self) -> &'static str {
        "PayPal"
    }
}

/// Hands out order ids 1, 2, 3, ... in creation order.
pub struct OrderController {
    payment_method: Box<dyn PaymentMethod>,
    last_id: u32,
}

impl OrderController {
    pub fn new(payment_method: Box<dyn PaymentMethod>) -> Self {
        Self {
            payment_method,
            last_id: 0,
        }
    }

    pub fn set_payment_method(&mut self, method: Box<dyn PaymentMethod>) {
        self.payment_method = method;
    }

    pub fn process_order(&mut self, email: &str, product: &str, total: f64) -> Vec<String> {
        self.last_id += 1;
        let order = PaymentOrder {
            id: self.last_id,
            email: email.to_string(),
            product: product.to_string(),
            total,
        };

        let mut lines = vec![format!("OrderController: Created Order #{}", order.id)];
        lines.extend(self.payment_method.pay(&order));
        lines
    }
}

pub fn payment_example() -> Vec<String> {
    let mut lines = vec!["Client: Let's create an order and pay with Credit Card.".to_string()];
    let mut controller = OrderController::new(Box::new(CreditCardPayment));
    lines.extend(controller.process_order("customer@example.com", "Premium Headphones", 199.99));

    lines.push(String::new());
    lines.push("Client: Now, let's pay for another order with PayPal.".to_string());
    controller.set_payment_method(Box::new(PayPalPayment));
    lines.extend(controller.process_order("customer@example.com", "Gaming Mouse", 49.99));
    lines
}

pub fn run() {
    output::title("Pattern: Strategy");

    output::section("Strategy (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Notification System");
    match notification_example() {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
    println!();

    output::section("Payment Methods");
    output::lines(payment_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sorting_strategies() {
        let lines = concept_example();
        assert_eq!(lines[2], "a,b,c,d,e");
        assert_eq!(lines[6], "e,d,c,b,a");
    }

    #[test]
    fn test_send_without_method() {
        let service = NotificationService::default();
        let err = service.send("x", "y").unwrap_err();
        assert!(matches!(err, PatternError::NoStrategy));
        assert_eq!(err.to_string(), "No notification method set.");
    }

    #[test]
    fn test_switching_notification_method() {
        let mut service = NotificationService::default();
        service.set_notification_method(Box::new(SmsNotification));
        assert_eq!(service.send("+1", "hi").unwrap(), "Sending SMS to +1: hi");
        service.set_notification_method(Box::new(PushNotification));
        assert!(service.send("dev", "hi").unwrap().starts_with("Sending Push"));
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let mut controller = OrderController::new(Box::new(PayPalPayment));
        let lines = controller.process_order("a@b.c", "x", 1.0);
        assert_eq!(lines[0], "OrderController: Created Order #1");
        let lines = controller.process_order("a@b.c", "y", 2.5);
        assert_eq!(lines[0], "OrderController: Created Order #2");
        assert_eq!(lines[1], "Processing PayPal Payment for Order #2:");
        assert_eq!(lines[4], "    Total: $2.50");
    }

    proptest! {
        #[test]
        fn test_strategies_are_mirror_images(words in prop::collection::vec("[a-z]{1,6}", 0..12)) {
            let data: Vec<&str> = words.iter().map(String::as_str).collect();
            let ascending = AscendingSort.do_algorithm(&data);
            let mut descending = DescendingSort.do_algorithm(&data);
            descending.reverse();

            prop_assert_eq!(&ascending, &descending);
            prop_assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
