//! Factory Method: a creator's shared logic works with whatever product its
//! `factory_method` hands back.

use crate::output;

// ============================================================================
// Example: Factory Method - Concept
// ============================================================================

pub trait Product {
    fn operation(&self) -> String;
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    /// Core logic that relies on the product but never names its type.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

struct ConcreteProduct1;
impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

struct ConcreteProduct2;
impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

pub struct ConcreteCreator1;
impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

pub struct ConcreteCreator2;
impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

pub fn concept_example() -> Vec<String> {
    let mut lines = Vec::new();
    let creators: [(&str, &dyn Creator); 2] = [
        ("ConcreteCreator1", &ConcreteCreator1),
        ("ConcreteCreator2", &ConcreteCreator2),
    ];

    for (i, (name, creator)) in creators.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("App: Launched with the {name}."));
        lines.push("Client: I'm not aware of the creator's class, but it still works.".to_string());
        lines.push(creator.some_operation());
    }
    lines
}

// ============================================================================
// Example: Notification System
// ============================================================================

pub trait NotificationService {
    fn connect(&self) -> String;
    fn send(&self, message: &str) -> String;
    fn disconnect(&self) -> String;
}

pub trait NotificationSender {
    fn notification_service(&self) -> Box<dyn NotificationService>;

    fn send_notification(&self, message: &str) -> Vec<String> {
        let service = self.notification_service();
        vec![
            service.connect(),
            service.send(message),
            service.disconnect(),
        ]
    }
}

struct EmailService {
    email: String,
}

impl NotificationService for EmailService {
    fn connect(&self) -> String {
        format!("Connecting to email service with {}...", self.email)
    }
    fn send(&self, message: &str) -> String {
        format!("Sending email to {}: {}", self.email, message)
    }
    fn disconnect(&self) -> String {
        "Disconnecting from email service...".to_string()
    }
}

struct SmsService {
    phone_number: String,
}

impl NotificationService for SmsService {
    fn connect(&self) -> String {
        format!("Connecting to SMS service for {}...", self.phone_number)
    }
    fn send(&self, message: &str) -> String {
        format!("Sending SMS to {}: {}", self.phone_number, message)
    }
    fn disconnect(&self) -> String {
        "Disconnecting from SMS service...".to_string()
    }
}

pub struct EmailNotificationSender {
    pub email: String,
}

impl NotificationSender for EmailNotificationSender {
    fn notification_service(&self) -> Box<dyn NotificationService> {
        Box::new(EmailService {
            email: self.email.clone(),
        })
    }
}

pub struct SmsNotificationSender {
    pub phone_number: String,
}

impl NotificationSender for SmsNotificationSender {
    fn notification_service(&self) -> Box<dyn NotificationService> {
        Box::new(SmsService {
            phone_number: self.phone_number.clone(),
        })
    }
}

pub fn notification_example() -> Vec<String> {
    let email = EmailNotificationSender {
        email: "john@example.com".to_string(),
    };
    let sms = SmsNotificationSender {
        phone_number: "+123456789".to_string(),
    };

    let mut lines = vec!["Sending Email Notification:".to_string()];
    lines.extend(email.send_notification("Hello via Email!"));
    lines.push(String::new());
    lines.push("Sending SMS Notification:".to_string());
    lines.extend(sms.send_notification("Hello via SMS!"));
    lines
}

// ============================================================================
// Example: Payment Gateway
// ============================================================================

pub trait PaymentGatewayConnector {
    fn connect(&self) -> String;
    fn pay(&self, amount: f64) -> String;
    fn disconnect(&self) -> String;
}

pub trait PaymentProcessor {
    fn connector(&self) -> Box<dyn PaymentGatewayConnector>;

    fn process_payment(&self, amount: f64) -> Vec<String> {
        let connector = self.connector();
        vec![
            connector.connect(),
            connector.pay(amount),
            connector.disconnect(),
        ]
    }
}

struct PayPalConnector {
    username: String,
}

impl PaymentGatewayConnector for PayPalConnector {
    fn connect(&self) -> String {
        format!("Connecting to PayPal using {}...", self.username)
    }
    fn pay(&self, amount: f64) -> String {
        format!("Paying ${amount:.2} via PayPal...")
    }
    fn disconnect(&self) -> String {
        "Disconnecting from PayPal...".to_string()
    }
}

struct StripeConnector {
    api_key: String,
}

impl PaymentGatewayConnector for StripeConnector {
    fn connect(&self) -> String {
        format!("Connecting to Stripe with API key {}...", self.api_key)
    }
    fn pay(&self, amount: f64) -> String {
        format!("Paying ${amount:.2} via Stripe...")
    }
    fn disconnect(&self) -> String {
        "Disconnecting from Stripe...".to_string()
    }
}

pub struct PayPalProcessor {
    username: String,
}

impl PayPalProcessor {
    /// The password is only needed by the real gateway; the demo never prints it.
    pub fn new(username: impl Into<String>, _password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl PaymentProcessor for PayPalProcessor {
    fn connector(&self) -> Box<dyn PaymentGatewayConnector> {
        Box::new(PayPalConnector {
            username: self.username.clone(),
        })
    }
}

pub struct StripeProcessor {
    api_key: String,
}

impl StripeProcessor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl PaymentProcessor for StripeProcessor {
    fn connector(&self) -> Box<dyn PaymentGatewayConnector> {
        Box::new(StripeConnector {
            api_key: self.api_key.clone(),
        })
    }
}

pub fn payment_example() -> Vec<String> {
    let mut lines = vec!["Using PayPal Processor:".to_string()];
    lines.extend(PayPalProcessor::new("user_paypal", "secret").process_payment(100.50));
    lines.push(String::new());
    lines.push("Using Stripe Processor:".to_string());
    lines.extend(StripeProcessor::new("stripe_api_key").process_payment(200.75));
    lines
}

// ============================================================================
// Example: Social Network Posting
// ============================================================================

pub trait SocialNetworkConnector {
    fn log_in(&self) -> String;
    fn log_out(&self) -> String;
    fn create_post(&self, content: &str) -> String;
}

pub trait SocialNetworkPoster {
    fn connector(&self) -> Box<dyn SocialNetworkConnector>;

    fn post(&self, content: &str) -> Vec<String> {
        let network = self.connector();
        vec![
            network.log_in(),
            network.create_post(content),
            network.log_out(),
        ]
    }
}

struct FacebookConnector {
    login: String,
    password: String,
}

impl SocialNetworkConnector for FacebookConnector {
    fn log_in(&self) -> String {
        format!(
            "Send HTTP API request to log in user {} with password {}",
            self.login, self.password
        )
    }
    fn log_out(&self) -> String {
        format!("Send HTTP API request to log out user {}", self.login)
    }
    fn create_post(&self, content: &str) -> String {
        format!("Send HTTP API requests to create a post in Facebook timeline with content: {content}")
    }
}

struct LinkedInConnector {
    email: String,
    password: String,
}

impl SocialNetworkConnector for LinkedInConnector {
    fn log_in(&self) -> String {
        format!(
            "Send HTTP API request to log in user {} with password {}",
            self.email, self.password
        )
    }
    fn log_out(&self) -> String {
        format!("Send HTTP API request to log out user {}", self.email)
    }
    fn create_post(&self, content: &str) -> String {
        format!("Send HTTP API requests to create a post in LinkedIn timeline with content: {content}")
    }
}

pub struct FacebookPoster {
    login: String,
    password: String,
}

impl FacebookPoster {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl SocialNetworkPoster for FacebookPoster {
    fn connector(&self) -> Box<dyn SocialNetworkConnector> {
        Box::new(FacebookConnector {
            login: self.login.clone(),
            password: self.password.clone(),
        })
    }
}

pub struct LinkedInPoster {
    email: String,
    password: String,
}

impl LinkedInPoster {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl SocialNetworkPoster for LinkedInPoster {
    fn connector(&self) -> Box<dyn SocialNetworkConnector> {
        Box::new(LinkedInConnector {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

fn post_twice(poster: &dyn SocialNetworkPoster) -> Vec<String> {
    let mut lines = poster.post("Hello world!");
    lines.extend(poster.post("I had a large hamburger this morning!"));
    lines
}

pub fn social_network_example() -> Vec<String> {
    let mut lines = vec!["Testing FacebookPoster:".to_string()];
    lines.extend(post_twice(&FacebookPoster::new("john_smith", "******")));
    lines.push(String::new());
    lines.push("Testing LinkedInPoster:".to_string());
    lines.extend(post_twice(&LinkedInPoster::new(
        "john_smith@example.com",
        "******",
    )));
    lines
}

pub fn run() {
    output::title("Pattern: Factory Method");

    output::section("Factory Method (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Notification System");
    output::lines(notification_example());
    println!();

    output::section("Payment Gateway");
    output::lines(payment_example());
    println!();

    output::section("Social Network");
    output::lines(social_network_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_uses_its_product() {
        assert_eq!(
            ConcreteCreator1.some_operation(),
            "Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}"
        );
        assert!(ConcreteCreator2
            .some_operation()
            .ends_with("{Result of the ConcreteProduct2}"));
    }

    #[test]
    fn test_email_notification_sequence() {
        let sender = EmailNotificationSender {
            email: "john@example.com".to_string(),
        };
        assert_eq!(
            sender.send_notification("Hi"),
            vec![
                "Connecting to email service with john@example.com...",
                "Sending email to john@example.com: Hi",
                "Disconnecting from email service...",
            ]
        );
    }

    #[test]
    fn test_payment_amount_has_two_decimals() {
        let lines = PayPalProcessor::new("user_paypal", "secret").process_payment(100.5);
        assert_eq!(lines[1], "Paying $100.50 via PayPal...");

        let lines = StripeProcessor::new("key").process_payment(200.75);
        assert_eq!(lines[0], "Connecting to Stripe with API key key...");
        assert_eq!(lines[1], "Paying $200.75 via Stripe...");
    }

    #[test]
    fn test_social_post_logs_in_and_out() {
        let lines = LinkedInPoster::new("a@b.c", "pw").post("Hi");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Send HTTP API request to log in user a@b.c with password pw");
        assert!(lines[1].ends_with("LinkedIn timeline with content: Hi"));
        assert_eq!(lines[2], "Send HTTP API request to log out user a@b.c");
    }
}
