//! Adapter: wrap an incompatible type so it satisfies the trait clients expect.

use crate::error::{PatternError, Result};
use crate::output;

// ============================================================================
// Example: Adapter Pattern - Concept
// ============================================================================

pub trait Target {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

pub struct DefaultTarget;
impl Target for DefaultTarget {}

/// Useful behaviour behind an interface nobody else speaks.
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {translated}")
    }
}

pub fn concept_example() -> Vec<String> {
    let adaptee = Adaptee;
    let mut lines = vec![
        "Client: I can work just fine with the Target objects:".to_string(),
        DefaultTarget.request(),
        String::new(),
        "Client: The Adaptee class has a weird interface. See, I don't understand it:".to_string(),
        format!("Adaptee: {}", adaptee.specific_request()),
        String::new(),
        "Client: But I can work with it via the Adapter:".to_string(),
    ];
    lines.push(Adapter::new(adaptee).request());
    lines
}

// ============================================================================
// Example: Currency Converter API
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub note: String,
}

pub trait CurrencyCalculator {
    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion>;
}

/// Applies one fixed rate whatever the currencies.
pub struct SimpleCurrencyConverter {
    exchange_rate: f64,
}

impl Default for SimpleCurrencyConverter {
    fn default() -> Self {
        Self {
            exchange_rate: 0.85,
        }
    }
}

impl CurrencyCalculator for SimpleCurrencyConverter {
    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion> {
        Ok(Conversion {
            amount: amount * self.exchange_rate,
            note: format!("Converting {amount} {from} to {to} via SimpleCurrencyConverter."),
        })
    }
}

/// Third-party API with its own method name and a fixed rate table.
pub struct CurrencyConverterApi;

impl CurrencyConverterApi {
    const RATES: [(&'static str, &'static str, f64); 2] =
        [("USD", "EUR", 0.85), ("EUR", "USD", 1.18)];

    pub fn converted_amount(&self, amount: f64, from: &str, to: &str) -> Result<(f64, String)> {
        let rate = Self::RATES
            .iter()
            .find(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, rate)| *rate)
            .ok_or_else(|| PatternError::unsupported_conversion(from, to))?;

        Ok((
            amount * rate,
            format!("Using the API to convert {amount} {from} to {to}."),
        ))
    }
}

pub struct CurrencyConverterApiAdapter {
    api: CurrencyConverterApi,
}

impl CurrencyConverterApiAdapter {
    pub fn new(api: CurrencyConverterApi) -> Self {
        Self { api }
    }
}

impl CurrencyCalculator for CurrencyConverterApiAdapter {
    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion> {
        let (amount, note) = self.api.converted_amount(amount, from, to)?;
        Ok(Conversion { amount, note })
    }
}

fn convert_hundred_dollars(calculator: &dyn CurrencyCalculator) -> Result<Vec<String>> {
    let conversion = calculator.convert(100.0, "USD", "EUR")?;
    Ok(vec![
        conversion.note,
        format!("Converted amount: {} EUR", conversion.amount),
    ])
}

pub fn currency_example() -> Result<Vec<String>> {
    let mut lines = vec!["Using SimpleCurrencyConverter:".to_string()];
    lines.extend(convert_hundred_dollars(&SimpleCurrencyConverter::default())?);
    lines.push(String::new());
    lines.push("Using CurrencyConverterAPI through the Adapter:".to_string());
    lines.extend(convert_hundred_dollars(&CurrencyConverterApiAdapter::new(
        CurrencyConverterApi,
    ))?);
    Ok(lines)
}

// ============================================================================
// Example: PayPal Behind a Payment Processor
// ============================================================================

pub trait PaymentProcessor {
    fn pay(&self, amount: f64) -> Vec<String>;
}

pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn pay(&self, amount: f64) -> Vec<String> {
        vec![format!("Processing credit card payment of ${amount}.")]
    }
}

/// PayPal wants a login before every payment.
pub struct PayPalApi;

impl PayPalApi {
    pub fn login(&self, account: &str) -> String {
        format!("Logged in to PayPal account '{account}'.")
    }

    pub fn make_payment(&self, amount: f64) -> String {
        format!("PayPal processing payment of ${amount}.")
    }
}

pub struct PayPalAdapter {
    paypal: PayPalApi,
    account: String,
}

impl PayPalAdapter {
    pub fn new(paypal: PayPalApi, account: impl Into<String>) -> Self {
        Self {
            paypal,
            account: account.into(),
        }
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn pay(&self, amount: f64) -> Vec<String> {
        vec![
            self.paypal.login(&self.account),
            self.paypal.make_payment(amount),
        ]
    }
}

pub fn payment_example() -> Vec<String> {
    let processors: Vec<(&str, Box<dyn PaymentProcessor>)> = vec![
        ("Credit card", Box::new(CreditCardProcessor)),
        (
            "PayPal via adapter",
            Box::new(PayPalAdapter::new(PayPalApi, "user@example.com")),
        ),
    ];

    let mut lines = Vec::new();
    for (name, processor) in &processors {
        lines.push(format!("{name}:"));
        lines.extend(processor.pay(100.0));
    }
    lines
}

pub fn run() {
    output::title("Pattern: Adapter");

    output::section("Adapter (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Currency Converter");
    match currency_example() {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
    let adapter = CurrencyConverterApiAdapter::new(CurrencyConverterApi);
    if let Err(e) = adapter.convert(100.0, "USD", "JPY") {
        output::error(e);
    }
    println!();

    output::section("Payment Processing");
    output::lines(payment_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_translates() {
        assert_eq!(
            Adapter::new(Adaptee).request(),
            "Adapter: (TRANSLATED) Special behavior of the Adaptee."
        );
        assert_eq!(DefaultTarget.request(), "Target: The default target's behavior.");
    }

    #[test]
    fn test_simple_converter_rate() {
        let conversion = SimpleCurrencyConverter::default()
            .convert(100.0, "USD", "EUR")
            .unwrap();
        assert!((conversion.amount - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_api_adapter_rates() {
        let adapter = CurrencyConverterApiAdapter::new(CurrencyConverterApi);
        let eur = adapter.convert(100.0, "USD", "EUR").unwrap();
        let usd = adapter.convert(100.0, "EUR", "USD").unwrap();
        assert!((eur.amount - 85.0).abs() < 1e-9);
        assert!((usd.amount - 118.0).abs() < 1e-9);
        assert_eq!(eur.note, "Using the API to convert 100 USD to EUR.");
    }

    #[test]
    fn test_api_adapter_unsupported_pair() {
        let err = CurrencyConverterApiAdapter::new(CurrencyConverterApi)
            .convert(1.0, "GBP", "EUR")
            .unwrap_err();
        assert_eq!(err.to_string(), "Conversion from GBP to EUR not available.");
    }

    #[test]
    fn test_paypal_adapter_logs_in_first() {
        let lines = PayPalAdapter::new(PayPalApi, "user@example.com").pay(100.0);
        assert_eq!(
            lines,
            vec![
                "Logged in to PayPal account 'user@example.com'.",
                "PayPal processing payment of $100.",
            ]
        );
    }
}
