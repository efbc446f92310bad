//! Facade: one small entry point in front of several subsystems.

use crate::output;

// ============================================================================
// Example: Facade Pattern - Concept
// ============================================================================

#[derive(Default)]
pub struct Subsystem1;

impl Subsystem1 {
    pub fn operation1(&self) -> &'static str {
        "Subsystem1: Ready!\n"
    }

    pub fn operation_n(&self) -> &'static str {
        "Subsystem1: Go!\n"
    }
}

#[derive(Default)]
pub struct Subsystem2;

impl Subsystem2 {
    pub fn operation1(&self) -> &'static str {
        "Subsystem2: Get ready!\n"
    }

    pub fn operation_z(&self) -> &'static str {
        "Subsystem2: Fire!\n"
    }
}

/// Accepts existing subsystems or builds its own.
#[derive(Default)]
pub struct Facade {
    subsystem1: Subsystem1,
    subsystem2: Subsystem2,
}

impl Facade {
    pub fn new(subsystem1: Subsystem1, subsystem2: Subsystem2) -> Self {
        Self {
            subsystem1,
            subsystem2,
        }
    }

    pub fn operation(&self) -> String {
        let mut result = String::from("Facade initializes subsystems:\n");
        result.push_str(self.subsystem1.operation1());
        result.push_str(self.subsystem2.operation1());
        result.push_str("Facade orders subsystems to perform the action:\n");
        result.push_str(self.subsystem1.operation_n());
        result.push_str(self.subsystem2.operation_z());
        result
    }
}

pub fn concept_example() -> String {
    Facade::new(Subsystem1, Subsystem2).operation()
}

// ============================================================================
// Example: Smart Home Routines
// ============================================================================

#[derive(Debug, Default)]
pub struct SmartLights {
    pub on: bool,
    pub dimmed: bool,
}

impl SmartLights {
    fn turn_on(&mut self) -> String {
        self.on = true;
        self.dimmed = false;
        "Turning on the lights...".to_string()
    }

    fn dim(&mut self) -> String {
        self.on = true;
        self.dimmed = true;
        "Dimming the lights...".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Thermostat {
    pub temperature: Option<i32>,
}

impl Thermostat {
    fn set_temperature(&mut self, temperature: i32) -> String {
        self.temperature = Some(temperature);
        format!("Setting temperature to {temperature} °C...")
    }
}

#[derive(Debug, Default)]
pub struct SecuritySystem {
    pub armed: bool,
}

impl SecuritySystem {
    fn activate(&mut self) -> String {
        self.armed = true;
        "Activating the security system...".to_string()
    }

    fn deactivate(&mut self) -> String {
        self.armed = false;
        "Deactivating the security system...".to_string()
    }
}

#[derive(Debug, Default)]
pub struct SmartHomeFacade {
    pub lights: SmartLights,
    pub thermostat: Thermostat,
    pub security: SecuritySystem,
}

impl SmartHomeFacade {
    pub fn start_morning_routine(&mut self) -> Vec<String> {
        vec![
            "Starting morning routine...".to_string(),
            self.lights.turn_on(),
            self.thermostat.set_temperature(22),
            self.security.deactivate(),
            "Morning routine complete!".to_string(),
        ]
    }

    pub fn start_night_routine(&mut self) -> Vec<String> {
        vec![
            "Starting night routine...".to_string(),
            self.lights.dim(),
            self.thermostat.set_temperature(18),
            self.security.activate(),
            "Night routine complete!".to_string(),
        ]
    }
}

pub fn home_automation_example() -> Vec<String> {
    let mut facade = SmartHomeFacade::default();
    let mut lines = vec!["--- Morning Routine ---".to_string()];
    lines.extend(facade.start_morning_routine());
    lines.push(String::new());
    lines.push("--- Night Routine ---".to_string());
    lines.extend(facade.start_night_routine());
    lines
}

// ============================================================================
// Example: Meal Ordering
// ============================================================================

struct Restaurant;
impl Restaurant {
    fn prepare_meal(&self, meal: &str) -> String {
        format!("Preparing the meal: {meal}...")
    }
}

struct DeliveryService;
impl DeliveryService {
    fn deliver_meal(&self, meal: &str, address: &str) -> String {
        format!("Delivering {meal} to {address}...")
    }
}

struct MealPaymentProcessor;
impl MealPaymentProcessor {
    fn process_payment(&self, amount: f64) -> String {
        format!("Processing payment of ${amount:.2}...")
    }
}

pub struct MealOrderFacade {
    restaurant: Restaurant,
    delivery: DeliveryService,
    payments: MealPaymentProcessor,
}

impl Default for MealOrderFacade {
    fn default() -> Self {
        Self {
            restaurant: Restaurant,
            delivery: DeliveryService,
            payments: MealPaymentProcessor,
        }
    }
}

impl MealOrderFacade {
    pub fn place_order(&self, meal: &str, address: &str, amount: f64) -> Vec<String> {
        vec![
            format!("Placing order for: {meal}..."),
            self.restaurant.prepare_meal(meal),
            self.payments.process_payment(amount),
            self.delivery.deliver_meal(meal, address),
            "Order completed successfully!".to_string(),
        ]
    }
}

pub fn meal_order_example() -> Vec<String> {
    MealOrderFacade::default().place_order("Pizza Margherita", "123 Main St", 20.50)
}

pub fn run() {
    output::title("Pattern: Facade");

    output::section("Facade (Concept)");
    print!("{}", concept_example());
    println!();

    output::section("Home Automation");
    output::lines(home_automation_example());
    println!();

    output::section("Meal Order");
    output::lines(meal_order_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_operation() {
        assert_eq!(
            concept_example(),
            "Facade initializes subsystems:\nSubsystem1: Ready!\nSubsystem2: Get ready!\n\
             Facade orders subsystems to perform the action:\nSubsystem1: Go!\nSubsystem2: Fire!\n"
        );
    }

    #[test]
    fn test_routines_change_device_state() {
        let mut home = SmartHomeFacade::default();
        home.start_morning_routine();
        assert!(home.lights.on && !home.lights.dimmed);
        assert_eq!(home.thermostat.temperature, Some(22));
        assert!(!home.security.armed);

        let lines = home.start_night_routine();
        assert_eq!(lines[2], "Setting temperature to 18 °C...");
        assert!(home.lights.dimmed);
        assert!(home.security.armed);
    }

    #[test]
    fn test_meal_order_sequence() {
        let lines = meal_order_example();
        assert_eq!(lines[0], "Placing order for: Pizza Margherita...");
        assert_eq!(lines[2], "Processing payment of $20.50...");
        assert_eq!(lines[3], "Delivering Pizza Margherita to 123 Main St...");
    }
}
