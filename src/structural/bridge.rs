//! Bridge: an abstraction holds a boxed implementation, so both sides can
//! grow independently.

use crate::output;

// ============================================================================
// Example: Bridge Pattern - Concept
// ============================================================================

pub trait Implementation {
    fn operation_implementation(&self) -> String;
}

pub struct ConcreteImplementationA;
impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.\n".to_string()
    }
}

pub struct ConcreteImplementationB;
impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.\n".to_string()
    }
}

pub trait Operation {
    fn operation(&self) -> String;
}

pub struct Abstraction {
    implementation: Box<dyn Implementation>,
}

impl Abstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Operation for Abstraction {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

pub struct ExtendedAbstraction {
    implementation: Box<dyn Implementation>,
}

impl ExtendedAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Operation for ExtendedAbstraction {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

pub fn concept_example() -> String {
    let base = Abstraction::new(Box::new(ConcreteImplementationA));
    let extended = ExtendedAbstraction::new(Box::new(ConcreteImplementationB));
    format!("{}\n{}", base.operation(), extended.operation())
}

// ============================================================================
// Example: Remote Controls Over Devices
// ============================================================================

pub trait Device {
    fn name(&self) -> &'static str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    fn set_volume(&mut self, volume: u8);
    fn channel(&self) -> u32;
    fn set_channel(&mut self, channel: u32);
}

#[derive(Debug)]
pub struct Television {
    on: bool,
    volume: u8,
    channel: u32,
}

impl Default for Television {
    fn default() -> Self {
        Self {
            on: false,
            volume: 10,
            channel: 1,
        }
    }
}

impl Device for Television {
    fn name(&self) -> &'static str {
        "Television"
    }
    fn is_enabled(&self) -> bool {
        self.on
    }
    fn enable(&mut self) {
        self.on = true;
    }
    fn disable(&mut self) {
        self.on = false;
    }
    fn volume(&self) -> u8 {
        self.volume
    }
    fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
    fn channel(&self) -> u32 {
        self.channel
    }
    fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }
}

/// Radios tune to a frequency; the "channel" is its value in tenths of MHz.
#[derive(Debug)]
pub struct Radio {
    on: bool,
    volume: u8,
    frequency_tenths: u32,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            on: false,
            volume: 5,
            frequency_tenths: 1015,
        }
    }
}

impl Radio {
    pub fn frequency(&self) -> f64 {
        f64::from(self.frequency_tenths) / 10.0
    }
}

impl Device for Radio {
    fn name(&self) -> &'static str {
        "Radio"
    }
    fn is_enabled(&self) -> bool {
        self.on
    }
    fn enable(&mut self) {
        self.on = true;
    }
    fn disable(&mut self) {
        self.on = false;
    }
    fn volume(&self) -> u8 {
        self.volume
    }
    fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
    fn channel(&self) -> u32 {
        self.frequency_tenths
    }
    fn set_channel(&mut self, channel: u32) {
        self.frequency_tenths = channel;
    }
}

pub struct DeviceController {
    device: Box<dyn Device>,
}

impl DeviceController {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    pub fn toggle_power(&mut self) -> Vec<String> {
        let mut lines = vec!["Controller: Toggling power...".to_string()];
        if self.device.is_enabled() {
            self.device.disable();
            lines.push(format!("{} is now OFF.", self.device.name()));
        } else {
            self.device.enable();
            lines.push(format!("{} is now ON.", self.device.name()));
        }
        lines
    }

    pub fn volume_up(&mut self) -> String {
        let volume = self.device.volume().saturating_add(1).min(100);
        self.device.set_volume(volume);
        format!("{} volume set to {}.", self.device.name(), volume)
    }

    pub fn volume_down(&mut self) -> String {
        let volume = self.device.volume().saturating_sub(1);
        self.device.set_volume(volume);
        format!("{} volume set to {}.", self.device.name(), volume)
    }
}

/// Extends the controller without touching any device type.
pub struct AdvancedDeviceController {
    base: DeviceController,
}

impl AdvancedDeviceController {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            base: DeviceController::new(device),
        }
    }

    pub fn toggle_power(&mut self) -> Vec<String> {
        self.base.toggle_power()
    }

    pub fn volume_up(&mut self) -> String {
        self.base.volume_up()
    }

    pub fn set_channel(&mut self, channel: u32) -> Vec<String> {
        self.base.device.set_channel(channel);
        vec![
            "AdvancedController: Setting channel...".to_string(),
            format!("{} channel set to {}.", self.base.device.name(), channel),
        ]
    }

    pub fn device(&self) -> &dyn Device {
        self.base.device()
    }
}

pub fn device_example() -> Vec<String> {
    let mut lines = vec!["Testing basic controller with Television:".to_string()];
    let mut tv = DeviceController::new(Box::new(Television::default()));
    lines.extend(tv.toggle_power());
    lines.push(tv.volume_up());
    lines.extend(tv.toggle_power());

    lines.push(String::new());
    lines.push("Testing advanced controller with Radio:".to_string());
    let mut radio = AdvancedDeviceController::new(Box::new(Radio::default()));
    lines.extend(radio.toggle_power());
    lines.push(radio.volume_up());
    lines.extend(radio.set_channel(1023));
    lines.extend(radio.toggle_power());
    lines
}

// ============================================================================
// Example: Payments Over Gateways
// ============================================================================

pub trait PaymentGateway {
    fn process_payment(&self, amount: f64) -> String;
}

pub struct PayPalGateway;
impl PaymentGateway for PayPalGateway {
    fn process_payment(&self, amount: f64) -> String {
        format!("PayPalGateway: Processing payment of ${amount} through PayPal.")
    }
}

pub struct StripeGateway;
impl PaymentGateway for StripeGateway {
    fn process_payment(&self, amount: f64) -> String {
        format!("StripeGateway: Processing payment of ${amount} through Stripe.")
    }
}

pub trait Payment {
    fn make_payment(&self, amount: f64) -> Vec<String>;
}

pub struct OnlinePayment {
    gateway: Box<dyn PaymentGateway>,
}

impl OnlinePayment {
    pub fn new(gateway: Box<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }
}

impl Payment for OnlinePayment {
    fn make_payment(&self, amount: f64) -> Vec<String> {
        vec![
            "OnlinePayment: Initiating online payment...".to_string(),
            self.gateway.process_payment(amount),
        ]
    }
}

pub struct InStorePayment {
    gateway: Box<dyn PaymentGateway>,
}

impl InStorePayment {
    pub fn new(gateway: Box<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }
}

impl Payment for InStorePayment {
    fn make_payment(&self, amount: f64) -> Vec<String> {
        vec![
            "InStorePayment: Initiating in-store payment...".to_string(),
            self.gateway.process_payment(amount),
        ]
    }
}

pub fn payment_example() -> Vec<String> {
    let mut lines = OnlinePayment::new(Box::new(PayPalGateway)).make_payment(100.0);
    lines.push(String::new());
    lines.extend(InStorePayment::new(Box::new(StripeGateway)).make_payment(200.0));
    lines
}

// ============================================================================
// Example: Drawing Tool (shapes over renderers)
// ============================================================================

pub trait Renderer {
    fn render_circle(&self, radius: f64) -> String;
    fn render_rectangle(&self, width: f64, height: f64) -> String;
}

pub struct VectorRenderer;
impl Renderer for VectorRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("VectorRenderer: Drawing a circle with radius {radius}.")
    }
    fn render_rectangle(&self, width: f64, height: f64) -> String {
        format!("VectorRenderer: Drawing a rectangle with dimensions {width}x{height}.")
    }
}

pub struct RasterRenderer;
impl Renderer for RasterRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("RasterRenderer: Drawing pixels for a circle with radius {radius}.")
    }
    fn render_rectangle(&self, width: f64, height: f64) -> String {
        format!("RasterRenderer: Drawing pixels for a rectangle with dimensions {width}x{height}.")
    }
}

pub trait Shape {
    fn draw(&self) -> String;
    fn resize(&mut self, factor: f64) -> String;
}

pub struct Circle {
    renderer: Box<dyn Renderer>,
    radius: f64,
}

impl Circle {
    pub fn new(renderer: Box<dyn Renderer>, radius: f64) -> Self {
        Self { renderer, radius }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }

    fn resize(&mut self, factor: f64) -> String {
        self.radius *= factor;
        format!("Circle resized to new radius: {}", self.radius)
    }
}

pub struct Rectangle {
    renderer: Box<dyn Renderer>,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(renderer: Box<dyn Renderer>, width: f64, height: f64) -> Self {
        Self {
            renderer,
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> String {
        self.renderer.render_rectangle(self.width, self.height)
    }

    fn resize(&mut self, factor: f64) -> String {
        self.width *= factor;
        self.height *= factor;
        format!(
            "Rectangle resized to new dimensions: {}x{}",
            self.width, self.height
        )
    }
}

fn draw_resize_draw(shape: &mut dyn Shape) -> Vec<String> {
    let before = shape.draw();
    let resized = shape.resize(2.0);
    vec![before, resized, shape.draw()]
}

pub fn drawing_example() -> Vec<String> {
    let mut lines = draw_resize_draw(&mut Circle::new(Box::new(VectorRenderer), 5.0));
    lines.push(String::new());
    lines.extend(draw_resize_draw(&mut Rectangle::new(
        Box::new(RasterRenderer),
        4.0,
        6.0,
    )));
    lines
}

pub fn run() {
    output::title("Pattern: Bridge");

    output::section("Bridge (Concept)");
    print!("{}", concept_example());
    println!();

    output::section("Device Controller");
    output::lines(device_example());
    println!();

    output::section("Payment System");
    output::lines(payment_example());
    println!();

    output::section("Drawing Tool");
    output::lines(drawing_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstractions_delegate_to_platform() {
        let out = concept_example();
        assert!(out.starts_with("Abstraction: Base operation with:\nConcreteImplementationA"));
        assert!(out.contains(
            "ExtendedAbstraction: Extended operation with:\nConcreteImplementationB: Here's the result on the platform B.\n"
        ));
    }

    #[test]
    fn test_power_toggles() {
        let mut controller = DeviceController::new(Box::new(Television::default()));
        assert_eq!(controller.toggle_power()[1], "Television is now ON.");
        assert!(controller.device().is_enabled());
        assert_eq!(controller.toggle_power()[1], "Television is now OFF.");
        assert!(!controller.device().is_enabled());
    }

    #[test]
    fn test_advanced_controller_sets_channel() {
        let mut controller = AdvancedDeviceController::new(Box::new(Television::default()));
        controller.set_channel(42);
        assert_eq!(controller.device().channel(), 42);
        assert_eq!(controller.volume_up(), "Television volume set to 11.");
    }

    #[test]
    fn test_radio_defaults() {
        let radio = Radio::default();
        assert_eq!(radio.volume(), 5);
        assert!((radio.frequency() - 101.5).abs() < 1e-9);
    }

    #[test]
    fn test_online_payment_via_paypal() {
        assert_eq!(
            OnlinePayment::new(Box::new(PayPalGateway)).make_payment(100.0),
            vec![
                "OnlinePayment: Initiating online payment...",
                "PayPalGateway: Processing payment of $100 through PayPal.",
            ]
        );
    }

    #[test]
    fn test_resize_doubles_dimensions() {
        let lines = drawing_example();
        assert_eq!(lines[0], "VectorRenderer: Drawing a circle with radius 5.");
        assert_eq!(lines[1], "Circle resized to new radius: 10");
        assert_eq!(lines[2], "VectorRenderer: Drawing a circle with radius 10.");
        assert_eq!(
            lines[6],
            "RasterRenderer: Drawing pixels for a rectangle with dimensions 8x12."
        );
    }
}
