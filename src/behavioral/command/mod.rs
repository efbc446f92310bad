//! Command: requests turned into objects that can be passed around, undone,
//! or stored and run later.

pub mod documents;
pub mod queue;
pub mod scraping;

use std::cell::RefCell;
use std::rc::Rc;

use crate::output;
use documents::{document_queue_example, DocumentCommand};
use queue::Queue;
use scraping::{demo_site, scraping_example, ScrapeCommand, DEMO_GENRES_URL};

// ============================================================================
// Example: Command Pattern - Invoker, Commands and a Receiver
// ============================================================================

pub trait Command {
    fn execute(&self) -> Vec<String>;
}

pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> Vec<String> {
        vec![format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        )]
    }
}

pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str) -> String {
        format!("Receiver: Working on ({a}.)")
    }

    pub fn do_something_else(&self, b: &str) -> String {
        format!("Receiver: Also working on ({b}.)")
    }
}

/// Hands the real work to a receiver.
pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> Vec<String> {
        vec![
            "ComplexCommand: Complex stuff should be done by a receiver object.".to_string(),
            self.receiver.do_something(&self.a),
            self.receiver.do_something_else(&self.b),
        ]
    }
}

#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self) -> Vec<String> {
        let mut lines =
            vec!["Invoker: Does anybody want something done before I begin?".to_string()];
        if let Some(command) = &self.on_start {
            lines.extend(command.execute());
        }

        lines.push("Invoker: ...doing something really important...".to_string());

        lines.push("Invoker: Does anybody want something done after I finish?".to_string());
        if let Some(command) = &self.on_finish {
            lines.extend(command.execute());
        }
        lines
    }
}

pub fn concept_example() -> Vec<String> {
    let mut invoker = Invoker::default();
    invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));
    let receiver = Rc::new(Receiver);
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        receiver,
        "Send email",
        "Save report",
    )));
    invoker.do_something_important()
}

// ============================================================================
// Example: Home Automation with Undo
// ============================================================================

pub trait UndoableCommand {
    fn execute(&self) -> String;
    fn undo(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Light {
    pub on: bool,
}

#[derive(Debug, Default)]
pub struct Thermostat {
    pub temperature: Option<i32>,
}

#[derive(Debug, Default)]
pub struct SecuritySystem {
    pub active: bool,
}

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl UndoableCommand for LightOnCommand {
    fn execute(&self) -> String {
        self.light.borrow_mut().on = true;
        "Light: Turned on".to_string()
    }

    fn undo(&self) -> String {
        self.light.borrow_mut().on = false;
        "Light: Turned off".to_string()
    }
}

pub struct ThermostatSetCommand {
    thermostat: Rc<RefCell<Thermostat>>,
    temperature: i32,
}

impl ThermostatSetCommand {
    pub fn new(thermostat: Rc<RefCell<Thermostat>>, temperature: i32) -> Self {
        Self {
            thermostat,
            temperature,
        }
    }
}

impl UndoableCommand for ThermostatSetCommand {
    fn execute(&self) -> String {
        self.thermostat.borrow_mut().temperature = Some(self.temperature);
        format!("Thermostat: Set temperature to {}°C", self.temperature)
    }

    fn undo(&self) -> String {
        self.thermostat.borrow_mut().temperature = None;
        "Thermostat: Reset to default temperature".to_string()
    }
}

pub struct SecurityActivateCommand {
    security: Rc<RefCell<SecuritySystem>>,
}

impl SecurityActivateCommand {
    pub fn new(security: Rc<RefCell<SecuritySystem>>) -> Self {
        Self { security }
    }
}

impl UndoableCommand for SecurityActivateCommand {
    fn execute(&self) -> String {
        self.security.borrow_mut().active = true;
        "SecuritySystem: Activated".to_string()
    }

    fn undo(&self) -> String {
        self.security.borrow_mut().active = false;
        "SecuritySystem: Deactivated".to_string()
    }
}

#[derive(Default)]
pub struct HomeAutomationController {
    history: Vec<Box<dyn UndoableCommand>>,
}

impl HomeAutomationController {
    pub fn execute_command(&mut self, command: Box<dyn UndoableCommand>) -> String {
        let line = command.execute();
        self.history.push(command);
        line
    }

    /// `None` when there is nothing left to undo.
    pub fn undo_last_command(&mut self) -> Option<String> {
        self.history.pop().map(|command| command.undo())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

pub fn home_automation_example() -> Vec<String> {
    let light = Rc::new(RefCell::new(Light::default()));
    let thermostat = Rc::new(RefCell::new(Thermostat::default()));
    let security = Rc::new(RefCell::new(SecuritySystem::default()));

    let mut controller = HomeAutomationController::default();
    let mut lines = vec![
        controller.execute_command(Box::new(LightOnCommand::new(light))),
        controller.execute_command(Box::new(ThermostatSetCommand::new(thermostat, 22))),
        controller.execute_command(Box::new(SecurityActivateCommand::new(security))),
    ];

    for heading in ["Undo Last Command", "Undo Another Command", "Undo Last Command"] {
        lines.push(String::new());
        lines.push(format!("--- {heading} ---"));
        lines.extend(controller.undo_last_command());
    }
    lines
}

pub fn run() {
    output::title("Pattern: Command");

    output::section("Command (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Home Automation");
    output::lines(home_automation_example());
    println!();

    output::section("Document Processing Queue");
    match Queue::<DocumentCommand>::in_memory().and_then(|queue| document_queue_example(&queue))
    {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
    println!();

    output::section("Web Scraping Queue (offline site)");
    let site = demo_site();
    match Queue::<ScrapeCommand>::in_memory()
        .and_then(|queue| scraping_example(&queue, &site, DEMO_GENRES_URL))
    {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
}

// ============================================================================
// Tests
// ============================================================================
