//! Abstract Factory: one factory per product family, client code that only
//! ever talks to the factory trait.

use std::collections::BTreeMap;

use crate::output;

// ============================================================================
// Example: Abstract Factory - Conceptual Products
// ============================================================================

pub trait AbstractProductA {
    fn useful_function_a(&self) -> String;
}

pub trait AbstractProductB {
    fn useful_function_b(&self) -> String;

    /// B products can collaborate with any A product of the same family.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

struct ConcreteProductA1;
impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

struct ConcreteProductA2;
impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

struct ConcreteProductB1;
impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of B1 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

struct ConcreteProductB2;
impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of B2 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

pub struct ConcreteFactory1;
impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }
    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

pub struct ConcreteFactory2;
impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }
    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

pub fn client_code(factory: &dyn AbstractFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    vec![
        product_b.useful_function_b(),
        product_b.another_useful_function_b(product_a.as_ref()),
    ]
}

pub fn concept_example() -> Vec<String> {
    let mut lines = vec!["Client: Testing client code with the first factory type:".to_string()];
    lines.extend(client_code(&ConcreteFactory1));
    lines.push(String::new());
    lines.push("Client: Testing the same client code with the second factory type:".to_string());
    lines.extend(client_code(&ConcreteFactory2));
    lines
}

// ============================================================================
// Example: Database Connections
// ============================================================================

pub trait Connection {
    fn connect(&self) -> String;
}

pub trait Query {
    fn execute(&self) -> String;
}

pub trait DatabaseFactory {
    fn create_connection(&self) -> Box<dyn Connection>;
    fn create_query(&self) -> Box<dyn Query>;
}

struct MySqlConnection;
impl Connection for MySqlConnection {
    fn connect(&self) -> String {
        "Connected to MySQL database.".to_string()
    }
}

struct MySqlQuery;
impl Query for MySqlQuery {
    fn execute(&self) -> String {
        "Executing MySQL query.".to_string()
    }
}

struct PostgreSqlConnection;
impl Connection for PostgreSqlConnection {
    fn connect(&self) -> String {
        "Connected to PostgreSQL database.".to_string()
    }
}

struct PostgreSqlQuery;
impl Query for PostgreSqlQuery {
    fn execute(&self) -> String {
        "Executing PostgreSQL query.".to_string()
    }
}

pub struct MySqlFactory;
impl DatabaseFactory for MySqlFactory {
    fn create_connection(&self) -> Box<dyn Connection> {
        Box::new(MySqlConnection)
    }
    fn create_query(&self) -> Box<dyn Query> {
        Box::new(MySqlQuery)
    }
}

pub struct PostgreSqlFactory;
impl DatabaseFactory for PostgreSqlFactory {
    fn create_connection(&self) -> Box<dyn Connection> {
        Box::new(PostgreSqlConnection)
    }
    fn create_query(&self) -> Box<dyn Query> {
        Box::new(PostgreSqlQuery)
    }
}

pub fn use_database(factory: &dyn DatabaseFactory) -> Vec<String> {
    vec![
        factory.create_connection().connect(),
        factory.create_query().execute(),
    ]
}

pub fn database_example() -> Vec<String> {
    let mut lines = vec!["Testing MySQL factory:".to_string()];
    lines.extend(use_database(&MySqlFactory));
    lines.push(String::new());
    lines.push("Testing PostgreSQL factory:".to_string());
    lines.extend(use_database(&PostgreSqlFactory));
    lines
}

// ============================================================================
// Example: UI Components per Platform
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn toggle(&self) -> String;
}

pub trait UiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsButton;
impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering Windows button.".to_string()
    }
}

struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn toggle(&self) -> String {
        "Toggling Windows checkbox.".to_string()
    }
}

struct MacButton;
impl Button for MacButton {
    fn render(&self) -> String {
        "Rendering Mac button.".to_string()
    }
}

struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn toggle(&self) -> String {
        "Toggling Mac checkbox.".to_string()
    }
}

pub struct WindowsFactory;
impl UiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;
impl UiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

pub fn render_ui(factory: &dyn UiFactory) -> Vec<String> {
    vec![
        factory.create_button().render(),
        factory.create_checkbox().toggle(),
    ]
}

pub fn ui_example() -> Vec<String> {
    let mut lines = vec!["Testing Windows UI factory:".to_string()];
    lines.extend(render_ui(&WindowsFactory));
    lines.push(String::new());
    lines.push("Testing Mac UI factory:".to_string());
    lines.extend(render_ui(&MacFactory));
    lines
}

// ============================================================================
// Example: Notification Providers
// ============================================================================

pub trait EmailService {
    fn send_email(&self) -> String;
}

pub trait SmsService {
    fn send_sms(&self) -> String;
}

pub trait NotificationFactory {
    fn create_email_service(&self) -> Box<dyn EmailService>;
    fn create_sms_service(&self) -> Box<dyn SmsService>;
}

/// Both providers only differ by name, so one struct per channel carries it.
struct ProviderEmail(&'static str);
impl EmailService for ProviderEmail {
    fn send_email(&self) -> String {
        format!("Sending email via {}.", self.0)
    }
}

struct ProviderSms(&'static str);
impl SmsService for ProviderSms {
    fn send_sms(&self) -> String {
        format!("Sending SMS via {}.", self.0)
    }
}

pub struct GmailFactory;
impl NotificationFactory for GmailFactory {
    fn create_email_service(&self) -> Box<dyn EmailService> {
        Box::new(ProviderEmail("Gmail"))
    }
    fn create_sms_service(&self) -> Box<dyn SmsService> {
        Box::new(ProviderSms("Gmail"))
    }
}

pub struct YahooFactory;
impl NotificationFactory for YahooFactory {
    fn create_email_service(&self) -> Box<dyn EmailService> {
        Box::new(ProviderEmail("Yahoo"))
    }
    fn create_sms_service(&self) -> Box<dyn SmsService> {
        Box::new(ProviderSms("Yahoo"))
    }
}

pub fn send_notifications(factory: &dyn NotificationFactory) -> Vec<String> {
    vec![
        factory.create_email_service().send_email(),
        factory.create_sms_service().send_sms(),
    ]
}

pub fn notification_example() -> Vec<String> {
    let mut lines = vec!["Testing Gmail notification factory:".to_string()];
    lines.extend(send_notifications(&GmailFactory));
    lines.push(String::new());
    lines.push("Testing Yahoo notification factory:".to_string());
    lines.extend(send_notifications(&YahooFactory));
    lines
}

// ============================================================================
// Example: Web Templates (Twig vs PHPTemplate)
// ============================================================================

pub trait TitleTemplate {
    fn template_string(&self) -> String;
}

pub trait PageTemplate {
    fn template_string(&self) -> String;
}

pub trait TemplateRenderer {
    fn render(&self, template: &str, arguments: &BTreeMap<&str, &str>) -> String;
}

pub trait TemplateFactory {
    fn create_title_template(&self) -> Box<dyn TitleTemplate>;
    fn create_page_template(&self) -> Box<dyn PageTemplate>;
    fn renderer(&self) -> Box<dyn TemplateRenderer>;
}

struct TwigTitleTemplate;
impl TitleTemplate for TwigTitleTemplate {
    fn template_string(&self) -> String {
        "<h1>{{ title }}</h1>".to_string()
    }
}

struct PhpTitleTemplate;
impl TitleTemplate for PhpTitleTemplate {
    fn template_string(&self) -> String {
        "<h1><?= $title; ?></h1>".to_string()
    }
}

/// A page embeds the title template produced by the same factory.
struct TwigPageTemplate {
    title: Box<dyn TitleTemplate>,
}

impl PageTemplate for TwigPageTemplate {
    fn template_string(&self) -> String {
        format!(
            "<div class=\"page\">\n  {}\n  <article class=\"content\">{{{{ content }}}}</article>\n</div>",
            self.title.template_string()
        )
    }
}

struct PhpPageTemplate {
    title: Box<dyn TitleTemplate>,
}

impl PageTemplate for PhpPageTemplate {
    fn template_string(&self) -> String {
        format!(
            "<div class=\"page\">\n  {}\n  <article class=\"content\"><?= $content; ?></article>\n</div>",
            self.title.template_string()
        )
    }
}

struct TwigRenderer;
impl TemplateRenderer for TwigRenderer {
    fn render(&self, template: &str, arguments: &BTreeMap<&str, &str>) -> String {
        arguments.iter().fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{{ {key} }}}}"), value)
        })
    }
}

struct PhpTemplateRenderer;
impl TemplateRenderer for PhpTemplateRenderer {
    fn render(&self, template: &str, arguments: &BTreeMap<&str, &str>) -> String {
        arguments.iter().fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("<?= ${key}; ?>"), value)
        })
    }
}

pub struct TwigTemplateFactory;
impl TemplateFactory for TwigTemplateFactory {
    fn create_title_template(&self) -> Box<dyn TitleTemplate> {
        Box::new(TwigTitleTemplate)
    }
    fn create_page_template(&self) -> Box<dyn PageTemplate> {
        Box::new(TwigPageTemplate {
            title: self.create_title_template(),
        })
    }
    fn renderer(&self) -> Box<dyn TemplateRenderer> {
        Box::new(TwigRenderer)
    }
}

pub struct PhpTemplateFactory;
impl TemplateFactory for PhpTemplateFactory {
    fn create_title_template(&self) -> Box<dyn TitleTemplate> {
        Box::new(PhpTitleTemplate)
    }
    fn create_page_template(&self) -> Box<dyn PageTemplate> {
        Box::new(PhpPageTemplate {
            title: self.create_title_template(),
        })
    }
    fn renderer(&self) -> Box<dyn TemplateRenderer> {
        Box::new(PhpTemplateRenderer)
    }
}

pub struct Page {
    pub title: String,
    pub content: String,
}

impl Page {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn render(&self, factory: &dyn TemplateFactory) -> String {
        let template = factory.create_page_template().template_string();
        let arguments = BTreeMap::from([
            ("title", self.title.as_str()),
            ("content", self.content.as_str()),
        ]);
        factory.renderer().render(&template, &arguments)
    }
}

pub fn web_template_example() -> Vec<String> {
    let page = Page::new("Sample page", "This is the body.");
    vec![
        "Testing actual rendering with the PHPTemplate factory:".to_string(),
        page.render(&PhpTemplateFactory),
        String::new(),
        "Testing actual rendering with the Twig factory:".to_string(),
        page.render(&TwigTemplateFactory),
    ]
}

pub fn run() {
    output::title("Pattern: Abstract Factory");

    output::section("Abstract Factory (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Database Connections");
    output::lines(database_example());
    println!();

    output::section("UI Components");
    output::lines(ui_example());
    println!();

    output::section("Notification Services");
    output::lines(notification_example());
    println!();

    output::section("Web Templates");
    output::lines(web_template_example());
}

// ============================================================================
// Tests
// ============================================================================
