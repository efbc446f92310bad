//! Decorator: wrappers that implement the same trait as what they wrap and
//! add behaviour before or after delegating.

use std::rc::Rc;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::output;

// ============================================================================
// Example: Decorator Pattern - Concept
// ============================================================================

pub trait Component {
    fn operation(&self) -> String;
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct ConcreteDecoratorA {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorA {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorA({})", self.component.operation())
    }
}

pub struct ConcreteDecoratorB {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorB({})", self.component.operation())
    }
}

pub fn concept_example() -> Vec<String> {
    let decorated = ConcreteDecoratorB::new(Box::new(ConcreteDecoratorA::new(Box::new(
        ConcreteComponent,
    ))));

    vec![
        "Client: I've got a simple component:".to_string(),
        format!("RESULT: {}", ConcreteComponent.operation()),
        String::new(),
        "Client: Now I've got a decorated component:".to_string(),
        format!("RESULT: {}", decorated.operation()),
    ]
}

// ============================================================================
// Example: Message Transformation (shared inner layers)
// ============================================================================

pub trait Message {
    fn text(&self, input: &str) -> String;
}

pub struct SimpleMessage;

impl Message for SimpleMessage {
    fn text(&self, input: &str) -> String {
        input.to_string()
    }
}

pub struct ReverseTextDecorator(pub Rc<dyn Message>);

impl Message for ReverseTextDecorator {
    fn text(&self, input: &str) -> String {
        self.0.text(input).chars().rev().collect()
    }
}

pub struct UppercaseDecorator(pub Rc<dyn Message>);

impl Message for UppercaseDecorator {
    fn text(&self, input: &str) -> String {
        self.0.text(input).to_uppercase()
    }
}

/// ROT13 "encryption".
pub struct EncryptionDecorator(pub Rc<dyn Message>);

impl Message for EncryptionDecorator {
    fn text(&self, input: &str) -> String {
        rot13(&self.0.text(input))
    }
}

pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

pub fn message_example() -> Vec<String> {
    let text = "Hello, World!";
    let message: Rc<dyn Message> = Rc::new(SimpleMessage);
    let reversed: Rc<dyn Message> = Rc::new(ReverseTextDecorator(Rc::clone(&message)));
    let uppercase: Rc<dyn Message> = Rc::new(UppercaseDecorator(Rc::clone(&reversed)));
    let encrypted = EncryptionDecorator(Rc::clone(&uppercase));

    vec![
        "Original Message:".to_string(),
        message.text(text),
        String::new(),
        "Reversed Message:".to_string(),
        reversed.text(text),
        String::new(),
        "Reversed and Uppercase Message:".to_string(),
        uppercase.text(text),
        String::new(),
        "Reversed, Uppercase, and Encrypted Message:".to_string(),
        encrypted.text(text),
    ]
}

// ============================================================================
// Example: Text Filtering for User Content
// ============================================================================

lazy_static! {
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]*>").expect("valid tag regex");
    static ref SCRIPT_BLOCK: Regex =
        Regex::new(r"(?i)<script.*?>([\s\S]*)?</script>").expect("valid script regex");
    static ref TAG_BODY: Regex = Regex::new(r"<(.*?)>").expect("valid tag body regex");
    static ref HEADER: Regex = Regex::new(r"^(#+)(.*?)$").expect("valid header regex");
    static ref STRONG_UNDERSCORE: Regex = Regex::new(r"__(.*?)__").expect("valid strong regex");
    static ref STRONG_STAR: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("valid strong regex");
    static ref EM_UNDERSCORE: Regex = Regex::new(r"_(.*?)_").expect("valid em regex");
    static ref EM_STAR: Regex = Regex::new(r"\*(.*?)\*").expect("valid em regex");
    static ref HANDLER_ATTRIBUTE: Regex =
        Regex::new(r"(?i)(onclick|onkeypress)=").expect("valid handler regex");
}

pub trait InputFormat {
    fn format_text(&self, text: &str) -> String;
}

pub struct TextInput;

impl InputFormat for TextInput {
    fn format_text(&self, text: &str) -> String {
        text.to_string()
    }
}

pub struct PlainTextFilter {
    inner: Box<dyn InputFormat>,
}

impl PlainTextFilter {
    pub fn new(inner: Box<dyn InputFormat>) -> Self {
        Self { inner }
    }
}

impl InputFormat for PlainTextFilter {
    fn format_text(&self, text: &str) -> String {
        ANY_TAG
            .replace_all(&self.inner.format_text(text), "")
            .into_owned()
    }
}

/// Drops `<script>` blocks and the `onclick=`/`onkeypress=` attribute names.
pub struct DangerousHtmlTagsFilter {
    inner: Box<dyn InputFormat>,
}

impl DangerousHtmlTagsFilter {
    pub fn new(inner: Box<dyn InputFormat>) -> Self {
        Self { inner }
    }
}

impl InputFormat for DangerousHtmlTagsFilter {
    fn format_text(&self, text: &str) -> String {
        let inner = self.inner.format_text(text);
        let text = SCRIPT_BLOCK.replace_all(&inner, "");
        TAG_BODY
            .replace_all(&text, |caps: &Captures| {
                format!("<{}>", HANDLER_ATTRIBUTE.replace_all(&caps[1], ""))
            })
            .into_owned()
    }
}

pub struct MarkdownFormat {
    inner: Box<dyn InputFormat>,
}

impl MarkdownFormat {
    pub fn new(inner: Box<dyn InputFormat>) -> Self {
        Self { inner }
    }
}

impl InputFormat for MarkdownFormat {
    fn format_text(&self, text: &str) -> String {
        let text = self.inner.format_text(text);

        let blocks: Vec<String> = text
            .split("\n\n")
            .map(|chunk| {
                if chunk.starts_with('#') {
                    HEADER
                        .replace(chunk, |caps: &Captures| {
                            let level = caps[1].len();
                            format!("<h{level}>{}</h{level}>", caps[2].trim())
                        })
                        .into_owned()
                } else {
                    format!("<p>{chunk}</p>")
                }
            })
            .collect();
        let text = blocks.join("\n\n");

        let text = STRONG_UNDERSCORE.replace_all(&text, "<strong>$1</strong>");
        let text = STRONG_STAR.replace_all(&text, "<strong>$1</strong>");
        let text = EM_UNDERSCORE.replace_all(&text, "<em>$1</em>");
        EM_STAR.replace_all(&text, "<em>$1</em>").into_owned()
    }
}

pub const DANGEROUS_COMMENT: &str = "Hello! Nice blog post!
Please visit my <a href='http://www.iwillhackyou.com'>homepage</a>.
<script src=\"http://www.iwillhackyou.com/script.js\">
  performXSSAttack();
</script>";

pub const DANGEROUS_FORUM_POST: &str = "# Welcome

This is my first post on this **gorgeous** forum.

<script src=\"http://www.iwillhackyou.com/script.js\">
  performXSSAttack();
</script>";

pub fn text_filtering_example() -> Vec<String> {
    let plain = PlainTextFilter::new(Box::new(TextInput));
    let pretty = DangerousHtmlTagsFilter::new(Box::new(MarkdownFormat::new(Box::new(TextInput))));

    vec![
        "Website renders comments without filtering (unsafe):".to_string(),
        TextInput.format_text(DANGEROUS_COMMENT),
        String::new(),
        "Website renders comments after stripping all tags (safe):".to_string(),
        plain.format_text(DANGEROUS_COMMENT),
        String::new(),
        "Website renders a forum post without filtering and formatting (unsafe, ugly):".to_string(),
        TextInput.format_text(DANGEROUS_FORUM_POST),
        String::new(),
        "Website renders a forum post after translating markdown markup and filtering some dangerous HTML tags and attributes (safe, pretty):".to_string(),
        pretty.format_text(DANGEROUS_FORUM_POST),
    ]
}

pub fn run() {
    output::title("Pattern: Decorator");

    output::section("Decorator (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Message Transformation");
    output::lines(message_example());
    println!();

    output::section("Text Filtering");
    output::lines(text_filtering_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorators_nest() {
        assert_eq!(
            concept_example()[4],
            "RESULT: ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))"
        );
    }

    #[test]
    fn test_message_stack() {
        let lines = message_example();
        assert_eq!(lines[1], "Hello, World!");
        assert_eq!(lines[4], "!dlroW ,olleH");
        assert_eq!(lines[7], "!DLROW ,OLLEH");
        assert_eq!(lines[10], "!QYEBJ ,BYYRU");
    }

    #[test]
    fn test_rot13_is_involution() {
        assert_eq!(rot13(&rot13("Design Patterns!")), "Design Patterns!");
    }

    #[test]
    fn test_plain_text_filter_strips_tags() {
        let out = PlainTextFilter::new(Box::new(TextInput)).format_text(DANGEROUS_COMMENT);
        assert!(!out.contains('<'));
        assert!(out.contains("Please visit my homepage."));
    }

    #[test]
    fn test_dangerous_filter_removes_script_and_handlers() {
        let filter = DangerousHtmlTagsFilter::new(Box::new(TextInput));
        let out = filter.format_text("<b onclick=\"x()\">hi</b><SCRIPT>evil()</SCRIPT>");
        assert_eq!(out, "<b \"x()\">hi</b>");
    }

    #[test]
    fn test_dangerous_filter_only_strips_click_and_keypress() {
        let filter = DangerousHtmlTagsFilter::new(Box::new(TextInput));
        let out = filter.format_text(
            "<input ONKEYPRESS=\"a()\" onclick=\"b()\" onmouseover=\"c()\"> 2 > 1",
        );
        assert_eq!(out, "<input \"a()\" \"b()\" onmouseover=\"c()\"> 2 > 1");
    }

    #[test]
    fn test_markdown_format() {
        let out = MarkdownFormat::new(Box::new(TextInput))
            .format_text("## Title\n\nSome **bold** and *soft* and _more_ text.");
        assert_eq!(
            out,
            "<h2>Title</h2>\n\n<p>Some <strong>bold</strong> and <em>soft</em> and <em>more</em> text.</p>"
        );
    }

    #[test]
    fn test_forum_post_is_safe_and_pretty() {
        let lines = text_filtering_example();
        let pretty = lines.last().unwrap();
        assert!(pretty.starts_with("<h1>Welcome</h1>"));
        assert!(pretty.contains("<strong>gorgeous</strong>"));
        assert!(!pretty.contains("performXSSAttack"));
    }
}
