//! Prototype: objects copy themselves, including the parts `#[derive(Clone)]`
//! alone would get wrong (back references, registration with an owner).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Local};

use crate::output;

// ============================================================================
// Example: Prototype Pattern - Back References
// ============================================================================

#[derive(Debug, Clone)]
pub struct Component {
    pub created_at: DateTime<Local>,
}

/// Points back at the prototype that owns it.
#[derive(Debug)]
pub struct ComponentWithBackReference {
    prototype: Weak<Prototype>,
}

impl ComponentWithBackReference {
    pub fn prototype(&self) -> Option<Rc<Prototype>> {
        self.prototype.upgrade()
    }
}

#[derive(Debug)]
pub struct Prototype {
    pub primitive: i32,
    pub component: Box<Component>,
    pub circular_reference: Rc<ComponentWithBackReference>,
}

impl Prototype {
    pub fn new(primitive: i32, component: Component) -> Rc<Self> {
        Rc::new_cyclic(|me| Prototype {
            primitive,
            component: Box::new(component),
            circular_reference: Rc::new(ComponentWithBackReference {
                prototype: me.clone(),
            }),
        })
    }

    /// Deep copy whose back reference is rewired to the copy.
    pub fn clone_prototype(&self) -> Rc<Self> {
        Self::new(self.primitive, (*self.component).clone())
    }
}

pub fn concept_example() -> Vec<String> {
    let p1 = Prototype::new(
        245,
        Component {
            created_at: Local::now(),
        },
    );
    let p2 = p1.clone_prototype();
    let mut lines = Vec::new();

    lines.push(if p1.primitive == p2.primitive {
        "Primitive field values have been carried over to a clone. Yay!".to_string()
    } else {
        "Primitive field values have not been copied. Booo!".to_string()
    });

    lines.push(if std::ptr::eq(&*p1.component, &*p2.component) {
        "Simple component has not been cloned. Booo!".to_string()
    } else {
        "Simple component has been cloned. Yay!".to_string()
    });

    lines.push(
        if Rc::ptr_eq(&p1.circular_reference, &p2.circular_reference) {
            "Component with back reference has not been cloned. Booo!".to_string()
        } else {
            "Component with back reference has been cloned. Yay!".to_string()
        },
    );

    let linked_to_clone = p2
        .circular_reference
        .prototype()
        .is_some_and(|owner| Rc::ptr_eq(&owner, &p2));
    lines.push(if linked_to_clone {
        "Component with back reference is linked to the clone. Yay!".to_string()
    } else {
        "Component with back reference is linked to original object. Booo!".to_string()
    });

    lines
}

// ============================================================================
// Example: Documents Registered With Their Author
// ============================================================================

#[derive(Debug)]
pub struct Author {
    pub name: String,
    documents: Vec<Weak<Document>>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name: name.into(),
            documents: Vec::new(),
        }))
    }

    pub fn document_titles(&self) -> Vec<String> {
        self.documents
            .iter()
            .filter_map(Weak::upgrade)
            .map(|doc| doc.title.clone())
            .collect()
    }
}

#[derive(Debug)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Local>,
    author: Rc<RefCell<Author>>,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: &Rc<RefCell<Author>>,
    ) -> Rc<Self> {
        Self::register(Document {
            title: title.into(),
            content: content.into(),
            created_at: Local::now(),
            author: Rc::clone(author),
        })
    }

    fn register(document: Document) -> Rc<Self> {
        let document = Rc::new(document);
        document
            .author
            .borrow_mut()
            .documents
            .push(Rc::downgrade(&document));
        document
    }

    pub fn clone_document(&self) -> Rc<Self> {
        Self::register(Document {
            title: format!("Copy of {}", self.title),
            content: self.content.clone(),
            created_at: Local::now(),
            author: Rc::clone(&self.author),
        })
    }

    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Content", self.content.clone()),
            ("Author", self.author.borrow().name.clone()),
            (
                "CreatedAt",
                self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ),
        ]
    }
}

pub fn document_example() -> Vec<String> {
    let author = Author::new("Jane Doe");
    let original = Document::new("Design Patterns", "Learning the Prototype Pattern.", &author);
    let cloned = original.clone_document();

    let mut lines = vec!["Original Document:".to_string()];
    lines.extend(original.details().into_iter().map(|(k, v)| format!("{k}: {v}")));
    lines.push(String::new());
    lines.push("Cloned Document:".to_string());
    lines.extend(cloned.details().into_iter().map(|(k, v)| format!("{k}: {v}")));
    lines.push(String::new());
    lines.push(format!(
        "{} now owns: {}",
        author.borrow().name,
        author.borrow().document_titles().join(", ")
    ));
    lines
}

// ============================================================================
// Example: Shapes Cloned Through Trait Objects
// ============================================================================

pub trait ShapePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype>;
    fn draw(&self) -> String;
    fn set_color(&mut self, color: &str);
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub radius: u32,
    pub color: String,
}

impl Circle {
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            color: String::new(),
        }
    }
}

impl ShapePrototype for Circle {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing a circle with radius {} and color {}",
            self.radius, self.color
        )
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

#[derive(Debug, Clone)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
    pub color: String,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color: String::new(),
        }
    }
}

impl ShapePrototype for Rectangle {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing a rectangle with width {}, height {} and color {}",
            self.width, self.height, self.color
        )
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

pub fn shape_example() -> Vec<String> {
    let mut circle: Box<dyn ShapePrototype> = Box::new(Circle::new(10));
    circle.set_color("Red");
    let mut cloned_circle = circle.clone_box();
    cloned_circle.set_color("Blue");

    let mut rectangle: Box<dyn ShapePrototype> = Box::new(Rectangle::new(20, 10));
    rectangle.set_color("Green");
    let mut cloned_rectangle = rectangle.clone_box();
    cloned_rectangle.set_color("Yellow");

    vec![
        format!("Original Circle: {}", circle.draw()),
        format!("Cloned Circle: {}", cloned_circle.draw()),
        String::new(),
        format!("Original Rectangle: {}", rectangle.draw()),
        format!("Cloned Rectangle: {}", cloned_rectangle.draw()),
    ]
}

// ============================================================================
// Example: Complex Page (draft copies)
// ============================================================================

#[derive(Debug)]
pub struct PageAuthor {
    pub name: String,
    pages: Vec<String>,
}

impl PageAuthor {
    pub fn new(name: impl Into<String>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name: name.into(),
            pages: Vec::new(),
        }))
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}

#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub body: String,
    pub comments: Vec<String>,
    pub date: DateTime<Local>,
    author: Rc<RefCell<PageAuthor>>,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: &Rc<RefCell<PageAuthor>>,
    ) -> Self {
        let page = Self {
            title: title.into(),
            body: body.into(),
            comments: Vec::new(),
            date: Local::now(),
            author: Rc::clone(author),
        };
        author.borrow_mut().pages.push(page.title.clone());
        page
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Drafts start without comments and with a fresh date.
    pub fn clone_page(&self) -> Self {
        let draft = Self {
            title: format!("Copy of {}", self.title),
            body: self.body.clone(),
            comments: Vec::new(),
            date: Local::now(),
            author: Rc::clone(&self.author),
        };
        self.author.borrow_mut().pages.push(draft.title.clone());
        draft
    }

    pub fn dump(&self) -> String {
        let author = self.author.borrow();
        format!(
            "Page {{ title: {:?}, body: {:?}, author: {} (pages: {:?}), comments: {:?}, date: {} }}",
            self.title,
            self.body,
            author.name,
            author.pages,
            self.comments,
            self.date.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

pub fn complex_page_example() -> Vec<String> {
    let author = PageAuthor::new("John Smith");
    let mut page = Page::new("Tip of the day", "Keep calm and carry on.", &author);
    page.add_comment("Nice tip, thanks!");

    let draft = page.clone_page();
    vec![
        "Dump of the clone. Note that the author is now referencing two objects.".to_string(),
        draft.dump(),
    ]
}

pub fn run() {
    output::title("Pattern: Prototype");

    output::section("Prototype (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Document");
    output::lines(document_example());
    println!();

    output::section("Shapes");
    output::lines(shape_example());
    println!();

    output::section("Complex Page");
    output::lines(complex_page_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_all_yay() {
        let lines = concept_example();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.ends_with("Yay!")));
    }

    #[test]
    fn test_back_reference_points_at_clone() {
        let original = Prototype::new(1, Component { created_at: Local::now() });
        let clone = original.clone_prototype();

        let owner = clone.circular_reference.prototype().unwrap();
        assert!(Rc::ptr_eq(&owner, &clone));
        assert!(!Rc::ptr_eq(&owner, &original));
    }

    #[test]
    fn test_document_clone_registers_with_author() {
        let author = Author::new("Jane Doe");
        let doc = Document::new("Design Patterns", "body", &author);
        let copy = doc.clone_document();

        assert_eq!(copy.title, "Copy of Design Patterns");
        assert_eq!(copy.content, doc.content);
        assert_eq!(
            author.borrow().document_titles(),
            vec!["Design Patterns", "Copy of Design Patterns"]
        );
    }

    #[test]
    fn test_recolouring_clone_keeps_original() {
        let lines = shape_example();
        assert_eq!(
            lines[0],
            "Original Circle: Drawing a circle with radius 10 and color Red"
        );
        assert_eq!(
            lines[1],
            "Cloned Circle: Drawing a circle with radius 10 and color Blue"
        );
        assert!(lines[4].ends_with("width 20, height 10 and color Yellow"));
    }

    #[test]
    fn test_page_clone_clears_comments() {
        let author = PageAuthor::new("John Smith");
        let mut page = Page::new("Tip of the day", "Keep calm and carry on.", &author);
        page.add_comment("Nice tip, thanks!");

        let draft = page.clone_page();
        assert_eq!(draft.title, "Copy of Tip of the day");
        assert!(draft.comments.is_empty());
        assert_eq!(page.comments.len(), 1);
        assert_eq!(author.borrow().pages().len(), 2);
    }
}
