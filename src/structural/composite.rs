//! Composite: leaves and containers behind one interface, so a whole tree can
//! be treated like a single node.

use crate::output;

// ============================================================================
// Example: Composite Pattern - Concept
// ============================================================================

pub trait Component {
    fn operation(&self) -> String;

    fn is_composite(&self) -> bool {
        false
    }

    /// Leaves ignore children; composites keep them.
    fn add(&mut self, _component: Box<dyn Component>) {}
}

pub struct Leaf;

impl Component for Leaf {
    fn operation(&self) -> String {
        "Leaf".to_string()
    }
}

#[derive(Default)]
pub struct Composite {
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn with_children(children: Vec<Box<dyn Component>>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    fn operation(&self) -> String {
        let results: Vec<String> = self.children.iter().map(|c| c.operation()).collect();
        format!("Branch({})", results.join("+"))
    }

    fn is_composite(&self) -> bool {
        true
    }

    fn add(&mut self, component: Box<dyn Component>) {
        self.children.push(component);
    }
}

fn sample_tree() -> Composite {
    let branch1 = Composite::with_children(vec![Box::new(Leaf), Box::new(Leaf)]);
    let branch2 = Composite::with_children(vec![Box::new(Leaf)]);
    Composite::with_children(vec![Box::new(branch1), Box::new(branch2)])
}

pub fn concept_example() -> Vec<String> {
    let mut tree = sample_tree();
    let mut lines = vec![
        "Client: I've got a simple component:".to_string(),
        format!("RESULT: {}", Leaf.operation()),
        String::new(),
        "Client: Now I've got a composite tree:".to_string(),
        format!("RESULT: {}", tree.operation()),
        String::new(),
        "Client: I don't need to check the components classes even when managing the tree:"
            .to_string(),
    ];

    if tree.is_composite() {
        tree.add(Box::new(Leaf));
    }
    lines.push(format!("RESULT: {}", tree.operation()));
    lines
}

// ============================================================================
// Example: File System Sizes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FilesystemItem {
    File { name: String, size_kb: u64 },
    Folder { name: String, items: Vec<FilesystemItem> },
}

impl FilesystemItem {
    pub fn file(name: impl Into<String>, size_kb: u64) -> Self {
        Self::File {
            name: name.into(),
            size_kb,
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Self::File { size_kb, .. } => *size_kb,
            Self::Folder { items, .. } => items.iter().map(FilesystemItem::size).sum(),
        }
    }

    /// Adding to a file is a no-op.
    pub fn add(&mut self, item: FilesystemItem) {
        if let Self::Folder { items, .. } = self {
            items.push(item);
        }
    }

    /// Removes direct children with the given name.
    pub fn remove(&mut self, child: &str) {
        if let Self::Folder { items, .. } = self {
            items.retain(|item| item.name() != child);
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            Self::File { name, size_kb } => {
                lines.push(format!("{indent}File: {name} ({size_kb} KB)"));
            }
            Self::Folder { name, items } => {
                lines.push(format!("{indent}Folder: {name} (Total: {} KB)", self.size()));
                for item in items {
                    item.render_into(depth + 1, lines);
                }
            }
        }
    }
}

pub fn create_filesystem() -> FilesystemItem {
    let mut documents = FilesystemItem::folder("documents");
    documents.add(FilesystemItem::file("resume.pdf", 120));
    documents.add(FilesystemItem::file("cover_letter.docx", 80));

    let mut pictures = FilesystemItem::folder("pictures");
    pictures.add(FilesystemItem::file("photo1.jpg", 500));
    pictures.add(FilesystemItem::file("photo2.png", 700));

    let mut music = FilesystemItem::folder("music");
    music.add(FilesystemItem::file("song1.mp3", 5000));
    music.add(FilesystemItem::file("song2.mp3", 4500));

    let mut root = FilesystemItem::folder("root");
    root.add(documents);
    root.add(pictures);
    root.add(music);
    root
}

pub fn filesystem_example() -> Vec<String> {
    let mut root = create_filesystem();
    let mut lines = root.render();

    root.remove("music");
    lines.push(String::new());
    lines.push("After removing the music folder:".to_string());
    lines.extend(root.render());
    lines
}

pub fn run() {
    output::title("Pattern: Composite");

    output::section("Composite (Concept)");
    output::lines(concept_example());
    println!();

    output::section("File System");
    output::lines(filesystem_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tree_operation() {
        assert_eq!(sample_tree().operation(), "Branch(Branch(Leaf+Leaf)+Branch(Leaf))");

        let lines = concept_example();
        assert_eq!(
            lines.last().unwrap(),
            "RESULT: Branch(Branch(Leaf+Leaf)+Branch(Leaf)+Leaf)"
        );
    }

    #[test]
    fn test_leaf_ignores_add() {
        let mut leaf = Leaf;
        leaf.add(Box::new(Leaf));
        assert!(!leaf.is_composite());
        assert_eq!(leaf.operation(), "Leaf");
    }

    #[test]
    fn test_folder_sizes() {
        let root = create_filesystem();
        assert_eq!(root.size(), 10_900);

        let lines = root.render();
        assert_eq!(lines[0], "Folder: root (Total: 10900 KB)");
        assert_eq!(lines[1], "  Folder: documents (Total: 200 KB)");
        assert_eq!(lines[2], "    File: resume.pdf (120 KB)");
    }

    #[test]
    fn test_remove_drops_item() {
        let mut root = create_filesystem();
        root.remove("music");
        assert_eq!(root.size(), 1_400);
    }

    proptest! {
        #[test]
        fn test_folder_size_is_sum_of_files(sizes in prop::collection::vec(0u64..10_000, 0..20)) {
            let mut folder = FilesystemItem::folder("random");
            for (i, size) in sizes.iter().enumerate() {
                folder.add(FilesystemItem::file(format!("f{i}"), *size));
            }
            let mut outer = FilesystemItem::folder("outer");
            outer.add(folder);

            prop_assert_eq!(outer.size(), sizes.iter().sum::<u64>());
        }
    }
}
