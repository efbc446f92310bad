//! Memento: capture an object's state so it can be restored later, without
//! exposing that state to whoever keeps the snapshots.

use crate::error::{PatternError, Result};
use crate::output;

/// Caretaker: stores snapshots, never looks inside them.
#[derive(Debug)]
pub struct History<M> {
    mementos: Vec<M>,
}

impl<M> Default for History<M> {
    fn default() -> Self {
        Self {
            mementos: Vec::new(),
        }
    }
}

impl<M> History<M> {
    pub fn push(&mut self, memento: M) {
        self.mementos.push(memento);
    }

    pub fn get(&self, index: usize) -> Result<&M> {
        self.mementos
            .get(index)
            .ok_or(PatternError::NoSuchSnapshot(index))
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

// ============================================================================
// Example: Memento Pattern - Text Editor
// ============================================================================

/// Fields are private: only the editor in this module can read them back.
#[derive(Debug, Clone)]
pub struct EditorMemento {
    content: String,
}

#[derive(Debug, Default)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self) -> (EditorMemento, String) {
        (
            EditorMemento {
                content: self.content.clone(),
            },
            "TextEditor: Saving current content to Memento.".to_string(),
        )
    }

    pub fn restore(&mut self, memento: &EditorMemento) -> String {
        self.content = memento.content.clone();
        format!("TextEditor: Restoring content from Memento: {}", self.content)
    }
}

pub fn text_editor_example() -> Result<Vec<String>> {
    let mut editor = TextEditor::new("Hello World!");
    let mut history = History::default();
    let mut lines = Vec::new();

    let (memento, line) = editor.save();
    history.push(memento);
    lines.push(line);

    editor.set_content("Hello, Rust World!");
    let (memento, line) = editor.save();
    history.push(memento);
    lines.push(line);

    editor.set_content("Hello, Memento Pattern!");
    lines.push(format!("Current content: {}", editor.content()));

    lines.push(editor.restore(history.get(1)?));
    lines.push(format!("Restored content: {}", editor.content()));

    lines.push(editor.restore(history.get(0)?));
    lines.push(format!("Initial content: {}", editor.content()));
    Ok(lines)
}

// ============================================================================
// Example: Game Character Checkpoints
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterMemento {
    health: u32,
    level: u32,
    position: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameCharacter {
    health: u32,
    level: u32,
    position: String,
}

impl GameCharacter {
    pub fn new(health: u32, level: u32, position: &str) -> Self {
        Self {
            health,
            level,
            position: position.to_string(),
        }
    }

    pub fn set_state(&mut self, health: u32, level: u32, position: &str) {
        self.health = health;
        self.level = level;
        self.position = position.to_string();
    }

    pub fn state(&self) -> String {
        format!(
            "Health: {}, Level: {}, Position: {}",
            self.health, self.level, self.position
        )
    }

    pub fn save(&self) -> CharacterMemento {
        CharacterMemento {
            health: self.health,
            level: self.level,
            position: self.position.clone(),
        }
    }

    pub fn restore(&mut self, memento: &CharacterMemento) -> String {
        self.health = memento.health;
        self.level = memento.level;
        self.position = memento.position.clone();
        format!("GameCharacter: Restoring state from Memento: {}", self.state())
    }
}

pub fn game_character_example() -> Result<Vec<String>> {
    let mut character = GameCharacter::new(100, 1, "Town");
    let mut checkpoints = History::default();
    let mut lines = Vec::new();

    lines.push("GameCharacter: Saving current state to Memento.".to_string());
    checkpoints.push(character.save());

    character.set_state(80, 2, "Dungeon");
    lines.push("GameCharacter: Saving current state to Memento.".to_string());
    checkpoints.push(character.save());

    character.set_state(50, 3, "Boss Room");
    lines.push(format!("Current state: {}", character.state()));

    lines.push(character.restore(checkpoints.get(1)?));
    lines.push(format!("Restored state: {}", character.state()));

    lines.push(character.restore(checkpoints.get(0)?));
    lines.push(format!("Initial state: {}", character.state()));

    if let Err(e) = checkpoints.get(5) {
        lines.push(format!("Restoring checkpoint 5 fails: {e}"));
    }
    Ok(lines)
}

pub fn run() {
    output::title("Pattern: Memento");

    output::section("Text Editor");
    match text_editor_example() {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
    println!();

    output::section("Game Character");
    match game_character_example() {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_restores_by_index() {
        let mut editor = TextEditor::new("one");
        let mut history = History::default();
        history.push(editor.save().0);
        editor.set_content("two");
        history.push(editor.save().0);
        editor.set_content("three");

        editor.restore(history.get(0).unwrap());
        assert_eq!(editor.content(), "one");
        editor.restore(history.get(1).unwrap());
        assert_eq!(editor.content(), "two");
    }

    #[test]
    fn test_snapshot_unaffected_by_later_edits() {
        let mut character = GameCharacter::new(100, 1, "Town");
        let saved = character.save();
        character.set_state(1, 9, "Void");

        character.restore(&saved);
        assert_eq!(character, GameCharacter::new(100, 1, "Town"));
    }

    #[test]
    fn test_missing_snapshot() {
        let history: History<EditorMemento> = History::default();
        assert!(history.is_empty());
        assert!(matches!(history.get(0), Err(PatternError::NoSuchSnapshot(0))));
    }

    #[test]
    fn test_game_character_transcript() {
        let lines = game_character_example().unwrap();
        assert_eq!(lines[2], "Current state: Health: 50, Level: 3, Position: Boss Room");
        assert_eq!(lines[4], "Restored state: Health: 80, Level: 2, Position: Dungeon");
        assert_eq!(lines[6], "Initial state: Health: 100, Level: 1, Position: Town");
        assert_eq!(lines[7], "Restoring checkpoint 5 fails: No snapshot at index 5");
    }
}
