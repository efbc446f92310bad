//! Document processing commands run through the persistent queue.

use serde::{Deserialize, Serialize};

use super::queue::{Queue, QueuedCommand};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentCommand {
    Print { document: String },
    Save { document: String },
    Convert { document: String },
}

impl DocumentCommand {
    pub fn print(document: impl Into<String>) -> Self {
        Self::Print {
            document: document.into(),
        }
    }

    pub fn save(document: impl Into<String>) -> Self {
        Self::Save {
            document: document.into(),
        }
    }

    pub fn convert(document: impl Into<String>) -> Self {
        Self::Convert {
            document: document.into(),
        }
    }

    pub fn document(&self) -> &str {
        match self {
            Self::Print { document } | Self::Save { document } | Self::Convert { document } => {
                document
            }
        }
    }
}

impl QueuedCommand for DocumentCommand {
    type Context = ();

    fn execute(&self, _queue: &Queue<Self>, _context: &()) -> Result<Vec<String>> {
        let line = match self {
            Self::Print { document } => {
                format!("PrintDocumentCommand: Printing document '{document}'.")
            }
            Self::Save { document } => {
                format!("SaveDocumentCommand: Saving document '{document}'.")
            }
            Self::Convert { document } => {
                format!("ConvertDocumentCommand: Converting document '{document}'.")
            }
        };
        Ok(vec![line])
    }
}

/// Queues print, save and convert for `document`, but only when nothing is
/// already waiting. Returns how many commands were added.
pub fn seed_documents(queue: &Queue<DocumentCommand>, document: &str) -> Result<usize> {
    if !queue.is_empty()? {
        return Ok(0);
    }

    let commands = [
        DocumentCommand::print(document),
        DocumentCommand::save(document),
        DocumentCommand::convert(document),
    ];
    for command in &commands {
        queue.add(command)?;
    }
    Ok(commands.len())
}

pub fn document_queue_example(queue: &Queue<DocumentCommand>) -> Result<Vec<String>> {
    seed_documents(queue, "Document1.pdf")?;
    Ok(queue.work(&())?.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_is_tagged() {
        let json = serde_json::to_string(&DocumentCommand::save("a.pdf")).unwrap();
        assert_eq!(json, r#"{"type":"save","document":"a.pdf"}"#);
        assert_eq!(DocumentCommand::save("a.pdf").document(), "a.pdf");
    }

    #[test]
    fn test_document_queue_runs_in_order() {
        let queue = Queue::in_memory().unwrap();
        assert_eq!(
            document_queue_example(&queue).unwrap(),
            vec![
                "PrintDocumentCommand: Printing document 'Document1.pdf'.",
                "SaveDocumentCommand: Saving document 'Document1.pdf'.",
                "ConvertDocumentCommand: Converting document 'Document1.pdf'.",
            ]
        );
    }

    #[test]
    fn test_seed_skips_busy_queue() {
        let queue = Queue::in_memory().unwrap();
        queue.add(&DocumentCommand::print("busy.pdf")).unwrap();
        assert_eq!(seed_documents(&queue, "other.pdf").unwrap(), 0);
        assert_eq!(queue.pending_count().unwrap(), 1);
    }
}
