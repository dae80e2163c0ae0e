use crate::element::Position;
use crate::id_generator::ElementId;
use crate::style::{StyleProperty, TextStyle};

/// Requests that change the session's document or move through its history
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new text element at the canvas origin
    AddText { text: String, style: TextStyle },

    /// Replace the text content of an element
    ModifyText { id: ElementId, text: String },

    /// Place an element at a new canvas position
    MoveText { id: ElementId, position: Position },

    /// Replace one style key of the selected element
    RestyleSelected(StyleProperty),

    /// Step back one snapshot
    Undo,

    /// Step forward one snapshot
    Redo,
}

impl Command {
    /// Short human-readable name, used in logs and the history window
    pub fn label(&self) -> String {
        match self {
            Command::AddText { text, .. } => format!("Add \"{text}\""),
            Command::ModifyText { id, .. } => format!("Edit {id}"),
            Command::MoveText { id, position } => {
                format!("Move {id} to ({}, {})", position.top, position.left)
            }
            Command::RestyleSelected(property) => format!("Set {}", property.name()),
            Command::Undo => "Undo".to_owned(),
            Command::Redo => "Redo".to_owned(),
        }
    }
}
