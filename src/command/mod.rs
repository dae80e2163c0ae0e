mod commands;
mod history;

use thiserror::Error;

use crate::id_generator::ElementId;

pub use commands::Command;
pub use history::History;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Reasons a command was rejected.
///
/// A rejected command leaves the session exactly as it was. None of these
/// are failures the user needs to see.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Text to add was empty or only whitespace
    #[error("text is blank")]
    BlankText,
    /// No element with this id in the present document
    #[error("no element with id {0}")]
    ElementNotFound(ElementId),
    /// A restyle was requested with nothing selected
    #[error("no element is selected")]
    NoSelection,
    /// The command would produce a snapshot identical to the present one
    #[error("command leaves the document unchanged")]
    Unchanged,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
}
