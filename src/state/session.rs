//! The editing session: document history, selection and toolbar.
//!
//! Every change to the canvas goes through [`EditorSession::execute`]. A
//! command first computes the next snapshot from the present one, and only a
//! snapshot that differs from the present is committed. Rejected commands
//! return a [`CommandError`] and leave the session untouched.
//!
//! Selection lives outside the history. Undo and redo clear it, ordinary
//! edits keep it.
use log::debug;

use crate::command::{Command, CommandError, CommandResult, History};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::id_generator::ElementId;

use super::ToolbarState;

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    history: History,
    selection: Option<ElementId>,
    toolbar: ToolbarState,
}

impl EditorSession {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            history: History::new(Document::new()).with_limit(config.history_limit),
            selection: None,
            toolbar: ToolbarState::new(config.default_style),
        }
    }

    /// The document currently shown on the canvas
    pub fn document(&self) -> &Document {
        self.history.present()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn toolbar(&self) -> &ToolbarState {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut ToolbarState {
        &mut self.toolbar
    }

    pub fn select(&mut self, id: ElementId) {
        self.selection = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Add the toolbar's text with the toolbar's style, then clear the text field
    pub fn add_current_text(&mut self) -> CommandResult {
        let command = Command::AddText {
            text: self.toolbar.current_text.clone(),
            style: self.toolbar.style,
        };
        self.execute(command)?;
        self.toolbar.current_text.clear();
        Ok(())
    }

    /// Apply a command, committing its snapshot if it changes the document
    pub fn execute(&mut self, command: Command) -> CommandResult {
        let label = command.label();
        let result = self.apply(command);
        match &result {
            Ok(()) => debug!(
                "{}: undo depth {}, redo depth {}",
                label,
                self.history.past().len(),
                self.history.future().len()
            ),
            Err(err) => debug!("{} ignored: {}", label, err),
        }
        result
    }

    fn apply(&mut self, command: Command) -> CommandResult {
        let present = self.history.present();
        let next = match command {
            Command::AddText { text, style } => {
                present.add_text(&text, style).ok_or(CommandError::BlankText)?
            }
            Command::ModifyText { id, text } => {
                let next = present.modify_text(id, &text);
                self.changed_or_reject(id, next)?
            }
            Command::MoveText { id, position } => {
                let next = present.move_text(id, position);
                self.changed_or_reject(id, next)?
            }
            Command::RestyleSelected(property) => {
                let id = self.selection.ok_or(CommandError::NoSelection)?;
                let next = present.restyle_text(id, property);
                self.changed_or_reject(id, next)?
            }
            Command::Undo => {
                if !self.history.undo() {
                    return Err(CommandError::NothingToUndo);
                }
                self.selection = None;
                return Ok(());
            }
            Command::Redo => {
                if !self.history.redo() {
                    return Err(CommandError::NothingToRedo);
                }
                self.selection = None;
                return Ok(());
            }
        };
        self.history.commit(next);
        Ok(())
    }

    // Tell a missing element apart from a mutation that changes nothing
    fn changed_or_reject(
        &self,
        id: ElementId,
        next: Option<Document>,
    ) -> Result<Document, CommandError> {
        next.ok_or_else(|| {
            if self.document().contains(id) {
                CommandError::Unchanged
            } else {
                CommandError::ElementNotFound(id)
            }
        })
    }
}
