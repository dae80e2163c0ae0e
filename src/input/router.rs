use log::trace;

use super::InputEvent;
use crate::command::{Command, CommandResult};
use crate::element::Position;
use crate::state::EditorSession;
use crate::style::StyleProperty;

impl EditorSession {
    /// Route one UI event into the session.
    ///
    /// Toolbar style changes always update the toolbar. If an element is
    /// selected they restyle it too, which is one commit.
    pub fn handle_input(&mut self, event: InputEvent) -> CommandResult {
        trace!("Input event: {:?}", event);
        match event {
            InputEvent::TextFieldChanged(text) => {
                self.toolbar_mut().current_text = text;
                Ok(())
            }
            InputEvent::AddClicked => self.add_current_text(),
            InputEvent::UndoClicked => self.execute(Command::Undo),
            InputEvent::RedoClicked => self.execute(Command::Redo),
            InputEvent::FontSizeSelected(size) => {
                self.restyle_from_toolbar(StyleProperty::FontSize(size))
            }
            InputEvent::FontFamilySelected(family) => {
                self.restyle_from_toolbar(StyleProperty::FontFamily(family))
            }
            InputEvent::ColorPicked(color) => {
                self.restyle_from_toolbar(StyleProperty::Color(color))
            }
            InputEvent::ElementClicked(id) | InputEvent::DragStart(id) => {
                self.select(id);
                Ok(())
            }
            InputEvent::CanvasClicked => {
                self.clear_selection();
                Ok(())
            }
            InputEvent::DragOver => Ok(()),
            InputEvent::Drop {
                id,
                pointer,
                canvas,
            } => {
                let position = Position::from_drop(pointer, canvas);
                self.execute(Command::MoveText { id, position })
            }
            InputEvent::EditCommitted { id, text } => {
                self.execute(Command::ModifyText { id, text })
            }
        }
    }

    fn restyle_from_toolbar(&mut self, property: StyleProperty) -> CommandResult {
        self.toolbar_mut().apply(property);
        if self.selection().is_none() {
            return Ok(());
        }
        self.execute(Command::RestyleSelected(property))
    }
}
