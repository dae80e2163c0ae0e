use egui::{Color32, Pos2, Rect};

use crate::id_generator::ElementId;
use crate::style::{FontFamily, FontSize};

mod router;

/// Discrete UI events the session reacts to.
///
/// Panels translate raw egui interaction into these, so the session never
/// depends on widget state.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The toolbar text field was edited
    TextFieldChanged(String),
    /// "Add Text" was clicked
    AddClicked,
    UndoClicked,
    RedoClicked,
    /// A size was picked from the font size dropdown
    FontSizeSelected(FontSize),
    /// A family was picked from the font family dropdown
    FontFamilySelected(FontFamily),
    /// The color picker changed
    ColorPicked(Color32),
    /// An element was clicked without dragging
    ElementClicked(ElementId),
    /// Empty canvas was clicked
    CanvasClicked,
    /// A drag began on an element
    DragStart(ElementId),
    /// The pointer is dragging over the canvas
    DragOver,
    /// A dragged element was released
    Drop {
        id: ElementId,
        /// Pointer position in screen coordinates
        pointer: Pos2,
        /// Canvas bounds in screen coordinates
        canvas: Rect,
    },
    /// An in-place edit lost focus with this content
    EditCommitted { id: ElementId, text: String },
}
