use egui::Color32;

use crate::style::{FontFamily, FontSize, StyleProperty, TextStyle};

/// Values currently chosen in the toolbar
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolbarState {
    /// Contents of the text field, added to the canvas by "Add Text"
    pub current_text: String,
    /// Style new elements are created with
    pub style: TextStyle,
}

impl ToolbarState {
    pub fn new(style: TextStyle) -> Self {
        Self {
            current_text: String::new(),
            style,
        }
    }

    pub fn font_size(&self) -> FontSize {
        self.style.font_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.style.font_family
    }

    pub fn color(&self) -> Color32 {
        self.style.color
    }

    pub fn apply(&mut self, property: StyleProperty) {
        self.style = self.style.with(property);
    }
}
