use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::id_generator::ElementId;
use crate::style::TextStyle;

/// Offset of an element's top-left corner inside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    pub const ORIGIN: Position = Position {
        top: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Position for an element dropped at `pointer` over a canvas occupying `canvas`.
    ///
    /// Not clamped: a drop outside the canvas yields negative or oversized offsets.
    pub fn from_drop(pointer: Pos2, canvas: Rect) -> Self {
        Self {
            top: pointer.y - canvas.top(),
            left: pointer.x - canvas.left(),
        }
    }

    /// Offset from the canvas origin, x to the right and y down
    pub fn offset(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

// Immutable text element, shared between history snapshots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    id: ElementId,
    text: String,
    position: Position,
    style: TextStyle,
}

// Reference-counted element, so unchanged elements are shared across snapshots
pub type TextElementRef = Arc<TextElement>;

impl TextElement {
    /// Create an element at the canvas origin with a fresh id
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            id: ElementId::next(),
            text: text.into(),
            position: Position::ORIGIN,
            style,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn with_style(&self, style: TextStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }
}
