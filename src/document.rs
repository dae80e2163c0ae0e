use serde::Serialize;
use std::sync::Arc;

use crate::element::{Position, TextElement, TextElementRef};
use crate::id_generator::ElementId;
use crate::style::{StyleProperty, TextStyle};

/// An immutable snapshot of the text elements on the canvas, in insertion order.
///
/// Mutations never touch `self`. Each one returns the next snapshot, or `None`
/// when the request would leave the document as it is. A `None` must not be
/// committed to the history.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    elements: Vec<TextElementRef>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[TextElementRef] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&TextElementRef> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a new element at the origin. Blank or whitespace-only text is rejected.
    pub fn add_text(&self, text: &str, style: TextStyle) -> Option<Document> {
        if text.trim().is_empty() {
            return None;
        }
        let mut elements = self.elements.clone();
        elements.push(Arc::new(TextElement::new(text, style)));
        Some(Document { elements })
    }

    /// Replace the text of element `id`. An empty string is allowed here.
    pub fn modify_text(&self, id: ElementId, text: &str) -> Option<Document> {
        self.replace(id, |element| {
            (element.text() != text).then(|| element.with_text(text))
        })
    }

    pub fn move_text(&self, id: ElementId, position: Position) -> Option<Document> {
        self.replace(id, |element| {
            (element.position() != position).then(|| element.with_position(position))
        })
    }

    pub fn restyle_text(&self, id: ElementId, property: StyleProperty) -> Option<Document> {
        self.replace(id, |element| {
            (!element.style().has(property))
                .then(|| element.with_style(element.style().with(property)))
        })
    }

    // Rebuild the sequence with one element swapped; all other elements stay shared
    fn replace<F>(&self, id: ElementId, update: F) -> Option<Document>
    where
        F: FnOnce(&TextElement) -> Option<TextElement>,
    {
        let index = self.elements.iter().position(|element| element.id() == id)?;
        let updated = update(&self.elements[index])?;
        let mut elements = self.elements.clone();
        elements[index] = Arc::new(updated);
        Some(Document { elements })
    }
}
