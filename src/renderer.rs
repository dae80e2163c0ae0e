// src/renderer.rs
use eframe::egui::{self, Color32, FontId, Galley, Painter, Pos2, Rect, Stroke, Ui, Vec2};
use std::sync::Arc;

use crate::element::TextElement;
use crate::style::TextStyle;

/// Opacity of the copy painted under the pointer while dragging
const DRAG_GHOST_OPACITY: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct Renderer {
    canvas_fill: Color32,
    canvas_border: Stroke,
    selection_stroke: Stroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            canvas_fill: Color32::WHITE,
            canvas_border: Stroke::new(1.0, Color32::from_gray(160)),
            selection_stroke: Stroke::new(1.5, Color32::from_rgb(33, 150, 243)),
        }
    }

    /// Font used to paint text in `style`.
    ///
    /// egui ships one proportional and one monospace face, so each family
    /// maps to whichever of the two matches its width class.
    pub fn font_id(style: &TextStyle) -> FontId {
        let family = if style.font_family.is_monospace() {
            egui::FontFamily::Monospace
        } else {
            egui::FontFamily::Proportional
        };
        FontId::new(style.font_size.pixels(), family)
    }

    /// Lay out an element's text on a single line
    pub fn layout(&self, ui: &Ui, element: &TextElement) -> Arc<Galley> {
        let style = element.style();
        ui.fonts(|fonts| {
            fonts.layout_no_wrap(element.text().to_owned(), Self::font_id(style), style.color)
        })
    }

    /// Screen rectangle an element occupies on `canvas`.
    ///
    /// Empty text still gets a grabbable box one em high.
    pub fn element_rect(canvas: Rect, element: &TextElement, text_size: Vec2) -> Rect {
        let em = element.style().font_size.pixels();
        let min_size = Vec2::new(em * 0.5, em);
        Rect::from_min_size(canvas.min + element.position().offset(), text_size.max(min_size))
    }

    pub fn paint_canvas(&self, painter: &Painter, canvas: Rect) {
        painter.rect_filled(canvas, 0.0, self.canvas_fill);
        painter.rect_stroke(canvas, 0.0, self.canvas_border);
    }

    /// Paint an element's laid out text at `rect`, outlined when selected
    pub fn paint_element(
        &self,
        painter: &Painter,
        rect: Rect,
        galley: Arc<Galley>,
        selected: bool,
    ) {
        if selected {
            painter.rect_stroke(rect.expand(2.0), 2.0, self.selection_stroke);
        }
        painter.galley(rect.min, galley, Color32::BLACK);
    }

    /// Paint a faded copy of the dragged text with its top-left corner at the pointer
    pub fn paint_drag_ghost(
        &self,
        painter: &Painter,
        pointer: Pos2,
        galley: Arc<Galley>,
        color: Color32,
    ) {
        let faded = color.gamma_multiply(DRAG_GHOST_OPACITY);
        painter.galley_with_override_text_color(pointer, galley, faded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Position;
    use crate::style::{FontFamily, FontSize, StyleProperty};

    #[test]
    fn test_font_id_mapping() {
        let style = TextStyle::default().with(StyleProperty::FontSize(FontSize::px(25.0)));
        let font = Renderer::font_id(&style);
        assert_eq!(font.size, 25.0);
        assert_eq!(font.family, egui::FontFamily::Proportional);

        let style = style.with(StyleProperty::FontFamily(FontFamily::CourierNew));
        assert_eq!(Renderer::font_id(&style).family, egui::FontFamily::Monospace);
    }

    #[test]
    fn test_element_rect_follows_position() {
        let canvas = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(400.0, 300.0));
        let element = TextElement::new("Hello", TextStyle::default())
            .with_position(Position::new(10.0, 20.0));
        let rect = Renderer::element_rect(canvas, &element, Vec2::new(40.0, 18.0));
        assert_eq!(rect.min, Pos2::new(120.0, 60.0));
        assert_eq!(rect.size(), Vec2::new(40.0, 18.0));
    }

    #[test]
    fn test_empty_text_keeps_grabbable_size() {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0));
        let element = TextElement::new("x", TextStyle::default()).with_text("");
        let rect = Renderer::element_rect(canvas, &element, Vec2::ZERO);
        assert!(rect.width() > 0.0);
        assert_eq!(rect.height(), TextStyle::default().font_size.pixels());
    }
}
