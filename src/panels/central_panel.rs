use eframe::egui;

use crate::TextOverlayApp;
use crate::element::TextElement;
use crate::id_generator::ElementId;
use crate::input::InputEvent;
use crate::renderer::Renderer;

/// Canvas interaction that lives only in the UI, never in the history
#[derive(Debug, Default)]
pub struct CanvasState {
    editing: Option<InlineEdit>,
}

/// An element whose text is open for in-place editing
#[derive(Debug, Clone)]
struct InlineEdit {
    id: ElementId,
    buffer: String,
    focus_requested: bool,
}

impl InlineEdit {
    fn new(element: &TextElement) -> Self {
        Self {
            id: element.id(),
            buffer: element.text().to_owned(),
            focus_requested: false,
        }
    }
}

pub fn central_panel(app: &mut TextOverlayApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (canvas_response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let canvas = canvas_response.rect;

        let renderer = app.renderer().clone();
        renderer.paint_canvas(&painter, canvas);

        // Snapshots share their elements, so this clone is cheap
        let document = app.session().document().clone();
        let selection = app.session().selection();
        let mut editing = app.canvas_mut().editing.take();
        let mut finished_edit = false;
        let mut events = Vec::new();

        for element in document.elements() {
            let galley = renderer.layout(ui, element);
            let rect = Renderer::element_rect(canvas, element, galley.size());

            if let Some(edit) = editing.as_mut().filter(|edit| edit.id == element.id()) {
                let text_edit = egui::TextEdit::singleline(&mut edit.buffer)
                    .font(Renderer::font_id(element.style()))
                    .text_color(element.style().color)
                    .frame(false)
                    .desired_width(rect.width().max(120.0));
                let response = ui.put(rect, text_edit);
                if !edit.focus_requested {
                    response.request_focus();
                    edit.focus_requested = true;
                } else if response.lost_focus() {
                    events.push(InputEvent::EditCommitted {
                        id: edit.id,
                        text: edit.buffer.clone(),
                    });
                    finished_edit = true;
                }
                continue;
            }

            let id = egui::Id::new(("text_element", element.id()));
            let response = ui.interact(rect, id, egui::Sense::click_and_drag());

            if response.double_clicked() {
                editing = Some(InlineEdit::new(element));
            } else if response.clicked() {
                events.push(InputEvent::ElementClicked(element.id()));
            }

            if response.drag_started() {
                events.push(InputEvent::DragStart(element.id()));
            }

            renderer.paint_element(&painter, rect, galley.clone(), selection == Some(element.id()));

            if response.dragged() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    renderer.paint_drag_ghost(&painter, pointer, galley, element.style().color);
                    if canvas.contains(pointer) {
                        events.push(InputEvent::DragOver);
                    }
                }
            }

            // Releasing outside the canvas abandons the drag
            if response.drag_stopped() {
                let pointer = response.interact_pointer_pos().or_else(|| ctx.pointer_latest_pos());
                if let Some(pointer) = pointer.filter(|pointer| canvas.contains(*pointer)) {
                    events.push(InputEvent::Drop {
                        id: element.id(),
                        pointer,
                        canvas,
                    });
                }
            }
        }

        if canvas_response.clicked() {
            events.push(InputEvent::CanvasClicked);
        }

        // An edit whose element vanished (e.g. undone past its creation) is dropped
        if finished_edit || editing.as_ref().is_some_and(|edit| !document.contains(edit.id)) {
            editing = None;
        }
        app.canvas_mut().editing = editing;

        for event in events {
            app.handle_input(event);
        }
    });
}
