use eframe::egui;

use crate::TextOverlayApp;
use crate::input::InputEvent;
use crate::style::{self, FONT_SIZE_OPTIONS, FontFamily};

pub fn toolbar_panel(app: &mut TextOverlayApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
        let mut events = Vec::new();
        let toolbar = app.session().toolbar().clone();

        ui.horizontal_wrapped(|ui| {
            let mut text = toolbar.current_text.clone();
            if ui.text_edit_singleline(&mut text).changed() {
                events.push(InputEvent::TextFieldChanged(text));
            }
            if ui.button("Add Text").clicked() {
                events.push(InputEvent::AddClicked);
            }

            // Undo/Redo section
            let can_undo = app.session().can_undo();
            let can_redo = app.session().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                events.push(InputEvent::UndoClicked);
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                events.push(InputEvent::RedoClicked);
            }

            ui.separator();

            ui.label("Font Size:");
            let mut size = toolbar.font_size();
            egui::ComboBox::from_id_salt("font_size")
                .selected_text(size.to_string())
                .show_ui(ui, |ui| {
                    for option in FONT_SIZE_OPTIONS {
                        if ui.selectable_value(&mut size, option, option.to_string()).clicked() {
                            events.push(InputEvent::FontSizeSelected(option));
                        }
                    }
                });

            ui.label("Font Family:");
            let mut family = toolbar.font_family();
            egui::ComboBox::from_id_salt("font_family")
                .selected_text(family.label())
                .show_ui(ui, |ui| {
                    for option in FontFamily::ALL {
                        if ui.selectable_value(&mut family, option, option.label()).clicked() {
                            events.push(InputEvent::FontFamilySelected(option));
                        }
                    }
                });

            ui.label("Font Color:");
            let mut color = toolbar.color();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                events.push(InputEvent::ColorPicked(color));
            }
            ui.monospace(style::hex(color));

            ui.separator();
            ui.toggle_value(app.show_history_mut(), "History");
        });

        for event in events {
            app.handle_input(event);
        }
    });
}
