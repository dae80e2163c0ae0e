use eframe::egui;

use crate::TextOverlayApp;
use crate::document::Document;

fn summary(document: &Document) -> String {
    match document.len() {
        1 => "1 element".to_owned(),
        n => format!("{n} elements"),
    }
}

pub fn history_panel(app: &mut TextOverlayApp, ctx: &egui::Context) {
    let mut open = *app.show_history_mut();

    egui::Window::new("History")
        .open(&mut open)
        .default_pos(egui::pos2(20.0, 80.0))
        .show(ctx, |ui| {
            let session = app.session();
            let history = session.history();

            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.past().len()));
                ui.label(format!("Redo stack size: {}", history.future().len()));
            });
            match session.selection() {
                Some(id) => ui.label(format!("Selected: {id}")),
                None => ui.label("Selected: none"),
            };

            ui.separator();

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let past = history.past();
                    let future = history.future();
                    let max_len = past.len().max(future.len());

                    for i in 0..max_len {
                        // Most recent undo entry first, matching the redo order
                        match past.len().checked_sub(i + 1).map(|index| &past[index]) {
                            Some(document) => ui.label(summary(document)),
                            None => ui.label(""),
                        };
                        match future.get(i) {
                            Some(document) => ui.label(summary(document)),
                            None => ui.label(""),
                        };
                        ui.end_row();
                    }
                });

            egui::CollapsingHeader::new("Present document").show(ui, |ui| {
                match serde_json::to_string_pretty(history.present()) {
                    Ok(json) => {
                        egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                            ui.monospace(json);
                        });
                    }
                    Err(err) => {
                        log::warn!("Failed to serialize document: {}", err);
                        ui.label("Document could not be displayed");
                    }
                }
            });
        });

    *app.show_history_mut() = open;
}
