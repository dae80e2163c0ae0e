use crate::config::EditorConfig;
use crate::input::InputEvent;
use crate::panels::{self, CanvasState};
use crate::renderer::Renderer;
use crate::state::EditorSession;

/// The text overlay editor: toolbar on top, canvas below, optional history window
#[derive(Debug)]
pub struct TextOverlayApp {
    session: EditorSession,
    renderer: Renderer,
    canvas: CanvasState,
    show_history: bool,
}

impl TextOverlayApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        // Text is painted on a white canvas
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        log::info!(
            "Starting editor with {} {} text, history limit {:?}",
            config.default_style.font_size,
            config.default_style.font_family,
            config.history_limit
        );
        Self::with_config(&config)
    }

    fn with_config(config: &EditorConfig) -> Self {
        Self {
            session: EditorSession::new(config),
            renderer: Renderer::new(),
            canvas: CanvasState::default(),
            show_history: config.show_history_panel,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasState {
        &mut self.canvas
    }

    pub fn show_history_mut(&mut self) -> &mut bool {
        &mut self.show_history
    }

    /// Feed a UI event to the session. Rejections are expected and only traced.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Err(err) = self.session.handle_input(event) {
            log::trace!("Input rejected: {}", err);
        }
    }
}

impl eframe::App for TextOverlayApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar_panel(self, ctx);

        if self.show_history {
            panels::history_panel(self, ctx);
        }

        panels::central_panel(self, ctx);
    }
}
