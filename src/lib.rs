#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod style;

pub use app::TextOverlayApp;
pub use command::{Command, CommandError, CommandResult, History};
pub use config::EditorConfig;
pub use document::Document;
pub use element::{Position, TextElement};
pub use id_generator::ElementId;
pub use input::InputEvent;
pub use renderer::Renderer;
pub use state::EditorSession;
pub use style::{FontFamily, FontSize, ParseFontSizeError, StyleProperty, TextStyle};
