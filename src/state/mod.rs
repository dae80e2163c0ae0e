mod session;
mod toolbar;

pub use session::EditorSession;
pub use toolbar::ToolbarState;
