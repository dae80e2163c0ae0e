mod central_panel;
mod history_panel;
mod toolbar_panel;

pub use central_panel::{CanvasState, central_panel};
pub use history_panel::history_panel;
pub use toolbar_panel::toolbar_panel;
