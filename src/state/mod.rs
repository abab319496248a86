mod editor_state;
mod session;

pub use editor_state::{DragState, ToolEffect, ToolState};
pub use session::EditorSession;
