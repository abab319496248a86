use crate::tools::Tool;

/// Editor actions triggered by shortcuts and toolbar widgets.
///
/// Canvas painting does not go through commands; it is driven per frame by
/// the tool state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    /// Write the canvas to the next free `pixel_art(N).png`
    Export,
    SelectTool(Tool),
    ToggleAutoSwitch,
    /// Replace the canvas with an empty one. Not undoable; clears history.
    ResizeCanvas { width: usize, height: usize },
}

impl Command {
    /// Short description used in logs and the status line
    pub fn describe(&self) -> String {
        match self {
            Command::Undo => "Undo".to_owned(),
            Command::Redo => "Redo".to_owned(),
            Command::Export => "Export PNG".to_owned(),
            Command::SelectTool(tool) => format!("Select {tool}"),
            Command::ToggleAutoSwitch => "Toggle eyedropper auto-switch".to_owned(),
            Command::ResizeCanvas { width, height } => format!("Resize canvas to {width}x{height}"),
        }
    }
}

/// Window-level requests the editor core cannot fulfil itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    ToggleFullscreen,
    Quit,
}
