//! The editor session: sole owner of the canvas, its history, the tool
//! state and the widgets, driven from the frame loop by exclusive reference.
//!
//! Pointer presses are routed in a fixed order:
//! - primary on the "Canvas Size" bar opens the size dialog
//! - primary on a dialog field focuses it
//! - middle performs a one-shot color pick and skips the toolbar
//! - any other button on a toolbar button selects a tool or toggles auto-switch
//! - primary/secondary inside the canvas start a paint/erase gesture
//! - primary on the color picker starts a picker drag

use std::path::PathBuf;

use egui::{PointerButton, Pos2, Vec2};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult, ExportError};
use crate::export::export_png;
use crate::geometry::Layout;
use crate::history::History;
use crate::widgets::{CanvasSizeInput, ColorPicker, SizeInputOutcome, ToolButton};

use super::editor_state::{ToolEffect, ToolState};

/// Everything one editing session owns
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    canvas: Canvas,
    history: History,
    tools: ToolState,
    picker: ColorPicker,
    size_input: CanvasSizeInput,
    layout: Layout,
    /// Last known pointer position, kept while the pointer is outside the window
    pointer: Option<Pos2>,
    /// Last notable outcome shown in the panel
    status: Option<String>,
}

impl EditorSession {
    pub fn new(config: EditorConfig, window: Vec2) -> Self {
        let config = config.sanitized();
        let canvas = Canvas::new(config.canvas_width, config.canvas_height);
        let layout = Layout::new(&config, window, canvas.width(), canvas.height());
        Self {
            tools: ToolState::new(config.eyedropper_auto_switch),
            config,
            canvas,
            history: History::new(),
            picker: ColorPicker::new(),
            size_input: CanvasSizeInput::new(),
            layout,
            pointer: None,
            status: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    pub fn size_input(&self) -> &CanvasSizeInput {
        &self.size_input
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Current settings, including toggles changed during the session
    pub fn settings(&self) -> EditorConfig {
        EditorConfig {
            eyedropper_auto_switch: self.tools.auto_switch(),
            ..self.config.clone()
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        self.config.export_dir()
    }

    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.config.export_dir = Some(dir);
    }

    fn relayout(&mut self) {
        let window = self.layout.window_size();
        self.layout.recalc(window, self.canvas.width(), self.canvas.height());
    }

    pub fn set_window_size(&mut self, size: Vec2) {
        if size != self.layout.window_size() {
            self.layout.recalc(size, self.canvas.width(), self.canvas.height());
        }
    }

    pub fn set_pointer(&mut self, pos: Pos2) {
        self.pointer = Some(pos);
    }

    pub fn pointer_down(&mut self, button: PointerButton, pos: Pos2) {
        self.pointer = Some(pos);

        if button == PointerButton::Primary {
            if self.layout.size_bar_rect().contains(pos) {
                self.size_input.open(self.canvas.width(), self.canvas.height());
                return;
            }
            if self.size_input.focus_at(pos, &self.layout) {
                return;
            }
        }

        let cell = self.layout.cell_at(pos);
        if button == PointerButton::Middle {
            self.tools.pointer_down(button, cell, &self.canvas, &mut self.history);
            return;
        }

        match ToolButton::hit(&self.layout, pos) {
            Some(ToolButton::Tool(tool)) => self.run(Command::SelectTool(tool)),
            Some(ToolButton::AutoSwitch) => self.run(Command::ToggleAutoSwitch),
            None => {}
        }

        self.tools.pointer_down(button, cell, &self.canvas, &mut self.history);

        if button == PointerButton::Primary {
            self.picker.pointer_down(pos, &self.layout);
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        self.tools.pointer_up(button);
        if button == PointerButton::Primary {
            self.picker.pointer_up();
        }
    }

    /// Per-frame step, run after all of the frame's events were routed.
    ///
    /// Follows an active picker drag, then lets the active gesture act on the
    /// cell under the pointer.
    pub fn frame(&mut self, pointer: Option<Pos2>) -> ToolEffect {
        if let Some(pos) = pointer {
            self.pointer = Some(pos);
        }
        let Some(pos) = self.pointer else {
            return ToolEffect::None;
        };

        if self.picker.is_dragging() {
            self.picker.drag_to(pos, &self.layout, self.tools.color_mut());
        }

        let cell = self.layout.cell_at(pos);
        self.tools.apply(cell, &mut self.canvas, &mut self.history)
    }

    /// Feed a key press to the open size dialog
    pub fn size_input_key(&mut self, key: egui::Key) {
        match self.size_input.handle_key(key) {
            SizeInputOutcome::Edited | SizeInputOutcome::Cancelled => {}
            SizeInputOutcome::Committed(Ok((width, height))) => {
                self.run(Command::ResizeCanvas { width, height });
            }
            SizeInputOutcome::Committed(Err(err)) => {
                self.report(&EditorError::from(err));
            }
        }
    }

    /// Execute a command and surface any failure in the log and status line
    pub fn run(&mut self, command: Command) {
        log::debug!("Running command: {}", command.describe());
        if let Err(err) = self.execute(command) {
            self.report(&err);
        }
    }

    fn report(&mut self, err: &EditorError) {
        match err {
            EditorError::SizeInput(_) => log::warn!("{}", err),
            EditorError::Export(_) => log::error!("{}", err),
        }
        self.status = Some(err.to_string());
    }

    pub fn execute(&mut self, command: Command) -> EditorResult<()> {
        match command {
            Command::Undo => {
                if self.undo() {
                    log::info!("Undo ({} left)", self.history.undo_depth());
                }
            }
            Command::Redo => {
                if self.redo() {
                    log::info!("Redo ({} left)", self.history.redo_depth());
                }
            }
            Command::Export => {
                let path = self.export()?;
                self.status = Some(format!("Saved to {}", path.display()));
            }
            Command::SelectTool(tool) => self.tools.select_tool(tool),
            Command::ToggleAutoSwitch => {
                let enabled = !self.tools.auto_switch();
                self.tools.set_auto_switch(enabled);
                log::info!("Eyedropper auto-switch {}", if enabled { "on" } else { "off" });
            }
            Command::ResizeCanvas { width, height } => {
                self.resize_canvas(width, height);
            }
        }
        Ok(())
    }

    /// Undo the last gesture. A gesture still in progress records a fresh
    /// snapshot before its next change.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.canvas);
        if undone {
            self.tools.rearm_snapshot();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.canvas);
        if redone {
            self.tools.rearm_snapshot();
        }
        redone
    }

    /// Replace the canvas with an empty one and forget all history.
    ///
    /// Returns the size applied after clamping.
    pub fn resize_canvas(&mut self, width: usize, height: usize) -> (usize, usize) {
        let applied = self.canvas.resize(width, height);
        self.history.clear();
        self.tools.end_gesture();
        self.relayout();
        log::info!("Canvas resized to {}x{}", applied.0, applied.1);
        self.status = Some(format!("Canvas resized to {}x{}", applied.0, applied.1));
        applied
    }

    /// Export at the configured scale into the configured directory
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        export_png(&self.canvas, self.config.export_scale, &self.export_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Cell, GridPos};
    use crate::color::Rgb;
    use crate::tools::Tool;

    fn session() -> EditorSession {
        let config = EditorConfig::default();
        let window = Vec2::from(config.initial_window_size());
        EditorSession::new(config, window)
    }

    #[test]
    fn test_size_bar_opens_dialog_prefilled() {
        let mut session = session();
        let bar = session.layout().size_bar_rect().center();
        session.pointer_down(PointerButton::Primary, bar);

        assert!(session.size_input().is_active());
        assert_eq!(session.size_input().width_text(), "16");
        assert!(session.tools().drag().is_idle());
    }

    #[test]
    fn test_resize_clears_history_and_relayouts() {
        let mut session = session();
        let cell = session.layout().cell_rect(GridPos::new(0, 0)).center();
        session.pointer_down(PointerButton::Primary, cell);
        session.frame(Some(cell));
        session.pointer_up(PointerButton::Primary);
        assert!(session.history().can_undo());

        assert_eq!(session.resize_canvas(4, 300), (4, 128));
        assert!(session.canvas().is_blank());
        assert!(!session.history().can_undo());
        assert!(!session.history().can_redo());
        // 256 / 128 = 2 is below the minimum cell size
        assert_eq!(session.layout().pixel_size(), 8.0);
    }

    #[test]
    fn test_toolbar_click_selects_tool() {
        let mut session = session();
        session.set_window_size(Vec2::new(900.0, 800.0));
        let fill_button = session.layout().tool_button_rect(3).center();

        session.pointer_down(PointerButton::Primary, fill_button);
        session.pointer_up(PointerButton::Primary);
        assert_eq!(session.tools().tool(), Tool::Fill);

        let auto_switch = session.layout().tool_button_rect(4).center();
        session.pointer_down(PointerButton::Primary, auto_switch);
        assert!(!session.tools().auto_switch());
        assert!(!session.settings().eyedropper_auto_switch);
    }

    #[test]
    fn test_middle_click_does_not_press_toolbar() {
        let mut session = session();
        session.set_window_size(Vec2::new(900.0, 800.0));
        let eraser_button = session.layout().tool_button_rect(1).center();
        session.pointer_down(PointerButton::Middle, eraser_button);
        assert_eq!(session.tools().tool(), Tool::Brush);
    }

    #[test]
    fn test_picker_drag_follows_pointer_each_frame() {
        let mut session = session();
        let sv = session.layout().sv_rect();
        session.pointer_down(PointerButton::Primary, sv.left_top());
        session.frame(Some(sv.left_bottom()));
        assert_eq!(session.tools().color().rgb(), Rgb::BLACK);

        session.pointer_up(PointerButton::Primary);
        session.frame(Some(sv.left_top()));
        assert_eq!(session.tools().color().rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_painting_uses_last_known_pointer() {
        let mut session = session();
        let pos = session.layout().cell_rect(GridPos::new(2, 3)).center();
        session.pointer_down(PointerButton::Primary, pos);
        session.frame(None);
        assert_eq!(session.canvas().get(GridPos::new(2, 3)), Cell::Color(Rgb::RED));
    }
}
