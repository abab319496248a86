use egui::{Align2, Color32, FontId, Painter, pos2};

use crate::canvas::Cell;
use crate::state::EditorSession;
use crate::widgets::ToolButton;

const BACKGROUND: Color32 = Color32::from_rgb(40, 40, 40);
const CHECKER_DARK: Color32 = Color32::from_rgb(190, 190, 190);
const CHECKER_LIGHT: Color32 = Color32::from_rgb(220, 220, 220);
const STATUS_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Space between the bottom of the window and the status line
const STATUS_BOTTOM_OFFSET: f32 = 40.0;

/// Draws one frame of the editor through an egui painter
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    status_font: FontId,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            status_font: FontId::proportional(14.0),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill color of an empty cell: a two-tone checkerboard
    pub fn checker_color(x: usize, y: usize) -> Color32 {
        if (x + y) % 2 == 0 { CHECKER_DARK } else { CHECKER_LIGHT }
    }

    /// Screen color of a cell at grid position (x, y)
    pub fn cell_color(cell: Cell, x: usize, y: usize) -> Color32 {
        match cell {
            Cell::Color(rgb) => rgb.into(),
            Cell::Empty => Self::checker_color(x, y),
        }
    }

    pub fn render(&self, painter: &Painter, session: &EditorSession) {
        let layout = session.layout();
        painter.rect_filled(painter.clip_rect(), 0.0, self.background);

        for (pos, cell) in session.canvas().cells() {
            painter.rect_filled(layout.cell_rect(pos), 0.0, Self::cell_color(cell, pos.x, pos.y));
        }

        let tools = session.tools();
        session.picker().paint(painter, layout, tools.color());
        ToolButton::paint_all(painter, layout, tools.tool(), tools.auto_switch());
        session.size_input().paint(painter, layout);

        if let Some(status) = session.status() {
            let window = layout.window_size();
            painter.text(
                pos2(layout.panel_x(), window.y - STATUS_BOTTOM_OFFSET),
                Align2::LEFT_TOP,
                status,
                self.status_font.clone(),
                STATUS_COLOR,
            );
        }
    }
}
