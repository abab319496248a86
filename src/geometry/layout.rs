use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::canvas::GridPos;
use crate::config::EditorConfig;

/// Left area never gets narrower than this, even in a tiny window
pub const MIN_LEFT_AREA_WIDTH: f32 = 60.0;

pub const PANEL_MARGIN: f32 = 20.0;
pub const PICKER_TOP: f32 = 20.0;
pub const PICKER_SIZE: f32 = 200.0;
pub const HUE_BAR_WIDTH: f32 = 50.0;
pub const SV_OFFSET_X: f32 = 70.0;
pub const PREVIEW_TOP: f32 = 240.0;
pub const PREVIEW_HEIGHT: f32 = 80.0;

pub const TOOL_BUTTON_TOP: f32 = 340.0;
pub const TOOL_BUTTON_SIZE: f32 = 60.0;
pub const TOOL_BUTTON_GAP: f32 = 20.0;

pub const SIZE_BAR_BOTTOM_OFFSET: f32 = 90.0;
pub const SIZE_BAR_WIDTH: f32 = 200.0;
pub const SIZE_BAR_HEIGHT: f32 = 36.0;
pub const SIZE_BOX_WIDTH: f32 = 64.0;
pub const SIZE_BOX_HEIGHT: f32 = 32.0;
pub const SIZE_BOX_SPACING: f32 = 44.0;
pub const SIZE_BOX_GAP: f32 = 32.0;

/// Screen placement of the canvas and every widget for the current window.
///
/// The canvas takes the left part of the window and is centered in it; the
/// fixed-width panel on the right holds the color picker, the tool buttons
/// and the canvas-size dialog. Recomputed whenever the window or the canvas
/// dimensions change.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    palette_width: f32,
    min_pixel_size: f32,
    window: Vec2,
    grid_width: usize,
    grid_height: usize,
    left_area_width: f32,
    pixel_size: f32,
    canvas_origin: Pos2,
}

impl Layout {
    pub fn new(config: &EditorConfig, window: Vec2, grid_width: usize, grid_height: usize) -> Self {
        let mut layout = Self {
            palette_width: config.palette_width,
            min_pixel_size: config.min_pixel_size,
            window,
            grid_width,
            grid_height,
            left_area_width: 0.0,
            pixel_size: 0.0,
            canvas_origin: Pos2::ZERO,
        };
        layout.recalc(window, grid_width, grid_height);
        layout
    }

    /// Recompute cell size and canvas offset for a new window or grid size
    pub fn recalc(&mut self, window: Vec2, grid_width: usize, grid_height: usize) {
        self.window = window;
        self.grid_width = grid_width.max(1);
        self.grid_height = grid_height.max(1);

        self.left_area_width = (window.x - self.palette_width).floor().max(MIN_LEFT_AREA_WIDTH);

        let fit_x = (self.left_area_width / self.grid_width as f32).floor();
        let fit_y = (window.y / self.grid_height as f32).floor();
        self.pixel_size = fit_x.min(fit_y).max(self.min_pixel_size);

        let canvas_size = self.canvas_size();
        self.canvas_origin = pos2(
            ((self.left_area_width - canvas_size.x) / 2.0).floor(),
            ((window.y - canvas_size.y) / 2.0).floor(),
        );
    }

    pub fn window_size(&self) -> Vec2 {
        self.window
    }

    /// Side length of one cell on screen
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn left_area_width(&self) -> f32 {
        self.left_area_width
    }

    fn canvas_size(&self) -> Vec2 {
        vec2(
            self.grid_width as f32 * self.pixel_size,
            self.grid_height as f32 * self.pixel_size,
        )
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(self.canvas_origin, self.canvas_size())
    }

    /// Map a pointer position to the cell under it.
    ///
    /// Returns `None` unless the pointer lies inside the canvas rectangle
    /// (right and bottom edges excluded). Every canvas mutation goes through
    /// this check.
    pub fn cell_at(&self, pos: Pos2) -> Option<GridPos> {
        let rect = self.canvas_rect();
        let inside = pos.x >= rect.min.x
            && pos.x < rect.max.x
            && pos.y >= rect.min.y
            && pos.y < rect.max.y;
        if !inside {
            return None;
        }

        let x = ((pos.x - rect.min.x) / self.pixel_size).floor() as usize;
        let y = ((pos.y - rect.min.y) / self.pixel_size).floor() as usize;
        Some(GridPos::new(
            x.min(self.grid_width - 1),
            y.min(self.grid_height - 1),
        ))
    }

    /// Screen rectangle covered by one cell
    pub fn cell_rect(&self, cell: GridPos) -> Rect {
        Rect::from_min_size(
            self.canvas_origin + vec2(cell.x as f32, cell.y as f32) * self.pixel_size,
            Vec2::splat(self.pixel_size),
        )
    }

    /// Left edge of the widget column
    pub fn panel_x(&self) -> f32 {
        self.left_area_width + PANEL_MARGIN
    }

    pub fn hue_rect(&self) -> Rect {
        Rect::from_min_size(
            pos2(self.panel_x(), PICKER_TOP),
            vec2(HUE_BAR_WIDTH, PICKER_SIZE),
        )
    }

    pub fn sv_rect(&self) -> Rect {
        Rect::from_min_size(
            pos2(self.panel_x() + SV_OFFSET_X, PICKER_TOP),
            Vec2::splat(PICKER_SIZE),
        )
    }

    pub fn preview_rect(&self) -> Rect {
        Rect::from_min_size(
            pos2(self.panel_x() + SV_OFFSET_X, PREVIEW_TOP),
            vec2(PICKER_SIZE, PREVIEW_HEIGHT),
        )
    }

    /// Hue selected by a pointer at `pos` over the hue bar, clamped to `0..=1`
    pub fn hue_at(&self, pos: Pos2) -> f32 {
        ((pos.y - PICKER_TOP) / PICKER_SIZE).clamp(0.0, 1.0)
    }

    /// Saturation and value selected by a pointer at `pos` over the square
    pub fn saturation_value_at(&self, pos: Pos2) -> (f32, f32) {
        let rect = self.sv_rect();
        let s = ((pos.x - rect.min.x) / PICKER_SIZE).clamp(0.0, 1.0);
        let v = (1.0 - (pos.y - rect.min.y) / PICKER_SIZE).clamp(0.0, 1.0);
        (s, v)
    }

    /// Rectangle of the `index`-th toolbar button, top to bottom
    pub fn tool_button_rect(&self, index: usize) -> Rect {
        let y = TOOL_BUTTON_TOP + index as f32 * (TOOL_BUTTON_SIZE + TOOL_BUTTON_GAP);
        Rect::from_min_size(pos2(self.panel_x(), y), Vec2::splat(TOOL_BUTTON_SIZE))
    }

    /// The "Canvas Size" bar that opens the resize dialog
    pub fn size_bar_rect(&self) -> Rect {
        Rect::from_min_size(
            pos2(self.panel_x(), self.window.y - SIZE_BAR_BOTTOM_OFFSET),
            vec2(SIZE_BAR_WIDTH, SIZE_BAR_HEIGHT),
        )
    }

    pub fn width_box_rect(&self) -> Rect {
        let bar = self.size_bar_rect();
        Rect::from_min_size(
            pos2(bar.min.x, bar.min.y - SIZE_BOX_SPACING),
            vec2(SIZE_BOX_WIDTH, SIZE_BOX_HEIGHT),
        )
    }

    pub fn height_box_rect(&self) -> Rect {
        let width_box = self.width_box_rect();
        Rect::from_min_size(
            pos2(width_box.max.x + SIZE_BOX_GAP, width_box.min.y),
            vec2(SIZE_BOX_WIDTH, SIZE_BOX_HEIGHT),
        )
    }
}
