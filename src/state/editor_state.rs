//! The tool-dispatch state machine.
//!
//! Pointer gestures on the canvas move the drag state between three states:
//!
//! ```text
//!              primary down on canvas
//!          ┌──────────────────────────► LeftDragging ──┐
//!          │                                           │ primary up,
//!   Idle ◄─┼───────────────────────────────────────────┘ or a fill fired
//!          │   secondary down on canvas                │
//!          └──────────────────────────► RightDragging ─┘ secondary up
//! ```
//!
//! While a drag is active, `apply` is called once per frame with the cell
//! under the pointer and performs the tool's action on it. Each gesture
//! records at most one history snapshot, taken right before the first
//! change it makes to the canvas (right-button erase gestures snapshot when
//! they start).

use egui::PointerButton;

use crate::canvas::{Canvas, Cell, GridPos};
use crate::color::ColorState;
use crate::fill::flood_fill;
use crate::history::History;
use crate::tools::Tool;

/// Which pointer gesture is in progress on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Primary button held: the current tool acts
    LeftDragging,
    /// Secondary button held: continuous erase
    RightDragging,
}

impl DragState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: DragState) -> bool {
        match (self, new_state) {
            // From Idle, either gesture can start
            (DragState::Idle, _) => true,
            // A gesture can only end, never turn into the other one
            (_, DragState::Idle) => true,
            _ => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// The button that ends this gesture
    pub fn button(&self) -> Option<PointerButton> {
        match self {
            DragState::Idle => None,
            DragState::LeftDragging => Some(PointerButton::Primary),
            DragState::RightDragging => Some(PointerButton::Secondary),
        }
    }
}

/// What one frame of dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolEffect {
    None,
    Painted,
    Erased,
    Picked,
    Filled { cells: usize },
}

/// Current tool, drag state and drawing color
#[derive(Debug, Clone)]
pub struct ToolState {
    tool: Tool,
    drag: DragState,
    color: ColorState,
    auto_switch: bool,
    /// Whether the current gesture has already pushed its snapshot
    gesture_recorded: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ToolState {
    pub fn new(auto_switch: bool) -> Self {
        Self {
            tool: Tool::Brush,
            drag: DragState::Idle,
            color: ColorState::default(),
            auto_switch,
            gesture_recorded: false,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn color(&self) -> &ColorState {
        &self.color
    }

    pub fn color_mut(&mut self) -> &mut ColorState {
        &mut self.color
    }

    pub fn auto_switch(&self) -> bool {
        self.auto_switch
    }

    pub fn set_auto_switch(&mut self, enabled: bool) {
        self.auto_switch = enabled;
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
        }
    }

    fn transition(&mut self, new_state: DragState) -> bool {
        if !self.drag.can_transition_to(new_state) || self.drag == new_state {
            return false;
        }
        self.drag = new_state;
        true
    }

    /// Handle a button press. `cell` is the cell under the pointer, `None`
    /// when the pointer is outside the canvas; nothing on the canvas happens
    /// then. Returns true if the press started a gesture or picked a color.
    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        cell: Option<GridPos>,
        canvas: &Canvas,
        history: &mut History,
    ) -> bool {
        let Some(cell) = cell else {
            return false;
        };
        match button {
            PointerButton::Primary => {
                if !self.transition(DragState::LeftDragging) {
                    return false;
                }
                self.gesture_recorded = false;
                true
            }
            PointerButton::Secondary => {
                if !self.transition(DragState::RightDragging) {
                    return false;
                }
                // Every frame of an erase gesture mutates, so record up front
                history.snapshot(canvas);
                self.gesture_recorded = true;
                log::debug!("Erase gesture started at {:?}", cell);
                true
            }
            PointerButton::Middle => self.quick_pick(cell, canvas),
            _ => false,
        }
    }

    /// Handle a button release. Only ends the gesture that button started.
    pub fn pointer_up(&mut self, button: PointerButton) {
        if self.drag.button() == Some(button) {
            self.end_gesture();
        }
    }

    /// Drop any gesture in progress, e.g. when the canvas is replaced
    pub fn end_gesture(&mut self) {
        self.transition(DragState::Idle);
        self.gesture_recorded = false;
    }

    /// Make the gesture in progress snapshot again before its next change.
    ///
    /// Needed after undo or redo swapped the canvas under a running gesture.
    pub fn rearm_snapshot(&mut self) {
        self.gesture_recorded = false;
    }

    /// One-shot middle-button eyedropper, independent of the current tool.
    ///
    /// Picking an empty cell does nothing. Drag state and history are untouched.
    pub fn quick_pick(&mut self, cell: GridPos, canvas: &Canvas) -> bool {
        let Some(rgb) = canvas.get(cell).color() else {
            return false;
        };
        self.color.set_rgb(rgb);
        let tool = if self.auto_switch {
            Tool::Brush
        } else {
            Tool::Eyedropper
        };
        self.select_tool(tool);
        true
    }

    /// Per-frame dispatch of the active gesture onto the cell under the pointer.
    pub fn apply(&mut self, cell: Option<GridPos>, canvas: &mut Canvas, history: &mut History) -> ToolEffect {
        let Some(cell) = cell else {
            return ToolEffect::None;
        };
        match self.drag {
            DragState::Idle => ToolEffect::None,
            DragState::RightDragging => {
                if self.change_cell(cell, Cell::Empty, canvas, history) {
                    ToolEffect::Erased
                } else {
                    ToolEffect::None
                }
            }
            DragState::LeftDragging => self.apply_tool(cell, canvas, history),
        }
    }

    fn apply_tool(&mut self, cell: GridPos, canvas: &mut Canvas, history: &mut History) -> ToolEffect {
        match self.tool {
            Tool::Brush => {
                let paint = Cell::Color(self.color.rgb());
                if self.change_cell(cell, paint, canvas, history) {
                    ToolEffect::Painted
                } else {
                    ToolEffect::None
                }
            }
            Tool::Eraser => {
                if self.change_cell(cell, Cell::Empty, canvas, history) {
                    ToolEffect::Erased
                } else {
                    ToolEffect::None
                }
            }
            Tool::Eyedropper => match canvas.get(cell).color() {
                Some(rgb) => {
                    self.color.set_rgb(rgb);
                    ToolEffect::Picked
                }
                None => ToolEffect::None,
            },
            Tool::Fill => {
                let target = canvas.get(cell);
                let replacement = Cell::Color(self.color.rgb());
                let cells = if target == replacement {
                    0
                } else {
                    self.record_gesture(canvas, history);
                    flood_fill(canvas, cell, target, replacement)
                };
                // Fill fires once per click
                self.end_gesture();
                ToolEffect::Filled { cells }
            }
        }
    }

    fn change_cell(&mut self, cell: GridPos, value: Cell, canvas: &mut Canvas, history: &mut History) -> bool {
        if canvas.get(cell) == value {
            return false;
        }
        self.record_gesture(canvas, history);
        canvas.set(cell, value);
        true
    }

    fn record_gesture(&mut self, canvas: &Canvas, history: &mut History) {
        if !self.gesture_recorded {
            history.snapshot(canvas);
            self.gesture_recorded = true;
            log::debug!("Recorded snapshot for {} gesture", self.tool);
        }
    }
}
