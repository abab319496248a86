use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::geometry::Layout;
use crate::tools::Tool;

const SELECTED_FILL: Color32 = Color32::from_rgb(255, 230, 140);
const AUTO_SWITCH_ON_FILL: Color32 = Color32::from_rgb(255, 170, 170);
const IDLE_FILL: Color32 = Color32::from_rgb(230, 230, 230);

/// One entry of the toolbar column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolButton {
    Tool(Tool),
    /// Toggles whether a middle-click pick switches back to the brush
    AutoSwitch,
}

impl ToolButton {
    /// Buttons in top-to-bottom order
    pub const ALL: [ToolButton; 5] = [
        ToolButton::Tool(Tool::Brush),
        ToolButton::Tool(Tool::Eraser),
        ToolButton::Tool(Tool::Eyedropper),
        ToolButton::Tool(Tool::Fill),
        ToolButton::AutoSwitch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolButton::Tool(tool) => tool.label(),
            ToolButton::AutoSwitch => "AS",
        }
    }

    /// Find the button under `pos`
    pub fn hit(layout: &Layout, pos: Pos2) -> Option<ToolButton> {
        Self::ALL
            .iter()
            .enumerate()
            .find(|(index, _)| layout.tool_button_rect(*index).contains(pos))
            .map(|(_, button)| *button)
    }

    /// Draw every button, highlighting the active tool and the auto-switch state
    pub fn paint_all(painter: &Painter, layout: &Layout, active: Tool, auto_switch: bool) {
        for (index, button) in Self::ALL.iter().enumerate() {
            let rect = layout.tool_button_rect(index);
            let fill = match button {
                ToolButton::Tool(tool) if *tool == active => SELECTED_FILL,
                ToolButton::AutoSwitch if auto_switch => AUTO_SWITCH_ON_FILL,
                _ => IDLE_FILL,
            };

            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(3.0, Color32::BLACK));

            let font_size = match button {
                ToolButton::AutoSwitch => 22.0,
                ToolButton::Tool(_) => 30.0,
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                button.label(),
                FontId::proportional(font_size),
                Color32::BLACK,
            );
        }
    }
}
