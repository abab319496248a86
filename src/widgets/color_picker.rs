use egui::{Color32, Painter, Pos2, Rect, Stroke, pos2, vec2};

use crate::color::{ColorState, Hsv, hsv_to_rgb};
use crate::geometry::Layout;

/// Mesh subdivisions used to approximate the saturation/value gradient
const SV_STEPS: usize = 16;

/// Which part of the picker the primary button is dragging, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerDrag {
    #[default]
    None,
    Hue,
    SaturationValue,
}

/// Hue bar plus saturation/value square.
///
/// A drag starts on primary press over either area and follows the pointer
/// every frame until release, even outside the widget (values are clamped).
#[derive(Debug, Clone, Default)]
pub struct ColorPicker {
    drag: PickerDrag,
}

impl ColorPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> PickerDrag {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != PickerDrag::None
    }

    /// Start a drag if `pos` is over the hue bar or the square. Hue wins.
    pub fn pointer_down(&mut self, pos: Pos2, layout: &Layout) -> bool {
        if layout.hue_rect().contains(pos) {
            self.drag = PickerDrag::Hue;
        } else if layout.sv_rect().contains(pos) {
            self.drag = PickerDrag::SaturationValue;
        }
        self.is_dragging()
    }

    pub fn pointer_up(&mut self) {
        self.drag = PickerDrag::None;
    }

    /// Per-frame update while dragging
    pub fn drag_to(&self, pos: Pos2, layout: &Layout, color: &mut ColorState) {
        match self.drag {
            PickerDrag::None => {}
            PickerDrag::Hue => color.set_hue(layout.hue_at(pos)),
            PickerDrag::SaturationValue => {
                let (s, v) = layout.saturation_value_at(pos);
                color.set_saturation_value(s, v);
            }
        }
    }

    pub fn paint(&self, painter: &Painter, layout: &Layout, color: &ColorState) {
        let hsv = color.hsv();

        paint_hue_bar(painter, layout.hue_rect());
        let hue_rect = layout.hue_rect();
        let marker_y = hue_rect.min.y + hsv.h * hue_rect.height();
        painter.rect_stroke(
            Rect::from_min_size(
                pos2(hue_rect.min.x - 2.0, marker_y - 2.0),
                vec2(hue_rect.width() + 4.0, 4.0),
            ),
            0.0,
            Stroke::new(2.0, Color32::WHITE),
        );

        let sv_rect = layout.sv_rect();
        paint_sv_square(painter, sv_rect, hsv.h);
        let marker = pos2(
            sv_rect.min.x + hsv.s * sv_rect.width(),
            sv_rect.min.y + (1.0 - hsv.v) * sv_rect.height(),
        );
        painter.circle_stroke(marker, 8.0, Stroke::new(3.0, Color32::WHITE));

        let preview = layout.preview_rect();
        painter.rect_filled(preview, 0.0, Color32::from(color.rgb()));
        painter.rect_stroke(preview, 0.0, Stroke::new(3.0, Color32::BLACK));
    }
}

fn hue_color(h: f32) -> Color32 {
    hsv_to_rgb(Hsv::new(h, 1.0, 1.0)).into()
}

/// Six vertically stacked gradients through the hue wheel
fn paint_hue_bar(painter: &Painter, rect: Rect) {
    let mut mesh = egui::Mesh::default();
    for step in 0..=6 {
        let t = step as f32 / 6.0;
        let y = rect.min.y + t * rect.height();
        let color = hue_color(t);
        mesh.colored_vertex(pos2(rect.min.x, y), color);
        mesh.colored_vertex(pos2(rect.max.x, y), color);
        if step > 0 {
            let i = mesh.vertices.len() as u32 - 4;
            mesh.add_triangle(i, i + 1, i + 2);
            mesh.add_triangle(i + 1, i + 2, i + 3);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Saturation grows to the right, value grows upwards
fn paint_sv_square(painter: &Painter, rect: Rect, hue: f32) {
    let mut mesh = egui::Mesh::default();
    let row_len = (SV_STEPS + 1) as u32;
    for row in 0..=SV_STEPS {
        let ty = row as f32 / SV_STEPS as f32;
        for col in 0..=SV_STEPS {
            let tx = col as f32 / SV_STEPS as f32;
            let pos = pos2(rect.min.x + tx * rect.width(), rect.min.y + ty * rect.height());
            let color: Color32 = hsv_to_rgb(Hsv::new(hue, tx, 1.0 - ty)).into();
            mesh.colored_vertex(pos, color);
        }
    }
    for row in 0..SV_STEPS as u32 {
        for col in 0..SV_STEPS as u32 {
            let top_left = row * row_len + col;
            let bottom_left = top_left + row_len;
            mesh.add_triangle(top_left, top_left + 1, bottom_left);
            mesh.add_triangle(top_left + 1, bottom_left, bottom_left + 1);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
}
