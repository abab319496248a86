use egui::{Align2, Color32, FontId, Key, Painter, Pos2, Stroke, vec2};

use crate::error::SizeInputError;
use crate::geometry::Layout;

/// Longest number either field accepts
const MAX_DIGITS: usize = 3;

const BAR_FILL: Color32 = Color32::from_rgb(200, 220, 255);
const FOCUSED_FILL: Color32 = Color32::WHITE;
const UNFOCUSED_FILL: Color32 = Color32::from_rgb(235, 235, 235);

/// The text field currently receiving digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    Width,
    Height,
}

/// What a key press did to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeInputOutcome {
    /// Text or focus changed, or the key was swallowed
    Edited,
    Cancelled,
    /// Enter was pressed. The dialog is closed either way.
    Committed(Result<(usize, usize), SizeInputError>),
}

/// Transient state of the canvas-size dialog.
///
/// Buffers only exist while the dialog is open; they are discarded on
/// commit or cancel.
#[derive(Debug, Clone, Default)]
pub struct CanvasSizeInput {
    active: bool,
    width: String,
    height: String,
    focus: Option<SizeField>,
}

impl CanvasSizeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn focus(&self) -> Option<SizeField> {
        self.focus
    }

    pub fn width_text(&self) -> &str {
        &self.width
    }

    pub fn height_text(&self) -> &str {
        &self.height
    }

    /// Open the dialog pre-filled with the current canvas size, no field focused
    pub fn open(&mut self, width: usize, height: usize) {
        self.active = true;
        self.width = width.to_string();
        self.height = height.to_string();
        self.focus = None;
    }

    pub fn set_focus(&mut self, field: SizeField) {
        if self.active {
            self.focus = Some(field);
        }
    }

    /// Focus the field under `pos`, if any. Only meaningful while open.
    pub fn focus_at(&mut self, pos: Pos2, layout: &Layout) -> bool {
        if !self.active {
            return false;
        }
        if layout.width_box_rect().contains(pos) {
            self.set_focus(SizeField::Width);
            true
        } else if layout.height_box_rect().contains(pos) {
            self.set_focus(SizeField::Height);
            true
        } else {
            false
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus? {
            SizeField::Width => Some(&mut self.width),
            SizeField::Height => Some(&mut self.height),
        }
    }

    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.focused_text() {
            if text.len() < MAX_DIGITS {
                text.push(digit);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    fn close(&mut self) {
        self.active = false;
        self.focus = None;
        self.width.clear();
        self.height.clear();
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Parse both fields and close the dialog.
    ///
    /// The returned size is not clamped yet; `Canvas::resize` does that.
    pub fn commit(&mut self) -> Result<(usize, usize), SizeInputError> {
        let result = parse_size(&self.width, &self.height);
        self.close();
        result
    }

    /// Feed a key press. While the dialog is open it swallows every key.
    pub fn handle_key(&mut self, key: Key) -> SizeInputOutcome {
        match key {
            Key::Enter => SizeInputOutcome::Committed(self.commit()),
            Key::Escape => {
                self.cancel();
                SizeInputOutcome::Cancelled
            }
            Key::Backspace => {
                self.backspace();
                SizeInputOutcome::Edited
            }
            other => {
                if let Some(digit) = key_digit(other) {
                    self.push_digit(digit);
                }
                SizeInputOutcome::Edited
            }
        }
    }

    pub fn paint(&self, painter: &Painter, layout: &Layout) {
        let font = FontId::proportional(16.0);

        let bar = layout.size_bar_rect();
        painter.rect_filled(bar, 0.0, BAR_FILL);
        painter.rect_stroke(bar, 0.0, Stroke::new(2.0, Color32::BLACK));
        painter.text(
            bar.center(),
            Align2::CENTER_CENTER,
            "Canvas Size",
            font.clone(),
            Color32::BLACK,
        );

        if !self.active {
            return;
        }

        let fields = [
            (SizeField::Width, layout.width_box_rect(), &self.width),
            (SizeField::Height, layout.height_box_rect(), &self.height),
        ];
        for (field, rect, text) in fields {
            let fill = if self.focus == Some(field) {
                FOCUSED_FILL
            } else {
                UNFOCUSED_FILL
            };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(2.0, Color32::BLACK));
            painter.text(
                rect.left_center() + vec2(8.0, 0.0),
                Align2::LEFT_CENTER,
                text,
                font.clone(),
                Color32::BLACK,
            );
        }

        let width_box = layout.width_box_rect();
        let height_box = layout.height_box_rect();
        let between = width_box.right_center() + (height_box.left_center() - width_box.right_center()) / 2.0;
        painter.text(between, Align2::CENTER_CENTER, "×", font, Color32::BLACK);
    }
}

fn parse_size(width: &str, height: &str) -> Result<(usize, usize), SizeInputError> {
    if width.is_empty() || height.is_empty() {
        return Err(SizeInputError::Empty);
    }
    let parse = |text: &str| {
        text.parse::<usize>()
            .map_err(|_| SizeInputError::NotANumber(text.to_owned()))
    };
    Ok((parse(width)?, parse(height)?))
}

/// The digit a number-row key types, if it is one
pub fn key_digit(key: Key) -> Option<char> {
    let digit = match key {
        Key::Num0 => '0',
        Key::Num1 => '1',
        Key::Num2 => '2',
        Key::Num3 => '3',
        Key::Num4 => '4',
        Key::Num5 => '5',
        Key::Num6 => '6',
        Key::Num7 => '7',
        Key::Num8 => '8',
        Key::Num9 => '9',
        _ => return None,
    };
    Some(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_prefills_without_focus() {
        let mut input = CanvasSizeInput::new();
        input.open(16, 32);
        assert!(input.is_active());
        assert_eq!(input.width_text(), "16");
        assert_eq!(input.height_text(), "32");
        assert_eq!(input.focus(), None);

        // Without focus, typing goes nowhere
        input.handle_key(Key::Num5);
        assert_eq!(input.width_text(), "16");
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut input = CanvasSizeInput::new();
        input.open(16, 16);
        input.set_focus(SizeField::Height);

        input.handle_key(Key::Backspace);
        input.handle_key(Key::Backspace);
        input.handle_key(Key::Num6);
        input.handle_key(Key::Num4);
        input.handle_key(Key::A);
        assert_eq!(input.height_text(), "64");
        assert_eq!(input.width_text(), "16");

        assert_eq!(
            input.handle_key(Key::Enter),
            SizeInputOutcome::Committed(Ok((16, 64)))
        );
        assert!(!input.is_active());
        assert_eq!(input.width_text(), "");
    }

    #[test]
    fn test_digit_limit() {
        let mut input = CanvasSizeInput::new();
        input.open(128, 1);
        input.set_focus(SizeField::Width);
        input.push_digit('9');
        assert_eq!(input.width_text(), "128");
    }

    #[test]
    fn test_empty_field_is_rejected_and_closes() {
        let mut input = CanvasSizeInput::new();
        input.open(8, 8);
        input.set_focus(SizeField::Width);
        input.backspace();
        assert_eq!(input.commit(), Err(SizeInputError::Empty));
        assert!(!input.is_active());
    }

    #[test]
    fn test_rejected_commit_outcome_is_cloneable() {
        let mut input = CanvasSizeInput::new();
        input.open(8, 8);
        input.set_focus(SizeField::Height);
        input.push_digit('x');
        input.handle_key(Key::Backspace);
        input.handle_key(Key::Backspace);

        let outcome = input.handle_key(Key::Enter);
        let kept = outcome.clone();
        assert_eq!(kept, SizeInputOutcome::Committed(Err(SizeInputError::Empty)));
        assert_eq!(outcome, kept);
    }

    #[test]
    fn test_escape_cancels() {
        let mut input = CanvasSizeInput::new();
        input.open(8, 8);
        assert_eq!(input.handle_key(Key::Escape), SizeInputOutcome::Cancelled);
        assert!(!input.is_active());
        assert_eq!(input.focus(), None);
    }

    #[test]
    fn test_focus_requires_open_dialog() {
        let mut input = CanvasSizeInput::new();
        input.set_focus(SizeField::Width);
        assert_eq!(input.focus(), None);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("12", "7"), Ok((12, 7)));
        assert_eq!(parse_size("", "7"), Err(SizeInputError::Empty));
        assert_eq!(
            parse_size("1x", "7"),
            Err(SizeInputError::NotANumber("1x".to_owned()))
        );
    }
}
