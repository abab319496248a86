mod color_picker;
mod size_input;
mod tool_buttons;

pub use color_picker::{ColorPicker, PickerDrag};
pub use size_input::{CanvasSizeInput, SizeField, SizeInputOutcome, key_digit};
pub use tool_buttons::ToolButton;
