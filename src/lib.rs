#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod fill;
pub mod geometry;
pub mod history;
pub mod input;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod widgets;

pub use app::PixelApp;
pub use canvas::{Canvas, Cell, GridPos};
pub use color::{ColorState, Hsv, Rgb};
pub use command::{Command, WindowRequest};
pub use config::EditorConfig;
pub use error::{EditorError, EditorResult, ExportError};
pub use export::export_png;
pub use history::History;
pub use input::{InputEvent, InputHandler, route_event};
pub use renderer::Renderer;
pub use state::{DragState, EditorSession, ToolState};
pub use tools::Tool;
