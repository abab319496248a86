#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use pixel_editor::{EditorConfig, PixelApp};

fn main() -> eframe::Result {
    env_logger::init();

    let config = std::env::args().nth(1).map(PathBuf::from).and_then(|path| {
        match EditorConfig::load(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                None
            }
        }
    });

    let initial_size = config.clone().unwrap_or_default().sanitized().initial_window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(initial_size)
            .with_min_inner_size([200.0, 200.0])
            .with_title("Pixel Editor"),
        // Window size follows the editor settings, not the last session's geometry
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(PixelApp::new(cc, config)))),
    )
}
