use std::time::Duration;

use crate::command::WindowRequest;
use crate::config::EditorConfig;
use crate::input::{InputHandler, route_event};
use crate::renderer::Renderer;
use crate::state::EditorSession;

/// The editor window: turns each frame's input into session updates and draws
/// the result.
///
/// Only settings survive a restart; canvas content is never persisted.
#[derive(Debug)]
pub struct PixelApp {
    session: EditorSession,
    input: InputHandler,
    renderer: Renderer,
    repaint_interval: Duration,
}

impl PixelApp {
    /// Called once before the first frame.
    ///
    /// An explicit config wins over settings restored from the previous run.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<EditorConfig>) -> Self {
        let stored = cc.storage.and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        let (config, resize) = resolve_config(config, stored);
        if let Some(size) = resize {
            cc.egui_ctx
                .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::Vec2::from(size)));
        }
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let config = config.sanitized();
        let window = egui::Vec2::from(config.initial_window_size());
        let repaint_interval = Duration::from_secs_f32(1.0 / config.target_fps);
        log::info!(
            "Starting editor with a {}x{} canvas",
            config.canvas_width,
            config.canvas_height
        );
        Self {
            session: EditorSession::new(config, window),
            input: InputHandler::new(),
            renderer: Renderer::new(),
            repaint_interval,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    fn handle_window_request(ctx: &egui::Context, request: WindowRequest) {
        match request {
            WindowRequest::ToggleFullscreen => {
                let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                log::info!("Fullscreen {}", if fullscreen { "off" } else { "on" });
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
            }
            WindowRequest::Quit => log::info!("Closing editor"),
        }
    }
}

/// Pick the settings to start with: an explicit config, then the stored one,
/// then defaults.
///
/// The window opens at the explicit or default size, so a stored config that
/// wants another size comes with the inner size to apply.
fn resolve_config(
    explicit: Option<EditorConfig>,
    stored: Option<EditorConfig>,
) -> (EditorConfig, Option<[f32; 2]>) {
    match (explicit, stored) {
        (Some(config), _) => (config, None),
        (None, Some(stored)) => {
            let size = stored.clone().sanitized().initial_window_size();
            let resize = (size != EditorConfig::default().initial_window_size()).then_some(size);
            (stored, resize)
        }
        (None, None) => (EditorConfig::default(), None),
    }
}

impl eframe::App for PixelApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.session.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.input.process_input(ctx) {
            if let Some(request) = route_event(&event, &mut self.session) {
                Self::handle_window_request(ctx, request);
            }
        }

        let hover = ctx.input(|i| i.pointer.hover_pos());
        self.session.frame(hover);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.renderer.render(ui.painter(), &self.session);
            });

        ctx.request_repaint_after(self.repaint_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_wins_over_stored() {
        let explicit = EditorConfig {
            canvas_width: 8,
            ..Default::default()
        };
        let stored = EditorConfig {
            canvas_width: 64,
            ..Default::default()
        };
        let (config, resize) = resolve_config(Some(explicit.clone()), Some(stored));
        assert_eq!(config, explicit);
        assert_eq!(resize, None);
    }

    #[test]
    fn test_stored_canvas_size_resizes_window() {
        let stored = EditorConfig {
            canvas_width: 32,
            canvas_height: 20,
            ..Default::default()
        };
        let (config, resize) = resolve_config(None, Some(stored.clone()));
        assert_eq!(config, stored);
        assert_eq!(resize, Some([32.0 * 16.0 + 300.0, 20.0 * 16.0]));

        let (_, resize) = resolve_config(None, Some(EditorConfig::default()));
        assert_eq!(resize, None);
        assert_eq!(resolve_config(None, None), (EditorConfig::default(), None));
    }
}
