use std::path::{Path, PathBuf};

use directories::UserDirs;
use serde::{Deserialize, Serialize};

use crate::canvas::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
use crate::error::ConfigError;
use crate::export::MAX_EXPORT_SCALE;

/// Editor settings. Canvas content is never part of this.
///
/// Missing fields take their default, so old or partial config files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas width in cells at startup
    pub canvas_width: usize,
    /// Canvas height in cells at startup
    pub canvas_height: usize,
    /// Width of the right-hand panel holding picker, tools and size dialog
    pub palette_width: f32,
    /// Cell size used to size the initial window
    pub base_pixel_size: f32,
    /// On-screen cell size never shrinks below this
    pub min_pixel_size: f32,
    /// Each cell becomes an `export_scale` x `export_scale` block in the PNG
    pub export_scale: u32,
    /// Where exports go. `None` means the user's Downloads folder.
    pub export_dir: Option<PathBuf>,
    /// Switch back to the brush after a middle-click color pick
    pub eyedropper_auto_switch: bool,
    pub target_fps: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 16,
            canvas_height: 16,
            palette_width: 300.0,
            base_pixel_size: 16.0,
            min_pixel_size: 8.0,
            export_scale: 16,
            export_dir: None,
            eyedropper_auto_switch: true,
            target_fps: 60.0,
        }
    }
}

impl EditorConfig {
    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: EditorConfig = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    /// Clamp values that would make the editor unusable
    pub fn sanitized(mut self) -> Self {
        self.canvas_width = self.canvas_width.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        self.canvas_height = self.canvas_height.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        self.min_pixel_size = self.min_pixel_size.max(1.0);
        self.base_pixel_size = self.base_pixel_size.max(self.min_pixel_size);
        self.palette_width = self.palette_width.max(0.0);
        self.export_scale = self.export_scale.clamp(1, MAX_EXPORT_SCALE);
        if !(self.target_fps > 0.0) {
            self.target_fps = 60.0;
        }
        self
    }

    /// Initial window size fitting the canvas at `base_pixel_size` plus the panel
    pub fn initial_window_size(&self) -> [f32; 2] {
        [
            self.canvas_width as f32 * self.base_pixel_size + self.palette_width,
            self.canvas_height as f32 * self.base_pixel_size,
        ]
    }

    /// Resolve the export directory, falling back to `~/Downloads`
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(downloads_dir)
    }
}

fn downloads_dir() -> PathBuf {
    let Some(dirs) = UserDirs::new() else {
        log::warn!("No home directory found, exporting into ./Downloads");
        return PathBuf::from("Downloads");
    };
    dirs.download_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs.home_dir().join("Downloads"))
}
