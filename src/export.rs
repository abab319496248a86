use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};

use crate::canvas::{Canvas, Cell, MAX_CANVAS_SIZE};
use crate::error::ExportError;

pub const EXPORT_BASE_NAME: &str = "pixel_art";
pub const EXPORT_EXTENSION: &str = "png";

/// Largest scale the editor settings accept
pub const MAX_EXPORT_SCALE: u32 = 64;

/// Longest image side ever written: a full-size canvas at the largest scale
pub const MAX_EXPORT_DIMENSION: u32 = MAX_CANVAS_SIZE as u32 * MAX_EXPORT_SCALE;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rasterize the canvas, each cell becoming a `scale` x `scale` block.
///
/// Empty cells are fully transparent, painted cells fully opaque. Fails with
/// `TooLarge` when a side would exceed `MAX_EXPORT_DIMENSION`.
pub fn rasterize(canvas: &Canvas, scale: u32) -> Result<RgbaImage, ExportError> {
    let (width, height) = scaled_size(canvas, scale)?;
    let mut image = RgbaImage::from_pixel(width, height, TRANSPARENT);

    for (pos, cell) in canvas.cells() {
        let Cell::Color(rgb) = cell else {
            continue;
        };
        let pixel = Rgba([rgb.r, rgb.g, rgb.b, 255]);
        let x0 = pos.x as u32 * scale;
        let y0 = pos.y as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(x0 + dx, y0 + dy, pixel);
            }
        }
    }

    Ok(image)
}

fn scaled_size(canvas: &Canvas, scale: u32) -> Result<(u32, u32), ExportError> {
    let too_large = || ExportError::TooLarge {
        width: canvas.width(),
        height: canvas.height(),
        scale,
    };
    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .filter(|side| *side <= MAX_EXPORT_DIMENSION)
            .ok_or_else(too_large)
    };
    Ok((scaled(canvas.width())?, scaled(canvas.height())?))
}

/// First of `base.ext`, `base(1).ext`, `base(2).ext`, ... not present in `dir`
pub fn next_available_path(dir: &Path, base: &str, extension: &str) -> PathBuf {
    (0u32..)
        .map(|index| {
            let name = if index == 0 {
                format!("{base}.{extension}")
            } else {
                format!("{base}({index}).{extension}")
            };
            dir.join(name)
        })
        .find(|path| !path.exists())
        .unwrap_or_else(|| dir.join(format!("{base}.{extension}")))
}

/// Write the canvas as a PNG into `dir` under the next free `pixel_art` name.
///
/// Creates `dir` if needed and returns the path written.
pub fn export_png(canvas: &Canvas, scale: u32, dir: &Path) -> Result<PathBuf, ExportError> {
    if scale == 0 {
        return Err(ExportError::InvalidScale);
    }

    let image = rasterize(canvas, scale)?;

    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = next_available_path(dir, EXPORT_BASE_NAME, EXPORT_EXTENSION);
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.clone(),
            source,
        })?;

    log::info!("Saved {}x{} canvas to {}", canvas.width(), canvas.height(), path.display());
    Ok(path)
}
