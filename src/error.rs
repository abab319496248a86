use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the canvas to a PNG file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export scale must be at least 1")]
    InvalidScale,

    #[error("A {width}x{height} canvas at scale {scale} is too large to export")]
    TooLarge {
        width: usize,
        height: usize,
        scale: u32,
    },

    #[error("Failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Reasons a canvas size typed into the resize dialog is rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SizeInputError {
    #[error("Both width and height are required")]
    Empty,

    #[error("Invalid canvas size: {0:?}")]
    NotANumber(String),
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level error for editor actions. None of these are fatal for the process.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    SizeInput(#[from] SizeInputError),
}

pub type EditorResult<T> = Result<T, EditorError>;
