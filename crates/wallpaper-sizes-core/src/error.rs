use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the wallpaper-sizes library
#[derive(Error, Debug)]
pub enum Error {
    /// A template could not be decoded
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A generated image could not be encoded or written
    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A JPEG could not be encoded or written
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    /// Image is larger than the output format can store
    #[error("{width}x{height} is too large to encode as {}", .path.display())]
    DimensionsTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// File not found error
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Unsupported image format
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Output path resolved to the template itself
    #[error("Refusing to overwrite template: {}", .0.display())]
    WouldOverwriteTemplate(PathBuf),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
