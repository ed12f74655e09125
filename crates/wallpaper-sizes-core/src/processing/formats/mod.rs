// Format-specific modules
pub mod jpeg;
pub mod png;

use image::DynamicImage;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::ImageFormat;

// Re-export format-specific functions for external use
pub use jpeg::write_jpeg;
pub use png::write_png;

/// Encoder settings applied to every generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// JPEG quality (1-100)
    pub quality: u8,

    /// Strongest PNG compression, optimized JPEG Huffman tables
    pub optimize: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            quality: 90,
            optimize: true,
        }
    }
}

impl From<&Config> for OutputOptions {
    fn from(config: &Config) -> Self {
        Self {
            quality: config.quality,
            optimize: config.optimize,
        }
    }
}

/// Save `image` to `path`, choosing the codec from the path's extension
pub fn save_image(image: &DynamicImage, path: &Path, options: &OutputOptions) -> Result<()> {
    match ImageFormat::from_path(path) {
        ImageFormat::Jpeg => write_jpeg(image, path, options.quality, options.optimize),
        ImageFormat::Png => write_png(image, path, options.optimize),
        ImageFormat::Other(ext) => Err(Error::UnsupportedFormat(format!(
            "{} ({})",
            ext,
            path.display()
        ))),
    }
}

/// Wrap an I/O failure on `path` as a save error
pub(crate) fn save_io_error(path: &Path, error: std::io::Error) -> Error {
    Error::Save {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(error),
    }
}
