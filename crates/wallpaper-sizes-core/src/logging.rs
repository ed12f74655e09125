use log::{error, info};
use std::path::Path;

use crate::types::GeneratedImage;

/// Log a generated image
pub fn log_generated(image: &GeneratedImage) {
    match image.crop {
        Some(crop) => info!(
            "FS CHANGE - Operation: write, Path: {}, Details: {} from {} cropped to ({}, {}, {}, {})",
            image.output.display(),
            image.size,
            image.template.display(),
            crop.left,
            crop.top,
            crop.right,
            crop.bottom
        ),
        None => info!(
            "FS CHANGE - Operation: write, Path: {}, Details: {} from {}",
            image.output.display(),
            image.size,
            image.template.display()
        ),
    }
}

/// Log an image operation that failed
pub fn log_image_error(path: &Path, operation: &str, error: &dyn std::error::Error) {
    error!(
        "Image operation failed - Operation: {}, Path: {}, Error: {}",
        operation,
        path.display(),
        error
    );
}
