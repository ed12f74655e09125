use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageEncoder};
use log::debug;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::processing::formats::save_io_error;

/// Encode `image` as PNG, with maximum compression when `optimize` is set
pub fn write_png(image: &DynamicImage, path: &Path, optimize: bool) -> Result<()> {
    debug!("Writing PNG (optimize {}) to {}", optimize, path.display());

    // 8-bit layouts are written as they are; anything else goes to RGBA8
    let image = match image.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(image),
        _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
    };

    let (compression, filter) = if optimize {
        (CompressionType::Best, FilterType::Adaptive)
    } else {
        (CompressionType::Default, FilterType::Sub)
    };

    let file = File::create(path).map_err(|e| save_io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut writer, compression, filter)
        .write_image(image.as_bytes(), image.width(), image.height(), image.color())
        .map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|e| save_io_error(path, e))
}
