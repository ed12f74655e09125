use image::DynamicImage;
use jpeg_encoder::{ColorType, Encoder, SamplingFactor};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::processing::formats::save_io_error;

/// Chroma subsampling for every generated JPEG (4:2:2)
pub const JPEG_SAMPLING: SamplingFactor = SamplingFactor::R_4_2_2;

/// Encode `image` as a JPEG at `quality` with 4:2:2 chroma subsampling
///
/// JPEG carries no alpha channel, so the image is flattened to RGB first.
/// `optimize` computes Huffman tables for the image instead of using the
/// standard ones.
pub fn write_jpeg(image: &DynamicImage, path: &Path, quality: u8, optimize: bool) -> Result<()> {
    debug!(
        "Writing JPEG (quality {}, optimize {}) to {}",
        quality,
        optimize,
        path.display()
    );

    let rgb = image.to_rgb8();
    let too_large = || Error::DimensionsTooLarge {
        path: path.to_path_buf(),
        width: rgb.width(),
        height: rgb.height(),
    };
    let width = u16::try_from(rgb.width()).map_err(|_| too_large())?;
    let height = u16::try_from(rgb.height()).map_err(|_| too_large())?;

    let file = File::create(path).map_err(|e| save_io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    let mut encoder = Encoder::new(&mut writer, quality);
    encoder.set_sampling_factor(JPEG_SAMPLING);
    encoder.set_optimized_huffman_tables(optimize);
    encoder
        .encode(rgb.as_raw(), width, height, ColorType::Rgb)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|e| save_io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    /// Per-component (horizontal, vertical) sampling factors from the frame header
    fn sampling_factors(data: &[u8]) -> Vec<(u8, u8)> {
        let mut i = 2; // skip SOI
        while i + 4 <= data.len() {
            assert_eq!(data[i], 0xFF, "expected marker at offset {}", i);
            let marker = data[i + 1];
            let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;

            // SOF0..SOF2: precision, height, width, component count, components
            if (0xC0..=0xC2).contains(&marker) {
                let count = data[i + 9] as usize;
                return (0..count)
                    .map(|c| {
                        let factors = data[i + 11 + c * 3];
                        (factors >> 4, factors & 0x0F)
                    })
                    .collect();
            }
            i += 2 + length;
        }
        panic!("no frame header found");
    }

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8])
        }))
    }

    #[test]
    fn test_write_jpeg_uses_4_2_2_subsampling() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("64x32.jpg");

        write_jpeg(&gradient(64, 32), &path, 90, true).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(sampling_factors(&data), vec![(2, 1), (1, 1), (1, 1)]);
    }

    #[test]
    fn test_write_jpeg_drops_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("16x9.jpg");
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 9, Rgba([200, 100, 50, 128])));

        write_jpeg(&image, &path, 90, true).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 9));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_optimized_tables_are_not_larger() {
        let dir = tempdir().unwrap();
        let image = gradient(64, 64);

        write_jpeg(&image, &dir.path().join("optimized.jpg"), 90, true).unwrap();
        write_jpeg(&image, &dir.path().join("standard.jpg"), 90, false).unwrap();

        let optimized = std::fs::metadata(dir.path().join("optimized.jpg")).unwrap().len();
        let standard = std::fs::metadata(dir.path().join("standard.jpg")).unwrap().len();
        assert!(optimized <= standard);
        assert!(image::open(dir.path().join("optimized.jpg")).is_ok());
    }

    #[test]
    fn test_lower_quality_is_smaller() {
        let dir = tempdir().unwrap();
        let image = gradient(64, 64);

        write_jpeg(&image, &dir.path().join("high.jpg"), 95, true).unwrap();
        write_jpeg(&image, &dir.path().join("low.jpg"), 20, true).unwrap();

        let high = std::fs::metadata(dir.path().join("high.jpg")).unwrap().len();
        let low = std::fs::metadata(dir.path().join("low.jpg")).unwrap().len();
        assert!(low < high);
    }

    #[test]
    fn test_write_jpeg_rejects_oversized_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("70000x1.jpg");
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(70_000, 1));

        let result = write_jpeg(&image, &path, 90, true);

        assert!(matches!(result, Err(Error::DimensionsTooLarge { .. })));
        assert!(!path.exists());
    }
}
