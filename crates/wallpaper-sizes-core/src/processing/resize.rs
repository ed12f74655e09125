use image::imageops::FilterType;
use image::DynamicImage;
use log::debug;

use crate::processing::crop::crop_box;
use crate::types::{CropBox, TargetSize};

/// Resampling filter used for every generated size
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Crop `image` to the aspect ratio of `target`, then scale it to exactly `target`
///
/// Cropping always happens before scaling. Returns the resized image and the
/// crop that was applied.
pub fn resize_to_target(
    image: &DynamicImage,
    target: TargetSize,
) -> (DynamicImage, Option<CropBox>) {
    let (base_width, base_height) = (image.width(), image.height());
    let crop = crop_box(base_width, base_height, target);

    let resized = match crop {
        Some(region) => {
            debug!(
                "Cropping {}x{} to ({}, {}, {}, {}) for {}",
                base_width,
                base_height,
                region.left,
                region.top,
                region.right,
                region.bottom,
                target
            );
            image
                .crop_imm(region.left, region.top, region.width(), region.height())
                .resize_exact(target.width, target.height, RESIZE_FILTER)
        }
        // Same size: nothing to resample
        None if base_width == target.width && base_height == target.height => image.clone(),
        None => image.resize_exact(target.width, target.height, RESIZE_FILTER),
    };

    (resized, crop)
}
