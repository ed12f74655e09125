//! Aspect-ratio reconciliation by symmetric cropping
use crate::types::{CropBox, TargetSize};

/// Compute the centered crop that gives the template the aspect ratio of `target`
///
/// Returns `None` when the aspects already match exactly. The trimmed amount
/// is computed in floating point, truncated, then halved with integer
/// division, so both margins are equal and the kept region may be at most
/// one pixel larger than the exact ratio would give.
pub fn crop_box(base_width: u32, base_height: u32, target: TargetSize) -> Option<CropBox> {
    let (width, height) = (target.width, target.height);

    // Exact aspect comparison: width / height vs base_width / base_height
    let target_side = width as u64 * base_height as u64;
    let base_side = base_width as u64 * height as u64;

    if target_side > base_side {
        // Target relatively wider: trim top and bottom
        let scaled_height = height as f64 / (width as f64 / base_width as f64);
        let crop = trimmed(base_height, scaled_height) / 2;
        Some(CropBox {
            left: 0,
            top: crop,
            right: base_width,
            bottom: base_height - crop,
        })
    } else if target_side < base_side {
        // Target relatively narrower: trim left and right
        let scaled_width = width as f64 / (height as f64 / base_height as f64);
        let crop = trimmed(base_width, scaled_width) / 2;
        Some(CropBox {
            left: crop,
            top: 0,
            right: base_width - crop,
            bottom: base_height,
        })
    } else {
        None
    }
}

/// Pixels removed from a dimension of `base` to leave `kept`, truncated
fn trimmed(base: u32, kept: f64) -> u32 {
    // Saturating cast: kept never exceeds base, and a degenerate result clamps to 0
    (base as f64 - kept).trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HORIZONTAL_SIZES, VERTICAL_SIZES};

    const BASES: [(u32, u32); 6] = [
        (1920, 1080),
        (5120, 2880),
        (3840, 2400),
        (4000, 3000),
        (1080, 1920),
        (1441, 997),
    ];

    fn all_targets() -> impl Iterator<Item = TargetSize> {
        HORIZONTAL_SIZES
            .iter()
            .chain(VERTICAL_SIZES.iter())
            .copied()
            .map(TargetSize::from)
    }

    #[test]
    fn test_crop_left_right_16_9_to_16_10() {
        let crop = crop_box(1920, 1080, TargetSize::new(1280, 800)).unwrap();
        assert_eq!(
            crop,
            CropBox {
                left: 96,
                top: 0,
                right: 1824,
                bottom: 1080
            }
        );
    }

    #[test]
    fn test_crop_left_right_16_9_to_4_3() {
        let crop = crop_box(1920, 1080, TargetSize::new(1024, 768)).unwrap();
        assert_eq!(
            crop,
            CropBox {
                left: 240,
                top: 0,
                right: 1680,
                bottom: 1080
            }
        );
        assert_eq!(crop.width() * 768, crop.height() * 1024);
    }

    #[test]
    fn test_crop_top_bottom_when_target_wider() {
        // 16:10 base to 16:9 target
        let crop = crop_box(2560, 1600, TargetSize::new(1920, 1080)).unwrap();
        assert_eq!(crop.left, 0);
        assert_eq!(crop.right, 2560);
        assert_eq!(crop.top, 80);
        assert_eq!(crop.bottom, 1520);
    }

    #[test]
    fn test_equal_aspect_has_no_crop() {
        assert_eq!(crop_box(1920, 1080, TargetSize::new(3840, 2160)), None);
        assert_eq!(crop_box(5120, 2880, TargetSize::new(1920, 1080)), None);
        assert_eq!(crop_box(1080, 1920, TargetSize::new(360, 640)), None);
    }

    #[test]
    fn test_sub_pixel_mismatch_keeps_full_frame() {
        // 1366x768 is marginally wider than 16:9; the trim truncates to one
        // pixel, which halves to zero
        let crop = crop_box(5120, 2880, TargetSize::new(1366, 768)).unwrap();
        assert_eq!(
            crop,
            CropBox {
                left: 0,
                top: 0,
                right: 5120,
                bottom: 2880
            }
        );
    }

    #[test]
    fn test_crop_matches_target_aspect() {
        for (base_width, base_height) in BASES {
            for target in all_targets() {
                let Some(crop) = crop_box(base_width, base_height, target) else {
                    assert_eq!(
                        target.width as u64 * base_height as u64,
                        base_width as u64 * target.height as u64
                    );
                    continue;
                };

                // Ideal length of the trimmed dimension given the other one
                let wider = target.width as u64 * base_height as u64
                    > base_width as u64 * target.height as u64;
                let (kept, ideal) = if wider {
                    (
                        crop.height() as f64,
                        base_width as f64 * target.height as f64 / target.width as f64,
                    )
                } else {
                    (
                        crop.width() as f64,
                        base_height as f64 * target.width as f64 / target.height as f64,
                    )
                };

                // Truncation and halving each round toward keeping more pixels
                assert!(
                    kept >= ideal - 1e-9 && kept - ideal < 2.0,
                    "{}x{} -> {}: kept {} ideal {}",
                    base_width,
                    base_height,
                    target,
                    kept,
                    ideal
                );
            }
        }
    }

    #[test]
    fn test_crop_is_centered() {
        for (base_width, base_height) in BASES {
            for target in all_targets() {
                if let Some(crop) = crop_box(base_width, base_height, target) {
                    assert_eq!(crop.left, base_width - crop.right);
                    assert_eq!(crop.top, base_height - crop.bottom);
                    assert!(crop.width() > 0 && crop.height() > 0);
                }
            }
        }
    }
}
