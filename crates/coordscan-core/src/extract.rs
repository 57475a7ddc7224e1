use std::path::Path;

use coordscan_types::Rectangle;
use image::RgbImage;

use crate::error::{ScanError, ScanResult};

/// Smallest box covering every pixel that is not exactly black.
/// Any non-zero channel marks the pixel; alpha is not considered.
pub fn bounding_box(mask: &RgbImage) -> Option<Rectangle> {
    let mut bounds: Option<Rectangle> = None;

    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel.0 == [0, 0, 0] {
            continue;
        }
        bounds = Some(match bounds {
            None => Rectangle {
                top: y,
                left: x,
                bottom: y,
                right: x,
            },
            Some(r) => Rectangle {
                top: r.top.min(y),
                left: r.left.min(x),
                bottom: r.bottom.max(y),
                right: r.right.max(x),
            },
        });
    }

    bounds
}

/// Open an image, drop alpha and return the bounds of its mask
pub fn extract_rectangle(path: &Path) -> ScanResult<Rectangle> {
    let mask = image::open(path)?.to_rgb8();
    bounding_box(&mask).ok_or_else(|| ScanError::EmptyMask(path.to_path_buf()))
}
