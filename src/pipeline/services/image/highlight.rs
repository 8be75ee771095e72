//! Visualization of classified scanlines.
//!
//! Runs after classification and never feeds back into it: the input image is
//! copied, each sampled pixel is painted with its band's display colour, and the
//! copy can be written to disk for inspection.

use std::path::Path;

use image::RgbImage;

use crate::error::ScanError;
use crate::pipeline::types::ScanlineSample;

/// Copy of `image` with every sampled pixel replaced by the display colour of its
/// classification.
pub fn render(image: &RgbImage, rows: &[u32; 3], samples: &[ScanlineSample; 3]) -> RgbImage {
    let mut highlighted = image.clone();
    for (&row, sample) in rows.iter().zip(samples) {
        if row >= highlighted.height() {
            continue;
        }
        for (x, color) in (0..highlighted.width()).zip(sample) {
            highlighted.put_pixel(x, row, color.display_rgb());
        }
    }
    highlighted
}

/// Writes `image` to `path`; the format follows the file extension.
pub fn save(image: &RgbImage, path: &Path) -> Result<(), ScanError> {
    image.save(path).map_err(|source| ScanError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
