use std::path::Path;

use image::RgbImage;

use super::palette::ColorVector;
use crate::error::ScanError;

/// Read access to a decoded image, one pixel at a time.
///
/// Implementations hand pixels over in the palette's channel order (BGR).
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Pixel at column `x`, row `y`. Callers stay within [`Self::dimensions`].
    fn pixel(&self, x: u32, y: u32) -> ColorVector;
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> ColorVector {
        let [r, g, b] = self.get_pixel(x, y).0;
        [f64::from(b), f64::from(g), f64::from(r)]
    }
}

/// Decodes the image at `path` into an 8-bit RGB buffer.
pub fn load_image(path: &Path) -> Result<RgbImage, ScanError> {
    let image = image::open(path).map_err(|source| ScanError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8())
}
