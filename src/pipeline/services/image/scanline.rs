use super::classifier::BandClassifier;
use super::pixel_source::PixelSource;
use crate::error::ScanError;
use crate::pipeline::types::ScanlineSample;

/// Horizontal lines at a third, half and two thirds of the image height.
pub const DEFAULT_SCANLINE_RATIOS: [f64; 3] = [0.33, 0.5, 0.67];

/// Samples three rows of an image and classifies every pixel on them.
pub struct ScanlineSampler {
    ratios: [f64; 3],
    classifier: BandClassifier,
}

impl ScanlineSampler {
    pub fn new(ratios: [f64; 3], classifier: BandClassifier) -> Self {
        Self { ratios, classifier }
    }

    /// Row indices for an image `height` pixels tall, top to bottom.
    ///
    /// Fractional rows truncate toward zero.
    pub fn rows(&self, height: u32) -> [u32; 3] {
        self.ratios.map(|ratio| (ratio * f64::from(height)) as u32)
    }

    /// Classified colours of the top, middle and bottom scanlines, each one entry per
    /// column.
    pub fn sample<S: PixelSource>(&self, source: &S) -> Result<[ScanlineSample; 3], ScanError> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(ScanError::EmptyImage { width, height });
        }

        let rows = self.rows(height);
        let mut samples: [ScanlineSample; 3] = Default::default();

        for (band_idx, (&row, sample)) in rows.iter().zip(samples.iter_mut()).enumerate() {
            tracing::debug!("band {} sampled at row {}", band_idx + 1, row);
            sample.reserve(width as usize);
            sample.extend((0..width).map(|x| self.classifier.classify(&source.pixel(x, row))));
        }

        Ok(samples)
    }
}

impl Default for ScanlineSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SCANLINE_RATIOS, BandClassifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::BandColor;
    use image::{Rgb, RgbImage};

    #[test]
    fn rows_truncate_toward_zero() {
        let sampler = ScanlineSampler::default();
        assert_eq!(sampler.rows(100), [33, 50, 67]);
        assert_eq!(sampler.rows(10), [3, 5, 6]);
        assert_eq!(sampler.rows(7), [2, 3, 4]);
        assert_eq!(sampler.rows(1), [0, 0, 0]);
    }

    #[test]
    fn samples_one_entry_per_column() {
        let image = RgbImage::from_pixel(37, 12, Rgb([0, 255, 0]));
        let samples = ScanlineSampler::default().sample(&image).unwrap();
        for sample in &samples {
            assert_eq!(sample.len(), 37);
            assert!(sample.iter().all(|&c| c == BandColor::Blue));
        }
    }

    #[test]
    fn each_scanline_reads_its_own_row() {
        // Rows 3, 5 and 6 of a 10 pixel tall image.
        let image = RgbImage::from_fn(4, 10, |_, y| match y {
            3 => Rgb([67, 8, 4]),
            5 => Rgb([52, 29, 13]),
            6 => Rgb([0, 0, 0]),
            _ => Rgb([255, 255, 255]),
        });
        let [top, middle, bottom] = ScanlineSampler::default().sample(&image).unwrap();
        assert_eq!(top, vec![BandColor::Red; 4]);
        assert_eq!(middle, vec![BandColor::Brown; 4]);
        assert_eq!(bottom, vec![BandColor::Black; 4]);
    }

    #[test]
    fn empty_image_is_rejected() {
        let image = RgbImage::new(0, 5);
        let err = ScanlineSampler::default().sample(&image).unwrap_err();
        assert!(matches!(err, ScanError::EmptyImage { width: 0, height: 5 }));
    }
}
