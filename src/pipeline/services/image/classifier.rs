use super::palette::{magnitude, similarity, ColorPalette, ColorVector};
use crate::pipeline::types::BandColor;

/// Maps a single pixel onto one colour of a [`ColorPalette`].
pub struct BandClassifier {
    palette: ColorPalette,
    /// Magnitudes of the black and white references, cached since every pixel is
    /// checked against both.
    black_magnitude: f64,
    white_magnitude: f64,
}

impl BandClassifier {
    pub fn new(palette: ColorPalette) -> Self {
        Self {
            black_magnitude: magnitude(palette.black()),
            white_magnitude: magnitude(palette.white()),
            palette,
        }
    }

    /// Classifies one pixel. Every pixel yields a colour.
    pub fn classify(&self, pixel: &ColorVector) -> BandColor {
        let pixel_magnitude = magnitude(pixel);

        if pixel_magnitude < self.black_magnitude {
            return BandColor::Black;
        }
        if pixel_magnitude > self.white_magnitude {
            return BandColor::White;
        }

        let (color, score) = self.best_match(pixel);
        tracing::debug!("{} = {} correlation", color, score);
        color
    }

    /// Candidate with the greatest similarity to `pixel`. On a tie the earlier
    /// candidate wins.
    ///
    /// Scores are compared at single precision, so candidates closer than an `f32`
    /// step count as tied.
    pub fn best_match(&self, pixel: &ColorVector) -> (BandColor, f32) {
        let mut candidates = self.palette.candidates().iter();
        // A palette without candidates never matches anything; treat it as no vote.
        let first = candidates
            .next()
            .map(|r| (r.color, similarity(&r.vector, pixel) as f32))
            .unwrap_or((BandColor::White, f32::NEG_INFINITY));

        candidates.fold(first, |best, reference| {
            let score = similarity(&reference.vector, pixel) as f32;
            if score > best.1 {
                (reference.color, score)
            } else {
                best
            }
        })
    }
}

impl Default for BandClassifier {
    fn default() -> Self {
        Self::new(ColorPalette::default())
    }
}
