use crate::error::ScanError;
use crate::pipeline::types::{BandColor, BandSequence, ScanlineSample};

/// Fraction of the image width a colour must span before it counts as a band.
pub const DEFAULT_AGREEMENT_WIDTH_RATIO: f32 = 0.035;

/// Minimum run of agreeing columns for an image `width` pixels wide.
pub fn agreement_width(width: usize, ratio: f32) -> usize {
    (width as f32 * ratio).round() as usize
}

/// Majority of three classifications. White stands for "no agreement".
pub fn agree(top: BandColor, middle: BandColor, bottom: BandColor) -> BandColor {
    if top == middle || top == bottom {
        top
    } else if middle == bottom {
        middle
    } else {
        BandColor::White
    }
}

/// Merges the three scanlines column by column and keeps only colours that hold
/// for at least `agreement_width` consecutive voting columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFuser {
    agreement_width: usize,
}

impl SequenceFuser {
    pub fn new(agreement_width: usize) -> Self {
        Self { agreement_width }
    }

    pub fn for_width(width: usize, ratio: f32) -> Self {
        Self::new(agreement_width(width, ratio))
    }

    pub fn agreement_width(&self) -> usize {
        self.agreement_width
    }

    pub fn fuse(&self, samples: &[ScanlineSample; 3]) -> Result<BandSequence, ScanError> {
        let [top, middle, bottom] = samples;
        let expected = top.len();
        for sample in [middle, bottom] {
            if sample.len() != expected {
                return Err(ScanError::ScanlineLengthMismatch {
                    expected,
                    found: sample.len(),
                });
            }
        }

        let mut colors = BandSequence::new();
        let mut prev: Option<BandColor> = None;
        let mut agreement_count = 0usize;

        for ((&t, &m), &b) in top.iter().zip(middle).zip(bottom) {
            let band = agree(t, m, b);

            // Disagreement and agreed white both skip the column without touching
            // the current run.
            if band == BandColor::White {
                continue;
            }

            if prev != Some(band) {
                agreement_count = 0;
                prev = Some(band);
            }
            agreement_count += 1;

            if agreement_count >= self.agreement_width && colors.last() != Some(&band) {
                colors.push(band);
            }
        }

        Ok(colors)
    }
}
