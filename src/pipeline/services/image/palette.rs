//! Reference colours and the colour math used to match pixels against them.
//!
//! Vectors are stored in BGR order. Every pixel compared against a palette must be
//! handed over in the same order (see [`super::pixel_source::PixelSource`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pipeline::types::BandColor;

/// Three channel values, in the palette's channel order.
pub type ColorVector = [f64; 3];

pub const BLACK_REFERENCE: ColorVector = [25.0, 25.0, 25.0];
pub const WHITE_REFERENCE: ColorVector = [198.0, 198.0, 198.0];
pub const RED_REFERENCE: ColorVector = [4.0, 8.0, 67.0];
pub const BLUE_REFERENCE: ColorVector = [0.0, 255.0, 0.0];
pub const BROWN_REFERENCE: ColorVector = [13.0, 29.0, 52.0];
pub const ORANGE_REFERENCE: ColorVector = [8.0, 45.0, 87.0];
pub const YELLOW_REFERENCE: ColorVector = [100.0, 96.0, 36.0];

/// Which set of band colours the classifier may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteVariant {
    /// Black, red, blue, brown and white.
    #[default]
    Reduced,
    /// The reduced set plus orange and yellow.
    Extended,
}

impl FromStr for PaletteVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reduced" => Ok(PaletteVariant::Reduced),
            "extended" => Ok(PaletteVariant::Extended),
            other => Err(format!(
                "unknown palette '{other}', expected 'reduced' or 'extended'"
            )),
        }
    }
}

impl fmt::Display for PaletteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteVariant::Reduced => f.write_str("reduced"),
            PaletteVariant::Extended => f.write_str("extended"),
        }
    }
}

/// A band colour together with the vector it is matched against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceColor {
    pub color: BandColor,
    pub vector: ColorVector,
}

impl ReferenceColor {
    pub const fn new(color: BandColor, vector: ColorVector) -> Self {
        Self { color, vector }
    }
}

/// Immutable set of reference colours.
///
/// Black and white are only reached through the saturation clamps; the remaining
/// candidates are matched by similarity in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    black: ColorVector,
    white: ColorVector,
    candidates: Vec<ReferenceColor>,
}

impl ColorPalette {
    pub fn reduced() -> Self {
        Self {
            black: BLACK_REFERENCE,
            white: WHITE_REFERENCE,
            candidates: vec![
                ReferenceColor::new(BandColor::Red, RED_REFERENCE),
                ReferenceColor::new(BandColor::Blue, BLUE_REFERENCE),
                ReferenceColor::new(BandColor::Brown, BROWN_REFERENCE),
            ],
        }
    }

    pub fn extended() -> Self {
        let mut palette = Self::reduced();
        palette.candidates.extend([
            ReferenceColor::new(BandColor::Orange, ORANGE_REFERENCE),
            ReferenceColor::new(BandColor::Yellow, YELLOW_REFERENCE),
        ]);
        palette
    }

    /// Palette built from caller-supplied references. Candidates are matched in the
    /// order given.
    pub fn from_references(
        black: ColorVector,
        white: ColorVector,
        candidates: Vec<ReferenceColor>,
    ) -> Self {
        Self {
            black,
            white,
            candidates,
        }
    }

    pub fn for_variant(variant: PaletteVariant) -> Self {
        match variant {
            PaletteVariant::Reduced => Self::reduced(),
            PaletteVariant::Extended => Self::extended(),
        }
    }

    pub fn black(&self) -> &ColorVector {
        &self.black
    }

    pub fn white(&self) -> &ColorVector {
        &self.white
    }

    pub fn candidates(&self) -> &[ReferenceColor] {
        &self.candidates
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::reduced()
    }
}

/// Cube root of the sum of squared channels.
///
/// Not a Euclidean norm. Band detection thresholds were tuned against this exact
/// quantity, so it must stay as is.
pub fn magnitude(vector: &ColorVector) -> f64 {
    (vector[0] * vector[0] + vector[1] * vector[1] + vector[2] * vector[2]).cbrt()
}

/// Dot product of the two vectors over the product of their magnitudes.
///
/// Undefined for a zero vector; none of the references is one.
pub fn similarity(reference: &ColorVector, sample: &ColorVector) -> f64 {
    let dot = reference[0] * sample[0] + reference[1] * sample[1] + reference[2] * sample[2];
    dot / (magnitude(reference) * magnitude(sample))
}
