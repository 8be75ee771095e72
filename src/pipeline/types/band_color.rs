use std::fmt;

use image::Rgb;
use serde::{Deserialize, Serialize};

/// A colour band as it appears on a resistor body.
///
/// The discriminant is the band's digit value in the resistor colour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Blue = 6,
    White = 9,
}

impl BandColor {
    pub fn digit(self) -> u32 {
        self as u32
    }

    /// Tolerance in percent when this colour sits in the tolerance position.
    ///
    /// White maps to 0%, which is what the scanner has always reported even though a
    /// missing tolerance band conventionally means 20%.
    pub fn tolerance_percent(self) -> Option<f64> {
        match self {
            BandColor::Black => Some(0.0),
            BandColor::Brown => Some(1.0),
            BandColor::Red => Some(2.0),
            BandColor::Blue => Some(0.25),
            BandColor::White => Some(0.0),
            BandColor::Orange | BandColor::Yellow => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Blue => "blue",
            BandColor::White => "white",
        }
    }

    /// Colour painted over a classified pixel in the highlight image (RGB order).
    pub fn display_rgb(self) -> Rgb<u8> {
        match self {
            BandColor::Black => Rgb([0, 0, 0]),
            BandColor::Brown => Rgb([52, 29, 13]),
            BandColor::Red => Rgb([255, 0, 0]),
            BandColor::Orange => Rgb([87, 45, 8]),
            BandColor::Yellow => Rgb([36, 96, 100]),
            BandColor::Blue => Rgb([0, 0, 255]),
            BandColor::White => Rgb([255, 255, 255]),
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joins colour names with spaces, for log lines and console output.
pub fn color_names(colors: &[BandColor]) -> String {
    colors
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(" ")
}
