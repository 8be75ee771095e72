//! Reads a resistor's value from a photograph of its colour bands.
//!
//! Three horizontal scanlines are classified pixel by pixel against a small palette,
//! fused into one band sequence by majority vote with a minimum run width, stripped
//! of background runs and finally decoded with the standard resistor colour code.

pub mod config;
pub mod error;
pub mod pipeline;

pub use crate::config::ScanConfiguration;
pub use crate::error::ScanError;

pub use pipeline::services::image::{BandClassifier, ColorPalette, PaletteVariant, PixelSource};
pub use pipeline::{calculate_resistor, BandColor, ResistorScanner, ResistorValue, ScanReport};
