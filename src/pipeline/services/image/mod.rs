pub mod classifier;
pub mod highlight;
pub mod palette;
pub mod pixel_source;
pub mod scanline;

pub use classifier::BandClassifier;
pub use palette::{magnitude, similarity, ColorPalette, ColorVector, PaletteVariant, ReferenceColor};
pub use pixel_source::{load_image, PixelSource};
pub use scanline::{ScanlineSampler, DEFAULT_SCANLINE_RATIOS};
