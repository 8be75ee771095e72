pub mod decoder;
pub mod image;
pub mod sequence;

pub use decoder::calculate_resistor;
