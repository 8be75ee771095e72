pub mod band_color;
pub mod band_sequence;
pub mod resistor_value;

pub use band_color::{color_names, BandColor};
pub use band_sequence::{BandSequence, ScanlineSample};
pub use resistor_value::ResistorValue;
