pub mod scanner;
pub mod services;
pub mod types;

pub use scanner::{ResistorScanner, ScanReport, ScanSummary};
pub use services::calculate_resistor;
pub use types::{BandColor, BandSequence, ResistorValue, ScanlineSample};
