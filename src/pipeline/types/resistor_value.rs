use std::fmt;

use serde::Serialize;

/// Decoded electrical value of a resistor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResistorValue {
    pub resistance_ohms: u64,
    pub tolerance_percent: f64,
}

impl ResistorValue {
    /// Tolerance reported when the resistor has no tolerance band (3-band parts).
    pub const NO_TOLERANCE_BAND_PERCENT: f64 = 0.0;

    pub fn new(resistance_ohms: u64, tolerance_percent: f64) -> Self {
        Self {
            resistance_ohms,
            tolerance_percent,
        }
    }
}

impl fmt::Display for ResistorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ohms ±{}%",
            self.resistance_ohms, self.tolerance_percent
        )
    }
}
