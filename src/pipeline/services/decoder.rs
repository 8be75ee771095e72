//! Resistor colour code.
//!
//! Bands are read from the end of the body backwards:
//!
//! | bands | layout                                              |
//! |-------|-----------------------------------------------------|
//! | 3     | digit, digit, multiplier                            |
//! | 4     | digit, digit, multiplier, tolerance                 |
//! | 5     | digit, digit, digit, multiplier, tolerance          |
//! | 6     | digit, digit, digit, multiplier, tolerance, tempco  |
//!
//! The temperature coefficient band of 6-band parts is not decoded.

use crate::error::ScanError;
use crate::pipeline::types::{BandColor, ResistorValue};

pub const MIN_BANDS: usize = 3;
pub const MAX_BANDS: usize = 6;

/// Decodes a cleaned band sequence into ohms and tolerance.
pub fn calculate_resistor(resistor_bands: &[BandColor]) -> Result<ResistorValue, ScanError> {
    let band_count = resistor_bands.len();
    if !(MIN_BANDS..=MAX_BANDS).contains(&band_count) {
        return Err(ScanError::InvalidBandCount(band_count));
    }

    let mut bands = resistor_bands.iter().rev().copied();
    if band_count == MAX_BANDS {
        bands.next();
    }

    let mut tolerance_percent = ResistorValue::NO_TOLERANCE_BAND_PERCENT;
    if band_count > MIN_BANDS {
        let tolerance_band = bands.next().ok_or(ScanError::InvalidBandCount(band_count))?;
        tolerance_percent = tolerance_band
            .tolerance_percent()
            .ok_or(ScanError::UnmappedTolerance(tolerance_band))?;
    }

    let multiplier_band = bands.next().ok_or(ScanError::InvalidBandCount(band_count))?;
    let multiplier = 10u64
        .checked_pow(multiplier_band.digit())
        .ok_or(ScanError::ValueOverflow)?;

    // Remaining bands are significant digits, least significant first.
    let mut resistance_ohms = 0u64;
    let mut digit_multiplier = 1u64;
    for band in bands {
        resistance_ohms += digit_multiplier * u64::from(band.digit());
        digit_multiplier *= 10;
    }

    let resistance_ohms = resistance_ohms
        .checked_mul(multiplier)
        .ok_or(ScanError::ValueOverflow)?;

    Ok(ResistorValue::new(resistance_ohms, tolerance_percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use BandColor::*;

    #[test]
    fn three_bands_have_no_tolerance() {
        let value = calculate_resistor(&[Brown, Black, Red]).unwrap();
        assert_eq!(value.resistance_ohms, 1_000);
        assert_eq!(value.tolerance_percent, 0.0);
    }

    #[test]
    fn four_bands_read_tolerance_last() {
        let value = calculate_resistor(&[Red, Red, Brown, Blue]).unwrap();
        assert_eq!(value, ResistorValue::new(220, 0.25));
    }

    #[test]
    fn five_bands_use_three_digits() {
        let value = calculate_resistor(&[Yellow, Brown, Black, Red, Brown]).unwrap();
        assert_eq!(value, ResistorValue::new(41_000, 1.0));
    }

    #[test]
    fn six_bands_ignore_temperature_coefficient() {
        let value = calculate_resistor(&[Brown, Black, Black, Red, Brown, Red]).unwrap();
        assert_eq!(value, ResistorValue::new(10_000, 1.0));

        let other_tempco = calculate_resistor(&[Brown, Black, Black, Red, Brown, Orange]);
        assert_eq!(other_tempco.unwrap(), value);
    }

    #[test]
    fn black_multiplier_is_unity() {
        let value = calculate_resistor(&[Blue, Red, Black, Red]).unwrap();
        assert_eq!(value, ResistorValue::new(62, 2.0));
    }

    #[test]
    fn white_tolerance_reads_as_zero() {
        let value = calculate_resistor(&[Brown, Black, Brown, White]).unwrap();
        assert_eq!(value, ResistorValue::new(100, 0.0));
    }

    #[test]
    fn resistance_is_a_multiple_of_the_multiplier() {
        for multiplier in [Black, Brown, Red, Orange, Yellow, Blue] {
            let value = calculate_resistor(&[Red, Yellow, multiplier]).unwrap();
            assert_eq!(value.resistance_ohms % 10u64.pow(multiplier.digit()), 0);
            assert_eq!(value.resistance_ohms, 24 * 10u64.pow(multiplier.digit()));
        }
    }

    #[test]
    fn band_count_outside_three_to_six_is_rejected() {
        for count in [0, 1, 2, 7, 8] {
            let bands = vec![Brown; count];
            match calculate_resistor(&bands) {
                Err(ScanError::InvalidBandCount(n)) => assert_eq!(n, count),
                other => panic!("{count} bands decoded as {other:?}"),
            }
        }
    }

    #[test]
    fn orange_or_yellow_tolerance_is_rejected() {
        let err = calculate_resistor(&[Brown, Black, Red, Orange]).unwrap_err();
        assert!(matches!(err, ScanError::UnmappedTolerance(Orange)));
        let err = calculate_resistor(&[Brown, Black, Black, Red, Yellow]).unwrap_err();
        assert!(matches!(err, ScanError::UnmappedTolerance(Yellow)));
    }

    #[test]
    fn white_multiplier_stays_in_range() {
        let value = calculate_resistor(&[White, White, White]).unwrap();
        assert_eq!(value.resistance_ohms, 99_000_000_000);
    }
}
