use super::BandColor;

/// Classified colours of one sampled row, one entry per image column.
pub type ScanlineSample = Vec<BandColor>;

/// Fused, hysteresis-filtered colours across all columns. Still contains the
/// background runs between bands.
pub type BandSequence = Vec<BandColor>;
