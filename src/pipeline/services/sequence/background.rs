use crate::pipeline::types::BandColor;

/// Drops the background runs from a fused sequence.
///
/// A scan starts and ends on the board or lead colour and alternates background and
/// band from there, so only odd indices are bands. A trailing band without a
/// background after it is dropped.
pub fn remove_background(colors: &[BandColor]) -> Vec<BandColor> {
    let usable = colors.len().saturating_sub(1);
    colors[..usable].iter().skip(1).step_by(2).copied().collect()
}
