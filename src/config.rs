use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::pipeline::services::image::{PaletteVariant, DEFAULT_SCANLINE_RATIOS};
use crate::pipeline::services::sequence::DEFAULT_AGREEMENT_WIDTH_RATIO;

/// Prefix of environment variables overriding file settings, e.g.
/// `RESISTOR_SCANNER_PALETTE=extended`.
pub const ENV_PREFIX: &str = "RESISTOR_SCANNER";

/// Tunable parameters of a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfiguration {
    pub palette: PaletteVariant,
    /// Heights of the three scanlines as fractions of the image height, top first.
    pub scanline_ratios: [f64; 3],
    /// Minimum band width as a fraction of the image width.
    pub agreement_width_ratio: f32,
    /// Where to write the highlighted scanlines, if anywhere.
    pub highlight_output: Option<PathBuf>,
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self {
            palette: PaletteVariant::Reduced,
            scanline_ratios: DEFAULT_SCANLINE_RATIOS,
            agreement_width_ratio: DEFAULT_AGREEMENT_WIDTH_RATIO,
            highlight_output: None,
        }
    }
}

impl ScanConfiguration {
    /// Configuration using only black, red, blue, brown and white
    pub fn reduced() -> Self {
        Self::default()
    }

    /// Configuration that can also detect orange and yellow bands
    pub fn extended() -> Self {
        Self {
            palette: PaletteVariant::Extended,
            ..Self::default()
        }
    }

    /// Loads settings from an optional file, then applies `RESISTOR_SCANNER_*`
    /// environment overrides. Unset keys keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ScanError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let configuration: Self = settings.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ScanError> {
        if !(self.agreement_width_ratio > 0.0 && self.agreement_width_ratio <= 1.0) {
            return Err(ScanError::InvalidConfiguration(format!(
                "agreement width ratio must be in (0, 1], got {}",
                self.agreement_width_ratio
            )));
        }

        for ratio in self.scanline_ratios {
            if !(0.0..1.0).contains(&ratio) {
                return Err(ScanError::InvalidConfiguration(format!(
                    "scanline ratio must be in [0, 1), got {ratio}"
                )));
            }
        }

        if self.scanline_ratios.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ScanError::InvalidConfiguration(
                "scanline ratios must be ordered top to bottom".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_palette(mut self, palette: PaletteVariant) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_highlight_output(mut self, path: PathBuf) -> Self {
        self.highlight_output = Some(path);
        self
    }
}
