use std::path::Path;

use image::RgbImage;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ScanConfiguration;
use crate::error::ScanError;
use crate::pipeline::services::decoder::{calculate_resistor, MAX_BANDS, MIN_BANDS};
use crate::pipeline::services::image::{
    highlight, load_image, BandClassifier, ColorPalette, PixelSource, ScanlineSampler,
};
use crate::pipeline::services::sequence::{remove_background, SequenceFuser};
use crate::pipeline::types::{color_names, BandColor, BandSequence, ResistorValue, ScanlineSample};

/// Everything a scan produced, stage by stage.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Rows the three scanlines were taken from, top to bottom.
    pub rows: [u32; 3],
    pub samples: [ScanlineSample; 3],
    pub agreement_width: usize,
    /// Fused colours, background runs included.
    pub raw_colors: BandSequence,
    /// Band colours in reading order.
    pub bands: Vec<BandColor>,
    pub value: ResistorValue,
}

impl ScanReport {
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            resistance_ohms: self.value.resistance_ohms,
            tolerance_percent: self.value.tolerance_percent,
            bands: self.bands.clone(),
        }
    }
}

/// Console and JSON view of a successful scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub resistance_ohms: u64,
    pub tolerance_percent: f64,
    pub bands: Vec<BandColor>,
}

/// Runs sampling, fusion, background removal and decoding over one image.
pub struct ResistorScanner {
    configuration: ScanConfiguration,
    sampler: ScanlineSampler,
}

impl ResistorScanner {
    pub fn new(configuration: ScanConfiguration) -> Result<Self, ScanError> {
        configuration.validate()?;
        Ok(Self::with_valid_configuration(configuration))
    }

    fn with_valid_configuration(configuration: ScanConfiguration) -> Self {
        let palette = ColorPalette::for_variant(configuration.palette);
        let sampler =
            ScanlineSampler::new(configuration.scanline_ratios, BandClassifier::new(palette));
        Self {
            configuration,
            sampler,
        }
    }

    /// Loads the image at `path`, scans it and writes the highlight image if one
    /// was configured.
    pub fn scan_file(&self, path: &Path) -> Result<ScanReport, ScanError> {
        info!("Reading input file {}", path.display());
        let image = load_image(path)?;
        let report = self.scan(&image)?;

        if let Some(output) = &self.configuration.highlight_output {
            highlight::save(&self.highlight(&image, &report), output)?;
            info!("Highlighted scanlines written to {}", output.display());
        }

        Ok(report)
    }

    /// Scans an image already in memory.
    pub fn scan<S: PixelSource>(&self, source: &S) -> Result<ScanReport, ScanError> {
        let (width, height) = source.dimensions();
        info!("width: {}, height: {}", width, height);

        let rows = self.sampler.rows(height);
        let samples = self.sampler.sample(source)?;

        let fuser =
            SequenceFuser::for_width(width as usize, self.configuration.agreement_width_ratio);
        let raw_colors = fuser.fuse(&samples)?;
        info!("colors with background: {}", color_names(&raw_colors));

        let bands = remove_background(&raw_colors);
        info!("colors: {}", color_names(&bands));

        if !(MIN_BANDS..=MAX_BANDS).contains(&bands.len()) {
            warn!(
                "{} bands left after background removal, cannot decode",
                bands.len()
            );
        }
        let value = calculate_resistor(&bands)?;
        info!("resistance: {} ohms", value.resistance_ohms);
        info!("tolerance: {}%", value.tolerance_percent);

        Ok(ScanReport {
            rows,
            samples,
            agreement_width: fuser.agreement_width(),
            raw_colors,
            bands,
            value,
        })
    }

    /// Highlight image for a finished scan of `image`.
    pub fn highlight(&self, image: &RgbImage, report: &ScanReport) -> RgbImage {
        highlight::render(image, &report.rows, &report.samples)
    }
}

impl Default for ResistorScanner {
    fn default() -> Self {
        Self::with_valid_configuration(ScanConfiguration::default())
    }
}
