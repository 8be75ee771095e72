use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::types::BandColor;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to save highlight image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Image of {width}x{height} pixels has nothing to sample")]
    EmptyImage { width: u32, height: u32 },
    #[error("Scanlines differ in length: expected {expected} columns, found {found}")]
    ScanlineLengthMismatch { expected: usize, found: usize },
    #[error("Undecodable band pattern: {0} bands detected, expected 3 to 6")]
    InvalidBandCount(usize),
    #[error("Undecodable band pattern: {0} has no tolerance mapping")]
    UnmappedTolerance(BandColor),
    #[error("Decoded resistance does not fit in 64 bits")]
    ValueOverflow,
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to serialize scan summary: {0}")]
    Summary(#[from] serde_json::Error),
}
