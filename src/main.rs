use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use resistor_scanner::pipeline::types::color_names;
use resistor_scanner::{PaletteVariant, ResistorScanner, ScanConfiguration, ScanError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resistor-scanner")]
#[command(version, about = "Reads a resistor's value from a photo of its colour bands", long_about = None)]
struct Cli {
    /// Photo of the resistor, leads running left to right
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Settings file (toml, json or yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Band colours to detect: reduced or extended
    #[arg(short, long, value_name = "PALETTE")]
    palette: Option<PaletteVariant>,

    /// Write the classified scanlines over the photo to this file
    #[arg(long, value_name = "FILE")]
    highlight: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ScanError> {
    let mut configuration = ScanConfiguration::load(cli.config.as_deref())?;
    if let Some(palette) = cli.palette {
        configuration = configuration.with_palette(palette);
    }
    if let Some(path) = cli.highlight {
        configuration = configuration.with_highlight_output(path);
    }

    let scanner = ResistorScanner::new(configuration)?;
    let report = scanner.scan_file(&cli.image)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        println!("{}", report.value);
        println!("bands: {}", color_names(&report.bands));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
