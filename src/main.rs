use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greylut::models::{ExtensionFilter, HsvTint, RunConfig, DEFAULT_EXTENSIONS};
use greylut::runner::{self, RunOutcome};

#[derive(Parser)]
#[command(name = "greylut")]
#[command(version, about = "Apply a 1D LUT to greyscale JPG/PNG images from a directory")]
struct Cli {
    /// Directory containing input images (JPG/PNG)
    #[arg(long, value_name = "DIR")]
    input_dir: PathBuf,

    /// Directory where processed images will be saved (created if missing)
    #[arg(long, value_name = "DIR")]
    output_dir: PathBuf,

    /// CSV/TSV LUT with columns 'Scan' (input) and 'Idea' (output)
    #[arg(long, value_name = "FILE")]
    lut: PathBuf,

    /// Invert output pixel values (negative) and flip the image left-right
    #[arg(long)]
    negative: bool,

    /// Comma-separated file extensions to process
    #[arg(long, value_name = "LIST", default_value = DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Stretch each image to the full 0-255 range before applying the LUT
    #[arg(long)]
    stretch: bool,

    /// Tint output to HSV color: H 0-360, S 0-100, V 0-100 (V scales luminance)
    #[arg(long, value_name = "H,S,V")]
    hsv: Option<String>,

    /// Write a JSON summary of the batch to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RunConfig> {
        let tint = self
            .hsv
            .as_deref()
            .map(HsvTint::parse)
            .transpose()
            .context("Invalid --hsv")?;

        Ok(RunConfig {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            lut_path: self.lut,
            negative: self.negative,
            extensions: ExtensionFilter::parse(&self.extensions),
            stretch: self.stretch,
            tint,
            report: self.report,
        })
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greylut=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.into_config()?;

    let outcome = runner::run_with(&config, |task, result| {
        if result.is_ok() {
            println!("{}", task.name());
        }
    })
    .map_err(|e| {
        let context = if e.is_precondition() {
            "Cannot start"
        } else if e.is_validation() {
            "Cannot build tone table"
        } else {
            "Batch aborted"
        };
        anyhow::Error::new(e).context(context)
    })?;

    match &outcome {
        RunOutcome::NoImages => println!("No images found in input directory."),
        RunOutcome::Completed(report) => {
            println!(
                "Processed {} image(s) -> {}",
                report.processed.len(),
                config.output_dir.display()
            );
            if !report.is_success() {
                eprintln!("{} of {} image(s) failed:", report.failures.len(), report.total());
                for failure in &report.failures {
                    eprintln!("  {}: {}", failure.source.display(), failure.error);
                }
            }
        }
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
