//! Batch run orchestration.
//!
//! Checks preconditions, builds the lookup table, discovers tasks and hands
//! them to the image pipeline. Used by both the CLI and integration tests.

use std::fs;
use std::path::Path;

use tone_lut::LookupTable;

use crate::error::{RunError, TaskError};
use crate::models::{ImageTask, RunConfig};
use crate::services::{discover_tasks, run_batch_with, BatchReport, ImagePipeline, PipelineOptions};

/// How a run that passed all fatal checks ended
#[derive(Debug)]
pub enum RunOutcome {
    /// No file in the input directory matched the extension filter
    NoImages,
    /// Every discovered task was attempted
    Completed(BatchReport),
}

impl RunOutcome {
    /// True unless some task failed
    pub fn is_success(&self) -> bool {
        match self {
            RunOutcome::NoImages => true,
            RunOutcome::Completed(report) => report.is_success(),
        }
    }
}

/// Read and build the lookup table from a `Scan`/`Idea` file.
pub fn load_table(path: &Path) -> Result<LookupTable, RunError> {
    let text = fs::read_to_string(path).map_err(|source| RunError::LutRead {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = tone_lut::parse_samples(&text).map_err(|source| RunError::Lut {
        path: path.to_path_buf(),
        source,
    })?;
    let table = LookupTable::build(&samples);

    tracing::info!(
        path = %path.display(),
        samples = samples.len(),
        monotonic = table.is_monotonic(),
        "Loaded LUT"
    );
    Ok(table)
}

/// Run a batch as configured.
pub fn run(config: &RunConfig) -> Result<RunOutcome, RunError> {
    run_with(config, |_, _| {})
}

/// Like [`run`], calling `on_done` after each task with its result.
pub fn run_with<F>(config: &RunConfig, on_done: F) -> Result<RunOutcome, RunError>
where
    F: FnMut(&ImageTask, Result<(), &TaskError>),
{
    if !config.input_dir.is_dir() {
        return Err(RunError::MissingInputDir(config.input_dir.clone()));
    }
    if !config.lut_path.is_file() {
        return Err(RunError::MissingLutFile(config.lut_path.clone()));
    }

    let table = load_table(&config.lut_path)?;

    let tasks = discover_tasks(&config.input_dir, &config.output_dir, &config.extensions)
        .map_err(|source| RunError::ListInputDir {
            path: config.input_dir.clone(),
            source,
        })?;
    if tasks.is_empty() {
        tracing::info!(dir = %config.input_dir.display(), "No images found");
        return Ok(RunOutcome::NoImages);
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| RunError::CreateOutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let options = PipelineOptions {
        negative: config.negative,
        stretch: config.stretch,
        tint: config.tint,
    };
    let pipeline = ImagePipeline::new(&table, options);
    let report = run_batch_with(&pipeline, &tasks, on_done);

    if let Some(path) = &config.report {
        write_report(&report, path)?;
    }

    Ok(RunOutcome::Completed(report))
}

fn write_report(report: &BatchReport, path: &Path) -> Result<(), RunError> {
    let to_error = |source| RunError::WriteReport {
        path: path.to_path_buf(),
        source,
    };
    let json = serde_json::to_vec_pretty(report).map_err(|e| to_error(e.into()))?;
    fs::write(path, json).map_err(to_error)?;
    tracing::debug!(path = %path.display(), "Wrote batch report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_table_reports_path_on_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lut.csv");
        fs::write(&path, "Scan,Value\n1,2\n").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("lut.csv"));
        assert!(err.to_string().contains("'Idea'"));
    }

    #[test]
    fn test_load_table_identity() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lut.tsv");
        fs::write(&path, "Scan\tIdea\n0\t0\n255\t255\n").unwrap();

        assert_eq!(load_table(&path).unwrap(), LookupTable::identity());
    }

    #[test]
    fn test_outcome_success() {
        assert!(RunOutcome::NoImages.is_success());
        assert!(RunOutcome::Completed(BatchReport::default()).is_success());
    }
}
