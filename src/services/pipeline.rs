use crate::error::TaskError;
use crate::models::{HsvTint, ImageTask};
use crate::rendering::{
    apply_table, apply_tint, flip_horizontal, stretch_to_full_range, write_image,
};
use image::{DynamicImage, GrayImage, ImageReader};
use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;
use tone_lut::LookupTable;

/// Per-run switches for the image pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PipelineOptions {
    /// Apply the complement table and mirror the result left-right
    pub negative: bool,
    /// Stretch each image to the full range before the table
    pub stretch: bool,
    /// Colourise the final intensities
    pub tint: Option<HsvTint>,
}

/// Applies one lookup table to images, one task at a time.
///
/// The effective table (the built table, or its complement in negative
/// mode) is derived once here and shared by every task. The built table
/// itself is only borrowed.
pub struct ImagePipeline<'a> {
    table: Cow<'a, LookupTable>,
    options: PipelineOptions,
}

impl<'a> ImagePipeline<'a> {
    pub fn new(table: &'a LookupTable, options: PipelineOptions) -> Self {
        let table = if options.negative {
            Cow::Owned(table.complement())
        } else {
            Cow::Borrowed(table)
        };
        Self { table, options }
    }

    /// The table actually applied to pixels
    pub fn effective_table(&self) -> &LookupTable {
        &self.table
    }

    /// Run the pixel stages on an already-decoded intensity image.
    ///
    /// Order: stretch, table lookup, mirror (negative only), tint.
    pub fn process_pixels(&self, mut pixels: GrayImage) -> DynamicImage {
        if self.options.stretch {
            stretch_to_full_range(&mut pixels);
        }
        apply_table(&mut pixels, &self.table);
        if self.options.negative {
            flip_horizontal(&mut pixels);
        }
        match self.options.tint {
            Some(tint) => DynamicImage::ImageRgb8(apply_tint(&pixels, tint)),
            None => DynamicImage::ImageLuma8(pixels),
        }
    }

    /// Decode, transform and write a single task.
    pub fn process(&self, task: &ImageTask) -> Result<(), TaskError> {
        let format = task
            .format
            .ok_or_else(|| TaskError::UnsupportedFormat(task.source.clone()))?;

        // Decode by content; the extension only picks the output encoding.
        let decoded = ImageReader::open(&task.source)?
            .with_guessed_format()?
            .decode()
            .map_err(TaskError::Decode)?;

        let pixels = decoded.into_luma8();
        tracing::debug!(
            source = %task.source.display(),
            width = pixels.width(),
            height = pixels.height(),
            "Decoded image"
        );

        let output = self.process_pixels(pixels);
        write_image(&output, format, &task.target)
    }
}

/// One task that could not be completed
#[derive(Debug, Clone, Serialize)]
pub struct TaskFailure {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a batch: every task lands in exactly one list
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub failures: Vec<TaskFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.processed.len() + self.failures.len()
    }
}

/// Process `tasks` in order. A failing task is logged and recorded; the
/// remaining tasks still run.
pub fn run_batch(pipeline: &ImagePipeline<'_>, tasks: &[ImageTask]) -> BatchReport {
    run_batch_with(pipeline, tasks, |_, _| {})
}

/// Like [`run_batch`], calling `on_done` after each task with its result.
pub fn run_batch_with<F>(
    pipeline: &ImagePipeline<'_>,
    tasks: &[ImageTask],
    mut on_done: F,
) -> BatchReport
where
    F: FnMut(&ImageTask, Result<(), &TaskError>),
{
    let mut report = BatchReport::default();

    for task in tasks {
        match pipeline.process(task) {
            Ok(()) => {
                on_done(task, Ok(()));
                report.processed.push(task.source.clone());
            }
            Err(e) => {
                tracing::warn!(
                    source = %task.source.display(),
                    error = %e,
                    "Failed to process image"
                );
                on_done(task, Err(&e));
                report.failures.push(TaskFailure {
                    source: task.source.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        processed = report.processed.len(),
        failed = report.failures.len(),
        "Batch finished"
    );
    report
}
