pub mod discovery;
pub mod pipeline;

pub use discovery::discover_tasks;
pub use pipeline::{
    run_batch, run_batch_with, BatchReport, ImagePipeline, PipelineOptions, TaskFailure,
};
