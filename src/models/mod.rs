pub mod config;
pub mod task;

pub use config::{ExtensionFilter, HsvTint, RunConfig, DEFAULT_EXTENSIONS};
pub use task::{ImageFormat, ImageTask};
