use crate::models::{ExtensionFilter, ImageTask};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the images directly inside `input_dir`, one task per file.
///
/// Subdirectories are not descended into. Tasks are sorted by file name so
/// the processing order does not depend on the platform's listing order.
pub fn discover_tasks(
    input_dir: &Path,
    output_dir: &Path,
    filter: &ExtensionFilter,
) -> io::Result<Vec<ImageTask>> {
    let mut sources: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if filter.matches(&path) {
            sources.push(path);
        } else {
            tracing::trace!(path = %path.display(), "Skipping file with unlisted extension");
        }
    }
    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        dir = %input_dir.display(),
        count = sources.len(),
        "Discovered images"
    );

    Ok(sources
        .into_iter()
        .map(|source| ImageTask::new(source, output_dir))
        .collect())
}
