use crate::error::TaskError;
use crate::models::ImageFormat;
use image::DynamicImage;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Encode `image` in memory using `format`.
pub fn encode_image(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, TaskError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format.as_image_format())
        .map_err(TaskError::Encode)?;
    Ok(bytes)
}

/// Encode and write `image` to `target`, replacing any existing file.
///
/// The bytes go to a hidden sibling first and are renamed into place, so
/// `target` either receives the complete image or is left untouched.
pub fn write_image(
    image: &DynamicImage,
    format: ImageFormat,
    target: &Path,
) -> Result<(), TaskError> {
    let bytes = encode_image(image, format)?;
    let partial = partial_path(target);

    let result = fs::write(&partial, &bytes).and_then(|()| fs::rename(&partial, target));
    if let Err(e) = result {
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }

    tracing::debug!(path = %target.display(), bytes = bytes.len(), "Wrote image");
    Ok(())
}

/// `dir/.name.partial` for `dir/name`
fn partial_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.partial"))
}
