use std::path::{Path, PathBuf};

/// Container format of a source image, reused for its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFormat(image::ImageFormat);

impl ImageFormat {
    pub const JPEG: Self = Self(image::ImageFormat::Jpeg);
    pub const PNG: Self = Self(image::ImageFormat::Png);

    /// Determine the format from a file extension (case-insensitive).
    ///
    /// Returns `None` if the imaging library has no codec for it.
    pub fn from_path(path: &Path) -> Option<Self> {
        let format = image::ImageFormat::from_path(path).ok()?;
        (format.reading_enabled() && format.writing_enabled()).then_some(Self(format))
    }

    /// The imaging library's format tag
    pub fn as_image_format(self) -> image::ImageFormat {
        self.0
    }
}

/// One source image and where its result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    pub source: PathBuf,
    pub target: PathBuf,
    /// `None` if the extension has no usable codec; processing then fails
    pub format: Option<ImageFormat>,
}

impl ImageTask {
    /// Task writing `source`'s result under the same file name in `output_dir`
    pub fn new(source: PathBuf, output_dir: &Path) -> Self {
        let target = match source.file_name() {
            Some(name) => output_dir.join(name),
            None => output_dir.to_path_buf(),
        };
        let format = ImageFormat::from_path(&source);
        Self {
            source,
            target,
            format,
        }
    }

    /// Source file name for display
    pub fn name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
