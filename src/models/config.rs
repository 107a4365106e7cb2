use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Extensions processed when none are configured
pub const DEFAULT_EXTENSIONS: &str = "jpg,jpeg,png";

/// Everything a batch run needs, as collected from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned (one level) for source images
    pub input_dir: PathBuf,

    /// Directory receiving the results (created if missing)
    pub output_dir: PathBuf,

    /// Tabular `Scan`/`Idea` sample file
    pub lut_path: PathBuf,

    /// Invert the table and mirror the result left-right
    pub negative: bool,

    /// Which files in `input_dir` count as images
    pub extensions: ExtensionFilter,

    /// Stretch each image to the full 0-255 range before the table
    pub stretch: bool,

    /// Colourise the final intensities
    pub tint: Option<HsvTint>,

    /// Where to write a JSON summary of the batch
    pub report: Option<PathBuf>,
}

impl RunConfig {
    /// Config with default options for the three required paths
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        lut_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            lut_path: lut_path.into(),
            negative: false,
            extensions: ExtensionFilter::default(),
            stretch: false,
            tint: None,
            report: None,
        }
    }
}

/// Case-insensitive file extension allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated list such as `"jpg, .PNG"`.
    ///
    /// Entries are trimmed, lowercased and stripped of a leading dot;
    /// empty entries are dropped.
    pub fn parse(list: &str) -> Self {
        let mut extensions: Vec<String> = Vec::new();
        for ext in list.split(',') {
            let ext = ext.trim().trim_start_matches('.').to_lowercase();
            if !ext.is_empty() && !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True if the path's extension is on the list
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .is_some_and(|e| self.extensions.contains(&e))
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::parse(DEFAULT_EXTENSIONS)
    }
}

/// Fixed hue and saturation applied to greyscale output; intensity drives value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvTint {
    /// Hue in degrees, 0-360
    pub hue: f32,
    /// Saturation, 0.0-1.0
    pub saturation: f32,
    /// Scale applied to intensity before it becomes value, 0.0-1.0
    pub value_scale: f32,
}

impl HsvTint {
    /// Parse `"H,S,V"` with H in degrees (0-360) and S, V in percent (0-100)
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        let [h, s, v] = parts.as_slice() else {
            return Err(ConfigError::TintArity(text.to_string()));
        };

        let number = |p: &str| {
            p.parse::<f32>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| ConfigError::TintNumber(text.to_string()))
        };
        let (h, s, v) = (number(*h)?, number(*s)?, number(*v)?);

        check_range("H", h, 360)?;
        check_range("S", s, 100)?;
        check_range("V", v, 100)?;

        Ok(Self {
            hue: h,
            saturation: s / 100.0,
            value_scale: v / 100.0,
        })
    }
}

fn check_range(component: &'static str, value: f32, max: u16) -> Result<(), ConfigError> {
    if (0.0..=f32::from(max)).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::TintRange {
            component,
            max,
            value,
        })
    }
}
