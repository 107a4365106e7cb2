//! Temporary input/output directories and a LUT file for one test.

use greylut::models::RunConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorkspace {
    _root: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub lut_path: PathBuf,
}

impl TestWorkspace {
    /// Empty input dir, not-yet-created output dir, and a LUT file with `lut`
    pub fn new(lut: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let input_dir = root.path().join("input");
        let output_dir = root.path().join("out").join("nested");
        let lut_path = root.path().join("lut.csv");

        std::fs::create_dir(&input_dir).expect("Failed to create input dir");
        std::fs::write(&lut_path, lut).expect("Failed to write LUT");

        Self {
            _root: root,
            input_dir,
            output_dir,
            lut_path,
        }
    }

    pub fn input(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// A path inside the temp root that does not exist
    pub fn missing(&self, name: &str) -> PathBuf {
        self.input_dir.parent().unwrap_or(Path::new("/")).join(name)
    }

    pub fn config(&self) -> RunConfig {
        RunConfig::new(&self.input_dir, &self.output_dir, &self.lut_path)
    }
}
