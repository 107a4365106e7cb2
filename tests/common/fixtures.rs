//! Test fixtures and constants.

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::path::Path;

/// LUT files used across tests
pub mod luts {
    /// Two-point scanner calibration: 4.44 -> 0, 235.68 -> 255
    pub const SCANNER: &str = "Scan,Idea\n4.44,0.0\n235.68,255.0\n";

    /// Same calibration, tab separated with the columns swapped
    pub const SCANNER_TSV: &str = "Idea\tScan\n0.0\t4.44\n255.0\t235.68\n";

    /// Scanner calibration behind a quoted note column containing commas
    pub const SCANNER_NOTED: &str =
        "Note,Scan,Idea\n\"dark, shadow\",4.44,0\n\"light\",235.68,255\n";

    /// Maps every intensity to itself
    pub const IDENTITY: &str = "Scan,Idea\n0,0\n255,255\n";

    /// Header names in the wrong case
    pub const WRONG_CASE: &str = "scan,idea\n0,0\n255,255\n";

    /// A value that is not a number
    pub const NON_NUMERIC: &str = "Scan,Idea\n0,0\n128,grey\n255,255\n";

    /// Neither comma nor tab separated
    pub const SEMICOLON: &str = "Scan;Idea\n0;0\n255;255\n";

    /// Header only
    pub const NO_ROWS: &str = "Scan,Idea\n";
}

/// Write a single-channel PNG from row-major pixel values.
pub fn write_gray_png(path: &Path, width: u32, height: u32, pixels: &[u8]) {
    let img =
        GrayImage::from_raw(width, height, pixels.to_vec()).expect("pixel count matches size");
    img.save_with_format(path, ImageFormat::Png)
        .expect("Failed to write test PNG");
}

/// Write an RGB PNG where every pixel has the same colour.
pub fn write_rgb_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save_with_format(path, ImageFormat::Png)
        .expect("Failed to write test PNG");
}

/// Write a flat grey JPEG (flat areas survive JPEG compression almost exactly).
pub fn write_gray_jpeg(path: &Path, width: u32, height: u32, value: u8) {
    GrayImage::from_pixel(width, height, Luma([value]))
        .save_with_format(path, ImageFormat::Jpeg)
        .expect("Failed to write test JPEG");
}

/// Write bytes that no image decoder accepts.
pub fn write_corrupt_image(path: &Path) {
    std::fs::write(path, b"definitely not an image").expect("Failed to write corrupt file");
}
