//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("Expected {} to exist: {e}", path.display()))
}

/// Assert the file is a PNG by signature
pub fn assert_png_file(path: &Path) {
    let bytes = read(path);
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "Expected PNG at {}, got bytes starting with {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the file is a JPEG by signature
pub fn assert_jpeg_file(path: &Path) {
    let bytes = read(path);
    assert!(
        bytes.starts_with(JPEG_SIGNATURE),
        "Expected JPEG at {}, got bytes starting with {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the image decodes to exactly these single-channel pixels
pub fn assert_gray_pixels(path: &Path, width: u32, height: u32, expected: &[u8]) {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
        .into_luma8();
    assert_eq!(img.dimensions(), (width, height), "dimensions of {}", path.display());
    assert_eq!(img.into_raw(), expected.to_vec(), "pixels of {}", path.display());
}

/// Assert no hidden `.partial` files were left in `dir`
pub fn assert_no_partial_files(dir: &Path) {
    let leftovers: Vec<String> = std::fs::read_dir(dir)
        .expect("output dir is readable")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".partial"))
        .collect();
    assert_eq!(leftovers, Vec::<String>::new());
}
