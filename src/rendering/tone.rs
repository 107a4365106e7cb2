//! Per-pixel intensity operations on single-channel images.

use image::GrayImage;
use tone_lut::LookupTable;

/// Replace every pixel with its table entry.
pub fn apply_table(image: &mut GrayImage, table: &LookupTable) {
    table.apply_in_place(image);
}

/// Mirror the image left-to-right.
pub fn flip_horizontal(image: &mut GrayImage) {
    image::imageops::flip_horizontal_in_place(image);
}

/// Stretch intensities linearly so the darkest pixel becomes 0 and the
/// brightest 255. A constant image becomes all zeros.
pub fn stretch_to_full_range(image: &mut GrayImage) {
    let pixels: &mut [u8] = image;
    let Some(min) = pixels.iter().copied().min() else {
        return;
    };
    let max = pixels.iter().copied().max().unwrap_or(min);

    if min == max {
        pixels.fill(0);
        return;
    }

    let range = f64::from(max - min);
    let mut table = [0u8; 256];
    for (value, entry) in table.iter_mut().enumerate().skip(min as usize) {
        *entry = ((value as f64 - f64::from(min)) * 255.0 / range).round() as u8;
    }
    LookupTable::from_entries(table).apply_in_place(pixels);
}
