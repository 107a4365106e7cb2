//! HSV colourisation of greyscale results.

use crate::models::HsvTint;
use image::{GrayImage, Rgb, RgbImage};
use palette::{FromColor, Hsv, Srgb};

/// Colour each pixel with the tint's hue and saturation; its intensity,
/// scaled by `value_scale`, becomes the HSV value.
pub fn apply_tint(image: &GrayImage, tint: HsvTint) -> RgbImage {
    let mut colors = [[0u8; 3]; 256];
    for (level, rgb) in colors.iter_mut().enumerate() {
        *rgb = tint_level(level as u8, tint);
    }

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Rgb(colors[image.get_pixel(x, y).0[0] as usize])
    })
}

fn tint_level(level: u8, tint: HsvTint) -> [u8; 3] {
    let value = f32::from(level) / 255.0 * tint.value_scale;
    let rgb = Srgb::from_color(Hsv::new(tint.hue, tint.saturation, value));
    let (r, g, b) = rgb.into_format::<u8>().into_components();
    [r, g, b]
}
