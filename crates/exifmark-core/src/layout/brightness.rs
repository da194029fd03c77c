//! Mean-luminance brightness estimate used to pick the overlay palette.

use image::DynamicImage;

/// Number of greyscale bins.
const BINS: usize = 256;

/// Greyscale histogram of an image (one count per intensity 0-255).
pub fn luma_histogram(image: &DynamicImage) -> [u64; BINS] {
    let mut histogram = [0u64; BINS];
    for pixel in image.to_luma8().pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }
    histogram
}

/// Brightness from a greyscale histogram: 0 for black, 1 for white.
///
/// Accumulates `ratio * (index - 256)` onto a starting value of 256, which
/// leaves the mean intensity, then scales by 1/256. A mean of exactly 255
/// (a pure white image) maps to 1. An empty histogram scores 0.
pub fn brightness_from_histogram(histogram: &[u64; BINS]) -> f64 {
    let pixels: u64 = histogram.iter().sum();
    if pixels == 0 {
        return 0.0;
    }

    let scale = BINS as f64;
    let mut brightness = scale;
    for (index, &count) in histogram.iter().enumerate() {
        let ratio = count as f64 / pixels as f64;
        brightness += ratio * (index as f64 - scale);
    }

    if brightness == 255.0 {
        1.0
    } else {
        brightness / scale
    }
}

/// Brightness of an image: 0 for black, 1 for white.
pub fn brightness(image: &DynamicImage) -> f64 {
    brightness_from_histogram(&luma_histogram(image))
}
