//! Global-threshold binarization (Otsu and fixed cut point)

use crate::models::ThresholdMethod;
use image::GrayImage;

/// Value written for pixels above the threshold
pub const FOREGROUND: u8 = 255;
/// Value written for pixels at or below the threshold
pub const BACKGROUND: u8 = 0;

/// Build the 256-bin intensity histogram of a grayscale buffer
pub fn histogram(gray: &[u8]) -> [u32; 256] {
    let mut histogram = [0u32; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }
    histogram
}

/// Calculate Otsu's optimal threshold from a histogram
///
/// Class 0 holds intensities `<= t`, class 1 the rest. Picks the `t` that
/// maximizes the between-class variance `w0 * w1 * (m0 - m1)^2`; ties keep
/// the lowest `t`. Returns 0 when fewer than two bins are populated.
pub fn otsu_threshold_from_histogram(histogram: &[u32; 256]) -> u8 {
    let total: u64 = histogram.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0;
    }
    let total_sum: u64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as u64 * c as u64)
        .sum();

    let mut class0_pixels = 0u64;
    let mut class0_sum = 0u64;
    let mut max_variance = 0.0f64;
    let mut optimal_threshold = 0u8;

    for (t, &count) in histogram.iter().enumerate() {
        class0_pixels += count as u64;
        class0_sum += t as u64 * count as u64;

        let class1_pixels = total - class0_pixels;
        if class0_pixels == 0 || class1_pixels == 0 {
            continue;
        }

        let class0_mean = class0_sum as f64 / class0_pixels as f64;
        let class1_mean = (total_sum - class0_sum) as f64 / class1_pixels as f64;

        let weight0 = class0_pixels as f64 / total as f64;
        let weight1 = class1_pixels as f64 / total as f64;

        let variance = weight0 * weight1 * (class0_mean - class1_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = t as u8;
        }
    }

    optimal_threshold
}

/// Calculate Otsu's optimal threshold for a grayscale buffer
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    otsu_threshold_from_histogram(&histogram(gray))
}

/// Simple global threshold binarization
/// Pixels strictly above `threshold` become 255, everything else 0
pub fn threshold_binarize(gray: &[u8], threshold: u8) -> Vec<u8> {
    gray.iter()
        .map(|&v| if v > threshold { FOREGROUND } else { BACKGROUND })
        .collect()
}

/// Binarize using Otsu's method, returning the output and the chosen threshold
pub fn otsu_binarize(gray: &[u8]) -> (Vec<u8>, u8) {
    let threshold = otsu_threshold(gray);
    (threshold_binarize(gray, threshold), threshold)
}

/// Binarize a grayscale image with the requested method
pub fn apply_method(gray: &GrayImage, method: ThresholdMethod) -> (GrayImage, u8) {
    let (width, height) = gray.dimensions();
    let (binary, threshold) = match method {
        ThresholdMethod::Otsu => otsu_binarize(gray.as_raw()),
        ThresholdMethod::Fixed(t) => (threshold_binarize(gray.as_raw(), t), t),
    };
    let image =
        GrayImage::from_raw(width, height, binary).unwrap_or_else(|| GrayImage::new(width, height));
    (image, threshold)
}
