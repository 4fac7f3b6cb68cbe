//! Convert RGB image to grayscale using BT.601 luma weights
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses 14-bit fixed point with rounding: Y = (4899*R + 9617*G + 1868*B + 8192) >> 14
//!
//! The weights sum to 1 << 14, so pure white maps to 255 and pure black to 0.

use image::{GrayImage, RgbImage};
use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (4899*R + 9617*G + 1868*B + 8192) >> 14
const COEF_R: u32 = 4899;
const COEF_G: u32 = 9617;
const COEF_B: u32 = 1868;
const SHIFT: u32 = 14;
const ROUND: u32 = 1 << (SHIFT - 1);

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32 + ROUND) >> SHIFT;
    lum.min(255) as u8
}

/// Convert RGB bytes (3 bytes per pixel) to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    assert!(rgb.len() >= pixel_count * 3, "RGB buffer too small");

    let mut gray = Vec::with_capacity(pixel_count);
    gray.extend(
        rgb.chunks_exact(3)
            .take(pixel_count)
            .map(|px| luma(px[0], px[1], px[2])),
    );
    gray
}

// ============== Parallel Processing with Rayon ==============

/// Convert RGB to grayscale using parallel processing
/// Processes rows in parallel for multi-core speedup
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    assert!(rgb.len() >= pixel_count * 3, "RGB buffer too small");

    let mut gray = vec![0u8; pixel_count];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        let src = &rgb[row_start..row_start + width * 3];
        for (dst, px) in row.iter_mut().zip(src.chunks_exact(3)) {
            *dst = luma(px[0], px[1], px[2]);
        }
    });

    gray
}

/// Convert a decoded color image into a single-channel image
pub fn to_gray_image(rgb: &RgbImage, parallel: bool) -> GrayImage {
    let (width, height) = rgb.dimensions();
    let (w, h) = (width as usize, height as usize);
    let gray = if parallel {
        rgb_to_grayscale_parallel(rgb.as_raw(), w, h)
    } else {
        rgb_to_grayscale(rgb.as_raw(), w, h)
    };
    // Length is exactly width * height by construction
    GrayImage::from_raw(width, height, gray).unwrap_or_else(|| GrayImage::new(width, height))
}
