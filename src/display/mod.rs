//! Rendering helpers for the preview windows
//!
//! - `fit_within`: aspect-preserving downscale to the display bounds
//! - `annotate_binary`: frame plus a threshold gauge drawn on the result
//! - `to_argb_buffer`: pack RGB pixels into the `0xAARRGGBB` window format
//! - `show_image` / `show_pair`: blocking windows (requires the `display` feature)

use crate::models::DisplayBounds;
use image::imageops::{self, FilterType};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

#[cfg(feature = "display")]
mod window;

#[cfg(feature = "display")]
pub use window::{show_image, show_pair};

#[cfg(not(feature = "display"))]
mod headless;

#[cfg(not(feature = "display"))]
pub use headless::{show_image, show_pair};

const FRAME_COLOR: Rgb<u8> = Rgb([220, 40, 40]);
const GAUGE_TRACK: Rgb<u8> = Rgb([96, 96, 96]);
const GAUGE_FILL: Rgb<u8> = Rgb([0, 160, 255]);

/// Size an image must be scaled to so it fits inside `max_w` x `max_h`
///
/// Preserves aspect ratio and never upscales. Each side stays at least 1.
/// A zero bound means "no limit", matching `BINARIZE_MAX_DISPLAY=0`.
pub fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let max_w = if max_w == 0 { u32::MAX } else { max_w };
    let max_h = if max_h == 0 { u32::MAX } else { max_h };
    if width == 0 || height == 0 || (width <= max_w && height <= max_h) {
        return (width, height);
    }
    let scale = (max_w as f64 / width as f64).min(max_h as f64 / height as f64);
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_w);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_h);
    (w, h)
}

/// Downscale an image for display if it exceeds the bounds
pub fn scale_for_display(image: &RgbImage, bounds: DisplayBounds, filter: FilterType) -> RgbImage {
    let (w, h) = fit_within(
        image.width(),
        image.height(),
        bounds.max_width,
        bounds.max_height,
    );
    if (w, h) == image.dimensions() {
        image.clone()
    } else {
        log::debug!(
            "scaling {}x{} -> {}x{} for display",
            image.width(),
            image.height(),
            w,
            h
        );
        imageops::resize(image, w, h, filter)
    }
}

/// Color copy of a binarized image with a frame and a threshold gauge
///
/// The gauge runs along the bottom edge; its filled length is
/// `threshold / 255` of the image width.
pub fn annotate_binary(binary: &GrayImage, threshold: u8) -> RgbImage {
    let (width, height) = binary.dimensions();
    let mut out = gray_to_rgb(binary);

    if width < 4 || height < 4 {
        return out;
    }

    let thickness = (width.min(height) / 200).max(2);
    for i in 0..thickness {
        let (w, h) = (width - 2 * i, height - 2 * i);
        if w == 0 || h == 0 {
            break;
        }
        draw_hollow_rect_mut(
            &mut out,
            Rect::at(i as i32, i as i32).of_size(w, h),
            FRAME_COLOR,
        );
    }

    let inner_w = width - 2 * thickness;
    let gauge_h = (height / 40).max(2).min(height - 2 * thickness);
    if inner_w == 0 || gauge_h == 0 {
        return out;
    }
    let gauge_y = (height - thickness - gauge_h) as i32;
    draw_filled_rect_mut(
        &mut out,
        Rect::at(thickness as i32, gauge_y).of_size(inner_w, gauge_h),
        GAUGE_TRACK,
    );
    let fill_w = (inner_w as u64 * threshold as u64 / 255) as u32;
    if fill_w > 0 {
        draw_filled_rect_mut(
            &mut out,
            Rect::at(thickness as i32, gauge_y).of_size(fill_w, gauge_h),
            GAUGE_FILL,
        );
    }
    out
}

/// Pack RGB pixels into `0xFFRRGGBB` words for the window buffer
pub fn to_argb_buffer(image: &RgbImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            // Alpha fully opaque
            (r as u32) << 16 | (g as u32) << 8 | (b as u32) | 0xFF00_0000
        })
        .collect()
}

/// Promote a grayscale image to RGB for display
pub fn gray_to_rgb(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(640, 480, 1280, 800), (640, 480));
        assert_eq!(fit_within(1280, 800, 1280, 800), (1280, 800));
        assert_eq!(fit_within(0, 10, 5, 5), (0, 10));
    }

    #[test]
    fn test_fit_within_preserves_aspect() {
        assert_eq!(fit_within(4000, 3000, 1280, 800), (1067, 800));
        assert_eq!(fit_within(3000, 1000, 1500, 1500), (1500, 500));
        assert_eq!(fit_within(10000, 1, 100, 100), (100, 1));
    }

    #[test]
    fn test_fit_within_zero_bound_is_unlimited() {
        assert_eq!(fit_within(10, 10, 0, 0), (10, 10));
        assert_eq!(fit_within(300, 200, 150, 0), (150, 100));
        assert_eq!(fit_within(300, 200, 0, 100), (150, 100));
    }

    #[test]
    fn test_scale_for_display_with_zero_bound() {
        let img = RgbImage::new(300, 200);
        let scaled = scale_for_display(&img, DisplayBounds::new(150, 0), FilterType::Nearest);
        assert_eq!(scaled.dimensions(), (150, 100));
        let same = scale_for_display(&img, DisplayBounds::new(0, 0), FilterType::Nearest);
        assert_eq!(same.dimensions(), (300, 200));
    }

    #[test]
    fn test_scale_for_display() {
        let img = RgbImage::new(300, 200);
        let scaled = scale_for_display(&img, DisplayBounds::new(150, 150), FilterType::Nearest);
        assert_eq!(scaled.dimensions(), (150, 100));

        let same = scale_for_display(&img, DisplayBounds::unbounded(), FilterType::Nearest);
        assert_eq!(same.dimensions(), (300, 200));
    }

    #[test]
    fn test_annotate_binary_draws_frame_and_gauge() {
        let binary = GrayImage::from_pixel(100, 80, image::Luma([255]));
        let annotated = annotate_binary(&binary, 128);
        assert_eq!(annotated.dimensions(), (100, 80));

        assert_eq!(*annotated.get_pixel(0, 0), FRAME_COLOR);
        assert_eq!(*annotated.get_pixel(99, 40), FRAME_COLOR);
        assert_eq!(*annotated.get_pixel(50, 40), Rgb([255, 255, 255]));

        // Gauge sits just above the bottom frame: 96 px track, 48 px filled
        let gauge_row = 80 - 2 - 1;
        assert_eq!(*annotated.get_pixel(2, gauge_row), GAUGE_FILL);
        assert_eq!(*annotated.get_pixel(2 + 47, gauge_row), GAUGE_FILL);
        assert_eq!(*annotated.get_pixel(2 + 48, gauge_row), GAUGE_TRACK);
    }

    #[test]
    fn test_annotate_binary_zero_threshold_has_empty_gauge() {
        let binary = GrayImage::new(40, 40);
        let annotated = annotate_binary(&binary, 0);
        assert_eq!(*annotated.get_pixel(2, 40 - 3), GAUGE_TRACK);
    }

    #[test]
    fn test_annotate_tiny_image_is_plain_copy() {
        let binary = GrayImage::from_raw(2, 1, vec![0, 255]).unwrap();
        let annotated = annotate_binary(&binary, 10);
        assert_eq!(annotated, gray_to_rgb(&binary));
    }

    #[test]
    fn test_to_argb_buffer() {
        let img = RgbImage::from_raw(2, 1, vec![255, 0, 0, 1, 2, 3]).unwrap();
        assert_eq!(to_argb_buffer(&img), vec![0xFFFF_0000, 0xFF01_0203]);
    }
}
