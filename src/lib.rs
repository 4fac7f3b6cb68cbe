//! photo_binarize - load a JPEG photograph, binarize it, save and show the result
//!
//! The pipeline is linear: decode → BT.601 grayscale → global threshold
//! (Otsu or fixed) → PNG next to the input. An optional preview shows the
//! original and an annotated result and waits for a key press.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven settings
pub mod config;
/// Preview windows and annotation
pub mod display;
/// Failure kinds of the pipeline
#[allow(missing_docs)]
pub mod error;
/// Core data structures (method, options, outcome)
pub mod models;
/// Image loading, PNG encoding and summary statistics
pub mod tools;
/// Utility functions (grayscale, binarization, path naming)
pub mod utils;

pub use error::{Result, ThresholdError};
pub use models::{DisplayBounds, ThresholdMethod, ThresholdOptions, ThresholdOutcome};
pub use utils::paths::{binary_output_path, has_jpeg_extension};

use std::path::{Path, PathBuf};
use tools::{binary_stats, grayscale_stats, load_rgb, save_binary_png};
use utils::binarization::apply_method;
use utils::grayscale::to_gray_image;

/// Binarize a JPEG and write `binary_<stem>.png` next to it
///
/// # Arguments
/// * `input` - Path to a `.jpg` / `.jpeg` file
/// * `options` - Threshold method and display settings
///
/// # Returns
/// The output path, or `None` on any failure. The reason is logged; no
/// output file is written for invalid input.
pub fn threshold_image<P: AsRef<Path>>(input: P, options: &ThresholdOptions) -> Option<PathBuf> {
    let input = input.as_ref();
    match try_threshold_image(input, options) {
        Ok(outcome) => Some(outcome.output_path),
        Err(err) => {
            log::error!("thresholding {} failed: {}", input.display(), err);
            None
        }
    }
}

/// Same pipeline as [`threshold_image`], with the failure reason exposed
pub fn try_threshold_image<P: AsRef<Path>>(
    input: P,
    options: &ThresholdOptions,
) -> Result<ThresholdOutcome> {
    let input = input.as_ref();

    // Step 1: Validate
    if !has_jpeg_extension(input) {
        return Err(ThresholdError::UnsupportedExtension(input.to_path_buf()));
    }
    if !input.is_file() {
        return Err(ThresholdError::NotFound(input.to_path_buf()));
    }

    // Step 2: Decode
    let rgb = load_rgb(input)?;
    let (width, height) = rgb.dimensions();
    log::info!("loaded {} ({}x{})", input.display(), width, height);

    // Step 3: Convert to grayscale
    let gray = to_gray_image(&rgb, options.parallel);
    let gray_stats = grayscale_stats(gray.as_raw());
    log::debug!(
        "grayscale range: {}-{}, average: {}",
        gray_stats.min,
        gray_stats.max,
        gray_stats.avg
    );

    // Step 4: Binarize
    let (binary, threshold) = apply_method(&gray, options.method);
    if options.method.is_otsu() {
        log::debug!("histogram search picked threshold {}", threshold);
    }
    let stats = binary_stats(&binary);
    log::info!(
        "{} threshold = {}, white pixels {:.2}%",
        options.method,
        threshold,
        stats.foreground_ratio * 100.0
    );

    // Step 5: Encode
    let output_path = binary_output_path(input);
    save_binary_png(&binary, &output_path)?;
    log::info!("saved {}", output_path.display());

    // Step 6: Optional preview
    if options.show {
        let annotated = display::annotate_binary(&binary, threshold);
        let title = format!("Binary ({}, threshold {})", options.method, threshold);
        if let Err(err) = display::show_pair(&rgb, &annotated, &title, options.display_bounds) {
            log::warn!("preview unavailable: {}", err);
        }
    }

    Ok(ThresholdOutcome {
        output_path,
        threshold,
        width,
        height,
        foreground_pixels: stats.foreground_pixels,
    })
}
