//! Utility functions for image processing
//!
//! This module provides the building blocks of the thresholding pipeline:
//! - Grayscale conversion (RGB to BT.601 luminance)
//! - Binarization (Otsu's method and fixed threshold)
//! - Output path naming and input validation

pub mod binarization;
pub mod grayscale;
pub mod paths;
