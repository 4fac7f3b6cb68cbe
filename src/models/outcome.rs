//! Summary of a successful run

use std::path::PathBuf;

/// Result of a successful thresholding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdOutcome {
    /// Where the binarized PNG was written
    pub output_path: PathBuf,
    /// Cut point actually applied (computed for Otsu, echoed for fixed)
    pub threshold: u8,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of pixels set to 255
    pub foreground_pixels: usize,
}

impl ThresholdOutcome {
    /// Total pixel count
    pub fn total_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Share of pixels set to 255
    pub fn foreground_ratio(&self) -> f64 {
        let total = self.total_pixels();
        if total == 0 {
            0.0
        } else {
            self.foreground_pixels as f64 / total as f64
        }
    }
}
