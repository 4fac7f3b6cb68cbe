//! Per-run options and display bounds

use super::ThresholdMethod;

/// Largest window area an image is scaled down to before display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBounds {
    /// Maximum window width in pixels
    pub max_width: u32,
    /// Maximum window height in pixels
    pub max_height: u32,
}

impl DisplayBounds {
    /// Bounds used when nothing is configured
    pub const DEFAULT: DisplayBounds = DisplayBounds {
        max_width: 1280,
        max_height: 800,
    };

    /// Create new bounds
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Bounds that never scale an image
    pub fn unbounded() -> Self {
        Self::new(u32::MAX, u32::MAX)
    }
}

impl Default for DisplayBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Knobs for a single thresholding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdOptions {
    /// How the cut point is chosen
    pub method: ThresholdMethod,
    /// Convert to grayscale with rayon instead of a single thread
    pub parallel: bool,
    /// Show original and annotated result, then wait for a key press
    pub show: bool,
    /// Window size limits for `show`
    pub display_bounds: DisplayBounds,
}

impl ThresholdOptions {
    /// Otsu thresholding, no display
    pub fn new() -> Self {
        Self {
            method: ThresholdMethod::Otsu,
            parallel: false,
            show: false,
            display_bounds: DisplayBounds::default(),
        }
    }

    /// Use a fixed cut point instead of Otsu
    pub fn with_fixed_threshold(mut self, threshold: u8) -> Self {
        self.method = ThresholdMethod::Fixed(threshold);
        self
    }

    /// Set the thresholding method
    pub fn with_method(mut self, method: ThresholdMethod) -> Self {
        self.method = method;
        self
    }

    /// Enable or disable rayon grayscale conversion
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable the display windows
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Override window size limits
    pub fn with_display_bounds(mut self, bounds: DisplayBounds) -> Self {
        self.display_bounds = bounds;
        self
    }
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self::new()
    }
}
