//! Threshold selection method

use std::fmt;

/// How the binarization cut point is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMethod {
    /// Global optimum over the intensity histogram (Otsu's method)
    #[default]
    Otsu,
    /// Caller-supplied cut point; pixels above it become white
    Fixed(u8),
}

impl ThresholdMethod {
    /// Pick Otsu when no explicit threshold is given
    pub fn from_optional(threshold: Option<u8>) -> Self {
        threshold.map_or(ThresholdMethod::Otsu, ThresholdMethod::Fixed)
    }

    /// Check if the cut point is computed from the image
    pub fn is_otsu(&self) -> bool {
        matches!(self, ThresholdMethod::Otsu)
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdMethod::Otsu => write!(f, "Otsu"),
            ThresholdMethod::Fixed(t) => write!(f, "fixed({t})"),
        }
    }
}
