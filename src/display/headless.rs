use crate::error::{Result, ThresholdError};
use crate::models::DisplayBounds;
use image::RgbImage;

const NO_DISPLAY: &str = "built without the `display` feature";

/// Always fails: no window backend is compiled in
pub fn show_image(_title: &str, _image: &RgbImage, _bounds: DisplayBounds) -> Result<()> {
    Err(ThresholdError::Display(NO_DISPLAY.to_string()))
}

/// Always fails: no window backend is compiled in
pub fn show_pair(
    _original: &RgbImage,
    _annotated: &RgbImage,
    _annotated_title: &str,
    _bounds: DisplayBounds,
) -> Result<()> {
    Err(ThresholdError::Display(NO_DISPLAY.to_string()))
}
