//! Output naming and input validation for the thresholding pipeline

use std::path::{Path, PathBuf};

/// Prefix prepended to the input stem to name the binarized output
pub const OUTPUT_PREFIX: &str = "binary_";
/// Extension of the binarized output
pub const OUTPUT_EXTENSION: &str = "png";

/// Check for a `.jpg` / `.jpeg` extension (case-insensitive)
pub fn has_jpeg_extension(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "jpg" || ext == "jpeg"
        }
        None => false,
    }
}

/// Output path for a binarized image: same directory, `binary_<stem>.png`
pub fn binary_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = std::ffi::OsString::from(OUTPUT_PREFIX);
    name.push(stem);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    input.with_file_name(name)
}
