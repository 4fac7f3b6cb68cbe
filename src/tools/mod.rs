use crate::error::{Result, ThresholdError};
use crate::utils::binarization::FOREGROUND;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, GrayImage, ImageEncoder, RgbImage};
use std::fs;
use std::path::Path;

/// Load an image as 8-bit RGB.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| match source {
        image::ImageError::IoError(source) => ThresholdError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => ThresholdError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let rgb = img.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(ThresholdError::EmptyImage(path.to_path_buf()));
    }
    Ok(rgb)
}

/// Encode a grayscale image as PNG with mid-level compression.
///
/// Encoding is deterministic: the same pixels always give the same bytes.
pub fn encode_png(image: &GrayImage) -> image::ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, CompressionType::Default, FilterType::Adaptive)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::L8)?;
    Ok(bytes)
}

/// Write a grayscale image as PNG.
///
/// The image is encoded in memory first, so a failed encode leaves no file.
pub fn save_binary_png<P: AsRef<Path>>(image: &GrayImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(image).map_err(|source| ThresholdError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|source| ThresholdError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Summary statistics for grayscale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayStats {
    /// Minimum grayscale value.
    pub min: u8,
    /// Maximum grayscale value.
    pub max: u8,
    /// Average grayscale value.
    pub avg: u8,
}

/// Summary statistics for a binarized image.
#[derive(Debug, Clone, Copy)]
pub struct BinaryStats {
    /// Count of white (255) pixels.
    pub foreground_pixels: usize,
    /// Total pixels in the image.
    pub total_pixels: usize,
    /// Ratio of white pixels to total pixels.
    pub foreground_ratio: f64,
}

/// Compute min/max/avg for grayscale values.
pub fn grayscale_stats(gray: &[u8]) -> GrayStats {
    if gray.is_empty() {
        return GrayStats {
            min: 0,
            max: 0,
            avg: 0,
        };
    }
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum: u64 = 0;
    for &v in gray {
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    let avg = (sum / gray.len() as u64) as u8;
    GrayStats { min, max, avg }
}

/// Compute white pixel stats for a binarized image.
pub fn binary_stats(binary: &GrayImage) -> BinaryStats {
    let foreground = binary.as_raw().iter().filter(|&&v| v == FOREGROUND).count();
    let total = binary.as_raw().len();
    let ratio = if total == 0 {
        0.0
    } else {
        foreground as f64 / total as f64
    };
    BinaryStats {
        foreground_pixels: foreground,
        total_pixels: total,
        foreground_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX epoch")
            .as_nanos();
        let sequence = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("photo_binarize_tools_{nanos}_{sequence}_{name}"));
        path
    }

    #[test]
    fn save_binary_png_round_trips_pixels() {
        let path = temp_path("out.png");
        let img = GrayImage::from_raw(3, 2, vec![0, 255, 0, 255, 255, 0]).unwrap();
        save_binary_png(&img, &path).expect("save failed");

        let decoded = image::open(&path).expect("reopen failed").into_luma8();
        assert_eq!(decoded, img);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_binary_png_reports_missing_directory() {
        let path = temp_path("missing_dir").join("out.png");
        let img = GrayImage::new(1, 1);
        let err = save_binary_png(&img, &path).unwrap_err();
        assert!(matches!(err, ThresholdError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn save_binary_png_writes_encoded_bytes() {
        let path = temp_path("encoded.png");
        let img = GrayImage::from_fn(17, 9, |x, y| {
            image::Luma([if (x + y) % 3 == 0 { 255 } else { 0 }])
        });
        save_binary_png(&img, &path).expect("save failed");

        let encoded = encode_png(&img).expect("encode failed");
        assert_eq!(fs::read(&path).unwrap(), encoded);
        assert_eq!(encode_png(&img).unwrap(), encoded);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_binary_png_onto_directory_leaves_no_file() {
        let dir = temp_path("dir_target");
        fs::create_dir_all(&dir).unwrap();
        let err = save_binary_png(&GrayImage::new(2, 2), &dir).unwrap_err();
        assert!(matches!(err, ThresholdError::Io { .. }));
        assert!(dir.is_dir());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn load_rgb_reports_decode_failure() {
        let path = temp_path("garbage.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();
        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, ThresholdError::Decode { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn grayscale_stats_summarizes_values() {
        let stats = grayscale_stats(&[10, 20, 30, 40]);
        assert_eq!(
            stats,
            GrayStats {
                min: 10,
                max: 40,
                avg: 25
            }
        );
        assert_eq!(grayscale_stats(&[]).max, 0);
    }

    #[test]
    fn binary_stats_counts_foreground() {
        let img = GrayImage::from_raw(2, 2, vec![0, 255, 255, 255]).unwrap();
        let stats = binary_stats(&img);
        assert_eq!(stats.foreground_pixels, 3);
        assert_eq!(stats.total_pixels, 4);
        assert!((stats.foreground_ratio - 0.75).abs() < 1e-12);
    }
}
