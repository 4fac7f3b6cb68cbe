use super::{scale_for_display, to_argb_buffer};
use crate::error::{Result, ThresholdError};
use crate::models::DisplayBounds;
use image::RgbImage;
use image::imageops::FilterType;
use minifb::{KeyRepeat, Window, WindowOptions};

struct Pane {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl Pane {
    fn open(title: &str, image: &RgbImage, bounds: DisplayBounds, filter: FilterType) -> Result<Self> {
        let scaled = scale_for_display(image, bounds, filter);
        let (width, height) = (scaled.width() as usize, scaled.height() as usize);
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| ThresholdError::Display(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            buffer: to_argb_buffer(&scaled),
            width,
            height,
        })
    }
}

/// Show one image and block until a key is pressed or the window closes
pub fn show_image(title: &str, image: &RgbImage, bounds: DisplayBounds) -> Result<()> {
    let pane = Pane::open(title, image, bounds, FilterType::Triangle)?;
    run_until_key(vec![pane])
}

/// Show the original and the annotated result side by side
///
/// Blocks until a key is pressed in either window or both are closed.
pub fn show_pair(
    original: &RgbImage,
    annotated: &RgbImage,
    annotated_title: &str,
    bounds: DisplayBounds,
) -> Result<()> {
    let panes = vec![
        Pane::open("Original", original, bounds, FilterType::Triangle)?,
        Pane::open(annotated_title, annotated, bounds, FilterType::Nearest)?,
    ];
    run_until_key(panes)
}

fn run_until_key(mut panes: Vec<Pane>) -> Result<()> {
    log::info!("press any key to close");
    loop {
        let mut any_open = false;
        for pane in panes.iter_mut() {
            if !pane.window.is_open() {
                continue;
            }
            any_open = true;
            pane.window
                .update_with_buffer(&pane.buffer, pane.width, pane.height)
                .map_err(|e| ThresholdError::Display(e.to_string()))?;
            if !pane.window.get_keys_pressed(KeyRepeat::No).is_empty() {
                return Ok(());
            }
        }
        if !any_open {
            return Ok(());
        }
    }
}
