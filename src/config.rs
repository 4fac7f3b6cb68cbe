use crate::models::DisplayBounds;
use std::sync::OnceLock;

/// Environment variable overriding the display window bounds
pub const MAX_DISPLAY_ENV: &str = "BINARIZE_MAX_DISPLAY";

/// Parse `W` or `WxH` into display bounds
///
/// `0` disables scaling. A single number bounds both sides. Anything else
/// is rejected.
pub fn parse_display_bounds(value: &str) -> Option<DisplayBounds> {
    let value = value.trim();
    let (w, h) = match value.split_once(['x', 'X']) {
        Some((w, h)) => (w.trim().parse::<u32>().ok()?, h.trim().parse::<u32>().ok()?),
        None => {
            let side = value.parse::<u32>().ok()?;
            (side, side)
        }
    };
    match (w, h) {
        (0, _) | (_, 0) => Some(DisplayBounds::unbounded()),
        (w, h) => Some(DisplayBounds::new(w, h)),
    }
}

/// Resolve display bounds from the raw value of `BINARIZE_MAX_DISPLAY`
///
/// Unset gives the default bounds; an unparsable value is logged and also
/// falls back to the default.
pub fn bounds_from_env_value(value: Option<&str>) -> DisplayBounds {
    match value {
        Some(value) => parse_display_bounds(value).unwrap_or_else(|| {
            log::warn!("ignoring invalid {MAX_DISPLAY_ENV}={value:?}");
            DisplayBounds::default()
        }),
        None => DisplayBounds::default(),
    }
}

static DISPLAY_BOUNDS: OnceLock<DisplayBounds> = OnceLock::new();

/// Display bounds from `BINARIZE_MAX_DISPLAY`, falling back to the default
pub fn display_bounds_from_env() -> DisplayBounds {
    *DISPLAY_BOUNDS
        .get_or_init(|| bounds_from_env_value(std::env::var(MAX_DISPLAY_ENV).ok().as_deref()))
}
