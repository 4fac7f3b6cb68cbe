// Binarize a JPEG photograph and write binary_<stem>.png next to it
use clap::Parser;
use photo_binarize::config::display_bounds_from_env;
use photo_binarize::{ThresholdMethod, ThresholdOptions, threshold_image};
use std::path::PathBuf;

const DEFAULT_IMAGE: &str = "../pics/WechatIMG25.jpg";

#[derive(Parser)]
#[command(name = "binarize", version, about = "Binarize a JPEG with Otsu or a fixed threshold")]
struct Cli {
    /// JPEG image to binarize
    #[arg(default_value = DEFAULT_IMAGE)]
    image: PathBuf,
    /// Fixed threshold (0-255); Otsu is used when omitted
    #[arg(long)]
    threshold: Option<u8>,
    /// Show the original and annotated result, wait for a key press
    #[arg(long)]
    show: bool,
    /// Convert to grayscale on all cores
    #[arg(long)]
    parallel: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = ThresholdOptions::new()
        .with_method(ThresholdMethod::from_optional(cli.threshold))
        .with_parallel(cli.parallel)
        .with_show(cli.show)
        .with_display_bounds(display_bounds_from_env());

    println!("Input: {} ({})", cli.image.display(), options.method);
    match threshold_image(&cli.image, &options) {
        Some(output) => println!("Success: binary image saved to {}", output.display()),
        None => println!("Failure: could not binarize {}", cli.image.display()),
    }
}
