// Open an image, display it, wait for a key press
use clap::Parser;
use photo_binarize::config::display_bounds_from_env;
use photo_binarize::display::show_image;
use photo_binarize::tools::load_rgb;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_IMAGE: &str = "../pics/WechatIMG25.jpg";

#[derive(Parser)]
#[command(name = "show_image", version, about = "Display an image until a key is pressed")]
struct Cli {
    /// Image to display
    #[arg(default_value = DEFAULT_IMAGE)]
    image: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let img = match load_rgb(&cli.image) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Error: Image not found! ({})", err);
            return ExitCode::FAILURE;
        }
    };
    println!("Find the image.");

    if let Err(err) = show_image("Display", &img, display_bounds_from_env()) {
        log::warn!("{}", err);
    }
    ExitCode::SUCCESS
}
