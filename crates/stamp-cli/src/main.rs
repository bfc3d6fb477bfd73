//! stamp - batch logo watermarking CLI
//!
//! Stamps a logo with a colored circle backdrop onto every image in a
//! directory. Unreadable or unsupported files are moved to `invalid/`
//! instead of stopping the batch.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod batch;

#[derive(Parser, Debug)]
#[command(name = "stamp")]
#[command(author, version, about = "Batch logo watermark inserter")]
#[command(long_about = "
Stamps a logo with a colored circle backdrop onto every image in the
input directory. Supported inputs: jpg, jpeg, png, webp, ico, heic,
heif (with the 'heif' feature) and nef camera raw. Files that cannot
be processed are moved to the 'invalid' directory.

Examples:
  stamp                                  # defaults: input/ -> output/
  stamp -f -c magenta -p top_left        # flush output, fixed variant
  stamp -c all -p all                    # full color x position grid
  stamp -i photos -o stamped --no-circle
")]
pub struct Cli {
    /// Delete previously generated images from the output directory first
    #[arg(short, long)]
    flush: bool,

    /// Do not prepend the 'wm_' prefix to output filenames
    #[arg(long)]
    no_prefix: bool,

    /// Do not rotate images upright from their EXIF orientation
    #[arg(long)]
    no_rotate: bool,

    /// Do not draw the colored circle behind the logo (not recommended)
    #[arg(long)]
    no_circle: bool,

    /// Center the circle on the logo instead of the default offset (not recommended)
    #[arg(long)]
    center_circle: bool,

    /// Input directory
    #[arg(short, long, default_value = "input")]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Directory holding logo_color.png and logo_white.png
    #[arg(long, default_value = "logos")]
    logos: PathBuf,

    /// Logo height as a fraction of the smaller image dimension
    #[arg(long, default_value_t = 0.07, value_name = "RATIO")]
    watermark_size: f64,

    /// Circle diameter as a fraction of the logo width
    #[arg(long, default_value_t = 1.6, value_name = "RATIO")]
    watermark_ratio: f64,

    /// Gap between logo and image edge, as a fraction of the logo height
    #[arg(long, default_value_t = 0.15, value_name = "RATIO")]
    watermark_padding: f64,

    /// Supersampling factor for circle smoothing (higher = smoother, slower)
    #[arg(long, default_value_t = 2, value_name = "FACTOR")]
    supersampling: u32,

    /// Circle color: 'random', 'all', a palette name (white, black,
    /// magenta, orange, green, cyan, purple) or '#rrggbb'
    #[arg(short, long, default_value = "random")]
    color: String,

    /// Watermark position: bottom_right, bottom_left, top_right,
    /// top_left, 'random' or 'all'
    #[arg(short, long, default_value = "bottom_right")]
    position: String,

    /// Output image format (file extension)
    #[arg(long, default_value = "png")]
    format: String,

    /// Resampling filter: nearest, bilinear, bicubic, lanczos
    #[arg(long, default_value = "bilinear")]
    filter: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let summary = batch::run(&cli, &mut rand::thread_rng())?;

    println!("Processed {} image(s) successfully!", summary.processed);
    if summary.invalid > 0 {
        println!(
            " ({} image(s) failed and moved to 'invalid')",
            summary.invalid
        );
    }
    Ok(())
}
