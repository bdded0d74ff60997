use clap::Parser;
use std::path::PathBuf;

use minires::{PreviewMode, ResampleFilter};

#[derive(Parser, Debug)]
#[command(
    name = "minires",
    version,
    about = "Resize an image to a fixed size (28x28 by default) with bilinear interpolation"
)]
pub struct CliArgs {
    /// Input image
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output image; the extension selects the format [default: resized_image.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target width in pixels [default: 28]
    #[arg(long)]
    pub width: Option<u32>,

    /// Target height in pixels [default: 28]
    #[arg(long)]
    pub height: Option<u32>,

    /// Square target size; --width/--height take precedence
    #[arg(long)]
    pub size: Option<u32>,

    /// Resampling filter [default: bilinear]
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// JSON file with resize parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render the original and resized images (none, log, ascii)
    #[arg(long, value_enum, default_value_t = PreviewMode::None)]
    pub preview: PreviewMode,

    /// Write a JSON metadata sidecar next to the output
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
