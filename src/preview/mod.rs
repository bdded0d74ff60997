//! Optional rendering of the original and resized images.
//!
//! Rendering never affects the saved output. The resize flow takes a
//! `&mut dyn Preview` so callers choose between doing nothing, logging a
//! summary, or drawing an ASCII thumbnail to a terminal.
use std::io::Write;

use image::{DynamicImage, GenericImageView};
use tracing::info;

use crate::core::processing::resize::resize_image;
use crate::error::Result;
use crate::types::{Dimensions, PreviewMode, ResampleFilter};

pub trait Preview {
    fn show(&mut self, label: &str, img: &DynamicImage) -> Result<()>;
}

/// Renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreview;

impl Preview for NoPreview {
    fn show(&mut self, _label: &str, _img: &DynamicImage) -> Result<()> {
        Ok(())
    }
}

/// Emits one log line per image.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPreview;

impl Preview for LogPreview {
    fn show(&mut self, label: &str, img: &DynamicImage) -> Result<()> {
        let (width, height) = img.dimensions();
        info!("{}: {}x{} pixels, {:?}", label, width, height, img.color());
        Ok(())
    }
}

const RAMP: &[u8] = b" .:-=+*#%@";

/// Draws a luminance ASCII thumbnail to any writer.
pub struct AsciiPreview<W: Write> {
    out: W,
    max_cols: u32,
}

impl<W: Write> AsciiPreview<W> {
    pub fn new(out: W) -> Self {
        Self { out, max_cols: 56 }
    }

    pub fn with_max_cols(mut self, max_cols: u32) -> Self {
        self.max_cols = max_cols.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Terminal cells are roughly twice as tall as they are wide, so rows are halved.
    fn cell_grid(&self, width: u32, height: u32) -> Dimensions {
        let cols = width.min(self.max_cols);
        let rows = ((height as f64 * cols as f64) / (width as f64 * 2.0)).round() as u32;
        Dimensions::new(cols, rows.max(1))
    }
}

impl<W: Write> Preview for AsciiPreview<W> {
    fn show(&mut self, label: &str, img: &DynamicImage) -> Result<()> {
        let (width, height) = img.dimensions();
        let grid = self.cell_grid(width, height);
        let gray = DynamicImage::ImageLuma8(img.to_luma8());
        let cells = resize_image(&gray, grid, ResampleFilter::Bilinear)?.to_luma8();

        writeln!(self.out, "{} ({}x{})", label, width, height)?;
        for row in cells.rows() {
            let line: String = row
                .map(|p| {
                    let idx = p.0[0] as usize * (RAMP.len() - 1) / 255;
                    RAMP[idx] as char
                })
                .collect();
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Build the preview the CLI asked for. ASCII output goes to stdout.
pub fn preview_for(mode: PreviewMode) -> Box<dyn Preview> {
    match mode {
        PreviewMode::None => Box::new(NoPreview),
        PreviewMode::Log => Box::new(LogPreview),
        PreviewMode::Ascii => Box::new(AsciiPreview::new(std::io::stdout())),
    }
}
