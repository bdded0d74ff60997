use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::info;

use crate::error::{Error, Result};

/// Encode `img` to `output`, overwriting any existing file.
///
/// The encoder is picked from the output extension and receives the image in
/// its own color type. Formats that cannot hold that color type fail with
/// `Error::ImageSave` and leave `output` untouched.
pub fn save_image(img: &DynamicImage, output: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output).map_err(|_| Error::UnsupportedOutputFormat {
        path: output.to_path_buf(),
    })?;
    if !format.writing_enabled() {
        return Err(Error::UnsupportedOutputFormat {
            path: output.to_path_buf(),
        });
    }

    let (width, height) = img.dimensions();
    let mut encoded = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut encoded,
        img.as_bytes(),
        width,
        height,
        img.color(),
        format,
    )
    .map_err(|source| Error::ImageSave {
        path: output.to_path_buf(),
        source,
    })?;

    std::fs::write(output, encoded.into_inner()).map_err(|e| Error::ImageSave {
        path: output.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;

    info!(
        "Saved {}x{} {:?} image to {:?} ({:?})",
        width,
        height,
        img.color(),
        output,
        format
    );
    Ok(())
}
