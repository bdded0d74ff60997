use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::info;

use crate::error::{Error, Result};

/// Decode the image at `path`. The format is guessed from the file contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let (width, height) = img.dimensions();
    info!("Image size: {}x{} pixels.", width, height);

    Ok(img)
}
