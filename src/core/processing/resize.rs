use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::{ColorType, DynamicImage, GenericImageView};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{Dimensions, ResampleFilter, ResizeGeometry};

/// Output size for a source of `original` dimensions.
///
/// The output is always the fixed `target`; the source aspect ratio is not
/// preserved.
pub fn compute_target_size(original: Dimensions, target: Dimensions) -> Dimensions {
    let geometry = ResizeGeometry::new(original, target);
    if geometry.distorts_aspect() {
        warn!(
            "Aspect ratio not preserved: {} -> {} (scale_x={:.4}, scale_y={:.4})",
            original, target, geometry.scale_x, geometry.scale_y
        );
    } else {
        debug!("Uniform scale {:.4}: {} -> {}", geometry.scale_x, original, target);
    }
    target
}

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Byte length of a `dims` raster in `color`, or `None` if it cannot be allocated.
fn buffer_len(dims: Dimensions, color: ColorType) -> Option<usize> {
    let len = (dims.width as usize)
        .checked_mul(dims.height as usize)?
        .checked_mul(usize::from(color.bytes_per_pixel()))?;
    (len <= isize::MAX as usize).then_some(len)
}

/// Resample `src` to exactly `target`, keeping its color type.
///
/// Convolution filters widen their support when downsampling, so every
/// source pixel contributes to the result. Alpha is premultiplied while
/// resampling.
pub fn resize_image(
    src: &DynamicImage,
    target: Dimensions,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    let (cols, rows) = src.dimensions();
    info!(
        "Resizing {}x{} -> {} ({}, {:?})",
        cols,
        rows,
        target,
        filter,
        src.color()
    );

    buffer_len(target, src.color()).ok_or(Error::TargetTooLarge {
        width: target.width,
        height: target.height,
    })?;

    let options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let mut dst = DynamicImage::new(target.width, target.height, src.color());
    resizer
        .resize(src, &mut dst, &options)
        .map_err(Error::resize)?;

    Ok(dst)
}
