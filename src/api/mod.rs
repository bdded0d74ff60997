//! High-level library API: run the whole load, resize, preview and save flow
//! from a `ResizeParams`, or resize an in-memory image without disk I/O.
use std::path::PathBuf;

use image::{ColorType, DynamicImage, GenericImageView};
use tracing::info;

use crate::core::params::ResizeParams;
use crate::core::processing::resize::{compute_target_size, resize_image};
use crate::error::Result;
use crate::io::{SidecarMetadata, load_image, save_image, write_metadata_sidecar};
use crate::preview::Preview;
use crate::types::{Dimensions, ResampleFilter, ResizeGeometry};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ResizeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub geometry: ResizeGeometry,
    pub filter: ResampleFilter,
    pub color_type: ColorType,
    pub sidecar: Option<PathBuf>,
}

/// Resize an already decoded image to the fixed target (no disk I/O)
pub fn resize_to_target(
    img: &DynamicImage,
    target: Dimensions,
    filter: ResampleFilter,
) -> Result<(DynamicImage, ResizeGeometry)> {
    let original = Dimensions::from(img.dimensions());
    let new_size = compute_target_size(original, target);
    let resized = resize_image(img, new_size, filter)?;
    Ok((resized, ResizeGeometry::new(original, new_size)))
}

/// Load `params.input`, resize it, show both images through `preview`, and
/// save the result to `params.output`.
///
/// Nothing is written unless loading and resizing succeed.
pub fn process(params: &ResizeParams, preview: &mut dyn Preview) -> Result<ResizeReport> {
    params.validate()?;

    let original = load_image(&params.input)?;
    preview.show("Original", &original)?;

    let (resized, geometry) = resize_to_target(&original, params.target(), params.filter)?;
    info!("Image size: {} pixels.", geometry.target);
    preview.show("Resized", &resized)?;

    save_image(&resized, &params.output)?;

    let sidecar = if params.sidecar {
        let meta = SidecarMetadata::new(
            &params.input,
            &params.output,
            &geometry,
            params.filter,
            resized.color(),
        );
        Some(write_metadata_sidecar(&params.output, &meta)?)
    } else {
        None
    };

    Ok(ResizeReport {
        input: params.input.clone(),
        output: params.output.clone(),
        geometry,
        filter: params.filter,
        color_type: resized.color(),
        sidecar,
    })
}
