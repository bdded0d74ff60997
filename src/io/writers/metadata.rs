use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::types::{ResampleFilter, ResizeGeometry};

/// JSON sidecar describing a finished resize
#[derive(Debug, Clone, Serialize)]
pub struct SidecarMetadata {
    pub source: PathBuf,
    pub output: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub scale_x: f64,
    pub scale_y: f64,
    pub filter: ResampleFilter,
    pub color_type: String,
    /// RFC 3339, UTC
    pub created: String,
}

impl SidecarMetadata {
    pub fn new(
        source: &Path,
        output: &Path,
        geometry: &ResizeGeometry,
        filter: ResampleFilter,
        color_type: image::ColorType,
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            source_width: geometry.source.width,
            source_height: geometry.source.height,
            width: geometry.target.width,
            height: geometry.target.height,
            scale_x: geometry.scale_x,
            scale_y: geometry.scale_y,
            filter,
            color_type: format!("{:?}", color_type),
            created: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write `meta` next to `output_path` as `<stem>.json` and return the sidecar path.
pub fn write_metadata_sidecar(output_path: &Path, meta: &SidecarMetadata) -> Result<PathBuf> {
    let sidecar_path = output_path.with_extension("json");
    let json_string = serde_json::to_string_pretty(meta)?;
    std::fs::write(&sidecar_path, json_string)?;
    info!("Created metadata sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}
