//! I/O layer: decoding the source image from disk and the `writers`
//! for the resized output and its JSON metadata sidecar.
pub mod reader;
pub use reader::load_image;

pub mod writers;
pub use writers::raster::save_image;
pub use writers::metadata::{SidecarMetadata, write_metadata_sidecar};
