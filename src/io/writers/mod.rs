pub mod metadata;
pub mod raster;
