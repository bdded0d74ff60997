//! Shared types used across minires.
//! Includes `Dimensions`, the `ResampleFilter` choice, the `PreviewMode`
//! selector and `ResizeGeometry`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Width and height of a raster, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "nearest"),
            ResampleFilter::Bilinear => write!(f, "bilinear"),
            ResampleFilter::CatmullRom => write!(f, "catmull-rom"),
            ResampleFilter::Lanczos3 => write!(f, "lanczos3"),
        }
    }
}

/// How the CLI renders the original and resized images.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum PreviewMode {
    #[default]
    None,
    Log,
    Ascii,
}

/// Source and target sizes of a resize, plus per-axis scale factors.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ResizeGeometry {
    pub source: Dimensions,
    pub target: Dimensions,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ResizeGeometry {
    pub fn new(source: Dimensions, target: Dimensions) -> Self {
        Self {
            source,
            target,
            scale_x: target.width as f64 / source.width as f64,
            scale_y: target.height as f64 / source.height as f64,
        }
    }

    /// True when the two axes are scaled by different factors.
    pub fn distorts_aspect(&self) -> bool {
        (self.scale_x - self.scale_y).abs() > f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_scale_factors() {
        let g = ResizeGeometry::new(Dimensions::new(560, 280), Dimensions::new(28, 28));
        assert!((g.scale_x - 0.05).abs() < 1e-12);
        assert!((g.scale_y - 0.1).abs() < 1e-12);
        assert!(g.distorts_aspect());
    }

    #[test]
    fn square_geometry_keeps_aspect() {
        let g = ResizeGeometry::new(Dimensions::new(280, 280), Dimensions::new(28, 28));
        assert!(!g.distorts_aspect());
    }

    #[test]
    fn filter_serializes_kebab_case() {
        let s = serde_json::to_string(&ResampleFilter::CatmullRom).unwrap();
        assert_eq!(s, "\"catmull-rom\"");
        assert_eq!(ResampleFilter::default(), ResampleFilter::Bilinear);
    }
}
