use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Dimensions, ResampleFilter};

pub const DEFAULT_OUTPUT: &str = "resized_image.png";
pub const DEFAULT_TARGET_SIZE: u32 = 28;

/// Resize parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeParams {
    /// Image to read. Empty means "not provided yet".
    pub input: PathBuf,
    /// Destination file; existing files are overwritten
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub filter: ResampleFilter,
    /// If true, write `<output>.json` describing the resize
    pub sidecar: bool,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_TARGET_SIZE,
            height: DEFAULT_TARGET_SIZE,
            filter: ResampleFilter::Bilinear,
            sidecar: false,
        }
    }
}

impl ResizeParams {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Read parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn target(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(Error::MissingArgument {
                arg: "input".to_string(),
            });
        }
        if self.width == 0 {
            return Err(Error::ZeroSize {
                dimension: "width",
                size: self.width,
            });
        }
        if self.height == 0 {
            return Err(Error::ZeroSize {
                dimension: "height",
                size: self.height,
            });
        }
        Ok(())
    }
}
