#![doc = r#"
minires — resize one image to a fixed small resolution.

Loads an image, resizes it to a fixed target (28x28 by default, the usual
input size of digit classifiers) with bilinear interpolation, and saves the
result (`resized_image.png` by default). The source aspect ratio is not
preserved: every input is stretched to the target.

Quick start
-----------
```rust,no_run
use minires::{NoPreview, ResizeParams, process};

fn main() -> minires::Result<()> {
    let params = ResizeParams::new("digit.png");
    let report = process(&params, &mut NoPreview)?;
    println!("{} -> {}", report.geometry.source, report.geometry.target);
    Ok(())
}
```

In-memory
---------
```rust
use image::{DynamicImage, GenericImageView};
use minires::{Dimensions, ResampleFilter, resize_to_target};

let img = DynamicImage::new_rgb8(560, 280);
let (resized, geometry) =
    resize_to_target(&img, Dimensions::new(28, 28), ResampleFilter::Bilinear).unwrap();
assert_eq!(resized.dimensions(), (28, 28));
assert!(geometry.distorts_aspect());
```

Error handling
--------------
All public functions return `minires::Result<T>`:

```rust,no_run
use minires::{Error, NoPreview, ResizeParams, process};

match process(&ResizeParams::new("missing.png"), &mut NoPreview) {
    Ok(_) => {}
    Err(Error::ImageLoad { path, .. }) => eprintln!("cannot read {path:?}"),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — the end-to-end flow.
- [`core`] — parameters and resize primitives.
- [`io`] — image reader and writers (raster output, JSON sidecar).
- [`preview`] — optional rendering side effects.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod preview;
pub mod types;

pub use crate::core::params::ResizeParams;
pub use error::{Error, Result};
pub use types::{Dimensions, PreviewMode, ResampleFilter, ResizeGeometry};

pub use api::{ResizeReport, process, resize_to_target};
pub use crate::core::processing::resize::{compute_target_size, resize_image};
pub use io::{load_image, save_image};
pub use preview::{AsciiPreview, LogPreview, NoPreview, Preview};
