use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use minires::{
    Dimensions, Error, LogPreview, NoPreview, Preview, ResampleFilter, ResizeParams, process,
};

fn gradient_png(path: &Path, width: u32, height: u32) {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}

/// Records what it was asked to show.
#[derive(Default)]
struct Recorder {
    shown: Vec<(String, (u32, u32))>,
}

impl Preview for Recorder {
    fn show(&mut self, label: &str, img: &DynamicImage) -> minires::Result<()> {
        self.shown.push((label.to_string(), img.dimensions()));
        Ok(())
    }
}

#[test]
fn wide_png_is_stretched_to_28x28() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wide.png");
    let output = dir.path().join("resized_image.png");
    gradient_png(&input, 560, 280);

    let params = ResizeParams {
        output: output.clone(),
        ..ResizeParams::new(&input)
    };
    let report = process(&params, &mut NoPreview).unwrap();

    assert_eq!(report.geometry.source, Dimensions::new(560, 280));
    assert_eq!(report.geometry.target, Dimensions::new(28, 28));
    assert!(report.geometry.distorts_aspect());
    assert!(report.sidecar.is_none());

    let saved = image::open(&output).unwrap();
    assert_eq!(saved.dimensions(), (28, 28));
    assert_eq!(saved.color(), image::ColorType::Rgb8);
}

#[test]
fn output_is_always_target_size() {
    let dir = tempfile::tempdir().unwrap();
    for (w, h) in [(1, 1), (3, 97), (28, 28), (300, 5)] {
        let input = dir.path().join(format!("in_{w}x{h}.png"));
        let output = dir.path().join(format!("out_{w}x{h}.png"));
        gradient_png(&input, w, h);

        let params = ResizeParams {
            output: output.clone(),
            ..ResizeParams::new(&input)
        };
        process(&params, &mut NoPreview).unwrap();
        assert_eq!(image::open(&output).unwrap().dimensions(), (28, 28), "{w}x{h}");
    }
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    gradient_png(&input, 123, 77);

    let params = ResizeParams {
        output: output.clone(),
        ..ResizeParams::new(&input)
    };
    process(&params, &mut NoPreview).unwrap();
    let first = std::fs::read(&output).unwrap();
    process(&params, &mut NoPreview).unwrap();
    let second = std::fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("resized_image.png");
    let params = ResizeParams {
        output: output.clone(),
        ..ResizeParams::new(dir.path().join("nope.png"))
    };

    let err = process(&params, &mut NoPreview).unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }));
    assert!(!output.exists());
}

#[test]
fn zero_target_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    let params = ResizeParams {
        output: output.clone(),
        height: 0,
        ..ResizeParams::new(dir.path().join("nope.png"))
    };

    let err = process(&params, &mut NoPreview).unwrap_err();
    assert!(matches!(err, Error::ZeroSize { dimension: "height", size: 0 }));
    assert!(!output.exists());
}

#[test]
fn preview_sees_original_then_resized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    gradient_png(&input, 40, 30);

    let params = ResizeParams {
        output: dir.path().join("out.png"),
        ..ResizeParams::new(&input)
    };
    let mut recorder = Recorder::default();
    process(&params, &mut recorder).unwrap();

    assert_eq!(
        recorder.shown,
        vec![
            ("Original".to_string(), (40, 30)),
            ("Resized".to_string(), (28, 28)),
        ]
    );

    // The logging preview has no effect on the result.
    process(&params, &mut LogPreview).unwrap();
}

#[test]
fn rgba_and_gray_keep_color_type() {
    let dir = tempfile::tempdir().unwrap();

    let rgba_in = dir.path().join("rgba.png");
    RgbaImage::from_pixel(90, 45, Rgba([200, 100, 50, 128]))
        .save(&rgba_in)
        .unwrap();
    let rgba_out = dir.path().join("rgba_out.png");
    process(
        &ResizeParams {
            output: rgba_out.clone(),
            ..ResizeParams::new(&rgba_in)
        },
        &mut NoPreview,
    )
    .unwrap();
    let saved = image::open(&rgba_out).unwrap();
    assert_eq!(saved.color(), image::ColorType::Rgba8);
    // Alpha is premultiplied while resampling, so allow rounding drift.
    for p in saved.to_rgba8().pixels() {
        assert_eq!(p.0[3], 128);
        for (got, want) in p.0[..3].iter().zip([200u8, 100, 50]) {
            assert!(got.abs_diff(want) <= 2, "{:?}", p.0);
        }
    }

    let gray_in = dir.path().join("gray.png");
    ImageBuffer::<Luma<u8>, _>::from_pixel(10, 60, Luma([42]))
        .save(&gray_in)
        .unwrap();
    let gray_out = dir.path().join("gray_out.png");
    process(
        &ResizeParams {
            output: gray_out.clone(),
            ..ResizeParams::new(&gray_in)
        },
        &mut NoPreview,
    )
    .unwrap();
    let saved = image::open(&gray_out).unwrap();
    assert_eq!(saved.color(), image::ColorType::L8);
    assert!(saved.to_luma8().pixels().all(|p| p.0[0] == 42));
}

#[test]
fn custom_target_and_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("small.png");
    gradient_png(&input, 64, 64);

    let params = ResizeParams {
        output: output.clone(),
        width: 16,
        height: 8,
        filter: ResampleFilter::Lanczos3,
        sidecar: true,
        ..ResizeParams::new(&input)
    };
    let report = process(&params, &mut NoPreview).unwrap();

    assert_eq!(image::open(&output).unwrap().dimensions(), (16, 8));
    let sidecar = report.sidecar.unwrap();
    assert_eq!(sidecar, dir.path().join("small.json"));

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sidecar).unwrap()).unwrap();
    assert_eq!(v["source_width"], 64);
    assert_eq!(v["width"], 16);
    assert_eq!(v["height"], 8);
    assert_eq!(v["filter"], "lanczos3");
}

#[test]
fn oversized_target_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    gradient_png(&input, 8, 8);

    let params = ResizeParams {
        output: output.clone(),
        width: u32::MAX,
        height: u32::MAX,
        ..ResizeParams::new(&input)
    };
    let err = process(&params, &mut NoPreview).unwrap_err();
    assert!(matches!(err, Error::TargetTooLarge { .. }));
    assert!(!output.exists());
}
