use tracing::info;
use tracing_subscriber::EnvFilter;

use minires::preview::preview_for;
use minires::{ResizeParams, process};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge the optional config file with explicit flags. Flags win.
///
/// The merged parameters are validated here so bad values are reported
/// before any file is opened.
fn build_params(args: &CliArgs) -> Result<ResizeParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            ResizeParams::from_json_file(path).map_err(|source| AppError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => ResizeParams::default(),
    };

    if let Some(size) = args.size {
        params.width = size;
        params.height = size;
    }
    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(input) = &args.input {
        params.input = input.clone();
    }
    if let Some(output) = &args.output {
        params.output = output.clone();
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if args.sidecar {
        params.sidecar = true;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        // RUST_LOG, when set, replaces the default DEBUG level for this crate.
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("minires=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = build_params(&args)?;
    let mut preview = preview_for(args.preview);

    let report = process(&params, preview.as_mut()).map_err(AppError::from)?;
    info!(
        "Successfully processed: {:?} -> {:?} ({} -> {})",
        report.input, report.output, report.geometry.source, report.geometry.target
    );
    println!(
        "Resized {} -> {}: {}",
        report.geometry.source,
        report.geometry.target,
        report.output.display()
    );

    Ok(())
}
