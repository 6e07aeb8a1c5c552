use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stenciled::models::{ConfigOverrides, ConvertConfig};
use stenciled::services::{ConvertRequest, Converter};

#[derive(Parser)]
#[command(name = "stenciled")]
#[command(about = "Convert raster artwork into a layered SVG stencil for cutting machines")]
struct Cli {
    /// Input image (PNG, GIF or JPEG)
    input: PathBuf,

    /// Output SVG file path
    output: PathBuf,

    /// Number of colors, background included (1-256) [default: 8]
    #[arg(short, long)]
    colors: Option<usize>,

    /// Simplification tolerance as a fraction of each contour's perimeter [default: 0.01]
    #[arg(short, long)]
    simplify: Option<f64>,

    /// YAML file with colors / simplify
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write a rasterized PNG preview of the SVG
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Also write the posterized image as an indexed PNG
    #[arg(long)]
    posterized: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stenciled=info,stencil_trace=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = ConvertConfig::load(cli.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", cli.config))?
        .merge(ConfigOverrides {
            colors: cli.colors,
            simplify: cli.simplify,
        });
    let converter = Converter::new(&config).context("Invalid settings")?;

    let request = ConvertRequest {
        input: cli.input,
        output: cli.output,
        preview: cli.preview,
        posterized: cli.posterized,
    };
    let summary = converter
        .run(&request)
        .with_context(|| format!("Failed to convert {}", request.input.display()))?;

    println!(
        "Wrote {} ({} paths, {} colors, {}x{} {})",
        request.output.display(),
        summary.paths,
        summary.colors,
        summary.width,
        summary.height,
        summary.format
    );

    Ok(())
}
