//! Conversion service: one input raster to an SVG stencil plus previews.

use std::path::{Path, PathBuf};
use std::time::Instant;

use stencil_trace::{Document, IndexedImage, Stenciler};

use crate::error::ConvertError;
use crate::models::{ConvertConfig, SourceFormat, SourceImage};
use crate::rendering::{document_to_svg, encode_posterized_png, render_preview_png};
use crate::services::loader;

/// Files to produce for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Rasterized SVG, written as RGBA PNG
    pub preview: Option<PathBuf>,
    /// Posterized raster, written as indexed PNG
    pub posterized: Option<PathBuf>,
}

/// In-memory result of running the pipeline on one image.
#[derive(Debug)]
pub struct Conversion {
    pub format: SourceFormat,
    pub posterized: IndexedImage,
    pub document: Document,
    pub svg: String,
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    pub width: usize,
    pub height: usize,
    pub format: SourceFormat,
    pub colors: usize,
    pub paths: usize,
    pub svg_bytes: usize,
}

/// Runs load → posterize → vectorize → serialize with fixed settings.
pub struct Converter {
    stenciler: Stenciler,
}

impl Converter {
    /// Validate `config` and build a converter from it.
    pub fn new(config: &ConvertConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self {
            stenciler: config.stenciler(),
        })
    }

    /// Run the pipeline on an already decoded image.
    pub fn convert_image(&self, source: &SourceImage) -> Result<Conversion, ConvertError> {
        let posterized = self
            .stenciler
            .posterize(&source.pixels, source.width, source.height)?;
        let document = self.stenciler.vectorize_indexed(&posterized)?;
        let svg = document_to_svg(&document);
        Ok(Conversion {
            format: source.format,
            posterized,
            document,
            svg,
        })
    }

    /// Decode and convert an in-memory PNG, GIF or JPEG.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Conversion, ConvertError> {
        let source = loader::decode_image(bytes)?;
        self.convert_image(&source)
    }

    /// Convert `request.input` and write every requested file.
    ///
    /// All outputs are rendered in memory first; nothing is written unless
    /// the whole pipeline succeeded.
    pub fn run(&self, request: &ConvertRequest) -> Result<ConvertSummary, ConvertError> {
        let started = Instant::now();
        let source = loader::load_image(&request.input)?;
        let conversion = self.convert_image(&source)?;

        let preview = request
            .preview
            .as_ref()
            .map(|path| render_preview_png(&conversion.svg).map(|png| (path, png)))
            .transpose()?;
        let posterized = request
            .posterized
            .as_ref()
            .map(|path| encode_posterized_png(&conversion.posterized).map(|png| (path, png)))
            .transpose()?;

        write_output(&request.output, conversion.svg.as_bytes())?;
        for (path, png) in preview.iter().chain(posterized.iter()) {
            write_output(path, png)?;
        }

        let summary = ConvertSummary {
            width: source.width,
            height: source.height,
            format: source.format,
            colors: conversion.posterized.palette().len(),
            paths: conversion.document.paths().len(),
            svg_bytes: conversion.svg.len(),
        };
        tracing::info!(
            width = summary.width,
            height = summary.height,
            format = %summary.format,
            colors = summary.colors,
            paths = summary.paths,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Converted image"
        );
        Ok(summary)
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote output");
    Ok(())
}
