//! Test fixtures: in-memory images and a scratch directory.

use std::io::Cursor;
use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};

/// Fixture colors
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// Build an RGB image pixel by pixel.
pub fn rgb_image(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| image::Rgb(f(x, y)))
}

/// 10x10 red with a 5x5 green block in the top-left corner.
pub fn red_with_green_block() -> RgbImage {
    rgb_image(10, 10, |x, y| {
        if x < 5 && y < 5 {
            colors::GREEN
        } else {
            colors::RED
        }
    })
}

/// 9x9 white with a blue square ring (outer 7x7, 3x3 hole at the center).
pub fn blue_ring() -> RgbImage {
    rgb_image(9, 9, |x, y| {
        let on_square = (1..=7).contains(&x) && (1..=7).contains(&y);
        let in_hole = (3..=5).contains(&x) && (3..=5).contains(&y);
        if on_square && !in_hole {
            colors::BLUE
        } else {
            colors::WHITE
        }
    })
}

/// Encode an RGB image in `format`.
pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let dynamic = match format {
        // The GIF encoder works on RGBA frames
        ImageFormat::Gif => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(img.clone()).to_rgba8()),
        _ => DynamicImage::ImageRgb8(img.clone()),
    };
    let mut buf = Vec::new();
    dynamic
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("Should encode fixture image");
    buf
}

/// Encode an RGBA image as PNG.
pub fn encode_rgba_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("Should encode fixture image");
    buf
}

/// Scratch directory that is removed when dropped.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Should create temp dir"),
        }
    }

    /// Path of `name` inside the workspace (not created).
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `bytes` to `name` and return its path.
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Should write fixture file");
        path
    }

    pub fn read_to_string(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Should read output file")
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Should read output file")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
