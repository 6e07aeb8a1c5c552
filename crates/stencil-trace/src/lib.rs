#![allow(clippy::module_inception)]

//! stencil-trace: raster to vector conversion for cutting machines
//!
//! This library turns an RGB raster into a set of filled vector regions, one
//! per color, suitable for vinyl cutters and stencil plotters. Each region is
//! a single even-odd path, so holes are cut out without any nesting logic.
//!
//! # Quick Start
//!
//! The [`Stenciler`] builder is the primary entry point:
//!
//! ```
//! use stencil_trace::{Rgb, Stenciler};
//!
//! let pixels = vec![Rgb::new(255, 255, 255); 16];
//! let doc = Stenciler::new().colors(4).vectorize(&pixels, 4, 4).unwrap();
//!
//! // A single color is background; nothing to cut
//! assert!(doc.is_empty());
//! assert_eq!((doc.width(), doc.height()), (4, 4));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Rgb pixels
//!     |
//!     v
//! AdaptiveQuantizer       (adaptive palette, most common color first)
//!     |
//!     v
//! IndexedImage            (nearest palette entry per pixel)
//!     |
//!     +---> for each index present, except 0 (background):
//!     |        OccupancyMask      (pixels of this index)
//!     |        trace_contours     (outer + hole borders through pixel centers)
//!     |        simplify_contours  (Douglas-Peucker, tolerance x perimeter)
//!     |        assemble_path      (M .. L .. Z, even-odd fill)
//!     v
//! Document                (canvas size + paths in index order)
//! ```
//!
//! # Coordinates
//!
//! Contour vertices are pixel centers: the vertex `(x, y)` is the boundary
//! pixel in column `x`, row `y`. A region covering the whole canvas therefore
//! traces to `(0, 0) (W-1, 0) (W-1, H-1) (0, H-1)`, and path coordinates are
//! always integers within the canvas. A region one pixel thin encloses no
//! area and produces no path.
//!
//! # Background
//!
//! The quantizer ranks palette entries by pixel count, so index 0 is the
//! dominant color of the image. It is treated as the material that stays
//! uncut and never produces a path.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod path;
pub mod trace;


pub use api::{StencilError, Stenciler};
pub use color::Rgb;
pub use output::{Document, IndexedImage};
pub use palette::{AdaptiveQuantizer, Palette, PaletteError, Quantizer, MAX_COLORS};
pub use path::{assemble_path, Path};
pub use trace::{
    approximate_polygon, simplify_contours, trace_contours, Contour, OccupancyMask, Point,
};
