//! Region isolation, boundary tracing and simplification.
//!
//! The three stages run once per palette index:
//!
//! 1. [`OccupancyMask::isolate`] selects the pixels of one index.
//! 2. [`trace_contours`] extracts every outer and hole border through the
//!    centers of the boundary pixels.
//! 3. [`simplify_contours`] reduces each boundary with a tolerance relative
//!    to its perimeter and drops those that collapse.

mod contour;
mod mask;
mod simplify;
mod tracer;

pub use contour::{Contour, Point};
pub use mask::OccupancyMask;
pub use simplify::{approximate_polygon, simplify_contours};
pub use tracer::trace_contours;
