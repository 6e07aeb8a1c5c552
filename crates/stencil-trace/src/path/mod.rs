//! Even-odd fill paths built from traced contours.

mod assembler;

pub use assembler::{assemble_path, Path};
