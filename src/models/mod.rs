pub mod config;
pub mod source;

pub use config::{ConfigOverrides, ConvertConfig};
pub use source::{SourceFormat, SourceImage};
