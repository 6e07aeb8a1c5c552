pub mod converter;
pub mod loader;

pub use converter::{ConvertRequest, ConvertSummary, Conversion, Converter};
pub use loader::{decode_image, load_image};
