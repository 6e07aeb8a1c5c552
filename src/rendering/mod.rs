pub mod preview;
pub mod svg;

pub use preview::{encode_posterized_png, render_preview_png};
pub use svg::document_to_svg;
