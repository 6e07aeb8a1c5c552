//! Color type and hex formatting
//!
//! The pipeline works on 8-bit sRGB triples only. No color-space conversion
//! happens anywhere: palette entries are emitted byte-exact as `#rrggbb`.
//!
//! # Example
//!
//! ```
//! use stencil_trace::Rgb;
//!
//! let green = Rgb::from_bytes([0, 255, 0]);
//! assert_eq!(green.to_hex(), "#00ff00");
//! assert_eq!(green.to_string(), "#00ff00");
//! ```

mod rgb;

pub use rgb::Rgb;
