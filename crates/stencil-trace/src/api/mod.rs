//! Public API for the stencil-trace crate.
//!
//! This module provides the high-level API: [`Stenciler`] builder and
//! [`StencilError`] unified error type.

mod builder;
mod error;

pub use builder::Stenciler;
pub use error::StencilError;
