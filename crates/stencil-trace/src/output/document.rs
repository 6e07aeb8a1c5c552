//! Document: the vector result of one run.

use crate::path::Path;

/// Canvas dimensions plus the emitted paths, in palette index order.
///
/// A document is assembled once by the pipeline and then only read. It
/// carries no serialization of its own; writers decide the container format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    width: usize,
    height: usize,
    paths: Vec<Path>,
}

impl Document {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// True when every color was background or collapsed away.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
