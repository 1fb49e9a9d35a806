//! Solid color provider
//!
//! Returns a single color for every pixel.

use super::PixelProvider;
use crate::color::Rgbw;

/// Solid color provider - one color for all pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidColorProvider {
    color: Rgbw,
}

impl SolidColorProvider {
    /// Create a new solid color provider
    pub const fn new(color: Rgbw) -> Self {
        Self { color }
    }

    /// The color shown on every pixel
    pub const fn color(&self) -> Rgbw {
        self.color
    }
}

impl PixelProvider for SolidColorProvider {
    fn pixel_color(&self, _index: usize) -> Rgbw {
        self.color
    }
}
