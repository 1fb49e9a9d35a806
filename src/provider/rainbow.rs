//! Rainbow provider
//!
//! Spreads one full turn of the color wheel across the strip.

use core::num::NonZeroUsize;

use super::PixelProvider;
use crate::color::{Rgbw, wheel};

/// Number of positions on the color wheel
const WHEEL_SIZE: usize = 256;

/// Rainbow provider
///
/// Pixel `i` of `n` sits at wheel position `i * 256 / n`, so the first pixel
/// is pure red and the strip walks once around the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowProvider {
    pixel_count: NonZeroUsize,
}

impl RainbowProvider {
    /// Create a new rainbow provider for a strip of `pixel_count` pixels
    pub const fn new(pixel_count: NonZeroUsize) -> Self {
        Self { pixel_count }
    }

    pub const fn pixel_count(&self) -> NonZeroUsize {
        self.pixel_count
    }
}

impl PixelProvider for RainbowProvider {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn pixel_color(&self, index: usize) -> Rgbw {
        let position = index.wrapping_mul(WHEEL_SIZE) / self.pixel_count.get();
        wheel((position & (WHEEL_SIZE - 1)) as i32)
    }
}
