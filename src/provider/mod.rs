//! Pixel providers with compile-time known variants
//!
//! All providers are stored in an enum to avoid heap allocations.
//! Each provider implements the `PixelProvider` trait.

mod rainbow;
mod solid_color;

use core::num::NonZeroUsize;

pub use rainbow::RainbowProvider;
pub use solid_color::SolidColorProvider;

use crate::color::{Preset, Rgbw};

/// Maps a pixel index to the color it should show
///
/// Implementations are pure: the same index always yields the same color.
pub trait PixelProvider {
    /// Color of the pixel at `index`
    fn pixel_color(&self, index: usize) -> Rgbw;
}

/// Provider slot - enum containing all possible providers
#[derive(Debug, Clone)]
pub enum ProviderSlot {
    /// Same color on every pixel
    Solid(SolidColorProvider),
    /// Color wheel spread across the strip
    Rainbow(RainbowProvider),
}

impl ProviderSlot {
    /// Create the provider for a preset
    pub fn from_preset(preset: Preset, pixel_count: NonZeroUsize) -> Self {
        match preset.solid_color() {
            Some(color) => Self::Solid(SolidColorProvider::new(color)),
            None => Self::Rainbow(RainbowProvider::new(pixel_count)),
        }
    }
}

impl PixelProvider for ProviderSlot {
    fn pixel_color(&self, index: usize) -> Rgbw {
        match self {
            Self::Solid(provider) => provider.pixel_color(index),
            Self::Rainbow(provider) => provider.pixel_color(index),
        }
    }
}
