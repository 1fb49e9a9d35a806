//! Startup configuration
//!
//! Raw options are validated in one place, before any provider or surface
//! exists. Invalid combinations never reach the engine.

use core::num::NonZeroUsize;

use crate::animation::Animation;
use crate::brightness::Brightness;
use crate::color::{Preset, Rgbw, rgbw};
use crate::error::ConfigError;
use crate::provider::{ProviderSlot, SolidColorProvider};
use crate::transition::Transition;

/// Brightness used when none is given
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

/// Strip length used when none is given
pub const DEFAULT_PIXEL_COUNT: usize = 24;

/// Unvalidated options as they come from the user
#[derive(Debug, Clone, Copy)]
pub struct RawOptions<'a> {
    pub preset: Option<&'a str>,
    pub color: Option<[u8; 4]>,
    pub brightness: f32,
    pub pixel_count: usize,
    pub transition: Option<&'a str>,
    pub animation: Option<&'a str>,
}

impl Default for RawOptions<'_> {
    fn default() -> Self {
        Self {
            preset: None,
            color: None,
            brightness: DEFAULT_BRIGHTNESS,
            pixel_count: DEFAULT_PIXEL_COUNT,
            transition: None,
            animation: None,
        }
    }
}

/// Where the strip's colors come from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSelection {
    /// Named preset
    Preset(Preset),
    /// Explicit color for every pixel
    Explicit(Rgbw),
}

impl ColorSelection {
    /// Select exactly one of a preset or an explicit color
    pub fn new(preset: Option<Preset>, color: Option<Rgbw>) -> Result<Self, ConfigError> {
        match (preset, color) {
            (Some(preset), None) => Ok(Self::Preset(preset)),
            (None, Some(color)) => Ok(Self::Explicit(color)),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingColor),
            (None, None) => Err(ConfigError::MissingColor),
        }
    }
}

/// Validated configuration for a single run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightConfig {
    pub selection: ColorSelection,
    pub brightness: Brightness,
    pub pixel_count: NonZeroUsize,
    pub transition: Option<Transition>,
    pub animation: Option<Animation>,
}

impl LightConfig {
    /// Validate raw options
    pub fn new(options: &RawOptions<'_>) -> Result<Self, ConfigError> {
        let preset = options
            .preset
            .map(|name| Preset::parse_from_str(name).ok_or(ConfigError::UnknownPreset))
            .transpose()?;
        let color = options.color.map(|[r, g, b, w]| rgbw(r, g, b, w));
        let selection = ColorSelection::new(preset, color)?;

        let pixel_count = NonZeroUsize::new(options.pixel_count)
            .ok_or(ConfigError::InvalidPixelCount(options.pixel_count))?;
        let brightness = Brightness::try_new(options.brightness)
            .ok_or(ConfigError::InvalidBrightness(options.brightness))?;

        let transition = options
            .transition
            .map(|name| Transition::parse_from_str(name).ok_or(ConfigError::UnknownTransition))
            .transpose()?;
        let animation = options
            .animation
            .map(|name| Animation::parse_from_str(name).ok_or(ConfigError::UnknownAnimation))
            .transpose()?;

        Ok(Self {
            selection,
            brightness,
            pixel_count,
            transition,
            animation,
        })
    }

    /// Build the provider for the selected colors
    pub fn provider(&self) -> ProviderSlot {
        match self.selection {
            ColorSelection::Preset(preset) => ProviderSlot::from_preset(preset, self.pixel_count),
            ColorSelection::Explicit(color) => ProviderSlot::Solid(SolidColorProvider::new(color)),
        }
    }
}
