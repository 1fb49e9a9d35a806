#![no_std]

pub mod animation;
pub mod brightness;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod math8;
pub mod power;
pub mod provider;
pub mod signal;
pub mod surface;
pub mod transition;

pub use animation::Animation;
pub use brightness::{Brightness, Ramp};
pub use color::{BLACK, Preset, Rgbw, rgbw, wheel};
pub use config::{ColorSelection, LightConfig, RawOptions};
pub use engine::LightEngine;
pub use error::{CapacityError, ConfigError, Error};
pub use power::limit_brightness;
pub use provider::{PixelProvider, ProviderSlot, RainbowProvider, SolidColorProvider};
pub use signal::StopSignal;
pub use surface::{RenderSurface, StripSurface};
pub use transition::Transition;

pub use embassy_time::Duration;
