//! Repeating animations
//!
//! Animations have no end of their own. They repeat their cycle until the
//! stop signal is raised.

use core::fmt::Debug;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use tracing::{debug, info};

use crate::brightness::Brightness;
use crate::engine::{DEFAULT_STEP_DELAY, LightEngine};
use crate::error::Error;
use crate::provider::PixelProvider;
use crate::surface::RenderSurface;

const ANIMATION_NAME_BREATHE: &str = "breathe";
const ANIMATION_NAME_FADE_IN_OUT: &str = "fade-in-out";
const ANIMATION_NAME_PULSE_FADE_IN: &str = "pulse-fade-in";
const ANIMATION_NAME_PULSE_FADE_OUT: &str = "pulse-fade-out";
const ANIMATION_NAME_FLASH: &str = "flash";

/// Pause at full brightness in the fade-in-out cycle
const FADE_IN_OUT_HOLD: Duration = Duration::from_secs(1);
/// Slower ramp pace of the breathe cycle
const BREATHE_STEP_DELAY: Duration = Duration::from_millis(30);
/// Breathe peak brightness
const BREATHE_PEAK: Brightness = Brightness::new_const(0.8);
/// Pause while the strip is dark
const BREATHE_EXHALE_HOLD: Duration = Duration::from_secs(2);
/// Pause at the peak
const BREATHE_INHALE_HOLD: Duration = Duration::from_millis(400);
/// Time spent in each of the two flash phases
const FLASH_HOLD: Duration = Duration::from_millis(500);

/// Known animations that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    Breathe,
    FadeInOut,
    PulseFadeIn,
    PulseFadeOut,
    Flash,
}

impl Animation {
    pub const ALL: [Self; 5] = [
        Self::Breathe,
        Self::FadeInOut,
        Self::PulseFadeIn,
        Self::PulseFadeOut,
        Self::Flash,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breathe => ANIMATION_NAME_BREATHE,
            Self::FadeInOut => ANIMATION_NAME_FADE_IN_OUT,
            Self::PulseFadeIn => ANIMATION_NAME_PULSE_FADE_IN,
            Self::PulseFadeOut => ANIMATION_NAME_PULSE_FADE_OUT,
            Self::Flash => ANIMATION_NAME_FLASH,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_BREATHE => Some(Self::Breathe),
            ANIMATION_NAME_FADE_IN_OUT => Some(Self::FadeInOut),
            ANIMATION_NAME_PULSE_FADE_IN => Some(Self::PulseFadeIn),
            ANIMATION_NAME_PULSE_FADE_OUT => Some(Self::PulseFadeOut),
            ANIMATION_NAME_FLASH => Some(Self::Flash),
            _ => None,
        }
    }

    /// Repeat the animation until the stop signal is raised
    ///
    /// Returns `Ok(())` once stopped; surface errors end the animation early.
    pub fn run<S, P, D>(self, engine: &mut LightEngine<'_, S, P, D>) -> Result<(), Error<S::Error>>
    where
        S: RenderSurface,
        S::Error: Debug,
        P: PixelProvider,
        D: DelayNs,
    {
        info!(animation = self.as_str(), "starting animation");
        let mut cycles: u64 = 0;
        let result = loop {
            if let Err(err) = engine.check_stop().and_then(|()| self.cycle(engine)) {
                break err;
            }
            cycles += 1;
        };
        match result {
            Error::Interrupted => {
                debug!(animation = self.as_str(), cycles, "animation stopped");
                Ok(())
            }
            err => Err(err),
        }
    }

    /// Run a single period of the animation
    pub fn cycle<S, P, D>(self, engine: &mut LightEngine<'_, S, P, D>) -> Result<(), Error<S::Error>>
    where
        S: RenderSurface,
        S::Error: Debug,
        P: PixelProvider,
        D: DelayNs,
    {
        match self {
            Self::FadeInOut => {
                engine.ramp_to(Brightness::OFF, DEFAULT_STEP_DELAY)?;
                engine.ramp_to(Brightness::FULL, DEFAULT_STEP_DELAY)?;
                engine.pause(FADE_IN_OUT_HOLD)
            }
            Self::PulseFadeOut => {
                engine.ramp_to(Brightness::OFF, DEFAULT_STEP_DELAY)?;
                engine.snap_brightness(Brightness::FULL)
            }
            Self::PulseFadeIn => {
                engine.ramp_to(Brightness::FULL, DEFAULT_STEP_DELAY)?;
                engine.snap_brightness(Brightness::OFF)
            }
            Self::Breathe => {
                engine.ramp_to(Brightness::OFF, BREATHE_STEP_DELAY)?;
                engine.pause(BREATHE_EXHALE_HOLD)?;
                engine.ramp_to(BREATHE_PEAK, BREATHE_STEP_DELAY)?;
                engine.pause(BREATHE_INHALE_HOLD)
            }
            Self::Flash => {
                engine.blank()?;
                engine.pause(FLASH_HOLD)?;
                engine.render()?;
                engine.pause(FLASH_HOLD)
            }
        }
    }
}
