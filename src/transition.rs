//! One-shot transitions that establish the provider's pixels
//!
//! A transition runs to completion before any animation starts.

use core::fmt::Debug;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use tracing::info;

use crate::brightness::Brightness;
use crate::engine::{DEFAULT_STEP_DELAY, LightEngine};
use crate::error::Error;
use crate::provider::PixelProvider;
use crate::surface::RenderSurface;

const TRANSITION_NAME_FADE_IN: &str = "fade-in";
const TRANSITION_NAME_SEQUENCE: &str = "sequence";
const TRANSITION_NAME_SEQUENCE_REVERSE: &str = "sequence-reverse";

/// Total duration of a sequential fill, independent of the strip length
pub const SEQUENCE_DURATION: Duration = Duration::from_millis(500);

/// Known transitions that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Fill at zero brightness, then ramp up to the configured brightness
    FadeIn,
    /// Reveal pixels one by one from the first to the last
    Sequence,
    /// Reveal pixels one by one from the last to the first
    SequenceReverse,
}

impl Transition {
    pub const ALL: [Self; 3] = [Self::FadeIn, Self::Sequence, Self::SequenceReverse];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => TRANSITION_NAME_FADE_IN,
            Self::Sequence => TRANSITION_NAME_SEQUENCE,
            Self::SequenceReverse => TRANSITION_NAME_SEQUENCE_REVERSE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            TRANSITION_NAME_FADE_IN => Some(Self::FadeIn),
            TRANSITION_NAME_SEQUENCE => Some(Self::Sequence),
            TRANSITION_NAME_SEQUENCE_REVERSE => Some(Self::SequenceReverse),
            _ => None,
        }
    }

    /// Run the transition to completion
    pub fn run<S, P, D>(self, engine: &mut LightEngine<'_, S, P, D>) -> Result<(), Error<S::Error>>
    where
        S: RenderSurface,
        S::Error: Debug,
        P: PixelProvider,
        D: DelayNs,
    {
        info!(transition = self.as_str(), "starting transition");
        match self {
            Self::FadeIn => fade_in(engine),
            Self::Sequence => fill_sequential(engine, false),
            Self::SequenceReverse => fill_sequential(engine, true),
        }
    }
}

/// Delay between two pixels of a sequential fill
#[allow(clippy::cast_possible_truncation)]
pub fn sequence_step_delay(pixel_count: usize) -> Duration {
    let count = pixel_count.max(1) as u64;
    Duration::from_micros(SEQUENCE_DURATION.as_micros() / count)
}

fn fill_sequential<S, P, D>(
    engine: &mut LightEngine<'_, S, P, D>,
    reverse: bool,
) -> Result<(), Error<S::Error>>
where
    S: RenderSurface,
    S::Error: Debug,
    P: PixelProvider,
    D: DelayNs,
{
    let pixel_count = engine.pixel_count();
    let delay = sequence_step_delay(pixel_count);
    for step in 0..pixel_count {
        let index = if reverse { pixel_count - 1 - step } else { step };
        engine.render_pixel(index)?;
        engine.pause(delay)?;
    }
    Ok(())
}

fn fade_in<S, P, D>(engine: &mut LightEngine<'_, S, P, D>) -> Result<(), Error<S::Error>>
where
    S: RenderSurface,
    S::Error: Debug,
    P: PixelProvider,
    D: DelayNs,
{
    let target = engine.brightness();
    engine.stage_brightness(Brightness::OFF);
    engine.render()?;
    engine.ramp_to(target, DEFAULT_STEP_DELAY)
}
