use core::fmt::Debug;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use tracing::{debug, trace};

use crate::animation::Animation;
use crate::brightness::{Brightness, Ramp};
use crate::color::BLACK;
use crate::error::Error;
use crate::provider::PixelProvider;
use crate::signal::StopSignal;
use crate::surface::RenderSurface;
use crate::transition::Transition;

/// Delay between ramp steps unless a pattern asks for another pace
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(10);

/// Light Engine - owns the strip state and renders it
///
/// The engine is the only writer of the surface and the only owner of the
/// global brightness. Every write is flushed before the engine waits, so the
/// strip never holds a half-written frame.
pub struct LightEngine<'a, S, P, D> {
    // External dependencies
    surface: S,
    provider: P,
    delay: D,
    stop: &'a StopSignal,

    // Internal state
    brightness: Brightness,
}

impl<'a, S, P, D> LightEngine<'a, S, P, D>
where
    S: RenderSurface,
    S::Error: Debug,
    P: PixelProvider,
    D: DelayNs,
{
    /// Create a new light engine
    ///
    /// `brightness` is staged on the surface but not flushed.
    pub fn new(
        mut surface: S,
        provider: P,
        delay: D,
        stop: &'a StopSignal,
        brightness: Brightness,
    ) -> Self {
        surface.set_brightness(brightness);
        Self {
            surface,
            provider,
            delay,
            stop,
            brightness,
        }
    }

    /// Run the startup sequence
    ///
    /// Establishes the provider's pixels with `transition` (or immediately),
    /// then runs `animation` until the stop signal is raised.
    pub fn play(
        &mut self,
        transition: Option<Transition>,
        animation: Option<Animation>,
    ) -> Result<(), Error<S::Error>> {
        match transition {
            Some(transition) => transition.run(self)?,
            None => self.render()?,
        }
        if let Some(animation) = animation {
            animation.run(self)?;
        }
        Ok(())
    }

    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn pixel_count(&self) -> usize {
        self.surface.pixel_count()
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Write every pixel from the provider and flush once
    pub fn render(&mut self) -> Result<(), Error<S::Error>> {
        for index in 0..self.surface.pixel_count() {
            self.surface
                .set_pixel(index, self.provider.pixel_color(index));
        }
        self.flush()
    }

    /// Write a single pixel from the provider and flush
    pub fn render_pixel(&mut self, index: usize) -> Result<(), Error<S::Error>> {
        self.surface
            .set_pixel(index, self.provider.pixel_color(index));
        self.flush()
    }

    /// Turn every pixel off without touching brightness, then flush
    pub fn blank(&mut self) -> Result<(), Error<S::Error>> {
        self.surface.fill(BLACK);
        self.flush()
    }

    /// Stage a new brightness without flushing it
    pub fn stage_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
        self.surface.set_brightness(brightness);
    }

    /// Jump to `brightness` without a ramp and flush
    pub fn snap_brightness(
        &mut self,
        brightness: Brightness,
    ) -> Result<(), Error<S::Error>> {
        self.stage_brightness(brightness);
        self.flush()
    }

    /// Move brightness to `target` one step at a time
    ///
    /// Every step is flushed and followed by a wait of `step_delay`. The
    /// last step lands exactly on `target`.
    pub fn ramp_to(
        &mut self,
        target: Brightness,
        step_delay: Duration,
    ) -> Result<(), Error<S::Error>> {
        let ramp = Ramp::new(self.brightness, target);
        debug!(
            from = self.brightness.get(),
            to = target.get(),
            steps = ramp.len(),
            "ramping brightness"
        );
        for level in ramp {
            trace!(level = level.get(), "ramp step");
            self.snap_brightness(level)?;
            self.pause(step_delay)?;
        }
        Ok(())
    }

    /// Wait for `duration`
    ///
    /// Fails with [`Error::Interrupted`] if the stop signal is raised before
    /// or during the wait.
    pub fn pause(&mut self, duration: Duration) -> Result<(), Error<S::Error>> {
        self.check_stop()?;
        let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.delay.delay_us(micros);
        self.check_stop()
    }

    /// Fail with [`Error::Interrupted`] if the stop signal is raised
    pub fn check_stop(&self) -> Result<(), Error<S::Error>> {
        if self.stop.is_raised() {
            return Err(Error::Interrupted);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error<S::Error>> {
        self.surface.flush().map_err(Error::Surface)
    }
}
